// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! The central mutable store mediating between the diagram engine, modal
//! dialogs, and the workbench/inspector pages.
//!
//! All mutations go through named actions on [`Store`]; each one bumps a
//! monotonic version stamp observers diff against. Engine-internal mutations
//! the observation layer cannot see are signalled through the separate
//! `refresh` stamp, which engine-derived queries read first.

use std::time::{Duration, Instant};

use crate::client::Client;
use crate::engine::{DiagramEngine, EntityRef};
use crate::model::{
    Inspector, InspectorMode, Node, NodeId, NodeTemplate, Page, StoryDescriptor,
};
use crate::nav::{self, Direction};
use crate::notify::{Notification, Notifier, Severity};

/// How long a run stays marked as running after `set_not_running`, so a fast
/// run/settle cycle does not flicker the indicator.
pub const NOT_RUNNING_DELAY: Duration = Duration::from_millis(500);

const RUN_FAIL_MESSAGE: &str = "Could not run story! Check the diagnostic log.";
const RUN_SUCCESS_MESSAGE: &str = "Successfully ran story!";

/// Diagram-side state: the engine reference and the counters around it.
pub struct DiagramState {
    engine: Option<Box<dyn DiagramEngine>>,
    available_nodes: Vec<NodeTemplate>,
    refresh: u64,
    node_serial: u64,
}

impl DiagramState {
    fn new() -> Self {
        Self {
            engine: None,
            available_nodes: Vec::new(),
            refresh: 0,
            node_serial: 1,
        }
    }
}

/// Cross-cutting UI state.
pub struct MetadataState {
    running: bool,
    page: Page,
    active_inspector: Inspector,
    request_open_node_modal: Option<NodeId>,
    stories: Vec<StoryDescriptor>,
    active_story: String,
    client: Client,
}

impl MetadataState {
    fn new(client: Client) -> Self {
        Self {
            running: false,
            page: Page::Workbench,
            active_inspector: Inspector::default(),
            request_open_node_modal: None,
            stories: Vec::new(),
            active_story: String::new(),
            client,
        }
    }
}

pub struct Store {
    diagram: DiagramState,
    metadata: MetadataState,
    results: Option<serde_json::Value>,
    version: u64,
    notifier: Box<dyn Notifier>,
    not_running_delay: Duration,
    pending_not_running: Vec<Instant>,
}

impl Store {
    pub fn new(client: Client, notifier: Box<dyn Notifier>) -> Self {
        Self {
            diagram: DiagramState::new(),
            metadata: MetadataState::new(client),
            results: None,
            version: 0,
            notifier,
            not_running_delay: NOT_RUNNING_DELAY,
            pending_not_running: Vec::new(),
        }
    }

    /// Override the not-running debounce, for hosts (and tests) that drive
    /// their own clock.
    pub fn with_not_running_delay(mut self, delay: Duration) -> Self {
        self.not_running_delay = delay;
        self
    }

    // --- observation -----------------------------------------------------

    /// Monotonic stamp bumped by every mutating action.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Synthetic stamp for engine-internal mutations. Engine-derived queries
    /// read it so observers recompute them whenever it moves.
    pub fn refresh(&self) -> u64 {
        self.diagram.refresh
    }

    fn touch(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    // --- diagram accessors -----------------------------------------------

    pub fn engine(&self) -> Option<&dyn DiagramEngine> {
        self.diagram.engine.as_deref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut (dyn DiagramEngine + 'static)> {
        self.diagram.engine.as_deref_mut()
    }

    pub fn available_nodes(&self) -> &[NodeTemplate] {
        &self.diagram.available_nodes
    }

    /// The serial the next created node will receive.
    pub fn node_serial(&self) -> u64 {
        self.diagram.node_serial
    }

    // --- metadata accessors ----------------------------------------------

    pub fn running(&self) -> bool {
        self.metadata.running
    }

    pub fn page(&self) -> Page {
        self.metadata.page
    }

    pub fn active_inspector(&self) -> &Inspector {
        &self.metadata.active_inspector
    }

    pub fn request_open_node_modal(&self) -> Option<&NodeId> {
        self.metadata.request_open_node_modal.as_ref()
    }

    pub fn stories(&self) -> &[StoryDescriptor] {
        &self.metadata.stories
    }

    pub fn active_story(&self) -> &str {
        &self.metadata.active_story
    }

    pub fn client(&self) -> &Client {
        &self.metadata.client
    }

    pub fn results(&self) -> Option<&serde_json::Value> {
        self.results.as_ref()
    }

    // --- actions ----------------------------------------------------------

    /// Create a node from `template` with the next serial and insert it into
    /// the engine's model.
    pub fn add_node(&mut self, template: &NodeTemplate) {
        let serial = self.next_node_serial();
        let node = Node::from_template(serial, template);
        if let Some(engine) = self.diagram.engine.as_mut() {
            engine.add_node(node);
        }
        self.refresh_diagram();
    }

    /// Allocate a serial ahead of node construction. Strictly increasing
    /// within a session; `add_node` draws from the same counter.
    pub fn next_node_serial(&mut self) -> u64 {
        let serial = self.diagram.node_serial;
        self.diagram.node_serial += 1;
        self.touch();
        serial
    }

    pub fn go_to_inspector(&mut self, node_id: NodeId) {
        self.metadata.active_inspector.set_node_id(Some(node_id));
        self.metadata.page = Page::Inspector;
        self.touch();
    }

    pub fn set_active_inspector(&mut self, node_id: Option<NodeId>) {
        self.metadata.active_inspector.set_node_id(node_id);
        self.touch();
    }

    pub fn set_active_inspector_mode(&mut self, mode: InspectorMode) {
        self.metadata.active_inspector.set_mode(mode);
        self.touch();
    }

    /// Request that `node_id`'s configuration modal be opened. A pending
    /// request is overwritten, last writer wins.
    pub fn open_node_modal(&mut self, node_id: NodeId) {
        self.metadata.request_open_node_modal = Some(node_id);
        self.refresh_diagram();
    }

    /// Called by the modal presenter once it has consumed the request.
    pub fn reset_open_node_modal_request(&mut self) {
        self.metadata.request_open_node_modal = None;
        self.touch();
    }

    /// Navigate to `page`. Re-selecting the current page toggles back to the
    /// workbench, except that navigating to the inspector is idempotent.
    pub fn set_page(&mut self, page: Page) {
        if let Some(engine) = self.diagram.engine.as_mut() {
            engine.clear_link_labels();
        }
        let already_on_page = self.metadata.page == page;
        self.metadata.page = if already_on_page && page != Page::Inspector {
            Page::Workbench
        } else {
            page
        };
        self.touch();
    }

    pub fn set_running(&mut self) {
        self.metadata.running = true;
        self.touch();
    }

    /// Schedule `running = false` one debounce interval from now. The clear
    /// fires on the next `poll_deferred` past the deadline. Scheduling does
    /// not cancel earlier pending clears: a second run started inside the
    /// window can be marked not-running by the first run's timer (known
    /// race, kept as specified).
    pub fn set_not_running(&mut self) {
        self.pending_not_running
            .push(Instant::now() + self.not_running_delay);
    }

    /// Fire any due deferred clears. The host event loop calls this with its
    /// notion of "now".
    pub fn poll_deferred(&mut self, now: Instant) {
        let before = self.pending_not_running.len();
        self.pending_not_running.retain(|deadline| *deadline > now);
        if self.pending_not_running.len() != before {
            self.metadata.running = false;
            self.touch();
        }
    }

    pub fn set_results(&mut self, results: serde_json::Value) {
        self.results = Some(results);
        self.touch();
    }

    /// Drop the stored results and the engine-side annotations derived from
    /// them (node features, link labels).
    pub fn clear_results(&mut self) {
        self.results = None;
        if let Some(engine) = self.diagram.engine.as_mut() {
            engine.clear_node_features();
            engine.clear_link_labels();
        }
        self.refresh_diagram();
    }

    /// Replace the engine wholesale, e.g. when a new story is loaded.
    pub fn set_engine(&mut self, engine: Box<dyn DiagramEngine>) {
        self.diagram.engine = Some(engine);
        self.touch();
    }

    pub fn set_available_nodes(&mut self, nodes: Vec<NodeTemplate>) {
        self.diagram.available_nodes = nodes;
        self.touch();
    }

    pub fn set_stories(&mut self, stories: Vec<StoryDescriptor>) {
        self.metadata.stories = stories;
        self.touch();
    }

    pub fn set_active_story(&mut self, name: impl Into<String>) {
        self.metadata.active_story = name.into();
        self.touch();
    }

    /// Propagate the lock to the engine, and keep the drag-canvas sub-state's
    /// drag-allowed flag in sync when the engine currently exposes one.
    pub fn set_diagram_locked(&mut self, locked: bool) {
        if let Some(engine) = self.diagram.engine.as_mut() {
            engine.set_locked(locked);
            if let Some(drag_canvas) = engine.drag_canvas_config_mut() {
                drag_canvas.allow_drag = !locked;
            }
        }
        self.touch();
    }

    /// Signal that engine-internal state changed in a way observers cannot
    /// see directly.
    pub fn refresh_diagram(&mut self) {
        self.diagram.refresh = self.diagram.refresh.saturating_add(1);
        self.touch();
    }

    /// Select the nearest node in `direction` from the currently selected
    /// node. No-op unless exactly one entity is selected and it is a node.
    pub fn navigate_diagram(&mut self, direction: Direction) {
        let Some(engine) = self.diagram.engine.as_mut() else {
            return;
        };

        let selection = engine.selected_entities();
        let [EntityRef::Node(current_id)] = selection.as_slice() else {
            return;
        };
        let current_id = current_id.clone();

        let nodes = engine.nodes();
        let Some(current_position) = nodes
            .iter()
            .find(|n| n.id() == &current_id)
            .map(|n| n.position())
        else {
            return;
        };

        engine.clear_selection();
        if let Some(next_id) = nav::next_node(&current_id, current_position, direction, &nodes) {
            engine.set_node_selected(&next_id, true);
        }
        self.touch();
    }

    // --- queries ----------------------------------------------------------

    /// Nodes currently carrying inspectable feature data.
    pub fn nodes_with_inspectables(&self) -> Vec<Node> {
        // The engine is not observable outside of its own context; reading
        // the refresh stamp keys recomputation of this query off it.
        let _ = self.diagram.refresh;

        let Some(engine) = self.diagram.engine.as_ref() else {
            return Vec::new();
        };
        engine
            .nodes()
            .into_iter()
            .filter(Node::is_inspectable)
            .collect()
    }

    // --- notifications ----------------------------------------------------

    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    pub fn show_run_fail(&self, error: &dyn std::error::Error) {
        log::error!("story run failed: {error}");
        self.notify(Notification::new(RUN_FAIL_MESSAGE, Severity::Error));
    }

    pub fn show_run_successful(&self) {
        self.notify(Notification::new(RUN_SUCCESS_MESSAGE, Severity::Success));
    }
}
