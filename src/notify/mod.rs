// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! User-facing notifications.
//!
//! Delivery (toast chrome, blocking alerts) lives outside this crate; the
//! store only hands a [`Notification`] to whatever [`Notifier`] it was
//! constructed with. Fire-and-forget: no delivery result comes back.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Swallows everything. The default when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Captures notifications for assertions. Store operations run on a single
/// event thread, so a shared `Rc<RefCell<..>>` log is enough.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the log, shared with the notifier after it moves into the
    /// store.
    pub fn sent(&self) -> Rc<RefCell<Vec<Notification>>> {
        Rc::clone(&self.sent)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}
