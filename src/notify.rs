//! Cart Notifications
//!
//! The seam between the cart store and whatever surfaces user-visible
//! toasts. The store pushes [`CartNotice`] events into a [`CartNotifier`];
//! a UI layer renders them, [`NoopNotifier`] drops them, and
//! [`RecordingNotifier`] collects them for assertions.

use std::fmt;

/// A user-visible event emitted by a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartNotice {
    /// An item was added to the cart (or its quantity incremented).
    ItemAdded {
        /// Display name of the added item.
        name: String,
    },

    /// A removal operation ran, whether or not anything matched.
    ItemRemoved,

    /// The cart was emptied.
    CartCleared,
}

impl fmt::Display for CartNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartNotice::ItemAdded { name } => {
                write!(f, "{name} has been added to your cart.")
            }
            CartNotice::ItemRemoved => write!(f, "Item has been removed from your cart."),
            CartNotice::CartCleared => {
                write!(f, "All items have been removed from your cart.")
            }
        }
    }
}

/// Receiver for cart notices.
pub trait CartNotifier {
    /// Handle a notice emitted by a cart mutation.
    fn notify(&mut self, notice: CartNotice);
}

/// Notifier that discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl CartNotifier for NoopNotifier {
    fn notify(&mut self, _notice: CartNotice) {}
}

/// Notifier that keeps every notice in order, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Vec<CartNotice>,
}

impl RecordingNotifier {
    /// All notices received so far, oldest first.
    pub fn notices(&self) -> &[CartNotice] {
        &self.notices
    }
}

impl CartNotifier for RecordingNotifier {
    fn notify(&mut self, notice: CartNotice) {
        self.notices.push(notice);
    }
}
