//! Cart Store
//!
//! The cart state machine: an ordered list of [`CartLine`]s, a derived
//! total, and a UI-only open/closed flag, mutated only through the
//! operations below. Every mutation of the lines recomputes the total and
//! writes the lines back to the configured [`CartStorage`]; construction
//! hydrates from that storage once, failing soft to an empty cart.
//!
//! One store instance exists per application session and is handed by
//! reference to whichever UI layer needs it.

use rust_decimal::Decimal;

use crate::{
    checkout,
    lines::{CartCandidate, CartLine, LineKey},
    notify::{CartNotice, CartNotifier, NoopNotifier},
    persist::CartStorage,
};

/// Sum of unit price times quantity over all lines.
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::subtotal).sum()
}

/// The cart store.
///
/// Invariants held between operations: the total equals
/// [`cart_total`] of the lines, no line has quantity 0, and no two lines
/// share a [`LineKey`].
#[derive(Debug)]
pub struct Cart<S: CartStorage, N: CartNotifier = NoopNotifier> {
    lines: Vec<CartLine>,
    is_open: bool,
    total: Decimal,
    storage: S,
    notifier: N,
}

impl<S: CartStorage> Cart<S> {
    /// Build a store over `storage`, hydrating from it, with notices dropped.
    pub fn new(storage: S) -> Self {
        Self::with_notifier(storage, NoopNotifier)
    }
}

impl<S: CartStorage, N: CartNotifier> Cart<S, N> {
    /// Build a store over `storage`, hydrating from any previously saved
    /// lines. A failed or malformed load is logged and the cart starts
    /// empty; it is never surfaced to the user.
    pub fn with_notifier(storage: S, notifier: N) -> Self {
        let lines = match storage.load() {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to load saved cart, starting empty");
                Vec::new()
            }
        };
        let total = cart_total(&lines);

        Self {
            lines,
            is_open: false,
            total,
            storage,
            notifier,
        }
    }

    /// Add `candidate` to the cart.
    ///
    /// If a line with the same identity key already exists its quantity is
    /// incremented in place, keeping its position; otherwise a new line with
    /// quantity 1 is appended. Candidate content is not validated here.
    pub fn add_item(&mut self, candidate: CartCandidate) {
        let key = candidate.key();
        let name = candidate.name.clone();

        if let Some(line) = self.lines.iter_mut().find(|line| line.matches(&key)) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from(candidate));
        }

        self.sync();
        self.notifier.notify(CartNotice::ItemAdded { name });
    }

    /// Remove the line identified by `key`, if present.
    ///
    /// A miss is not an error: the total is still recomputed and the removal
    /// notice still emitted.
    pub fn remove_item(&mut self, key: &LineKey) {
        self.lines.retain(|line| !line.matches(key));

        self.sync();
        self.notifier.notify(CartNotice::ItemRemoved);
    }

    /// Set the quantity of the line identified by `key`.
    ///
    /// The quantity is clamped at 0, and a line set to 0 is dropped
    /// entirely. A miss is a no-op. No notice is emitted.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) {
        let quantity = quantity.max(0);

        if let Some(line) = self.lines.iter_mut().find(|line| line.matches(key)) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.lines.retain(|line| line.quantity > 0);

        self.sync();
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();

        self.sync();
        self.notifier.notify(CartNotice::CartCleared);
    }

    /// Flip the cart-panel visibility flag. Never persisted.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// The plain-text order summary for the current contents.
    pub fn checkout_message(&self) -> String {
        checkout::checkout_message(&self.lines, self.total)
    }

    /// The outbound deep-link URL for the current contents.
    pub fn checkout_url(&self) -> String {
        checkout::checkout_url(&self.lines, self.total)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Derived total over all lines.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the cart panel is open. Always false after a reload.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The notifier, for inspection by callers that own a recording one.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Recompute the derived total and write the lines back to storage.
    /// A failed save is logged and swallowed; mutations never fail.
    fn sync(&mut self) {
        self.total = cart_total(&self.lines);

        if let Err(error) = self.storage.save(&self.lines) {
            tracing::warn!(%error, "failed to persist cart");
        }
    }
}
