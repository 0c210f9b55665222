#![forbid(unsafe_code)]

//! Subscriber registry and RAII subscription guard.
//!
//! Each watched-event channel owns one [`Registry`]: an ordered set of
//! callback slots behind a `RefCell`. Cancellation is flag-based so that a
//! [`Subscription`] can be dropped from anywhere, including from inside a
//! callback, without touching the slot vector while a notification cycle is
//! walking it.
//!
//! # Invariants
//!
//! 1. Callbacks fire in registration order.
//! 2. A canceled slot never fires, even when cancellation happens in the
//!    middle of a notification cycle.
//! 3. Canceled slots are purged lazily at the start of the next
//!    notification.
//! 4. Subscribing from inside a callback is allowed; the new callback joins
//!    the next cycle, not the one in flight.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One registered callback plus its cancellation flag.
struct Slot<F: ?Sized> {
    canceled: Rc<Cell<bool>>,
    callback: Rc<F>,
}

/// Ordered callback storage for a single event channel.
///
/// `F` is the unsized callback type (`dyn Fn(..)`); the registry never calls
/// it directly. [`Registry::notify`] hands each live callback to an `invoke`
/// closure supplied by the channel, which knows the argument shape.
pub(crate) struct Registry<F: ?Sized> {
    slots: RefCell<Vec<Slot<F>>>,
}

impl<F: ?Sized> Registry<F> {
    pub(crate) fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Append a callback slot and hand back its cancellation guard.
    pub(crate) fn subscribe(&self, callback: Rc<F>) -> Subscription {
        let canceled = Rc::new(Cell::new(false));
        self.slots.borrow_mut().push(Slot {
            canceled: Rc::clone(&canceled),
            callback,
        });
        Subscription {
            canceled,
            detached: false,
        }
    }

    /// Run `invoke` over every live callback, in registration order.
    ///
    /// The slot vector is only borrowed while snapshotting, so callbacks may
    /// subscribe re-entrantly. Cancellation is re-checked per slot right
    /// before its call, which keeps a subscription dropped by an earlier
    /// callback from firing later in the same cycle. A panicking callback
    /// propagates immediately; callbacks after it in the cycle are skipped.
    pub(crate) fn notify(&self, invoke: impl Fn(&F)) {
        let live: Vec<(Rc<Cell<bool>>, Rc<F>)> = {
            let mut slots = self.slots.borrow_mut();
            slots.retain(|slot| !slot.canceled.get());
            slots
                .iter()
                .map(|slot| (Rc::clone(&slot.canceled), Rc::clone(&slot.callback)))
                .collect()
        };
        for (canceled, callback) in live {
            if !canceled.get() {
                invoke(&callback);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

/// RAII guard for one registered callback.
///
/// Dropping the guard cancels the callback before the next notification
/// cycle; [`Subscription::detach`] consumes the guard and leaves the
/// callback attached for as long as its channel lives.
#[must_use = "dropping a Subscription cancels its callback"]
#[derive(Debug)]
pub struct Subscription {
    canceled: Rc<Cell<bool>>,
    detached: bool,
}

impl Subscription {
    /// Keep the callback registered permanently and discard the guard.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.detached {
            self.canceled.set(true);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
