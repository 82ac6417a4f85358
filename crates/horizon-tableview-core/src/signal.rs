//! Notifications from a table view to its host and subscribers.
//!
//! A [`Signal`] is a list of slots (closures) that all receive a reference to
//! the emitted value. Table views use one signal per event: a row is about to
//! be displayed, a row was selected, the host should reload everything or
//! just one row.
//!
//! # Delivery
//!
//! Table views live on the host's UI thread, so delivery is direct: every
//! slot runs synchronously inside [`Signal::emit`], on the emitting thread,
//! in the order the slots were connected. Disconnecting a slot does not
//! reorder the remaining ones.
//!
//! # Example
//!
//! ```
//! use horizon_tableview_core::Signal;
//!
//! let row_reload_requested = Signal::<usize>::new();
//! let id = row_reload_requested.connect(|row| println!("reload row {row}"));
//!
//! row_reload_requested.emit(3);
//! assert!(row_reload_requested.disconnect(id));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to a connected slot, used with [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Connection<Args> {
    /// Connection sequence number; slot keys are reused after a disconnect,
    /// so delivery order is taken from this instead.
    seq: u64,
    slot: Slot<Args>,
}

struct Connections<Args> {
    slots: SlotMap<ConnectionId, Connection<Args>>,
    next_seq: u64,
}

/// A notification with any number of connected slots.
///
/// `Args` is the value handed to each slot; use `()` for bare notifications.
pub struct Signal<Args> {
    connections: Mutex<Connections<Args>>,
    blocked: AtomicBool,
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().slots.len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal with no slots.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections {
                slots: SlotMap::with_key(),
                next_seq: 0,
            }),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connects a slot; it runs after every slot connected before it.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        let seq = connections.next_seq;
        connections.next_seq += 1;
        connections.slots.insert(Connection {
            seq,
            slot: Arc::new(slot),
        })
    }

    /// Removes a slot. Returns `false` if `id` was already disconnected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().slots.remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
    }

    /// Suppresses (or re-enables) emission. Emits while blocked are dropped,
    /// not queued.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is currently suppressed.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Runs every connected slot with `args`, oldest connection first.
    ///
    /// Slots are collected before any of them runs, so a slot may connect to
    /// or disconnect from this same signal; the change applies to the next
    /// emission.
    #[tracing::instrument(skip_all, target = "horizon_tableview_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let mut ordered: Vec<(u64, Slot<Args>)> = self
            .connections
            .lock()
            .slots
            .values()
            .map(|c| (c.seq, Arc::clone(&c.slot)))
            .collect();
        ordered.sort_unstable_by_key(|(seq, _)| *seq);
        tracing::trace!(target: targets::SIGNAL, connection_count = ordered.len(), "emitting signal");

        for (_, slot) in &ordered {
            slot(&args);
        }
    }
}
