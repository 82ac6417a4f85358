//! Explicit cell registration and reuse.
//!
//! Hosts hand the table view a list of [`CellRegistration`]s up front; there
//! is no runtime discovery of cell types. The [`CellRegistry`] then builds
//! cells on demand and keeps a per-identifier pool of recycled cells.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use horizon_tableview_core::logging::targets;
use parking_lot::Mutex;

use super::cell::{Cell, CellHandle, CellType};

/// Type alias for a cell constructor.
pub type CellFactory = Arc<dyn Fn() -> Box<dyn Cell> + Send + Sync>;

/// A cell type registered under a reuse identifier.
#[derive(Clone)]
pub struct CellRegistration {
    reuse_identifier: String,
    factory: CellFactory,
}

impl CellRegistration {
    /// Registers `C` under its [`CellType::reuse_identifier`].
    pub fn of<C: CellType>() -> Self {
        Self {
            reuse_identifier: C::reuse_identifier(),
            factory: Arc::new(|| Box::new(C::create()) as Box<dyn Cell>),
        }
    }

    /// Registers a custom constructor under an explicit identifier.
    pub fn with_factory<F>(reuse_identifier: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Cell> + Send + Sync + 'static,
    {
        Self {
            reuse_identifier: reuse_identifier.into(),
            factory: Arc::new(factory),
        }
    }

    /// The reuse identifier.
    pub fn reuse_identifier(&self) -> &str {
        &self.reuse_identifier
    }
}

impl fmt::Debug for CellRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRegistration")
            .field("reuse_identifier", &self.reuse_identifier)
            .finish_non_exhaustive()
    }
}

/// Registered cell constructors plus a reuse pool.
#[derive(Default)]
pub struct CellRegistry {
    factories: HashMap<String, CellFactory>,
    pool: HashMap<String, Vec<CellHandle>>,
}

impl CellRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from an explicit list of registrations.
    pub fn with_registrations(registrations: impl IntoIterator<Item = CellRegistration>) -> Self {
        let mut registry = Self::new();
        for registration in registrations {
            registry.register(registration);
        }
        registry
    }

    /// Adds a registration.
    ///
    /// Registering an identifier again replaces its constructor and drops
    /// any pooled cells built by the old one. Returns `true` if a previous
    /// registration was replaced.
    pub fn register(&mut self, registration: CellRegistration) -> bool {
        let CellRegistration {
            reuse_identifier,
            factory,
        } = registration;
        tracing::debug!(target: targets::REGISTRY, %reuse_identifier, "registered cell type");
        self.pool.remove(&reuse_identifier);
        self.factories.insert(reuse_identifier, factory).is_some()
    }

    /// Returns `true` if `reuse_identifier` is registered.
    pub fn is_registered(&self, reuse_identifier: &str) -> bool {
        self.factories.contains_key(reuse_identifier)
    }

    /// The registered identifiers, in no particular order.
    pub fn reuse_identifiers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Hands out a cell for `reuse_identifier`.
    ///
    /// A pooled cell is reused when available (after
    /// [`Cell::prepare_for_reuse`]); otherwise a new one is constructed.
    /// Returns `None` if the identifier was never registered.
    pub fn dequeue(&mut self, reuse_identifier: &str) -> Option<CellHandle> {
        if let Some(cell) = self.pool.get_mut(reuse_identifier).and_then(Vec::pop) {
            cell.lock().prepare_for_reuse();
            tracing::trace!(target: targets::REGISTRY, reuse_identifier, "reusing pooled cell");
            return Some(cell);
        }

        let factory = self.factories.get(reuse_identifier)?;
        tracing::trace!(target: targets::REGISTRY, reuse_identifier, "constructing cell");
        Some(Arc::new(Mutex::new(factory())))
    }

    /// Returns a cell that scrolled out of view to the pool.
    ///
    /// Cells for unregistered identifiers are dropped. A cell that is
    /// already pooled is not added again, so it can only be handed out once.
    pub fn recycle(&mut self, reuse_identifier: &str, cell: CellHandle) {
        if !self.is_registered(reuse_identifier) {
            tracing::warn!(target: targets::REGISTRY, reuse_identifier, "dropping cell of unregistered type");
            return;
        }
        let pooled = self.pool.entry(reuse_identifier.to_string()).or_default();
        if pooled.iter().any(|existing| Arc::ptr_eq(existing, &cell)) {
            tracing::debug!(target: targets::REGISTRY, reuse_identifier, "cell already pooled");
            return;
        }
        pooled.push(cell);
    }

    /// Number of pooled cells for `reuse_identifier`.
    pub fn pooled_count(&self, reuse_identifier: &str) -> usize {
        self.pool.get(reuse_identifier).map_or(0, Vec::len)
    }
}

impl fmt::Debug for CellRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers: Vec<&str> = self.reuse_identifiers().collect();
        identifiers.sort_unstable();
        f.debug_struct("CellRegistry")
            .field("reuse_identifiers", &identifiers)
            .field("pooled", &self.pool.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
