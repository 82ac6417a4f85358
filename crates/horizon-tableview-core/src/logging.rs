//! Logging and tracing facilities for Horizon TableView.
//!
//! Horizon TableView uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_tableview=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The [`targets`] constants name every subsystem so logs can be filtered
//! precisely, e.g. `horizon_tableview::selection=trace`.

/// Span names used throughout Horizon TableView for tracing.
pub mod span_names {
    /// Cell production for a host row query.
    pub const HOST_QUERY: &str = "horizon_tableview::host_query";
    /// Filter application span.
    pub const FILTER: &str = "horizon_tableview::filter";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_tableview_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_tableview_core::signal";
    /// Table view host surface target.
    pub const VIEW: &str = "horizon_tableview::view";
    /// Selection set target.
    pub const SELECTION: &str = "horizon_tableview::selection";
    /// Filtering and backing-array resolution target.
    pub const FILTER: &str = "horizon_tableview::filter";
    /// Cell registry and reuse pool target.
    pub const REGISTRY: &str = "horizon_tableview::registry";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as
/// rebuilding filtered sections.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_tableview::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
