//! Core systems for Horizon TableView.
//!
//! This crate provides the foundational pieces shared by the table view
//! component and its hosts:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notifications
//! - **Logging**: `tracing` targets, span names and a performance span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_tableview_core::Signal;
//!
//! // A signal carrying the row that should be redrawn
//! let row_reload_requested = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = row_reload_requested.connect(|row| {
//!     println!("Reload row {}", row);
//! });
//!
//! // Emit the signal
//! row_reload_requested.emit(3);
//!
//! // Disconnect when done
//! row_reload_requested.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
