//! Endpoint monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! Poller (poller.rs), one task per URL:
//!     Timer tick (first probe immediate)
//!     → probe.rs issues one GET, reduced to {status, length} | Unreachable
//!     → state.rs records the outcome under the store's write lock
//!     → engine.rs compares against the settled state and emits alerts
//!     → alerts delivered to the notification sink (failures swallowed)
//!
//! Service (service.rs):
//!     Spawns pollers into a JoinSet
//!     → shutdown broadcast stops each poller at its next wait point
//!     → JoinSet drain is the completion barrier before process exit
//! ```
//!
//! # Design Decisions
//! - The state store is injectable, not a process global, so tests run
//!   without cross-test contamination
//! - Alert decisions happen inside the store's critical section; no
//!   intermediate state is observable
//! - Cancellation takes priority over an in-flight probe and never alerts

pub mod engine;
pub mod poller;
pub mod probe;
pub mod service;
pub mod state;

pub use engine::{Alert, ProbeOutcome};
pub use poller::Poller;
pub use probe::Prober;
pub use service::MonitorService;
pub use state::{EndpointState, StateError, StateStore};
