//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse flags → Load config → Init logging/metrics → Start pollers
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast to pollers → Stopping notice → Drain tasks
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One process-wide broadcast; pollers stop at their next wait point
//! - The process exits only after every poller task has been joined

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
