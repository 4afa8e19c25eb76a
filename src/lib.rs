//! sitemon — periodic HTTP endpoint availability monitor.
//!
//! Probes a fixed set of URLs on a timer, tracks per-endpoint health
//! across cycles, and emits human-readable alerts on outage, recovery,
//! and content drift.

// Core subsystems
pub mod config;
pub mod monitor;
pub mod notify;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::MonitorService;
