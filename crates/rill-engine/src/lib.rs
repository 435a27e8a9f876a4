//! Session orchestration for rill fluid animations.
//!
//! A [`Session`] owns one fluid grid, its art backdrop, and the frame
//! renderer, and advances them in lockstep: the host applies commands
//! and calls [`tick()`](Session::tick) itself. [`RealtimeSession`]
//! wraps a session in a background thread that ticks at a fixed
//! interval, drains a bounded command channel, and publishes the
//! latest frame for any thread to read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod realtime;
pub mod session;

pub use config::{ConfigError, InteractionConfig, SessionConfig};
pub use metrics::TickMetrics;
pub use realtime::{RealtimeSession, SubmitError};
pub use session::Session;
