//! PharmDash Application Module
//!
//! Wires the core together: loads [`AppConfig`], runs the startup sequence
//! (storage paths, preference restoration with presentation effects, bounded
//! session hydration), and hands the UI a single [`AppContext`] — an
//! explicit context object constructed once and passed by reference, so
//! tests instantiate independent instances instead of sharing process-wide
//! state.

pub mod config;
pub mod context;
pub mod error;

pub use config::{AppConfig, ConfigLoader};
pub use context::AppContext;
pub use error::{AppError, AppResult};
