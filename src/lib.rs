//! Library Desk
//!
//! In-memory catalog, membership and loan bookkeeping for a small library,
//! driven from a menu-based console.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;

pub use crate::config::AppConfig;
pub use console::Console;
pub use error::{AppError, AppResult, Entity};
pub use services::Library;
