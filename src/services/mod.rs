//! Business logic services

pub mod library;
pub mod reports;

pub use library::Library;
pub use reports::{OverdueEntry, OverdueReport, PopularEntry, PopularityReport};
