//! Data models for Library Desk

pub mod loan;
pub mod member;
pub mod publication;

// Re-export commonly used types
pub use loan::{Loan, LoanId, LoanPolicy};
pub use member::{Member, NewMember};
pub use publication::{Book, NewBook, Publication, PublicationId, PublicationQuery};
