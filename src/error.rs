//! Error types for Library Desk

use thiserror::Error;

/// Numeric error codes attached to log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchMember = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    BadValue = 18,
    NoSuchData = 20,
    IoFailure = 30,
    ConfigFailure = 31,
}

/// Kind of record a lookup missed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Member,
    Publication,
    Loan,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::Member => "Member",
            Entity::Publication => "Publication",
            Entity::Loan => "Loan",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{kind} {detail} not found")]
    NotFound { kind: Entity, detail: String },

    #[error("Publication already on loan: {0}")]
    AlreadyOnLoan(String),

    #[error("Publication not found in library: {0}")]
    UnknownPublication(String),

    #[error("Invalid choice. Please select a valid option. ({0})")]
    InvalidSelection(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn not_found(kind: Entity, detail: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { kind, .. } => match kind {
                Entity::Member => ErrorCode::NoSuchMember,
                Entity::Publication => ErrorCode::NoSuchItem,
                Entity::Loan => ErrorCode::NoSuchData,
            },
            AppError::AlreadyOnLoan(_) => ErrorCode::ItemNotAvailable,
            AppError::UnknownPublication(_) => ErrorCode::NoSuchItem,
            AppError::InvalidSelection(_) => ErrorCode::BadValue,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::BadRequest(_) => ErrorCode::BadValue,
            AppError::Io(_) => ErrorCode::IoFailure,
            AppError::Config(_) => ErrorCode::ConfigFailure,
        }
    }

    /// Whether the console can report this error and prompt again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::Config(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
