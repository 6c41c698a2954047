// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::DatabaseErrorKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A uniqueness constraint rejected a write.
    UniqueViolation {
        /// The constraint name, or the driver message when the backend
        /// does not report one.
        constraint: String,
    },
    /// A stored row could not be turned back into a domain value.
    InvalidData(String),
    /// Every attempt to allocate a service code collided.
    ServiceCodeConflict {
        /// How many attempts were made.
        attempts: u32,
    },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::UniqueViolation { constraint } => {
                write!(f, "Unique constraint violated: {constraint}")
            }
            Self::InvalidData(msg) => write!(f, "Invalid stored data: {msg}"),
            Self::ServiceCodeConflict { attempts } => {
                write!(
                    f,
                    "Could not allocate a unique service code after {attempts} attempts"
                )
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation {
                    constraint: info
                        .constraint_name()
                        .map_or_else(|| info.message().to_string(), ToString::to_string),
                }
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<repairdesk_domain::DomainError> for PersistenceError {
    fn from(err: repairdesk_domain::DomainError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// Failure of [`Persistence::update_ticket_with`](crate::Persistence::update_ticket_with).
///
/// The caller's update closure may reject the change with its own error
/// type; that rejection rolls the transaction back and is handed back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketUpdateError<E> {
    /// The store failed, or the ticket does not exist (`NotFound`).
    Store(PersistenceError),
    /// The update closure refused the change.
    Rejected(E),
}

impl<E: std::fmt::Display> std::fmt::Display for TicketUpdateError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Rejected(err) => write!(f, "Update rejected: {err}"),
        }
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for TicketUpdateError<E> {}

impl<E> From<PersistenceError> for TicketUpdateError<E> {
    fn from(err: PersistenceError) -> Self {
        Self::Store(err)
    }
}

impl<E> From<diesel::result::Error> for TicketUpdateError<E> {
    fn from(err: diesel::result::Error) -> Self {
        Self::Store(PersistenceError::from(err))
    }
}
