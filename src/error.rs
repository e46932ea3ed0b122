use thiserror::Error;

/// Error type for the roster application.
///
/// Repository callers branch on these kinds: a duplicate email is not the
/// same failure as an unreachable server, and a zero rows-affected result
/// is not an error at all (it is reported through the returned count).
#[derive(Debug, Error)]
pub enum RosterError {
    /// Malformed startup configuration (e.g. a non-numeric port).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to establish a database connection.
    #[error("connection error: {0}")]
    Connect(#[source] sqlx::Error),

    /// Insert or update rejected by the unique email constraint.
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// Any other database error.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Terminal I/O errors from the interactive shell.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result using RosterError as the error type.
pub type Result<T> = std::result::Result<T, RosterError>;

impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RosterError::DuplicateEmail(db.message().to_string())
            }
            other => RosterError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_error_kind() {
        let err = RosterError::Config("PGPORT must be an integer".to_string());
        assert!(err.to_string().contains("configuration error"));

        let err = RosterError::DuplicateEmail("students_email_key".to_string());
        assert!(err.to_string().contains("duplicate email"));
    }

    #[test]
    fn plain_sqlx_errors_map_to_database() {
        let err: RosterError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, RosterError::Database(_)));
    }
}
