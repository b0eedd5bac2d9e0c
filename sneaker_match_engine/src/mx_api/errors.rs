use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MatchFlowError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    /// The match batch could not be stored. Nothing from the batch was kept and no notifications went out.
    #[error("Could not record matches for user #{user_id}: {reason}")]
    PersistenceFailure { user_id: i64, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum MatchHistoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("User #{0} does not exist")]
    UserNotFound(i64),
}
