use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A team has no players to pick from.
    #[error("team '{team}' has no players")]
    EmptyRoster { team: String },

    /// A required field is missing or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn empty_roster(team: impl Into<String>) -> Self {
        EngineError::EmptyRoster { team: team.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
