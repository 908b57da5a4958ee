// Semantic search query: validated free text.
//
// Validation happens before any network call. The trimmed text must be at
// least 3 characters and the raw input at most 500 (characters, not bytes).

use thiserror::Error;

pub const MIN_QUERY_CHARS: usize = 3;
pub const MAX_QUERY_CHARS: usize = 500;

/// Why a query was rejected before reaching the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a search query")]
    Empty,

    #[error("Search query must be at least {MIN_QUERY_CHARS} characters long (got {len})")]
    TooShort { len: usize },

    #[error("Search query must be at most {MAX_QUERY_CHARS} characters long (got {len})")]
    TooLong { len: usize },
}

/// A free-text query that passed length validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticQuery(String);

impl SemanticQuery {
    /// Validate raw input. The stored text is trimmed.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let raw_len = raw.chars().count();
        if raw_len > MAX_QUERY_CHARS {
            return Err(QueryError::TooLong { len: raw_len });
        }

        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len == 0 {
            return Err(QueryError::Empty);
        }
        if len < MIN_QUERY_CHARS {
            return Err(QueryError::TooShort { len });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SemanticQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
