//! Error types for NLB reconciliation

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every error is terminal for the current invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// An AWS API call failed (network, auth, throttling, ...)
    #[error("{context}, {source}")]
    Lookup {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Zero results where exactly one was required
    #[error("{0}")]
    NotFound(String),

    /// More than one result where exactly one was required
    #[error("{0}")]
    Ambiguous(String),
}

impl Error {
    /// Create a lookup error wrapping the failed API call
    pub fn lookup(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Lookup {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Create a not-found error with the given message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an ambiguous-result error with the given message
    pub fn ambiguous(msg: impl Into<String>) -> Self {
        Self::Ambiguous(msg.into())
    }

    /// Prefix the message with `context`, keeping the kind of error.
    pub fn context(self, context: &str) -> Self {
        match self {
            Self::Lookup {
                context: inner,
                source,
            } => Self::Lookup {
                context: format!("{}, {}", context, inner),
                source,
            },
            Self::NotFound(msg) => Self::NotFound(format!("{}, {}", context, msg)),
            Self::Ambiguous(msg) => Self::Ambiguous(format!("{}, {}", context, msg)),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
