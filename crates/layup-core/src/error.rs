use std::fmt;

use thiserror::Error;

/// Host resource that bounded an evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    RecursionDepth,
    CacheEntries,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::RecursionDepth => write!(f, "recursion depth"),
            Resource::CacheEntries => write!(f, "cache entries"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("invalid argument: index {0} is outside the sequence domain (n >= 1)")]
    InvalidArgument(u64),

    #[error("resource exhausted: {resource} limit of {limit} reached while evaluating S({index})")]
    ResourceExhausted {
        resource: Resource,
        limit: usize,
        index: u64,
    },
}

impl SequenceError {
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, SequenceError::ResourceExhausted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected naive, memoization or iteration)")]
pub struct ParseStrategyError(pub String);

pub type Result<T> = std::result::Result<T, SequenceError>;
