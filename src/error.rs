use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Cannot aggregate {metric} over an empty lead collection")]
    InvalidAggregation { metric: &'static str },
}

pub type EngineResult<T> = Result<T, QueryError>;
