use crate::repository::{CacheError, PersistError};

pub mod articles;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("Persistence error: {0}")]
    PersistError(#[from] PersistError),
    #[error("Cache error: {0}")]
    CacheError(#[from] CacheError),
}
