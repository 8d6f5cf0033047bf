use crate::modules::cart::adapters::outbound::inventory::InventoryError;
use crate::modules::cart::core::decision::DecideError;
use crate::shared::infrastructure::storage::StorageError;
use thiserror::Error;

/// Unexpected faults while talking to the outside world.
#[derive(Debug, Error)]
pub enum OperationFailure {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("cart serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("operation failed: {0}")]
    OperationFailed(#[from] OperationFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    OutOfStock,
    ProductNotFound,
    OperationFailed,
}

impl CartError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CartError::Rejected(DecideError::OutOfStock { .. }) => FailureKind::OutOfStock,
            CartError::Rejected(DecideError::ProductNotFound { .. }) => {
                FailureKind::ProductNotFound
            }
            CartError::OperationFailed(_) => FailureKind::OperationFailed,
        }
    }
}

impl From<InventoryError> for CartError {
    fn from(err: InventoryError) -> Self {
        CartError::OperationFailed(err.into())
    }
}

impl From<StorageError> for CartError {
    fn from(err: StorageError) -> Self {
        CartError::OperationFailed(err.into())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::OperationFailed(err.into())
    }
}
