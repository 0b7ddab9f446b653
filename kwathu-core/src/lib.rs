pub mod storage;
pub mod identity;
pub mod payment;

pub use storage::{KeyValueStore, StoreError};

/// Failures an identity provider or payment gateway can report
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Identity verification failed: {0}")]
    IdentityError(String),
    #[error("Payment gateway error: {0}")]
    PaymentError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
