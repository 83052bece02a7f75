use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum UnderwritingError {
    #[error("unknown message key: {key}")]
    UnknownMessageKey {
        key: String,
    },

    #[error("loan amount must be positive: {amount}")]
    InvalidLoanAmount {
        amount: Money,
    },
}

pub type Result<T> = std::result::Result<T, UnderwritingError>;
