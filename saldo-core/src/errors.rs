//! Error types for wallet operations.
//!
//! Every failure path in the core is enumerated here; callers surface the
//! `Display` message verbatim, so the strings are written for end users.

/// Comprehensive error type for wallet operations.
#[derive(thiserror::Error, Debug)]
pub enum WalletError {
    /// An account with the same email already exists.
    #[error("an account with this email is already registered")]
    DuplicateIdentity,

    /// Identifier/secret pair matched no account.
    #[error("unknown username/email or wrong password")]
    InvalidCredentials,

    /// Account id is absent from the directory.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// Payer balance does not cover the requested amount.
    #[error("insufficient balance: need {required}, have {available}")]
    InsufficientFunds {
        /// Amount the settlement asked for.
        required: u64,
        /// Payer's current balance.
        available: u64,
    },

    /// Inbox message id is absent.
    #[error("message not found: {0}")]
    MessageNotFound(String),

    /// Payer and payee resolve to the same account.
    #[error("cannot send a payment to your own account")]
    SelfSettlement,

    /// Payment request string could not be parsed.
    #[error("malformed payment request: {0}")]
    MalformedPayload(String),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::InsufficientFunds {
            required: 2000,
            available: 1000,
        };
        assert!(err.to_string().contains("insufficient balance"));
        assert!(err.to_string().contains("2000"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = WalletError::from(json_err);
        assert!(matches!(err, WalletError::Serialization(_)));
    }
}
