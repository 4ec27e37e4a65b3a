use std::fmt;
use http::StatusCode;
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Input problems caught before any request is sent. The `Display` text is
/// what the user sees in the notice.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingField(String),                // "wallet address", "token name", ...
    InvalidAddress(String),              // field name of the malformed address
    MissingEmail,
    InvalidEmail,
    InvalidAmount,                       // amounts must be whole numbers >= 1
    InvalidSupply,
    MissingFetchInputs,
    BalanceNotFetched,
    NftsNotFetched,
    NoTokenSelected,
    InsufficientBalance { available: String, symbol: String },
    InsufficientTokenAmount { available: String, token_id: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "Please enter a {}", field),
            ValidationError::InvalidAddress(field) =>
                write!(f, "Invalid {}. Please enter a valid Ethereum address (0x...)", field),
            ValidationError::MissingEmail => write!(f, "Please enter an email address"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::InvalidAmount => write!(f, "Please enter a valid amount (minimum 1)"),
            ValidationError::InvalidSupply => write!(f, "Please enter a valid initial supply"),
            ValidationError::MissingFetchInputs => write!(f, "Please enter both contract address and wallet address"),
            ValidationError::BalanceNotFetched =>
                write!(f, "Please fetch token balance first by clicking \"Fetch Token Balance\""),
            ValidationError::NftsNotFetched => write!(f, "Please fetch your NFTs first by clicking the refresh button"),
            ValidationError::NoTokenSelected => write!(f, "Please select a token to burn"),
            ValidationError::InsufficientBalance { available, symbol } =>
                write!(f, "Insufficient balance. You have {} {} available.", available, symbol),
            ValidationError::InsufficientTokenAmount { available, token_id } =>
                write!(f, "Insufficient balance. You have {} tokens available for Token #{}.", available, token_id),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] ReqwestError),

    #[error("Server responded with {status}")]
    Status { status: StatusCode, message: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] SerdeJsonError),
}

impl ApiError {
    /// The message the backend put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server-provided message when present, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("HTTP request failed: {0}")]
    HttpRequestFailed(#[from] ReqwestError),

    #[error("Metadata host returned {0}")]
    BadStatus(StatusCode),

    #[error("Failed to parse metadata: {0}")]
    ParseError(#[from] SerdeJsonError),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("A request is already in flight")]
    Busy,
}
