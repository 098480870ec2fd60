// rfu6xx/src/error.rs

use thiserror::Error;

use crate::types::{DeviceStatus, NodeRef, ReaderResponseCode};

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("connect failed: {0}")]
    Connect(String),

    /// Browse/read/call fault reported by the transport.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("namespace not found: {0}")]
    NamespaceNotFound(String),

    #[error("node not found: no child named '{name}' below {parent}")]
    NodeNotFound { parent: NodeRef, name: String },

    #[error("malformed hex: {0}")]
    MalformedHex(String),

    #[error("invalid payload length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("payload format error: {0}")]
    PayloadFormat(String),

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unexpected result count: expected {expected}, got {actual}")]
    UnexpectedResultCount { expected: usize, actual: usize },

    #[error("{operation} not allowed while device status is {status}")]
    InvalidState {
        operation: &'static str,
        status: DeviceStatus,
    },

    #[error("reader reported {0}")]
    Reader(ReaderResponseCode),
}

pub type Result<T> = std::result::Result<T, Error>;
