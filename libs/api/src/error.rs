/// Category of a store error. The HTTP layer picks the response status
/// from the kind, never from the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The store could not be reached while establishing the connection.
    Unavailable,
    /// The identifier is not in the store's format.
    InvalidIdentifier,
    /// The store rejected an insert/update/delete/find.
    OperationFailed,
}

impl std::fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreErrorKind::Unavailable => f.write_str("unavailable"),
            StoreErrorKind::InvalidIdentifier => f.write_str("invalid identifier"),
            StoreErrorKind::OperationFailed => f.write_str("operation failed"),
        }
    }
}

/// Unified error type for all `RecordStore` methods.
///
/// Carries a `StoreErrorKind` plus the driver's message for the logs.
#[derive(Clone)]
pub struct StoreError {
    kind: StoreErrorKind,
    message: String,
}

impl StoreError {
    /// Connection could not be established.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self { kind: StoreErrorKind::Unavailable, message: msg.into() }
    }

    /// Identifier failed to parse.
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self { kind: StoreErrorKind::InvalidIdentifier, message: msg.into() }
    }

    /// Store rejected the operation.
    pub fn operation(msg: impl Into<String>) -> Self {
        Self { kind: StoreErrorKind::OperationFailed, message: msg.into() }
    }

    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StoreError {}
