use std::fmt;

// === StoreError ===

/// Errors raised by a key-value store backend.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    DatabaseError(String),
    /// The store's backing resource cannot be reached (lock poisoned, file gone).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === HistoryError ===

/// Errors related to search history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// The category name is not `destination` or `video`.
    UnknownCategory(String),
    /// Failed to serialize the history state.
    SerializationError(String),
    /// The underlying store rejected a read or write.
    Store(StoreError),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::UnknownCategory(name) => {
                write!(f, "Unknown history category: {}", name)
            }
            HistoryError::SerializationError(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
            HistoryError::Store(err) => write!(f, "History store error: {}", err),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for HistoryError {
    fn from(err: StoreError) -> Self {
        HistoryError::Store(err)
    }
}

// === SearchError ===

/// Errors related to fetching search results.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Search was requested with an empty query.
    EmptyQuery,
    /// A network error occurred while contacting the search API.
    Network(String),
    /// The search API answered with a non-success status.
    Status(u16),
    /// The response body was not a valid search result.
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "Search query is empty"),
            SearchError::Network(msg) => write!(f, "Search network error: {}", msg),
            SearchError::Status(code) => write!(f, "Search API returned status {}", code),
            SearchError::Decode(msg) => write!(f, "Search response decode error: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === RouteError ===

/// Errors related to parsing page routes.
#[derive(Debug, PartialEq)]
pub enum RouteError {
    /// The path is not the browse page.
    UnknownPath(String),
    /// The route could not be parsed as a URL path.
    Malformed(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownPath(path) => write!(f, "Unknown route: {}", path),
            RouteError::Malformed(msg) => write!(f, "Malformed route: {}", msg),
        }
    }
}

impl std::error::Error for RouteError {}
