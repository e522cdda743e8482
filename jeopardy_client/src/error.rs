use jeopardy::{CategoryId, InconsistentBoard, InsufficientPool};

/// The remote service could not deliver usable data.
#[derive(Debug)]
pub enum DataFetchError {
    /// The request failed or the service answered with an error status.
    Http { url: String, err: reqwest::Error },
    /// A data source other than HTTP failed.
    Unavailable { reason: String },
    /// The response arrived but does not have the expected shape.
    Malformed {
        category: Option<CategoryId>,
        reason: String,
    },
}

impl DataFetchError {
    pub(crate) fn malformed(category: Option<CategoryId>, reason: impl Into<String>) -> Self {
        DataFetchError::Malformed {
            category,
            reason: reason.into(),
        }
    }
}

impl std::error::Error for DataFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataFetchError::Http { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFetchError::Http { url, err } if err.is_timeout() => {
                write!(f, "Request to {} timed out", url)
            }
            DataFetchError::Http { url, err } => match err.status() {
                Some(status) => write!(f, "Request to {} failed with status {}", url, status),
                None => write!(f, "Request to {} failed", url),
            },
            DataFetchError::Unavailable { reason } => {
                write!(f, "Trivia data is unavailable: {}", reason)
            }
            DataFetchError::Malformed {
                category: Some(id),
                reason,
            } => write!(f, "Malformed data for category {}: {}", id, reason),
            DataFetchError::Malformed {
                category: None,
                reason,
            } => write!(f, "Malformed data from the trivia service: {}", reason),
        }
    }
}

/// Why starting a game failed.
///
/// Every variant is fatal to that start attempt only; starting again is
/// always allowed.
#[derive(Debug)]
pub enum StartError {
    DataFetch(DataFetchError),
    InsufficientPool(InsufficientPool),
    InconsistentBoard(InconsistentBoard),
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartError::DataFetch(err) => Some(err),
            StartError::InsufficientPool(err) => Some(err),
            StartError::InconsistentBoard(err) => Some(err),
        }
    }
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::DataFetch(_) => write!(f, "Could not load the trivia categories"),
            StartError::InsufficientPool(_) => {
                write!(f, "The trivia service offered too few categories")
            }
            StartError::InconsistentBoard(_) => {
                write!(f, "The trivia categories do not form a complete board")
            }
        }
    }
}

impl From<DataFetchError> for StartError {
    fn from(err: DataFetchError) -> Self {
        StartError::DataFetch(err)
    }
}

impl From<InsufficientPool> for StartError {
    fn from(err: InsufficientPool) -> Self {
        StartError::InsufficientPool(err)
    }
}

impl From<InconsistentBoard> for StartError {
    fn from(err: InconsistentBoard) -> Self {
        StartError::InconsistentBoard(err)
    }
}

/// Joins an error and all its sources into one line, e.g. for a status bar.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut result = err.to_string();
    let mut current = err.source();
    while let Some(src_err) = current {
        result += ": ";
        result += &src_err.to_string();
        current = src_err.source();
    }
    result
}
