use std::io;

/// Error types for memory introspection.
///
/// Every OS query either yields a value or one of these variants. A failed
/// query never produces a number.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The OS mechanism behind the query is not present or not permitted
    /// on the running platform.
    #[error("{query} is unavailable: {reason}")]
    QueryUnavailable { query: String, reason: String },

    /// The OS accepted the query but reported a failure, or returned a
    /// value that cannot be interpreted as a byte count.
    #[error("{query} failed: {source}")]
    QueryFailed {
        query: String,
        #[source]
        source: io::Error,
    },
}

impl MemoryError {
    pub fn unavailable(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QueryUnavailable {
            query: query.into(),
            reason: reason.into(),
        }
    }

    pub fn failed(query: impl Into<String>, source: io::Error) -> Self {
        Self::QueryFailed {
            query: query.into(),
            source,
        }
    }

    /// Returns `true` when the platform lacks the query mechanism entirely.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::QueryUnavailable { .. })
    }

    /// The OS query that produced this error, e.g. `sysconf(_SC_PHYS_PAGES)`.
    pub fn query(&self) -> &str {
        match self {
            Self::QueryUnavailable { query, .. } | Self::QueryFailed { query, .. } => query,
        }
    }
}

/// Convenience Result type for memory queries.
pub type Result<T> = std::result::Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display_names_query() {
        let err = MemoryError::unavailable("sysctl(vm.page_free_count)", "unknown name");
        assert!(err.is_unavailable());
        assert_eq!(err.query(), "sysctl(vm.page_free_count)");
        assert_eq!(
            err.to_string(),
            "sysctl(vm.page_free_count) is unavailable: unknown name"
        );
    }

    #[test]
    fn test_failed_keeps_os_error_as_source() {
        let err = MemoryError::failed(
            "sysconf(_SC_PAGESIZE)",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_unavailable());
        let source = std::error::Error::source(&err).expect("source should be kept");
        assert_eq!(source.to_string(), "denied");
        assert!(err.to_string().starts_with("sysconf(_SC_PAGESIZE) failed"));
    }
}
