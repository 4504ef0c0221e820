use std::io;
use std::path::Path;
use crate::ircore::DocId;

/// Inconsistencies a ranker can hit while reading collection statistics.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("document {0} is not in the index")]
    UnknownDocument(DocId),

    #[error("collection statistics are empty")]
    EmptyCollection,
}

/// Errors surfaced to the caller of the gateway.
///
/// Ranker fallback, unknown methods and malformed topic tokens are recovered
/// where they happen and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request is not valid JSON, or not a JSON object.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The index or the ranker failed while scoring.
    #[error("ranker {ranker} failed on query \"{query}\": {source}")]
    Scoring {
        ranker: String,
        query: String,
        source: IndexError,
    },

    /// The topic model is not configured or cannot be read.
    #[error("topic model: {0}")]
    TopicModel(String),

    #[error("index: {0}")]
    Index(String),

    #[error("config: {0}")]
    Config(String),

    #[error("response encoding: {0}")]
    Encode(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        source: io::Error,
    },
}

impl GatewayError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        GatewayError::Io {
            path: path.display().to_string(),
            source: source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scoring() {
        let err = GatewayError::Scoring {
            ranker: "bm25".to_string(),
            query: "quarrel sir".to_string(),
            source: IndexError::UnknownDocument(7),
        };
        assert_eq!(
            err.to_string(),
            "ranker bm25 failed on query \"quarrel sir\": document 7 is not in the index"
        );
    }

    #[test]
    fn test_display_malformed() {
        let err = GatewayError::MalformedRequest("expected a JSON object".into());
        assert_eq!(err.to_string(), "malformed request: expected a JSON object");
    }

    #[test]
    fn test_io_keeps_path() {
        let err = GatewayError::io(Path::new(".rir/missing.idx"),
            io::Error::new(io::ErrorKind::NotFound, "not found"));
        assert_eq!(err.to_string(), ".rir/missing.idx: not found");
    }
}
