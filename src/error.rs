use std::io;

/// Errors reported to callers of the miner. Degenerate metric values are
/// not errors; they surface as `None` on the affected rule field.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must be in range (0,1], got {0}")]
    InvalidMinSupport(f64),

    #[error("minimum confidence must be in range [0,1], got {0}")]
    InvalidMinConfidence(f64),

    #[error("unknown algorithm {0:?}, expected one of apriori-index, apriori-hash, eclat")]
    UnknownAlgorithm(String),

    #[error("failed to read transactions from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
