// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for loading and validating configuration.

use std::path::PathBuf;

/// Errors that reject a configuration before the search runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for a configuration.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `knownInners` is missing or empty.
    #[error("no known inners provided")]
    NoInners,

    /// More inners than the exhaustive search can handle.
    #[error("{count} inners given, at most {max} are supported")]
    TooManyInners { count: usize, max: usize },

    /// `maxResultSize` outside the supported range.
    #[error("maxResultSize {value} outside supported range [{min}, {max}]")]
    ResultSizeOutOfRange { value: i64, min: usize, max: usize },

    /// One inner's content is too long.
    #[error("inner {id} is {len} bytes long, at most {max} are supported")]
    InnerTooLong { id: String, len: usize, max: usize },
}
