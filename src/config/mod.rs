// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration document.
//!
//! The search reads a YAML document listing the inners and the maximum
//! result size:
//!
//! ```yaml
//! maxResultSize: 40
//! knownInners:
//!   - id: first
//!     v: ABCDE
//!     comment: free text
//!     chiType: fire
//!     chiValue: 2
//! ```
//!
//! [`Config::validate`] enforces the bounds the exhaustive search relies on;
//! the search itself assumes they hold.

pub mod errors;

pub use errors::ConfigError;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::inner::{Inner, InnerArena};

/// Most inners searched at once (`21!` permutations).
pub const MAX_INNERS: usize = 21;

/// Smallest accepted `maxResultSize`.
pub const MIN_RESULT_SIZE: usize = 1;

/// Largest accepted `maxResultSize`.
pub const MAX_RESULT_SIZE: usize = 127;

/// Longest accepted inner, in bytes.
pub const MAX_INNER_LEN: usize = (1 << 16) - 1;

/// One inner as written in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerSpec {
    #[serde(default)]
    pub id: String,
    pub v: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub chi_type: String,
    #[serde(default)]
    pub chi_value: i64,
}

impl From<InnerSpec> for Inner {
    fn from(spec: InnerSpec) -> Self {
        Inner {
            id: spec.id,
            comment: spec.comment,
            chi_type: spec.chi_type,
            chi_value: spec.chi_value,
            bytes: spec.v.into_bytes(),
            contained: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub max_result_size: i64,
    #[serde(default)]
    pub known_inners: Vec<InnerSpec>,
}

impl Config {
    /// Parse a configuration from YAML text, without validating it.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and parse a configuration file, without validating it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Check the bounds the search depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.known_inners.is_empty() {
            return Err(ConfigError::NoInners);
        }
        if self.known_inners.len() > MAX_INNERS {
            return Err(ConfigError::TooManyInners {
                count: self.known_inners.len(),
                max: MAX_INNERS,
            });
        }
        let size_ok = usize::try_from(self.max_result_size)
            .is_ok_and(|size| (MIN_RESULT_SIZE..=MAX_RESULT_SIZE).contains(&size));
        if !size_ok {
            return Err(ConfigError::ResultSizeOutOfRange {
                value: self.max_result_size,
                min: MIN_RESULT_SIZE,
                max: MAX_RESULT_SIZE,
            });
        }
        if let Some(inner) = self.known_inners.iter().find(|inner| inner.v.len() > MAX_INNER_LEN) {
            return Err(ConfigError::InnerTooLong {
                id: inner.id.clone(),
                len: inner.v.len(),
                max: MAX_INNER_LEN,
            });
        }
        Ok(())
    }

    /// The validated maximum result size.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub fn result_size(&self) -> usize {
        usize::try_from(self.max_result_size).unwrap_or(0)
    }

    /// Move the inners into an arena, in document order.
    pub fn into_arena(self) -> InnerArena {
        InnerArena::new(self.known_inners.into_iter().map(Inner::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_result_size: i64, values: &[&str]) -> Config {
        Config {
            max_result_size,
            known_inners: values
                .iter()
                .enumerate()
                .map(|(i, v)| InnerSpec {
                    id: format!("i{}", i),
                    v: v.to_string(),
                    ..InnerSpec::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse() {
        let config = Config::from_yaml_str(
            "maxResultSize: 40\n\
             knownInners:\n\
             \x20 - id: first\n\
             \x20   v: ABCDE\n\
             \x20   comment: hello\n\
             \x20   chiType: fire\n\
             \x20   chiValue: 2\n\
             \x20 - id: second\n\
             \x20   v: DEF\n",
        )
        .unwrap();
        assert_eq!(config.max_result_size, 40);
        assert_eq!(config.known_inners.len(), 2);
        assert_eq!(config.known_inners[0].chi_type, "fire");
        assert_eq!(config.known_inners[0].chi_value, 2);
        assert_eq!(config.known_inners[1].chi_type, "");
        assert!(config.validate().is_ok());

        let arena = config.into_arena();
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(crate::inner::InnerId::new(0)).bytes, b"ABCDE");
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_yaml_str("maxResultSize: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_no_inners() {
        assert!(matches!(config(10, &[]).validate(), Err(ConfigError::NoInners)));
    }

    #[test]
    fn test_too_many_inners() {
        let values = vec!["a"; MAX_INNERS + 1];
        assert!(matches!(
            config(10, &values).validate(),
            Err(ConfigError::TooManyInners { count: 22, max: 21 })
        ));
        let values = vec!["a"; MAX_INNERS];
        assert!(config(10, &values).validate().is_ok());
    }

    #[test]
    fn test_result_size_bounds() {
        for bad in [-1, 0, 128] {
            assert!(matches!(
                config(bad, &["a"]).validate(),
                Err(ConfigError::ResultSizeOutOfRange { .. })
            ));
        }
        for good in [1, 127] {
            assert!(config(good, &["a"]).validate().is_ok());
        }
    }

    #[test]
    fn test_inner_too_long() {
        let long = "x".repeat(MAX_INNER_LEN + 1);
        let err = config(10, &["ok", long.as_str()]).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "inner i1 is 65536 bytes long, at most 65535 are supported"
        );
        let longest = "x".repeat(MAX_INNER_LEN);
        assert!(config(10, &[longest.as_str()]).validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
