//! Conversion profiles for common use cases.
//!
//! Profiles provide sensible defaults for compression and row group size,
//! hiding low-level Parquet settings from end users.

use std::fmt;
use std::str::FromStr;

use aisparq::writer::{CompressionType, WriterConfig};

/// Conversion profiles for common use cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    /// Prioritize speed over compression.
    ///
    /// - Compression: Snappy
    /// - Row group size: 50,000 rows
    Fast,

    /// Balance between speed and compression (default).
    ///
    /// - Compression: ZSTD level 3
    /// - Row group size: 100,000 rows
    #[default]
    Balanced,

    /// Maximum compression, slower conversion.
    ///
    /// - Compression: ZSTD level 15
    /// - Row group size: 200,000 rows
    MaxCompression,
}

impl Profile {
    /// Returns the Parquet writer settings for this profile.
    pub fn writer_config(&self) -> WriterConfig {
        match self {
            Profile::Fast => WriterConfig::fast_write(),
            Profile::Balanced => WriterConfig::default(),
            Profile::MaxCompression => WriterConfig {
                compression: CompressionType::Zstd(15),
                ..WriterConfig::max_compression()
            },
        }
    }

    /// Returns the number of rows per row group for this profile.
    pub fn row_group_size(&self) -> usize {
        match self {
            Profile::Fast => 50_000,
            Profile::Balanced => 100_000,
            Profile::MaxCompression => 200_000,
        }
    }

    /// Returns all available profile names.
    pub fn variants() -> &'static [&'static str] {
        &["fast", "balanced", "max-compression"]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Fast => write!(f, "fast"),
            Profile::Balanced => write!(f, "balanced"),
            Profile::MaxCompression => write!(f, "max-compression"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Profile::Fast),
            "balanced" | "default" => Ok(Profile::Balanced),
            "max-compression" | "maxcompression" | "max" => Ok(Profile::MaxCompression),
            _ => Err(format!(
                "Unknown profile '{}'. Valid options: {}",
                s,
                Profile::variants().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let balanced = Profile::default();
        assert_eq!(balanced, Profile::Balanced);
        assert_eq!(balanced.writer_config().compression, CompressionType::Zstd(3));
        assert_eq!(balanced.row_group_size(), 100_000);
        assert_eq!(
            Profile::MaxCompression.writer_config().compression,
            CompressionType::Zstd(15)
        );
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(Profile::from_str("fast").unwrap(), Profile::Fast);
        assert_eq!(Profile::from_str("BALANCED").unwrap(), Profile::Balanced);
        assert_eq!(
            Profile::from_str("max-compression").unwrap(),
            Profile::MaxCompression
        );
        assert!(Profile::from_str("invalid").is_err());
    }
}
