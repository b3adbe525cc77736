use std::collections::HashMap;

use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;
use parquet::schema::types::ColumnPath;

use crate::schema::Column;

/// Compression options for exported files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// ZSTD compression (recommended, best compression ratio)
    Zstd(i32),
    /// Snappy compression (faster, slightly larger files)
    Snappy,
    /// No compression (fastest write, largest files)
    Uncompressed,
}

impl Default for CompressionType {
    fn default() -> Self {
        Self::Zstd(3)
    }
}

impl CompressionType {
    /// Maximum compression (slower write, smallest files)
    pub fn max_compression() -> Self {
        Self::Zstd(22)
    }

    /// Fast compression (faster write, larger files)
    pub fn fast() -> Self {
        Self::Snappy
    }

    /// Parse a CLI spelling: `zstd`, `zstd:<level>`, `snappy` or `none`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "zstd" => Some(Self::default()),
            "snappy" => Some(Self::Snappy),
            "none" | "uncompressed" => Some(Self::Uncompressed),
            other => other
                .strip_prefix("zstd:")
                .and_then(|level| level.parse().ok())
                .map(Self::Zstd),
        }
    }
}

/// Configuration for the Parquet container writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Compression type to use
    pub compression: CompressionType,

    /// Data page size in bytes
    pub data_page_size: usize,

    /// Whether to write statistics for columns
    pub write_statistics: bool,

    /// Dictionary page size limit in bytes
    pub dictionary_page_size_limit: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionType::default(),
            // 1MB data pages
            data_page_size: 1024 * 1024,
            write_statistics: true,
            // 1MB dictionary page limit
            dictionary_page_size_limit: 1024 * 1024,
        }
    }
}

/// Columns holding a handful of distinct values per row group.
const DICTIONARY_COLUMNS: [Column; 12] = [
    Column::Source,
    Column::MessageType,
    Column::NavigationStatus,
    Column::RepeatIndicator,
    Column::ManoeuvreIndicator,
    Column::RadioSyncState,
    Column::RadioSlotTimeout,
    Column::PositionFixType,
    Column::ShipType,
    Column::AisVersion,
    Column::CsUnit,
    Column::RadioStatusType,
];

/// Columns that are close to unique per row.
const PLAIN_COLUMNS: [Column; 5] = [
    Column::Timestamp,
    Column::Latitude,
    Column::Longitude,
    Column::RadioSubMessage,
    Column::ImoNumber,
];

impl WriterConfig {
    /// Configuration optimized for maximum compression (slower write)
    pub fn max_compression() -> Self {
        Self {
            compression: CompressionType::max_compression(),
            data_page_size: 2 * 1024 * 1024,
            write_statistics: true,
            dictionary_page_size_limit: 2 * 1024 * 1024,
        }
    }

    /// Configuration optimized for fast writing (larger files)
    pub fn fast_write() -> Self {
        Self {
            compression: CompressionType::fast(),
            data_page_size: 512 * 1024,
            write_statistics: true,
            dictionary_page_size_limit: 512 * 1024,
        }
    }

    /// Create writer properties from this configuration.
    ///
    /// `max_row_group_size` should equal the exporter's buffer capacity so the
    /// Parquet writer never splits a handed-off row group.
    pub(crate) fn to_writer_properties(
        &self,
        metadata: &HashMap<String, String>,
        max_row_group_size: usize,
    ) -> WriterProperties {
        let compression = match self.compression {
            CompressionType::Zstd(level) => {
                Compression::ZSTD(ZstdLevel::try_new(level).unwrap_or_default())
            }
            CompressionType::Snappy => Compression::SNAPPY,
            CompressionType::Uncompressed => Compression::UNCOMPRESSED,
        };

        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        let mut builder = WriterProperties::builder()
            .set_compression(compression)
            .set_data_page_size_limit(self.data_page_size)
            .set_dictionary_page_size_limit(self.dictionary_page_size_limit)
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(max_row_group_size.max(1));

        for column in DICTIONARY_COLUMNS {
            builder = builder
                .set_column_dictionary_enabled(ColumnPath::new(vec![column.name().to_string()]), true);
        }
        for column in PLAIN_COLUMNS {
            builder = builder
                .set_column_dictionary_enabled(ColumnPath::new(vec![column.name().to_string()]), false);
        }

        let mut kv_metadata: Vec<KeyValue> = metadata
            .iter()
            .map(|(k, v)| KeyValue {
                key: k.clone(),
                value: Some(v.clone()),
            })
            .collect();
        kv_metadata.sort_by(|a, b| a.key.cmp(&b.key));

        builder = builder.set_key_value_metadata(Some(kv_metadata));

        builder.build()
    }
}
