/// Export format version - follows semantic versioning
pub const AIS_FORMAT_VERSION: &str = "1.0.0";

/// File extension for exported files
pub const AIS_PARQUET_EXTENSION: &str = "parquet";

/// File extension for raw NMEA input files
pub const NMEA_EXTENSION: &str = "nm4";

/// Metadata key for format version in Parquet footer
pub const KEY_FORMAT_VERSION: &str = "ais:format_version";

/// Metadata key for the human-readable schema description
pub const KEY_SCHEMA_DESCRIPTION: &str = "ais:schema_description";

/// Metadata key for converter software info
pub const KEY_CONVERTER_INFO: &str = "ais:converter_info";

/// Default number of rows buffered before a row group is flushed
pub const MAX_ROWS_PER_GROUP: usize = 100_000;
