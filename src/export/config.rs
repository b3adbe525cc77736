use crate::schema::{AisSchema, TextWidths, MAX_ROWS_PER_GROUP};
use crate::writer::WriterConfig;

use super::error::ExportError;

/// Configuration for one export stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Rows buffered before a row group is flushed
    pub max_rows_per_group: usize,

    /// Declared bit lengths of the text columns
    pub text_widths: TextWidths,

    /// Parquet writer settings
    pub writer: WriterConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_rows_per_group: MAX_ROWS_PER_GROUP,
            text_widths: TextWidths::default(),
            writer: WriterConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Set the row group capacity
    pub fn with_max_rows_per_group(mut self, rows: usize) -> Self {
        self.max_rows_per_group = rows;
        self
    }

    /// Set the Parquet writer settings
    pub fn with_writer(mut self, writer: WriterConfig) -> Self {
        self.writer = writer;
        self
    }

    /// Check the configuration and build the schema it describes.
    ///
    /// Fails before any buffer is allocated when the row capacity is zero or a
    /// text width is not a whole number of 6-bit characters.
    pub fn build_schema(&self) -> Result<AisSchema, ExportError> {
        if self.max_rows_per_group == 0 {
            return Err(ExportError::InvalidConfig(
                "max_rows_per_group must be at least 1".to_string(),
            ));
        }
        Ok(AisSchema::new(self.text_widths)?)
    }
}
