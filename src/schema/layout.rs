use std::sync::Arc;

use arrow::datatypes::Schema;

use super::builders::create_ais_schema;
use super::columns::{Column, ColumnKind, COLUMN_COUNT};

/// AIS packs text at 6 bits per character.
pub const BITS_PER_CHARACTER: u32 = 6;

/// Declared bit lengths of the fixed-width text columns.
///
/// Each width bounds the longest legal value of its field, so rendered text
/// is never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWidths {
    /// Ship name (message 19), 20 characters
    pub ship_name_bits: u32,
    /// Destination (message 5), 20 characters
    pub destination_bits: u32,
    /// Vessel name (message 5), 20 characters
    pub vessel_name_bits: u32,
    /// Call sign (message 5), 7 characters
    pub call_sign_bits: u32,
}

impl Default for TextWidths {
    fn default() -> Self {
        Self {
            ship_name_bits: 120,
            destination_bits: 120,
            vessel_name_bits: 120,
            call_sign_bits: 42,
        }
    }
}

impl TextWidths {
    /// Declared bit length for a text column, `None` for non-text columns.
    pub fn bits(&self, column: Column) -> Option<u32> {
        match column {
            Column::ShipName => Some(self.ship_name_bits),
            Column::Destination => Some(self.destination_bits),
            Column::VesselName => Some(self.vessel_name_bits),
            Column::CallSign => Some(self.call_sign_bits),
            _ => None,
        }
    }
}

/// Convert a declared text bit length into a byte width.
///
/// Fails unless `bits` is a non-zero multiple of 6.
pub fn text_width_bytes(column: Column, bits: u32) -> Result<usize, SchemaError> {
    if bits == 0 || bits % BITS_PER_CHARACTER != 0 {
        return Err(SchemaError::InvalidTextWidth {
            column: column.name().to_string(),
            bits,
        });
    }
    Ok((bits / BITS_PER_CHARACTER) as usize)
}

/// Validated layout of the export table.
///
/// Constructed once per output stream; shared by the column buffers and the
/// container writer so both agree on column order, types and text widths.
#[derive(Debug, Clone)]
pub struct AisSchema {
    text_bytes: [usize; COLUMN_COUNT],
    arrow: Arc<Schema>,
}

impl AisSchema {
    /// Validate the text widths and build the Arrow schema.
    pub fn new(widths: TextWidths) -> Result<Self, SchemaError> {
        let mut text_bytes = [0usize; COLUMN_COUNT];
        for column in Column::TEXT {
            let bits = widths.bits(column).unwrap_or(0);
            text_bytes[column.index()] = text_width_bytes(column, bits)?;
        }

        let arrow = Arc::new(create_ais_schema(|column| text_bytes[column.index()]));
        Ok(Self { text_bytes, arrow })
    }

    /// Byte width of a text column; zero for scalar columns.
    pub fn text_width(&self, column: Column) -> usize {
        if column.kind() == ColumnKind::FixedText {
            self.text_bytes[column.index()]
        } else {
            0
        }
    }

    /// The Arrow schema handed to the container writer.
    pub fn arrow_schema(&self) -> Arc<Schema> {
        self.arrow.clone()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        COLUMN_COUNT
    }

    /// Always false; the table has a fixed, non-empty column set.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Errors raised while constructing the export schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A text column's bit length cannot hold whole 6-bit characters
    #[error("text column '{column}' declares {bits} bits; AIS stores text at 6 bits per character so the width must be a non-zero multiple of 6")]
    InvalidTextWidth {
        /// Offending column
        column: String,
        /// Declared bit length
        bits: u32,
    },
}
