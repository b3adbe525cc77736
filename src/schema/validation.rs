use arrow::datatypes::{DataType, Schema};

use super::columns::{Column, ColumnKind, COLUMN_COUNT};

/// Validates that a schema read back from a file matches the AIS export layout.
///
/// Checks column count, order, names, types and nullability. Text columns may
/// use any non-zero fixed width, since widths are configurable at export time.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaValidationError> {
    let fields = schema.fields();
    for (position, column) in Column::ALL.iter().enumerate() {
        let field = match fields.get(position) {
            Some(field) => field,
            None => return Err(SchemaValidationError::MissingColumn(column.name().to_string())),
        };

        if field.name() != column.name() {
            return Err(SchemaValidationError::OrderMismatch {
                position,
                expected: column.name().to_string(),
                found: field.name().clone(),
            });
        }

        let type_ok = match column.kind() {
            ColumnKind::Int32 => field.data_type() == &DataType::Int32,
            ColumnKind::Timestamp => field.data_type() == &DataType::Int64,
            ColumnKind::Boolean => field.data_type() == &DataType::Boolean,
            ColumnKind::FixedText => matches!(field.data_type(), DataType::FixedSizeBinary(w) if *w > 0),
        };
        if !type_ok {
            return Err(SchemaValidationError::TypeMismatch {
                column: column.name().to_string(),
                expected: format!("{:?}", column.kind()),
                found: format!("{:?}", field.data_type()),
            });
        }

        // Text columns are never null; everything else must accept nulls
        let expected_nullable = column.kind() != ColumnKind::FixedText;
        if field.is_nullable() != expected_nullable {
            return Err(SchemaValidationError::NullabilityMismatch {
                column: column.name().to_string(),
                expected_nullable,
            });
        }
    }

    if fields.len() != COLUMN_COUNT {
        return Err(SchemaValidationError::UnexpectedColumns {
            expected: COLUMN_COUNT,
            found: fields.len(),
        });
    }

    Ok(())
}

/// Errors that can occur during schema validation
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// A required column is missing from the schema
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A column appears at the wrong position
    #[error("Column {position} should be '{expected}', found '{found}'")]
    OrderMismatch {
        /// Zero-based position
        position: usize,
        /// Expected column name
        expected: String,
        /// Column name found at that position
        found: String,
    },

    /// A column has an incorrect data type
    #[error("Type mismatch for column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the column with the type mismatch
        column: String,
        /// Expected column kind
        expected: String,
        /// Actual data type found
        found: String,
    },

    /// A column has the wrong nullability
    #[error("Nullability mismatch for column '{column}': expected nullable={expected_nullable}")]
    NullabilityMismatch {
        /// Name of the column
        column: String,
        /// Whether the column should be nullable
        expected_nullable: bool,
    },

    /// The schema carries extra trailing columns
    #[error("Expected {expected} columns, found {found}")]
    UnexpectedColumns {
        /// Expected column count
        expected: usize,
        /// Actual column count
        found: usize,
    },
}
