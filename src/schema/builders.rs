use std::collections::HashMap;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

use super::columns::{Column, ColumnKind};
use super::constants::{AIS_FORMAT_VERSION, KEY_FORMAT_VERSION, KEY_SCHEMA_DESCRIPTION};

/// Creates a Field annotated with a unit or encoding hint
fn field_with_unit(name: &str, data_type: DataType, nullable: bool, unit: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert("unit".to_string(), unit.to_string());
    Field::new(name, data_type, nullable).with_metadata(metadata)
}

/// Arrow data type and nullability for one column.
///
/// Text columns are the only non-null columns: an absent value is stored as
/// all-zero bytes rather than a null.
fn column_field(column: Column, text_width: usize) -> Field {
    match column.kind() {
        ColumnKind::Int32 => Field::new(column.name(), DataType::Int32, true),
        ColumnKind::Timestamp => {
            field_with_unit(column.name(), DataType::Int64, true, "unix_seconds")
        }
        ColumnKind::Boolean => Field::new(column.name(), DataType::Boolean, true),
        ColumnKind::FixedText => field_with_unit(
            column.name(),
            DataType::FixedSizeBinary(text_width as i32),
            false,
            "ascii_zero_padded",
        ),
    }
}

/// Creates the AIS export Arrow schema.
///
/// The schema is the union of all fields of the supported message kinds in a
/// single flat table. `text_width` supplies the byte width of each text column.
///
/// # Example
///
/// ```
/// use aisparq::schema::{create_ais_schema, Column};
///
/// let schema = create_ais_schema(|column| if column == Column::CallSign { 7 } else { 20 });
/// assert_eq!(schema.fields().len(), 49);
/// ```
pub fn create_ais_schema(text_width: impl Fn(Column) -> usize) -> Schema {
    let mut builder = SchemaBuilder::new();

    for column in Column::ALL {
        builder.push(column_field(column, text_width(column)));
    }

    let mut metadata = HashMap::new();
    metadata.insert(KEY_FORMAT_VERSION.to_string(), AIS_FORMAT_VERSION.to_string());
    metadata.insert(
        KEY_SCHEMA_DESCRIPTION.to_string(),
        "Flat AIS position and voyage reports (message types 1, 2, 3, 5, 18, 19)".to_string(),
    );

    builder.finish().with_metadata(metadata)
}
