use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, FixedSizeBinaryArray, Int32Array, Int64Array};
use arrow::buffer::{BooleanBuffer, Buffer, NullBuffer, ScalarBuffer};
use arrow::record_batch::RecordBatch;

use crate::schema::{AisSchema, Column, ColumnKind};

use super::error::ExportError;

/// One scalar cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// Value for an `Int32` column
    Int32(i32),
    /// Value for the timestamp column
    Timestamp(i64),
    /// Value for a `Boolean` column
    Boolean(bool),
}

impl Scalar {
    fn kind(&self) -> ColumnKind {
        match self {
            Scalar::Int32(_) => ColumnKind::Int32,
            Scalar::Timestamp(_) => ColumnKind::Timestamp,
            Scalar::Boolean(_) => ColumnKind::Boolean,
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int32(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

/// Storage for one column, allocated at full capacity.
#[derive(Debug)]
enum ColumnBuffer {
    Int32 { values: Vec<i32>, validity: Vec<bool> },
    Int64 { values: Vec<i64>, validity: Vec<bool> },
    Boolean { values: Vec<bool>, validity: Vec<bool> },
    FixedText { width: usize, bytes: Vec<u8> },
}

impl ColumnBuffer {
    fn new(kind: ColumnKind, width: usize, capacity: usize) -> Self {
        match kind {
            ColumnKind::Int32 => ColumnBuffer::Int32 {
                values: vec![0; capacity],
                validity: vec![false; capacity],
            },
            ColumnKind::Timestamp => ColumnBuffer::Int64 {
                values: vec![0; capacity],
                validity: vec![false; capacity],
            },
            ColumnKind::Boolean => ColumnBuffer::Boolean {
                values: vec![false; capacity],
                validity: vec![false; capacity],
            },
            ColumnKind::FixedText => ColumnBuffer::FixedText {
                width,
                bytes: vec![0; width * capacity],
            },
        }
    }

    fn clear(&mut self, row: usize) {
        match self {
            ColumnBuffer::Int32 { validity, .. }
            | ColumnBuffer::Int64 { validity, .. }
            | ColumnBuffer::Boolean { validity, .. } => validity[row] = false,
            ColumnBuffer::FixedText { width, bytes } => {
                bytes[row * *width..(row + 1) * *width].fill(0)
            }
        }
    }

    fn to_array(&self, len: usize) -> Result<ArrayRef, ExportError> {
        let array: ArrayRef = match self {
            ColumnBuffer::Int32 { values, validity } => Arc::new(Int32Array::new(
                ScalarBuffer::from(values[..len].to_vec()),
                create_null_buffer(&validity[..len]),
            )),
            ColumnBuffer::Int64 { values, validity } => Arc::new(Int64Array::new(
                ScalarBuffer::from(values[..len].to_vec()),
                create_null_buffer(&validity[..len]),
            )),
            ColumnBuffer::Boolean { values, validity } => Arc::new(BooleanArray::new(
                BooleanBuffer::from(&values[..len]),
                create_null_buffer(&validity[..len]),
            )),
            ColumnBuffer::FixedText { width, bytes } => Arc::new(FixedSizeBinaryArray::try_new(
                *width as i32,
                Buffer::from_slice_ref(&bytes[..len * *width]),
                None,
            )?),
        };
        Ok(array)
    }
}

/// Create a validity bitmap, or `None` when every value is present.
fn create_null_buffer(validity: &[bool]) -> Option<NullBuffer> {
    if validity.iter().all(|&v| v) {
        return None;
    }
    Some(NullBuffer::from(validity))
}

/// Column-major storage for one row group.
///
/// Every column is allocated once at `capacity` rows and reused across row
/// groups. The logical length is `capacity` until [`truncate`](Self::truncate)
/// shortens it for the final partial group; [`to_record_batch`](Self::to_record_batch)
/// only reads the logical length, so nothing is reallocated.
#[derive(Debug)]
pub struct ColumnBufferSet {
    schema: Arc<AisSchema>,
    columns: Vec<ColumnBuffer>,
    capacity: usize,
    len: usize,
}

impl ColumnBufferSet {
    /// Allocate buffers for `capacity` rows of `schema`.
    pub fn new(schema: Arc<AisSchema>, capacity: usize) -> Result<Self, ExportError> {
        if capacity == 0 {
            return Err(ExportError::InvalidConfig(
                "row group capacity must be at least 1".to_string(),
            ));
        }
        let columns = Column::ALL
            .iter()
            .map(|&column| ColumnBuffer::new(column.kind(), schema.text_width(column), capacity))
            .collect();
        Ok(Self {
            schema,
            columns,
            capacity,
            len: capacity,
        })
    }

    /// Schema the buffers were built for.
    pub fn schema(&self) -> &Arc<AisSchema> {
        &self.schema
    }

    /// Rows allocated per column.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Logical length read by [`to_record_batch`](Self::to_record_batch).
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check_row(&self, row: usize) -> Result<(), ExportError> {
        if row >= self.capacity {
            return Err(ExportError::RowOutOfRange {
                row,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Store a scalar value.
    pub fn set(&mut self, row: usize, column: Column, value: Scalar) -> Result<(), ExportError> {
        self.check_row(row)?;
        match (&mut self.columns[column.index()], value) {
            (ColumnBuffer::Int32 { values, validity }, Scalar::Int32(v)) => {
                values[row] = v;
                validity[row] = true;
            }
            (ColumnBuffer::Int64 { values, validity }, Scalar::Timestamp(v)) => {
                values[row] = v;
                validity[row] = true;
            }
            (ColumnBuffer::Boolean { values, validity }, Scalar::Boolean(v)) => {
                values[row] = v;
                validity[row] = true;
            }
            _ => {
                return Err(ExportError::ColumnTypeMismatch {
                    column: column.name().to_string(),
                    expected: format!("{:?}", column.kind()),
                    found: format!("{:?}", value.kind()),
                })
            }
        }
        Ok(())
    }

    /// The fixed-width slot of a text column at `row`.
    pub fn text_buffer(&mut self, row: usize, column: Column) -> Result<&mut [u8], ExportError> {
        self.check_row(row)?;
        match &mut self.columns[column.index()] {
            ColumnBuffer::FixedText { width, bytes } => {
                let width = *width;
                Ok(&mut bytes[row * width..(row + 1) * width])
            }
            _ => Err(ExportError::ColumnTypeMismatch {
                column: column.name().to_string(),
                expected: format!("{:?}", column.kind()),
                found: format!("{:?}", ColumnKind::FixedText),
            }),
        }
    }

    /// Null every scalar and zero every text slot at `row`.
    pub fn clear_row(&mut self, row: usize) -> Result<(), ExportError> {
        self.check_row(row)?;
        for column in &mut self.columns {
            column.clear(row);
        }
        Ok(())
    }

    /// Shrink the logical length for the final partial row group.
    pub fn truncate(&mut self, len: usize) {
        self.len = len.min(self.capacity);
    }

    /// Restore the logical length to full capacity.
    pub fn reset(&mut self) {
        self.len = self.capacity;
    }

    /// Snapshot the first [`len`](Self::len) rows as a record batch.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ExportError> {
        let arrays = self
            .columns
            .iter()
            .map(|column| column.to_array(self.len))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordBatch::try_new(self.schema.arrow_schema(), arrays)?)
    }
}
