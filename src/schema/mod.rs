//! # AIS Export Schema
//!
//! This module defines the single wide table that every supported AIS message
//! kind is written into.
//!
//! ## Design Rationale
//!
//! Position reports (types 1, 2, 3, 18), static and voyage data (type 5) and
//! extended class B reports (type 19) populate different subsets of fields. A
//! single nullable schema holding their union lets the storage layer stay
//! ignorant of message kinds: every row has every column, and the columns a
//! kind does not carry are null.
//!
//! ## Column Types
//!
//! | Kind | Arrow type | Nullable | Absent value |
//! |------|------------|----------|--------------|
//! | integer | Int32 | yes | null |
//! | timestamp | Int64 (Unix seconds) | yes | null |
//! | flag | Boolean | yes | null |
//! | text | FixedSizeBinary(bits / 6) | no | all-zero bytes |
//!
//! Column order and names are a compatibility contract with downstream
//! readers; see [`Column::ALL`].

mod builders;
/// Column identifiers and kinds.
pub mod columns;
mod constants;
mod layout;
mod validation;


pub use builders::create_ais_schema;
pub use columns::{Column, ColumnKind, COLUMN_COUNT};
pub use constants::*;
pub use layout::{text_width_bytes, AisSchema, SchemaError, TextWidths, BITS_PER_CHARACTER};
pub use validation::{validate_schema, SchemaValidationError};
