//! Vector value extraction and normalization.
//!
//! A vector column can arrive in several Arrow encodings: a fixed-size list
//! (one array per row, all the same length) or a variable-length list. All
//! of them are normalized through one path into a plain `Vec<Scalar>` before
//! serialization, so the JSON writer only ever sees an ordered sequence of
//! numbers regardless of the on-disk encoding.

use arrow::array::{Array, ArrayRef, FixedSizeListArray, LargeListArray, ListArray, PrimitiveArray};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type,
    Int64Type, UInt8Type, UInt16Type, UInt32Type, UInt64Type,
};
use serde::Serialize;

use crate::error::ConvertError;

/// A single numeric element of a vector.
///
/// Integer element types are widened to `i64` (`u64` keeps its own variant
/// so large values survive). Floats keep their source width: serializing an
/// `f32` as `f32` preserves the shortest round-trip text form of the
/// original data instead of picking up `f64` widening noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Any signed or unsigned integer up to 63 bits.
    Int(i64),
    /// Unsigned 64-bit integer.
    UInt(u64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
}

#[derive(Debug)]
enum ListKind<'a> {
    FixedSize(&'a FixedSizeListArray),
    List(&'a ListArray),
    LargeList(&'a LargeListArray),
}

/// A typed view over the vector column of one record batch.
///
/// Construction checks the column encoding once; per-row access then only
/// walks the row's element array.
#[derive(Debug)]
pub struct VectorColumn<'a> {
    column: &'a str,
    kind: ListKind<'a>,
}

impl<'a> VectorColumn<'a> {
    /// Wraps a column array, rejecting anything that is not a list of a
    /// numeric element type.
    pub fn try_new(column: &'a str, array: &'a dyn Array) -> Result<Self, ConvertError> {
        let unsupported = || ConvertError::UnsupportedColumnType {
            column: column.to_string(),
            data_type: array.data_type().clone(),
        };
        let kind = match array.data_type() {
            DataType::FixedSizeList(field, _) if is_numeric(field.data_type()) => array
                .as_any()
                .downcast_ref::<FixedSizeListArray>()
                .map(ListKind::FixedSize)
                .ok_or_else(unsupported)?,
            DataType::List(field) if is_numeric(field.data_type()) => array
                .as_any()
                .downcast_ref::<ListArray>()
                .map(ListKind::List)
                .ok_or_else(unsupported)?,
            DataType::LargeList(field) if is_numeric(field.data_type()) => array
                .as_any()
                .downcast_ref::<LargeListArray>()
                .map(ListKind::LargeList)
                .ok_or_else(unsupported)?,
            _ => return Err(unsupported()),
        };
        Ok(Self { column, kind })
    }

    /// Normalizes the vector at batch-local index `idx` to a scalar sequence.
    ///
    /// `row` is the absolute input row index, used only for diagnostics.
    pub fn vector(&self, idx: usize, row: usize) -> Result<Vec<Scalar>, ConvertError> {
        let (is_null, elements): (bool, ArrayRef) = match &self.kind {
            ListKind::FixedSize(a) => (a.is_null(idx), a.value(idx)),
            ListKind::List(a) => (a.is_null(idx), a.value(idx)),
            ListKind::LargeList(a) => (a.is_null(idx), a.value(idx)),
        };
        if is_null {
            return Err(ConvertError::NullVector { row });
        }
        self.scalars_from_elements(elements.as_ref(), row)
    }

    /// Converts one row's element array into scalars, rejecting null elements.
    fn scalars_from_elements(
        &self,
        elements: &dyn Array,
        row: usize,
    ) -> Result<Vec<Scalar>, ConvertError> {
        match elements.data_type() {
            DataType::Int8 => self.collect::<Int8Type, _>(elements, row, |v| Scalar::Int(v as i64)),
            DataType::Int16 => self.collect::<Int16Type, _>(elements, row, |v| Scalar::Int(v as i64)),
            DataType::Int32 => self.collect::<Int32Type, _>(elements, row, |v| Scalar::Int(v as i64)),
            DataType::Int64 => self.collect::<Int64Type, _>(elements, row, Scalar::Int),
            DataType::UInt8 => self.collect::<UInt8Type, _>(elements, row, |v| Scalar::Int(v as i64)),
            DataType::UInt16 => {
                self.collect::<UInt16Type, _>(elements, row, |v| Scalar::Int(v as i64))
            }
            DataType::UInt32 => {
                self.collect::<UInt32Type, _>(elements, row, |v| Scalar::Int(v as i64))
            }
            DataType::UInt64 => self.collect::<UInt64Type, _>(elements, row, Scalar::UInt),
            DataType::Float32 => self.collect::<Float32Type, _>(elements, row, Scalar::F32),
            DataType::Float64 => self.collect::<Float64Type, _>(elements, row, Scalar::F64),
            other => Err(ConvertError::UnsupportedColumnType {
                column: self.column.to_string(),
                data_type: other.clone(),
            }),
        }
    }

    fn collect<T, F>(
        &self,
        elements: &dyn Array,
        row: usize,
        to_scalar: F,
    ) -> Result<Vec<Scalar>, ConvertError>
    where
        T: ArrowPrimitiveType,
        F: Fn(T::Native) -> Scalar,
    {
        let Some(array) = elements.as_any().downcast_ref::<PrimitiveArray<T>>() else {
            return Err(ConvertError::UnsupportedColumnType {
                column: self.column.to_string(),
                data_type: elements.data_type().clone(),
            });
        };
        let mut out = Vec::with_capacity(array.len());
        for i in 0..array.len() {
            if array.is_null(i) {
                return Err(ConvertError::NullElement { row, index: i });
            }
            out.push(to_scalar(array.value(i)));
        }
        Ok(out)
    }
}

fn is_numeric(dt: &DataType) -> bool {
    matches!(
        dt,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
