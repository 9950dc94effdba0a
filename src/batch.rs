//-
// Copyright (c) 2026, Jason Lingle
//
// This file is part of Pstscan.
//
// Pstscan is free software: you can  redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.
//
// Pstscan is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Pstscan. If not, see <http://www.gnu.org/licenses/>.

//! The host-facing row batch.
//!
//! A `RowBatch` is a fixed-width, column-major buffer of `Value`s which a
//! scan worker fills one row at a time and the host engine drains after each
//! call to `emit_rows`. It is reused across calls.

use chrono::prelude::*;

/// A single output cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    SmallInt(i16),
    Integer(i32),
    UInteger(u32),
    BigInt(i64),
    UBigInt(u64),
    Double(f64),
    Timestamp(DateTime<Utc>),
    /// Index into the column's enumeration members.
    Enum(u8),
    Varchar(String),
    Blob(Vec<u8>),
    /// Field values in the order of the struct type's fields.
    Struct(Vec<Value>),
    List(Vec<Value>),
}

#[derive(Clone, Debug)]
pub struct RowBatch {
    columns: Vec<Vec<Value>>,
    capacity: usize,
    len: usize,
}

impl RowBatch {
    /// Create an empty batch of `width` columns holding up to `capacity`
    /// rows. A zero capacity is treated as one.
    pub fn new(width: usize, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            columns: vec![vec![Value::Null; capacity]; width],
            capacity,
            len: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of rows written by the last fill.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// Null out every cell and set the length to zero.
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            for cell in column.iter_mut() {
                *cell = Value::Null;
            }
        }
        self.len = 0;
    }

    pub fn set(&mut self, column: usize, row: usize, value: Value) {
        self.columns[column][row] = value;
    }

    pub fn set_len(&mut self, len: usize) {
        assert!(len <= self.capacity);
        self.len = len;
    }

    pub fn get(&self, column: usize, row: usize) -> &Value {
        &self.columns[column][row]
    }

    /// The first `len()` cells of `column`.
    pub fn column(&self, column: usize) -> &[Value] {
        &self.columns[column][..self.len]
    }

    /// Copy out row `row` across all columns.
    pub fn row(&self, row: usize) -> Vec<Value> {
        assert!(row < self.len);
        self.columns.iter().map(|c| c[row].clone()).collect()
    }
}
