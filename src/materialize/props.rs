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

//! Conversion of stored property values to output values.

use std::io::Read;

use super::text::{decode_best_effort, decode_narrow, decode_wide};
use crate::batch::Value;
use crate::mapi::{PropId, PropType, PropValue, PropertyBag};
use crate::schema::ColumnType;
use crate::support::chronox::from_filetime;
use crate::support::error::Error;

/// Read `tag` from `bag` as a value of type `ty`.
///
/// Absent properties are null. Enumeration values outside the enumeration
/// are null. Anything else that cannot be represented as `ty` is an error.
pub fn from_prop(
    ty: ColumnType,
    bag: &dyn PropertyBag,
    tag: PropId,
) -> Result<Value, Error> {
    match bag.read_prop(tag)? {
        None => Ok(Value::Null),
        Some(raw) => convert(ty, tag, raw),
    }
}

/// Convert an already-read property value to type `ty`.
pub fn convert(
    ty: ColumnType,
    tag: PropId,
    raw: PropValue,
) -> Result<Value, Error> {
    let mismatch = |raw: &PropValue| Error::TypeMismatch {
        tag,
        actual: raw.prop_type(),
        target: ty.to_string(),
    };

    match ty {
        ColumnType::Enum(e) => {
            let raw = raw.as_integer().ok_or_else(|| mismatch(&raw))?;
            Ok(e.index_of(raw).map_or(Value::Null, Value::Enum))
        },

        ColumnType::TimestampSec => match raw {
            PropValue::Time(ticks) => Ok(timestamp(ticks)),
            PropValue::Int64(ticks) if ticks >= 0 => {
                Ok(timestamp(ticks as u64))
            },
            raw => Err(mismatch(&raw)),
        },

        ColumnType::Boolean => match raw {
            PropValue::Boolean(b) => Ok(Value::Boolean(b)),
            ref raw => raw
                .as_integer()
                .map(|v| Value::Boolean(0 != v))
                .ok_or_else(|| mismatch(raw)),
        },

        ColumnType::SmallInt => {
            integer(&raw, "SMALLINT", mismatch).map(Value::SmallInt)
        },
        ColumnType::Integer => {
            integer(&raw, "INTEGER", mismatch).map(Value::Integer)
        },
        ColumnType::UInteger => {
            integer(&raw, "UINTEGER", mismatch).map(Value::UInteger)
        },
        ColumnType::BigInt => {
            integer(&raw, "BIGINT", mismatch).map(Value::BigInt)
        },
        ColumnType::UBigInt => {
            integer(&raw, "UBIGINT", mismatch).map(Value::UBigInt)
        },

        ColumnType::Double => match raw {
            PropValue::Float64(v) => Ok(Value::Double(v)),
            ref raw => raw
                .as_integer()
                .map(|v| Value::Double(v as f64))
                .ok_or_else(|| mismatch(raw)),
        },

        ColumnType::Varchar => match raw {
            PropValue::Unicode(s) => {
                Ok(Value::Varchar(s.trim_end_matches('\0').to_owned()))
            },
            PropValue::String8(b) => Ok(Value::Varchar(decode_narrow(&b))),
            // Some writers store text as binary
            PropValue::Binary(b) => {
                Ok(Value::Varchar(decode_best_effort(&b)))
            },
            raw => Err(mismatch(&raw)),
        },

        ColumnType::Blob => match raw {
            PropValue::Binary(b) | PropValue::String8(b) => Ok(Value::Blob(b)),
            raw => Err(mismatch(&raw)),
        },

        ColumnType::Struct(..) | ColumnType::List(..) => Err(mismatch(&raw)),
    }
}

fn timestamp(ticks: u64) -> Value {
    from_filetime(ticks).map_or(Value::Null, Value::Timestamp)
}

fn integer<T: TryFrom<i64>>(
    raw: &PropValue,
    target: &'static str,
    mismatch: impl Fn(&PropValue) -> Error,
) -> Result<T, Error> {
    let v = raw.as_integer().ok_or_else(|| mismatch(raw))?;
    T::try_from(v).map_err(|_| Error::OutOfRange { value: v, target })
}

/// The number of bytes to read from a body of `true_size` bytes given the
/// configured budget, where a budget of 0 means no limit.
///
/// The result is always even, so wide text is never split mid-code-unit by
/// the budget itself.
pub fn body_read_size(configured: u64, true_size: u64) -> u64 {
    let size = if 0 == configured {
        true_size
    } else {
        configured.min(true_size)
    };
    size + (size & 1)
}

/// Read at most `read_size` bytes of the text property `tag` through a
/// stream and decode them according to the property's stored type.
///
/// HTML bodies are often declared binary, so binary text is decoded by
/// guessing.
pub fn from_prop_stream(
    ty: ColumnType,
    bag: &dyn PropertyBag,
    tag: PropId,
    read_size: u64,
) -> Result<Value, Error> {
    let prop_type = match bag.prop_type(tag) {
        None => return Ok(Value::Null),
        Some(t) => t,
    };

    let mut buf = Vec::with_capacity(read_size.min(1 << 20) as usize);
    bag.open_prop_stream(tag)?
        .take(read_size)
        .read_to_end(&mut buf)?;

    match ty {
        ColumnType::Blob => Ok(Value::Blob(buf)),
        ColumnType::Varchar => Ok(Value::Varchar(match prop_type {
            PropType::Unicode => decode_wide(&buf),
            PropType::String8 => decode_narrow(&buf),
            _ => decode_best_effort(&buf),
        })),
        _ => Err(Error::TypeMismatch {
            tag,
            actual: prop_type,
            target: ty.to_string(),
        }),
    }
}
