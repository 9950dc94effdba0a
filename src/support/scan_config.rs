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

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::Error;
use crate::batch::Value;

/// Rows emitted per output batch by the host engine.
pub const STANDARD_VECTOR_SIZE: usize = 2048;
/// Default number of nodes per partition.
pub const DEFAULT_PARTITION_SIZE: u64 = 2 * STANDARD_VECTOR_SIZE as u64;
/// Default number of body bytes read per message.
pub const DEFAULT_BODY_SIZE_BYTES: u64 = 1_000_000;

/// Options controlling a single scan.
///
/// These arrive either as named parameters on the read function or from a
/// TOML file, in which case the keys are the same as the parameter names.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// The number of nodes in each partition.
    ///
    /// Zero is treated as one.
    pub partition_size: u64,

    /// How many bytes of each message body to read.
    ///
    /// Zero means the whole body is read, however large.
    #[serde(alias = "max_body_size_bytes")]
    pub read_body_size_bytes: u64,

    /// If true, attachment payloads are read into the `bytes` field of each
    /// attachment. Otherwise that field is null.
    pub read_attachment_body: bool,

    /// If set, stop planning once this many rows have been found across all
    /// files.
    pub read_limit: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            partition_size: DEFAULT_PARTITION_SIZE,
            read_body_size_bytes: DEFAULT_BODY_SIZE_BYTES,
            read_attachment_body: false,
            read_limit: None,
        }
    }
}

impl ScanConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Build a configuration from the named parameters of a read function.
    ///
    /// Unknown names and values of the wrong type are rejected.
    pub fn from_named(named: &BTreeMap<String, Value>) -> Result<Self, Error> {
        let mut config = Self::default();
        for (name, value) in named {
            match name.as_str() {
                "partition_size" => {
                    config.partition_size = unsigned(name, value)?;
                },
                "read_body_size_bytes" | "max_body_size_bytes" => {
                    config.read_body_size_bytes = unsigned(name, value)?;
                },
                "read_attachment_body" => match *value {
                    Value::Boolean(b) => config.read_attachment_body = b,
                    _ => {
                        return Err(Error::BadOptionType {
                            name: name.clone(),
                            expected: "a boolean",
                        })
                    },
                },
                "read_limit" => {
                    config.read_limit = Some(unsigned(name, value)?);
                },
                _ => return Err(Error::UnknownOption(name.clone())),
            }
        }

        Ok(config)
    }

    /// The effective partition size, never less than one.
    pub fn effective_partition_size(&self) -> usize {
        self.partition_size.max(1) as usize
    }
}

fn unsigned(name: &str, value: &Value) -> Result<u64, Error> {
    let v = match *value {
        Value::UBigInt(v) => Some(v),
        Value::UInteger(v) => Some(v.into()),
        Value::BigInt(v) => u64::try_from(v).ok(),
        Value::Integer(v) => u64::try_from(v).ok(),
        _ => None,
    };

    v.ok_or_else(|| Error::BadOptionType {
        name: name.to_owned(),
        expected: "a non-negative integer",
    })
}
