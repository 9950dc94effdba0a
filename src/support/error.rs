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

use std::io;

use thiserror::Error;

use crate::mapi::{Guid, NodeId, PropId, PropType};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown read function: {0}")]
    UnknownReadFunction(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Option {name} expects {expected}")]
    BadOptionType { name: String, expected: &'static str },
    #[error("Column index {0} is out of range")]
    UnknownColumn(usize),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),
    #[error("Node could not be opened")]
    NodeUnavailable,
    #[error(
        "Property 0x{tag:04X} of type {actual:?} cannot be read as {target}"
    )]
    TypeMismatch {
        tag: PropId,
        actual: PropType,
        target: String,
    },
    #[error("Value {value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },
    #[error("Named property {0} is not mapped in this archive")]
    UnmappedNamedProp(&'static str),
    #[error("Column {column} does not apply to {entity}")]
    WrongEntity {
        column: &'static str,
        entity: &'static str,
    },
    #[error("Entry ID truncated ({0} bytes)")]
    TruncatedEntryId(usize),
    #[error("Unknown entry ID provider {0}")]
    UnknownEntryIdProvider(Guid),
    #[error("Unsupported entry ID type 0x{0:02X}")]
    UnsupportedEntryType(u8),
    #[error("Logging setup failed: {0}")]
    Logging(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error must abort the whole scan instead of degrading a
    /// single column or node to null.
    pub fn is_fatal(&self) -> bool {
        matches!(
            *self,
            Error::UnknownReadFunction(..)
                | Error::UnknownOption(..)
                | Error::BadOptionType { .. }
                | Error::UnknownColumn(..)
                | Error::UnknownEntryIdProvider(..)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_configuration_and_provider_errors_are_fatal() {
        assert!(Error::UnknownOption("x".to_owned()).is_fatal());
        assert!(Error::UnknownEntryIdProvider(Guid([0; 16])).is_fatal());
        assert!(!Error::TruncatedEntryId(3).is_fatal());
        assert!(!Error::NodeUnavailable.is_fatal());
        assert!(
            !Error::Io(io::Error::new(io::ErrorKind::Other, "x")).is_fatal()
        );
    }
}
