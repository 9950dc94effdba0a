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

//! The mailbox access facade.
//!
//! Everything the scanner knows about PST files goes through the traits in
//! this module. The on-disk format itself (B-trees, heap-on-node, property
//! contexts, block encryption) is the business of whatever implements
//! `MailboxOpener`; the scanner only needs property bags addressed by 16-bit
//! property ids, node enumeration, and named-property resolution.

use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::support::error::Error;

pub mod entry_id;
pub mod named;
pub mod tags;

pub use named::NamedProp;

/// A file-local node identifier.
pub type NodeId = u32;
/// A 16-bit MAPI property identifier, without the type half of the tag.
pub type PropId = u16;

/// A GUID in its on-disk (mixed-endian) byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid(pub [u8; 16]);

impl Guid {
    /// Build a GUID from its canonical text fields.
    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        let a = d1.to_le_bytes();
        let b = d2.to_le_bytes();
        let c = d3.to_le_bytes();
        Guid([
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d4[0], d4[1],
            d4[2], d4[3], d4[4], d4[5], d4[6], d4[7],
        ])
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let g = &self.0;
        write!(
            f,
            "{{{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-\
             {:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            g[3], g[2], g[1], g[0], g[5], g[4], g[7], g[6], g[8], g[9], g[10],
            g[11], g[12], g[13], g[14], g[15],
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The stored type of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropType {
    Int16,
    Int32,
    Int64,
    Float64,
    Boolean,
    /// FILETIME: 100 ns ticks since 1601-01-01 UTC.
    Time,
    /// 8-bit text in an unspecified code page.
    String8,
    /// UTF-16LE text.
    Unicode,
    Binary,
    MultiBinary,
    /// Anything the scanner does not decode.
    Other(u16),
}

/// A decoded property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Boolean(bool),
    Time(u64),
    String8(Vec<u8>),
    Unicode(String),
    Binary(Vec<u8>),
    MultiBinary(Vec<Vec<u8>>),
}

impl PropValue {
    pub fn prop_type(&self) -> PropType {
        match *self {
            PropValue::Int16(..) => PropType::Int16,
            PropValue::Int32(..) => PropType::Int32,
            PropValue::Int64(..) => PropType::Int64,
            PropValue::Float64(..) => PropType::Float64,
            PropValue::Boolean(..) => PropType::Boolean,
            PropValue::Time(..) => PropType::Time,
            PropValue::String8(..) => PropType::String8,
            PropValue::Unicode(..) => PropType::Unicode,
            PropValue::Binary(..) => PropType::Binary,
            PropValue::MultiBinary(..) => PropType::MultiBinary,
        }
    }

    /// The value as a signed integer, if it is of an integral type.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            PropValue::Int16(v) => Some(v.into()),
            PropValue::Int32(v) => Some(v.into()),
            PropValue::Int64(v) => Some(v),
            PropValue::Boolean(v) => Some(v.into()),
            _ => None,
        }
    }
}

/// A set of properties belonging to a node, recipient row, attachment, or
/// the message store itself.
pub trait PropertyBag {
    /// The stored type of `id`, or `None` if the property is absent.
    fn prop_type(&self, id: PropId) -> Option<PropType>;

    /// Read and decode `id`, returning `None` if it is absent.
    fn read_prop(&self, id: PropId) -> Result<Option<PropValue>, Error>;

    /// The stored size of `id` in bytes.
    fn prop_size(&self, id: PropId) -> Result<u64, Error>;

    /// Open a byte stream over the raw stored form of `id`.
    fn open_prop_stream(&self, id: PropId)
        -> Result<Box<dyn Read + '_>, Error>;

    fn has_prop(&self, id: PropId) -> bool {
        self.prop_type(id).is_some()
    }
}

/// Rows of a node's recipient table or attachment list.
///
/// Each element fails independently, so one corrupt row does not hide the
/// others.
pub type SubObjects = Vec<Result<Box<dyn PropertyBag>, Error>>;

/// A folder or message node opened from an archive.
pub trait MailboxNode {
    fn id(&self) -> NodeId;
    fn parent_id(&self) -> NodeId;
    fn props(&self) -> &dyn PropertyBag;
    fn subfolder_count(&self) -> Result<u32, Error>;
    fn recipients(&self) -> Result<SubObjects, Error>;
    fn attachments(&self) -> Result<SubObjects, Error>;
}

/// What part of an archive a node enumeration covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every node in the file.
    File,
    /// Only the direct children of one folder.
    Folder(NodeId),
}

/// A lazy enumeration of node ids.
pub type NodeIter<'a> = Box<dyn Iterator<Item = Result<NodeId, Error>> + 'a>;

/// An open archive file.
pub trait MailboxFile: Send {
    fn path(&self) -> &Path;

    /// The message store's own properties.
    fn store_props(&self) -> &dyn PropertyBag;

    fn folder_nodes(&self, scope: Scope) -> Result<NodeIter<'_>, Error>;
    fn message_nodes(&self, scope: Scope) -> Result<NodeIter<'_>, Error>;
    fn open_node(&self, id: NodeId) -> Result<Box<dyn MailboxNode>, Error>;

    /// Resolve a named property to the property id it was assigned in this
    /// file, if any.
    fn lookup_named_prop(
        &self,
        set: &Guid,
        id: u32,
    ) -> Result<Option<PropId>, Error>;
}

/// Opens archive files by path.
pub trait MailboxOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn MailboxFile>, Error>;
}
