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

//! The schema registry: the named, typed output columns of each read mode.
//!
//! Columns are never addressed by position. Every column carries a
//! `ColumnKey` naming the entity-specific enumeration member it came from, so
//! the materialiser can match on keys and the column order can change freely.

use std::fmt;

use lazy_static::lazy_static;

use crate::mapi::{tags, PropValue, PropertyBag};
use crate::materialize::text::decode_narrow;
use crate::support::error::Error;

#[macro_use]
mod macros;
pub mod columns;
pub mod enums;

pub use columns::*;

/// A closed, ordered set of string members.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumType {
    pub name: &'static str,
    pub members: &'static [&'static str],
    /// Added to a raw stored value to get a member index.
    pub offset: i64,
}

impl EnumType {
    /// Map a raw stored value to a member index, or `None` if it is out of
    /// range.
    pub fn index_of(&self, raw: i64) -> Option<u8> {
        let ix = raw.checked_add(self.offset)?;
        if ix >= 0 && (ix as usize) < self.members.len() {
            Some(ix as u8)
        } else {
            None
        }
    }
}

/// A field of a struct column type.
#[derive(Debug, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: ColumnType,
}

/// The logical type of an output column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnType {
    Boolean,
    SmallInt,
    Integer,
    UInteger,
    BigInt,
    UBigInt,
    Double,
    /// A UTC timestamp with one-second precision.
    TimestampSec,
    Varchar,
    Blob,
    Enum(&'static EnumType),
    Struct(&'static [FieldDef]),
    List(&'static ColumnType),
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::SmallInt => write!(f, "SMALLINT"),
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::UInteger => write!(f, "UINTEGER"),
            ColumnType::BigInt => write!(f, "BIGINT"),
            ColumnType::UBigInt => write!(f, "UBIGINT"),
            ColumnType::Double => write!(f, "DOUBLE"),
            ColumnType::TimestampSec => write!(f, "TIMESTAMP_S"),
            ColumnType::Varchar => write!(f, "VARCHAR"),
            ColumnType::Blob => write!(f, "BLOB"),
            ColumnType::Enum(e) => {
                write!(f, "ENUM(")?;
                for (ix, member) in e.members.iter().enumerate() {
                    if ix > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{member}'")?;
                }
                write!(f, ")")
            },
            ColumnType::Struct(fields) => {
                write!(f, "STRUCT(")?;
                for (ix, field) in fields.iter().enumerate() {
                    if ix > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                write!(f, ")")
            },
            ColumnType::List(inner) => write!(f, "{inner}[]"),
        }
    }
}

/// Where the value of a column or struct field comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropSource {
    /// A fixed property id.
    Tag(u16),
    /// A named property, resolved per file.
    Named(crate::mapi::NamedProp),
    /// A fixed text property read through a byte-budgeted stream.
    Stream(u16),
    /// Computed by entity-specific code.
    Derived,
}

/// Identifies the entity-specific enumeration member behind a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    File(FileColumn),
    Node(NodeColumn),
    Common(CommonColumn),
    Folder(FolderColumn),
    Message(MessageColumn),
    Contact(ContactColumn),
    Appointment(AppointmentColumn),
    StickyNote(StickyNoteColumn),
    Task(TaskColumn),
    DistList(DistListColumn),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub key: ColumnKey,
}

/// The kind of message a message node is, from its message class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageClass {
    Note,
    Appointment,
    Contact,
    StickyNote,
    Task,
    DistList,
}

impl MessageClass {
    pub const ALL: &'static [MessageClass] = &[
        MessageClass::Note,
        MessageClass::Appointment,
        MessageClass::Contact,
        MessageClass::StickyNote,
        MessageClass::Task,
        MessageClass::DistList,
    ];

    pub fn ipm_class(self) -> &'static str {
        match self {
            MessageClass::Note => "IPM.Note",
            MessageClass::Appointment => "IPM.Appointment",
            MessageClass::Contact => "IPM.Contact",
            MessageClass::StickyNote => "IPM.StickyNote",
            MessageClass::Task => "IPM.Task",
            MessageClass::DistList => "IPM.DistList",
        }
    }

    /// Classify a message class string.
    ///
    /// Matching is case-insensitive and accepts subclasses, so
    /// `IPM.Note.SMIME` is a note and `ipm.contact` is a contact. Anything
    /// unrecognised is treated as a plain note.
    pub fn classify(class: &str) -> Self {
        let class = class.trim_end_matches('\0');
        Self::ALL
            .iter()
            .copied()
            .find(|c| {
                let base = c.ipm_class().as_bytes();
                let class = class.as_bytes();
                class.len() >= base.len()
                    && class[..base.len()].eq_ignore_ascii_case(base)
                    && (class.len() == base.len()
                        || b'.' == class[base.len()])
            })
            .unwrap_or(MessageClass::Note)
    }

    /// Read and classify the message class of a message's property bag.
    pub fn of(props: &dyn PropertyBag) -> Result<Self, Error> {
        Ok(match props.read_prop(tags::MESSAGE_CLASS)? {
            Some(PropValue::Unicode(s)) => Self::classify(&s),
            Some(PropValue::String8(s)) => Self::classify(&decode_narrow(&s)),
            _ => MessageClass::Note,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            MessageClass::Note => "note",
            MessageClass::Appointment => "appointment",
            MessageClass::Contact => "contact",
            MessageClass::StickyNote => "sticky note",
            MessageClass::Task => "task",
            MessageClass::DistList => "distribution list",
        }
    }
}

/// What a scan reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadMode {
    Folders,
    /// Every message, whatever its class, with the generic message columns.
    Messages,
    /// Only messages of one class, with that class's columns.
    Class(MessageClass),
}

impl ReadMode {
    pub const ALL: &'static [ReadMode] = &[
        ReadMode::Folders,
        ReadMode::Messages,
        ReadMode::Class(MessageClass::Note),
        ReadMode::Class(MessageClass::Contact),
        ReadMode::Class(MessageClass::Appointment),
        ReadMode::Class(MessageClass::StickyNote),
        ReadMode::Class(MessageClass::Task),
        ReadMode::Class(MessageClass::DistList),
    ];

    pub fn function_name(self) -> &'static str {
        match self {
            ReadMode::Folders => "read_pst_folders",
            ReadMode::Messages => "read_pst_messages",
            ReadMode::Class(MessageClass::Note) => "read_pst_notes",
            ReadMode::Class(MessageClass::Contact) => "read_pst_contacts",
            ReadMode::Class(MessageClass::Appointment) => {
                "read_pst_appointments"
            },
            ReadMode::Class(MessageClass::StickyNote) => {
                "read_pst_sticky_notes"
            },
            ReadMode::Class(MessageClass::Task) => "read_pst_tasks",
            ReadMode::Class(MessageClass::DistList) => {
                "read_pst_distribution_lists"
            },
        }
    }

    pub fn from_function_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.function_name() == name)
            .ok_or_else(|| Error::UnknownReadFunction(name.to_owned()))
    }

    /// Whether this mode enumerates folder nodes rather than message nodes.
    pub fn reads_folders(self) -> bool {
        ReadMode::Folders == self
    }

    /// Whether a message of class `class` belongs in this mode's output.
    pub fn accepts(self, class: MessageClass) -> bool {
        match self {
            ReadMode::Folders => false,
            ReadMode::Messages => true,
            ReadMode::Class(c) => c == class,
        }
    }

    /// The full output schema of this mode.
    pub fn schema(self) -> &'static [ColumnDef] {
        match self {
            ReadMode::Folders => &FOLDER_SCHEMA,
            ReadMode::Messages | ReadMode::Class(MessageClass::Note) => {
                &MESSAGE_SCHEMA
            },
            ReadMode::Class(MessageClass::Contact) => &CONTACT_SCHEMA,
            ReadMode::Class(MessageClass::Appointment) => &APPOINTMENT_SCHEMA,
            ReadMode::Class(MessageClass::StickyNote) => &STICKY_NOTE_SCHEMA,
            ReadMode::Class(MessageClass::Task) => &TASK_SCHEMA,
            ReadMode::Class(MessageClass::DistList) => &DIST_LIST_SCHEMA,
        }
    }
}

fn build_schema(
    variant: impl IntoIterator<Item = ColumnDef>,
    folder: bool,
) -> Vec<ColumnDef> {
    let mut schema = Vec::new();
    schema.extend(FileColumn::ALL.iter().map(|c| c.def()));
    schema.extend(NodeColumn::ALL.iter().map(|c| c.def()));
    schema.extend(CommonColumn::ALL.iter().map(|c| c.def()));
    if folder {
        schema.extend(FolderColumn::ALL.iter().map(|c| c.def()));
    } else {
        schema.extend(MessageColumn::ALL.iter().map(|c| c.def()));
    }
    schema.extend(variant);
    schema
}

lazy_static! {
    static ref FOLDER_SCHEMA: Vec<ColumnDef> =
        build_schema(std::iter::empty(), true);
    static ref MESSAGE_SCHEMA: Vec<ColumnDef> =
        build_schema(std::iter::empty(), false);
    static ref CONTACT_SCHEMA: Vec<ColumnDef> =
        build_schema(ContactColumn::ALL.iter().map(|c| c.def()), false);
    static ref APPOINTMENT_SCHEMA: Vec<ColumnDef> =
        build_schema(AppointmentColumn::ALL.iter().map(|c| c.def()), false);
    static ref STICKY_NOTE_SCHEMA: Vec<ColumnDef> =
        build_schema(StickyNoteColumn::ALL.iter().map(|c| c.def()), false);
    static ref TASK_SCHEMA: Vec<ColumnDef> =
        build_schema(TaskColumn::ALL.iter().map(|c| c.def()), false);
    static ref DIST_LIST_SCHEMA: Vec<ColumnDef> =
        build_schema(DistListColumn::ALL.iter().map(|c| c.def()), false);
}
