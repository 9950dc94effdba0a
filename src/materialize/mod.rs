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

//! Turning scanned nodes into output rows.
//!
//! Each requested column is resolved independently. A column that cannot be
//! read is logged and left null; it never takes the rest of the row down with
//! it. The one exception is an entry ID from an unknown provider, which means
//! the data cannot be interpreted safely at all and aborts the scan.

use log::{debug, warn};

use crate::batch::{RowBatch, Value};
use crate::mapi::{MailboxNode, PropertyBag};
use crate::scan::{ColumnId, Entity, OpenMailbox, ScanItem};
use crate::schema::{
    ColumnDef, ColumnKey, ColumnType, FileColumn, FolderColumn,
    MessageClass, NodeColumn, PropSource,
};
use crate::support::error::Error;
use crate::support::log_prefix::LogPrefix;
use crate::support::scan_config::ScanConfig;

mod message;
mod props;
pub mod text;

pub use self::props::{body_read_size, convert, from_prop, from_prop_stream};

/// Per-scan settings affecting how values are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowOptions {
    /// Body byte budget; 0 reads whole bodies.
    pub body_size_bytes: u64,
    pub read_attachment_body: bool,
}

impl From<&ScanConfig> for RowOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            body_size_bytes: config.read_body_size_bytes,
            read_attachment_body: config.read_attachment_body,
        }
    }
}

/// Everything a worker knows that row construction needs.
pub struct RowContext<'a> {
    pub mailbox: &'a OpenMailbox,
    pub schema: &'static [ColumnDef],
    pub options: &'a RowOptions,
    pub log_prefix: &'a LogPrefix,
}

/// Write the requested columns of `item` into row `row` of `batch`.
///
/// `column_ids[i]` is written to output column `i`.
pub fn into_row(
    ctx: &RowContext<'_>,
    column_ids: &[ColumnId],
    item: &ScanItem,
    batch: &mut RowBatch,
    row: usize,
) -> Result<(), Error> {
    for (out, &column_id) in column_ids.iter().enumerate() {
        let value = match column_id {
            ColumnId::PartitionIndex => Value::UBigInt(item.partition_index),
            ColumnId::NodeId => Value::UInteger(item.node_id),
            ColumnId::Schema(_) if item.entity.is_none() => Value::Null,
            ColumnId::Schema(ix) => {
                let def = &ctx.schema[ix];
                match column_value(ctx, def, item) {
                    Ok(value) => value,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e @ Error::UnmappedNamedProp(..)) => {
                        debug!(
                            "{} Node {}: {} ({}): {}",
                            ctx.log_prefix, item.node_id, def.name, def.ty, e
                        );
                        Value::Null
                    },
                    Err(e) => {
                        warn!(
                            "{} Node {}: failed to read {} ({}): {}",
                            ctx.log_prefix, item.node_id, def.name, def.ty, e
                        );
                        Value::Null
                    },
                }
            },
        };

        batch.set(out, row, value);
    }

    Ok(())
}

fn column_value(
    ctx: &RowContext<'_>,
    def: &ColumnDef,
    item: &ScanItem,
) -> Result<Value, Error> {
    let entity = item.entity.as_ref().ok_or(Error::NodeUnavailable)?;

    match def.key {
        ColumnKey::File(FileColumn::PstPath) => Ok(Value::Varchar(
            ctx.mailbox.path().to_string_lossy().into_owned(),
        )),
        ColumnKey::File(c) => {
            resolve(ctx, def.ty, ctx.mailbox.file().store_props(), c.source())
        },

        ColumnKey::Node(NodeColumn::NodeId) => {
            Ok(Value::UInteger(entity.node().id()))
        },
        ColumnKey::Node(NodeColumn::ParentNodeId) => {
            Ok(Value::UInteger(entity.node().parent_id()))
        },

        ColumnKey::Common(c) => {
            resolve(ctx, def.ty, entity.node().props(), c.source())
        },

        ColumnKey::Folder(FolderColumn::SubfolderCount) => {
            let node = folder(entity, def)?;
            Ok(Value::UInteger(node.subfolder_count()?))
        },
        ColumnKey::Folder(c) => {
            resolve(ctx, def.ty, folder(entity, def)?.props(), c.source())
        },

        ColumnKey::Message(c) => {
            message::column(ctx, message(entity, def, None)?, c, def.ty)
        },

        ColumnKey::Contact(c) => resolve(
            ctx,
            def.ty,
            message(entity, def, Some(MessageClass::Contact))?.props(),
            c.source(),
        ),

        ColumnKey::Appointment(c) => message::appointment_column(
            ctx,
            message(entity, def, Some(MessageClass::Appointment))?,
            c,
            def.ty,
        ),

        ColumnKey::StickyNote(c) => resolve(
            ctx,
            def.ty,
            message(entity, def, Some(MessageClass::StickyNote))?.props(),
            c.source(),
        ),

        ColumnKey::Task(c) => resolve(
            ctx,
            def.ty,
            message(entity, def, Some(MessageClass::Task))?.props(),
            c.source(),
        ),

        ColumnKey::DistList(c) => message::dist_list_column(
            ctx,
            message(entity, def, Some(MessageClass::DistList))?,
            c,
            def.ty,
        ),
    }
}

fn folder<'a>(
    entity: &'a Entity,
    def: &ColumnDef,
) -> Result<&'a dyn MailboxNode, Error> {
    match *entity {
        Entity::Folder(ref node) => Ok(&**node),
        _ => Err(Error::WrongEntity {
            column: def.name,
            entity: entity.kind_name(),
        }),
    }
}

/// Get the node of a message entity, optionally requiring a specific class.
fn message<'a>(
    entity: &'a Entity,
    def: &ColumnDef,
    required: Option<MessageClass>,
) -> Result<&'a dyn MailboxNode, Error> {
    match *entity {
        Entity::Message { class, ref node }
            if required.map_or(true, |r| r == class) =>
        {
            Ok(&**node)
        },
        _ => Err(Error::WrongEntity {
            column: def.name,
            entity: entity.kind_name(),
        }),
    }
}

/// Read a property-backed column or struct field from `bag`.
fn resolve(
    ctx: &RowContext<'_>,
    ty: ColumnType,
    bag: &dyn PropertyBag,
    source: PropSource,
) -> Result<Value, Error> {
    match source {
        PropSource::Tag(tag) => from_prop(ty, bag, tag),
        PropSource::Named(prop) => {
            from_prop(ty, bag, ctx.mailbox.named_tag(prop)?)
        },
        PropSource::Stream(tag) => {
            if !bag.has_prop(tag) {
                return Ok(Value::Null);
            }

            let true_size = bag.prop_size(tag)?;
            let read_size =
                body_read_size(ctx.options.body_size_bytes, true_size);
            from_prop_stream(ty, bag, tag, read_size)
        },
        PropSource::Derived => {
            unreachable!("derived column resolved as a property")
        },
    }
}
