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

//! Columns of message nodes that need more than a single property read.

use std::io::Read;

use log::warn;

use super::{from_prop, resolve, RowContext};
use crate::batch::Value;
use crate::mapi::entry_id::{decode_member_node_id, decode_one_off};
use crate::mapi::{
    tags, MailboxNode, NodeId, PropId, PropValue, PropertyBag, SubObjects,
};
use crate::schema::{
    enums, AppointmentColumn, AttachmentField, ColumnType, DistListColumn,
    MessageColumn, PropSource, RecipientField,
};
use crate::support::error::Error;

pub(super) fn column(
    ctx: &RowContext<'_>,
    node: &dyn MailboxNode,
    col: MessageColumn,
    ty: ColumnType,
) -> Result<Value, Error> {
    match col {
        MessageColumn::HasAttachments => {
            Ok(Value::Boolean(!node.attachments()?.is_empty()))
        },
        MessageColumn::AttachmentCount => {
            let count = node.attachments()?.len();
            Ok(Value::UInteger(u32::try_from(count).unwrap_or(u32::MAX)))
        },
        MessageColumn::Recipients => {
            Ok(list(ctx, node.id(), "recipient", node.recipients()?, recipient))
        },
        MessageColumn::Attachments => Ok(list(
            ctx,
            node.id(),
            "attachment",
            node.attachments()?,
            attachment,
        )),
        _ => resolve(ctx, ty, node.props(), col.source()),
    }
}

pub(super) fn appointment_column(
    ctx: &RowContext<'_>,
    node: &dyn MailboxNode,
    col: AppointmentColumn,
    ty: ColumnType,
) -> Result<Value, Error> {
    match col {
        AppointmentColumn::IsPrivate => {
            let sensitivity = from_prop(
                ColumnType::BigInt,
                node.props(),
                tags::SENSITIVITY,
            )?;
            Ok(match sensitivity {
                Value::BigInt(raw) => {
                    Value::Boolean(raw >= enums::SENSITIVITY_PRIVATE)
                },
                _ => Value::Null,
            })
        },
        _ => resolve(ctx, ty, node.props(), col.source()),
    }
}

pub(super) fn dist_list_column(
    ctx: &RowContext<'_>,
    node: &dyn MailboxNode,
    col: DistListColumn,
    ty: ColumnType,
) -> Result<Value, Error> {
    let entries = match (col, col.source()) {
        (DistListColumn::ListName, _) => {
            return resolve(ctx, ty, node.props(), col.source())
        },
        (_, PropSource::Named(prop)) => {
            let tag = ctx.mailbox.named_tag(prop)?;
            match node.props().read_prop(tag)? {
                None => return Ok(Value::Null),
                Some(PropValue::MultiBinary(entries)) => entries,
                Some(PropValue::Binary(entry)) => vec![entry],
                Some(other) => {
                    return Err(Error::TypeMismatch {
                        tag,
                        actual: other.prop_type(),
                        target: ty.to_string(),
                    })
                },
            }
        },
        (_, source) => {
            unreachable!("distribution list column with source {:?}", source)
        },
    };

    let mut values = Vec::with_capacity(entries.len());
    for entry in &entries {
        match col {
            DistListColumn::OneOffMembers => {
                let one_off = decode_one_off(entry)?;
                values.push(Value::Struct(vec![
                    Value::Varchar(one_off.display_name),
                    Value::Varchar(one_off.address_type),
                    Value::Varchar(one_off.email_address),
                ]));
            },
            DistListColumn::MemberNodeIds => {
                if let Some(nid) = decode_member_node_id(entry)? {
                    values.push(Value::UInteger(nid));
                }
            },
            DistListColumn::ListName => unreachable!(),
        }
    }

    Ok(Value::List(values))
}

/// Build a list value from a table of sub-objects.
///
/// A sub-object which cannot be opened becomes a null element.
fn list(
    ctx: &RowContext<'_>,
    node_id: NodeId,
    what: &str,
    objects: SubObjects,
    build: impl Fn(&RowContext<'_>, &dyn PropertyBag) -> Value,
) -> Value {
    Value::List(
        objects
            .into_iter()
            .enumerate()
            .map(|(ix, object)| match object {
                Ok(bag) => build(ctx, &*bag),
                Err(e) => {
                    warn!(
                        "{} Node {}: failed to open {} {}: {}",
                        ctx.log_prefix, node_id, what, ix, e
                    );
                    Value::Null
                },
            })
            .collect(),
    )
}

/// Resolve a struct field, logging and nulling it on error.
fn field(
    ctx: &RowContext<'_>,
    name: &str,
    value: Result<Value, Error>,
) -> Value {
    value.unwrap_or_else(|e| {
        warn!("{} Failed to read field {}: {}", ctx.log_prefix, name, e);
        Value::Null
    })
}

fn recipient(ctx: &RowContext<'_>, bag: &dyn PropertyBag) -> Value {
    Value::Struct(
        RecipientField::ALL
            .iter()
            .map(|&f| {
                let def = f.field();
                field(ctx, def.name, resolve(ctx, def.ty, bag, f.source()))
            })
            .collect(),
    )
}

fn attachment(ctx: &RowContext<'_>, bag: &dyn PropertyBag) -> Value {
    let has_data = bag.has_prop(tags::ATTACH_DATA);
    let method = from_prop(ColumnType::BigInt, bag, tags::ATTACH_METHOD);
    let is_message = match method {
        Ok(Value::BigInt(m)) => Some(enums::ATTACH_EMBEDDED_MESSAGE == m),
        _ => None,
    };
    let size = if has_data {
        bag.prop_size(tags::ATTACH_DATA).map(Some)
    } else {
        Ok(None)
    };

    Value::Struct(
        AttachmentField::ALL
            .iter()
            .map(|&f| {
                let def = f.field();
                let value = match f {
                    AttachmentField::Size => match size {
                        Ok(Some(size)) => Ok(Value::UBigInt(size)),
                        Ok(None) => Ok(Value::Null),
                        Err(ref e) => Err(Error::Archive(e.to_string())),
                    },
                    AttachmentField::IsMessage => {
                        Ok(is_message.map_or(Value::Null, Value::Boolean))
                    },
                    AttachmentField::Bytes => {
                        let wanted = ctx.options.read_attachment_body
                            && Some(false) == is_message
                            && matches!(size, Ok(Some(s)) if s > 0);
                        if wanted {
                            read_all(bag, tags::ATTACH_DATA).map(Value::Blob)
                        } else {
                            Ok(Value::Null)
                        }
                    },
                    _ => resolve(ctx, def.ty, bag, f.source()),
                };
                field(ctx, def.name, value)
            })
            .collect(),
    )
}

fn read_all(bag: &dyn PropertyBag, tag: PropId) -> Result<Vec<u8>, Error> {
    let mut data = Vec::new();
    bag.open_prop_stream(tag)?.read_to_end(&mut data)?;
    Ok(data)
}
