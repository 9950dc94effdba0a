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

//! Decoding of the binary entry IDs found in distribution list membership
//! properties.
//!
//! Every entry ID starts with a 4-byte flags word and a 16-byte provider UID.
//! Two providers matter here:
//!
//! - One-off entries carry a recipient inline: a version word, a flags word,
//!   then null-terminated display name, address type, and email address,
//!   either 8-bit or UTF-16LE depending on the unicode flag.
//!
//! - Wrapped entries reference another item in the same store. After the
//!   common prefix comes a type byte, then an embedded 24-byte store entry ID
//!   whose last four bytes are the referenced node id.

use std::io::{Cursor, Read};

use bitflags::bitflags;
use byteorder::{LittleEndian, ReadBytesExt};

use super::{Guid, NodeId};
use crate::support::error::Error;

pub const ONE_OFF_PROVIDER: Guid = Guid([
    0x81, 0x2B, 0x1F, 0xA4, 0xBE, 0xA3, 0x10, 0x19, 0x9D, 0x6E, 0x00, 0xDD,
    0x01, 0x0F, 0x54, 0x02,
]);
pub const WRAPPED_PROVIDER: Guid = Guid([
    0xC0, 0x91, 0xAD, 0xD3, 0x51, 0x9D, 0xCF, 0x11, 0xA4, 0xA9, 0x00, 0xAA,
    0x00, 0x47, 0xFA, 0xA4,
]);

const PREFIX_LEN: usize = 4 + 16;
const EMBEDDED_STORE_ENTRY_LEN: usize = 24;

/// Wrapped entry types, from the low nibble of the type byte.
pub const WRAPPED_TYPE_CONTACT: u8 = 0x03;
pub const WRAPPED_TYPE_DIST_LIST: u8 = 0x04;

bitflags! {
    /// The flags word of a one-off entry.
    pub struct OneOffFlags: u16 {
        const NO_RICH_INFO = 0x0001;
        const ENCODING_MASK = 0x1E00;
        const UNICODE = 0x8000;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneOffEntry {
    pub display_name: String,
    pub address_type: String,
    pub email_address: String,
}

/// Return the provider UID of `entry`.
pub fn provider(entry: &[u8]) -> Result<Guid, Error> {
    if entry.len() < PREFIX_LEN {
        return Err(Error::TruncatedEntryId(entry.len()));
    }

    let mut guid = [0u8; 16];
    guid.copy_from_slice(&entry[4..PREFIX_LEN]);
    Ok(Guid(guid))
}

/// Decode a one-off entry.
///
/// Fails with `UnknownEntryIdProvider` if `entry` is not a one-off entry at
/// all.
pub fn decode_one_off(entry: &[u8]) -> Result<OneOffEntry, Error> {
    let guid = provider(entry)?;
    if ONE_OFF_PROVIDER != guid {
        return Err(Error::UnknownEntryIdProvider(guid));
    }

    let mut cursor = Cursor::new(&entry[PREFIX_LEN..]);
    let truncated = |_| Error::TruncatedEntryId(entry.len());
    let _version = cursor.read_u16::<LittleEndian>().map_err(truncated)?;
    let flags = OneOffFlags::from_bits_truncate(
        cursor.read_u16::<LittleEndian>().map_err(truncated)?,
    );
    let unicode = flags.contains(OneOffFlags::UNICODE);

    let display_name = read_terminated(&mut cursor, unicode, entry.len())?;
    let address_type = read_terminated(&mut cursor, unicode, entry.len())?;
    let email_address = read_terminated(&mut cursor, unicode, entry.len())?;
    Ok(OneOffEntry {
        display_name,
        address_type,
        email_address,
    })
}

/// Decode the node id referenced by a wrapped entry.
///
/// Returns `Ok(None)` for one-off entries, which reference no node.
/// Unrecognised providers fail with `UnknownEntryIdProvider`; wrapped
/// entries that reference something other than a contact or distribution
/// list fail with `UnsupportedEntryType`.
pub fn decode_member_node_id(entry: &[u8]) -> Result<Option<NodeId>, Error> {
    let guid = provider(entry)?;
    if ONE_OFF_PROVIDER == guid {
        return Ok(None);
    }
    if WRAPPED_PROVIDER != guid {
        return Err(Error::UnknownEntryIdProvider(guid));
    }

    let mut cursor = Cursor::new(&entry[PREFIX_LEN..]);
    let entry_type = cursor
        .read_u8()
        .map_err(|_| Error::TruncatedEntryId(entry.len()))?
        & 0x0F;
    if WRAPPED_TYPE_CONTACT != entry_type
        && WRAPPED_TYPE_DIST_LIST != entry_type
    {
        return Err(Error::UnsupportedEntryType(entry_type));
    }

    let mut embedded = [0u8; EMBEDDED_STORE_ENTRY_LEN];
    cursor
        .read_exact(&mut embedded)
        .map_err(|_| Error::TruncatedEntryId(entry.len()))?;
    let mut nid = &embedded[EMBEDDED_STORE_ENTRY_LEN - 4..];
    Ok(Some(nid.read_u32::<LittleEndian>()?))
}

fn read_terminated(
    cursor: &mut Cursor<&[u8]>,
    unicode: bool,
    total_len: usize,
) -> Result<String, Error> {
    let data = *cursor.get_ref();
    let start = cursor.position() as usize;
    let rest = &data[start.min(data.len())..];

    let (text, consumed) = if unicode {
        let end = rest
            .chunks_exact(2)
            .position(|c| c == [0, 0])
            .ok_or(Error::TruncatedEntryId(total_len))?
            * 2;
        let (text, _) = encoding_rs::UTF_16LE
            .decode_without_bom_handling(&rest[..end]);
        (text.into_owned(), end + 2)
    } else {
        let end = rest
            .iter()
            .position(|&b| 0 == b)
            .ok_or(Error::TruncatedEntryId(total_len))?;
        (
            crate::materialize::text::decode_narrow(&rest[..end]),
            end + 1,
        )
    };

    cursor.set_position((start + consumed) as u64);
    Ok(text)
}
