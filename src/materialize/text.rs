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

//! Decoding of stored text.
//!
//! "Narrow" text has no declared character set. Real archives hold UTF-8
//! from newer clients and Windows-1252 from older ones, so UTF-8 is tried
//! first. "Wide" text is always UTF-16LE.
//!
//! Text read through a byte budget may be cut mid-character; a partial
//! trailing character is dropped rather than decoded as garbage.

use std::str;

use encoding_rs::*;

/// Decode 8-bit text of unknown code page.
pub fn decode_narrow(bytes: &[u8]) -> String {
    let bytes = trim_nul(bytes);
    match str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        // A cut-off sequence at the very end, after text which is already
        // evidently UTF-8
        Err(e)
            if e.error_len().is_none()
                && !bytes[..e.valid_up_to()].is_ascii() =>
        {
            String::from_utf8_lossy(&bytes[..e.valid_up_to()]).into_owned()
        },
        Err(_) => {
            WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned()
        },
    }
}

/// Decode UTF-16LE text.
pub fn decode_wide(bytes: &[u8]) -> String {
    let mut bytes = &bytes[..bytes.len() & !1];
    // Drop a dangling high surrogate
    if let [.., _, hi] = *bytes {
        if (0xD8..0xDC).contains(&hi) {
            bytes = &bytes[..bytes.len() - 2];
        }
    }

    let mut s = UTF_16LE.decode_with_bom_removal(bytes).0.into_owned();
    let trimmed = s.trim_end_matches('\0').len();
    s.truncate(trimmed);
    s
}

/// Decode text whose declared type cannot be trusted, guessing between wide
/// and narrow from its content.
pub fn decode_best_effort(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return decode_wide(bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return decode_narrow(rest);
    }

    if looks_wide(bytes) {
        decode_wide(bytes)
    } else {
        decode_narrow(bytes)
    }
}

/// Whether at least half the code units have a zero high byte, which is
/// what mostly-ASCII UTF-16LE looks like and what 8-bit text never does.
fn looks_wide(bytes: &[u8]) -> bool {
    let units = bytes.len() / 2;
    if 0 == units {
        return false;
    }

    let zero_high = bytes
        .chunks_exact(2)
        .filter(|unit| 0 == unit[1] && 0 != unit[0])
        .count();
    zero_high * 2 >= units
}

fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| 0 != b).map_or(0, |p| p + 1);
    &bytes[..end]
}
