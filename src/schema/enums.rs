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

use super::EnumType;

pub const IMPORTANCE: EnumType = EnumType {
    name: "importance",
    members: &["LOW", "NORMAL", "HIGH"],
    offset: 0,
};

/// Stored as -1, 0, 1.
pub const PRIORITY: EnumType = EnumType {
    name: "priority",
    members: &["LOW", "NORMAL", "HIGH"],
    offset: 1,
};

pub const SENSITIVITY: EnumType = EnumType {
    name: "sensitivity",
    members: &["NONE", "PERSONAL", "PRIVATE", "CONFIDENTIAL"],
    offset: 0,
};

pub const RECIPIENT_TYPE: EnumType = EnumType {
    name: "recipient_type",
    members: &["ORIGINATOR", "TO", "CC", "BCC"],
    offset: 0,
};

pub const ATTACH_METHOD: EnumType = EnumType {
    name: "attach_method",
    members: &[
        "NO_ATTACHMENT",
        "BY_VALUE",
        "BY_REFERENCE",
        "BY_REF_RESOLVE",
        "BY_REF_ONLY",
        "EMBEDDED_MESSAGE",
        "OLE",
    ],
    offset: 0,
};

/// Raw sensitivity at or above which an item is private.
pub const SENSITIVITY_PRIVATE: i64 = 2;
/// Raw attach method of an embedded message.
pub const ATTACH_EMBEDDED_MESSAGE: i64 = 5;
