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

//! Named properties: (property set GUID, local id) pairs which each file maps
//! to its own runtime property id.

use super::Guid;

pub const PSETID_APPOINTMENT: Guid = Guid::from_fields(
    0x0006_2002,
    0x0000,
    0x0000,
    [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
);
pub const PSETID_TASK: Guid = Guid::from_fields(
    0x0006_2003,
    0x0000,
    0x0000,
    [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
);
pub const PSETID_ADDRESS: Guid = Guid::from_fields(
    0x0006_2004,
    0x0000,
    0x0000,
    [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
);
pub const PSETID_NOTE: Guid = Guid::from_fields(
    0x0006_200E,
    0x0000,
    0x0000,
    [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NamedProp {
    pub set: Guid,
    pub id: u32,
    /// The canonical name, for diagnostics.
    pub name: &'static str,
}

macro_rules! named_props {
    ($set:ident { $($name:ident = $id:literal,)* }) => {
        $(pub const $name: NamedProp = NamedProp {
            set: $set,
            id: $id,
            name: stringify!($name),
        };)*
    };
}

named_props!(PSETID_APPOINTMENT {
    BUSY_STATUS = 0x8205,
    LOCATION = 0x8208,
    MEETING_WORKSPACE_URL = 0x8209,
    APPOINTMENT_START_WHOLE = 0x820D,
    APPOINTMENT_END_WHOLE = 0x820E,
    APPOINTMENT_DURATION = 0x8213,
    APPOINTMENT_SUB_TYPE = 0x8215,
    RESPONSE_STATUS = 0x8218,
    RECURRING = 0x8223,
    FINVITED = 0x8229,
    RECURRENCE_PATTERN = 0x8232,
    TO_ATTENDEES_STRING = 0x823B,
    CC_ATTENDEES_STRING = 0x823C,
});

named_props!(PSETID_TASK {
    TASK_STATUS = 0x8101,
    PERCENT_COMPLETE = 0x8102,
    TEAM_TASK = 0x8103,
    TASK_START_DATE = 0x8104,
    TASK_DUE_DATE = 0x8105,
    TASK_DATE_COMPLETED = 0x810F,
    TASK_ACTUAL_EFFORT = 0x8110,
    TASK_ESTIMATED_EFFORT = 0x8111,
    TASK_LAST_UPDATE = 0x8115,
    TASK_COMPLETE = 0x811C,
    TASK_OWNER = 0x811F,
    TASK_ASSIGNER = 0x8121,
    TASK_LAST_USER = 0x8122,
    TASK_FRECURRING = 0x8126,
    TASK_OWNERSHIP = 0x8129,
});

named_props!(PSETID_NOTE {
    NOTE_COLOR = 0x8B00,
    NOTE_WIDTH = 0x8B02,
    NOTE_HEIGHT = 0x8B03,
    NOTE_X = 0x8B04,
    NOTE_Y = 0x8B05,
});

named_props!(PSETID_ADDRESS {
    DISTRIBUTION_LIST_NAME = 0x8053,
    DISTRIBUTION_LIST_ONE_OFF_MEMBERS = 0x8054,
    DISTRIBUTION_LIST_MEMBERS = 0x8055,
});
