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

//! Planning and executing scans.
//!
//! A scan runs in two phases. The planner enumerates the nodes of every
//! input file and cuts them into partitions; the global state then hands
//! those partitions out one at a time to however many workers the host runs,
//! each of which owns a local state holding one open archive.

mod filter;
mod global;
mod item;
mod local;
mod mailbox;
mod partition;
mod planner;

pub use self::filter::{PushdownFilter, ScalarFilter};
pub use self::global::GlobalScanState;
pub use self::item::{Entity, ScanItem};
pub use self::local::LocalScanState;
pub use self::mailbox::OpenMailbox;
pub use self::partition::{Partition, PartitionStats, Plan};
pub use self::planner::Planner;

use crate::schema::ColumnType;

/// Identifies one output column of a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnId {
    /// An index into the read mode's schema.
    Schema(usize),
    /// The index of the partition the row came from.
    PartitionIndex,
    /// The file-local id of the node the row came from.
    NodeId,
}

impl ColumnId {
    /// Columns available in every mode but not part of the default
    /// projection.
    pub const VIRTUAL: &'static [ColumnId] =
        &[ColumnId::PartitionIndex, ColumnId::NodeId];

    /// The name and type of a virtual column.
    pub fn virtual_def(self) -> Option<(&'static str, ColumnType)> {
        match self {
            ColumnId::Schema(_) => None,
            ColumnId::PartitionIndex => {
                Some(("pst_partition_index", ColumnType::UBigInt))
            },
            ColumnId::NodeId => Some(("pst_node_id", ColumnType::UInteger)),
        }
    }
}
