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

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::filter::PushdownFilter;
use crate::mapi::NodeId;
use crate::schema::ReadMode;

/// A unit of scan work: a run of nodes from one file, read in one mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// Position of this partition in the plan. Stable under filtering.
    pub index: u64,
    pub file: Arc<Path>,
    pub mode: ReadMode,
    /// The number of rows planned before this partition.
    pub row_start: u64,
    pub nodes: Vec<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionStats {
    pub index: u64,
    pub row_start: u64,
    pub count: u64,
}

impl Partition {
    pub fn count(&self) -> u64 {
        self.nodes.len() as u64
    }

    pub fn stats(&self) -> PartitionStats {
        PartitionStats {
            index: self.index,
            row_start: self.row_start,
            count: self.count(),
        }
    }
}

/// Split the nodes of one file into partitions of at most `partition_size`
/// nodes.
///
/// `next_index` and `row_start` carry the numbering across files and are
/// advanced past the partitions produced.
pub fn chunk(
    file: &Arc<Path>,
    mode: ReadMode,
    nodes: &[NodeId],
    partition_size: usize,
    next_index: &mut u64,
    row_start: &mut u64,
) -> Vec<Partition> {
    nodes
        .chunks(partition_size.max(1))
        .map(|nodes| {
            let partition = Partition {
                index: *next_index,
                file: Arc::clone(file),
                mode,
                row_start: *row_start,
                nodes: nodes.to_vec(),
            };
            *next_index += 1;
            *row_start += partition.count();
            partition
        })
        .collect()
}

/// The result of planning a scan.
#[derive(Clone, Debug)]
pub struct Plan {
    pub mode: ReadMode,
    pub files: Vec<PathBuf>,
    pub partition_size: usize,
    pub partitions: Vec<Partition>,
}

impl Plan {
    /// The exact number of rows the unfiltered plan produces.
    pub fn cardinality(&self) -> u64 {
        self.partitions.iter().map(Partition::count).sum()
    }

    pub fn stats(&self) -> Vec<PartitionStats> {
        self.partitions.iter().map(Partition::stats).collect()
    }

    /// The partitions left after applying `filter`.
    ///
    /// Partitions rejected by the partition index predicate are dropped
    /// whole. Nodes rejected by the node id predicate are removed from the
    /// survivors, and partitions left empty are dropped. Partition indices
    /// are not renumbered.
    pub fn filtered(&self, filter: &PushdownFilter) -> Vec<Partition> {
        self.partitions
            .iter()
            .filter(|p| filter.keeps_partition(p.index))
            .filter_map(|p| {
                if filter.node_id.is_none() {
                    return Some(p.clone());
                }

                let nodes = p
                    .nodes
                    .iter()
                    .copied()
                    .filter(|&n| filter.keeps_node(n))
                    .collect::<Vec<_>>();
                if nodes.is_empty() {
                    None
                } else {
                    Some(Partition {
                        nodes,
                        file: Arc::clone(&p.file),
                        ..*p
                    })
                }
            })
            .collect()
    }

    /// Key/value pairs summarising the plan for EXPLAIN output.
    pub fn explain(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Files read", self.files.len().to_string()),
            ("Partitions read", self.partitions.len().to_string()),
            ("Partition size", self.partition_size.to_string()),
        ]
    }
}
