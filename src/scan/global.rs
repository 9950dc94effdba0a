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

use std::collections::VecDeque;
use std::sync::Mutex;

use super::partition::Partition;
use super::ColumnId;
use crate::materialize::RowOptions;
use crate::schema::{ColumnDef, ReadMode};
use crate::support::error::Error;

/// State shared by every worker of one scan.
///
/// Holds the queue of partitions not yet claimed by any worker. Each
/// partition is handed out exactly once.
#[derive(Debug)]
pub struct GlobalScanState {
    mode: ReadMode,
    column_ids: Vec<ColumnId>,
    options: RowOptions,
    cardinality: u64,
    queue: Mutex<Queue>,
}

#[derive(Debug)]
struct Queue {
    partitions: VecDeque<Partition>,
    processed: u64,
}

impl GlobalScanState {
    /// Queue `partitions` for a scan producing `column_ids`.
    ///
    /// Fails if any schema column index is outside `mode`'s schema.
    pub fn new(
        mode: ReadMode,
        partitions: Vec<Partition>,
        column_ids: Vec<ColumnId>,
        options: RowOptions,
    ) -> Result<Self, Error> {
        let width = mode.schema().len();
        for &id in &column_ids {
            if let ColumnId::Schema(ix) = id {
                if ix >= width {
                    return Err(Error::UnknownColumn(ix));
                }
            }
        }

        Ok(Self {
            mode,
            column_ids,
            options,
            cardinality: partitions.iter().map(Partition::count).sum(),
            queue: Mutex::new(Queue {
                partitions: partitions.into(),
                processed: 0,
            }),
        })
    }

    /// Claim the next unclaimed partition, if any remain.
    ///
    /// Its rows count as processed from this point on.
    pub fn take_partition(&self) -> Option<Partition> {
        let mut queue = self.queue.lock().unwrap();
        let partition = queue.partitions.pop_front()?;
        queue.processed += partition.count();
        Some(partition)
    }

    /// How many workers could usefully run right now.
    pub fn max_parallelism(&self) -> usize {
        self.queue.lock().unwrap().partitions.len().max(1)
    }

    /// Total rows of the partitions queued at initialisation.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    pub fn processed(&self) -> u64 {
        self.queue.lock().unwrap().processed
    }

    /// Rows claimed so far, as a percentage of the cardinality.
    ///
    /// Rows count as processed once their partition is claimed, so this
    /// runs ahead of the rows actually emitted.
    pub fn progress(&self) -> f64 {
        self.processed() as f64 * 100.0 / self.cardinality.max(1) as f64
    }

    pub fn mode(&self) -> ReadMode {
        self.mode
    }

    pub fn schema(&self) -> &'static [ColumnDef] {
        self.mode.schema()
    }

    pub fn column_ids(&self) -> &[ColumnId] {
        &self.column_ids
    }

    pub fn options(&self) -> &RowOptions {
        &self.options
    }
}
