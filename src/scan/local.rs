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

use std::sync::Arc;

use log::{debug, error, warn};

use super::global::GlobalScanState;
use super::item::{Entity, ScanItem};
use super::mailbox::OpenMailbox;
use super::partition::Partition;
use crate::batch::RowBatch;
use crate::mapi::{MailboxOpener, NodeId};
use crate::materialize::{into_row, RowContext};
use crate::schema::{MessageClass, ReadMode};
use crate::support::error::Error;
use crate::support::log_prefix::LogPrefix;

/// One worker's view of a scan.
///
/// Holds at most one open archive at a time, reopening only when the next
/// partition comes from a different file.
pub struct LocalScanState {
    global: Arc<GlobalScanState>,
    opener: Arc<dyn MailboxOpener>,
    log_prefix: LogPrefix,
    mailbox: Option<OpenMailbox>,
    partition: Option<Partition>,
    cursor: usize,
}

impl LocalScanState {
    pub fn new(
        global: Arc<GlobalScanState>,
        opener: Arc<dyn MailboxOpener>,
        log_prefix: LogPrefix,
    ) -> Self {
        Self {
            global,
            opener,
            log_prefix,
            mailbox: None,
            partition: None,
            cursor: 0,
        }
    }

    /// The width of the rows this worker produces.
    pub fn column_count(&self) -> usize {
        self.global.column_ids().len()
    }

    /// Claim the next partition whose file can be opened.
    ///
    /// Returns `false` once the global queue is exhausted.
    pub fn bind_partition(&mut self) -> bool {
        loop {
            self.cursor = 0;
            let partition = match self.global.take_partition() {
                Some(p) => p,
                None => {
                    self.partition = None;
                    self.log_prefix.clear();
                    return false;
                },
            };

            self.log_prefix.set_file(&partition.file);
            self.log_prefix.set_partition(partition.index);

            let reuse = self
                .mailbox
                .as_ref()
                .map_or(false, |m| m.path() == &*partition.file);
            if !reuse {
                // Close the old file before opening the new one
                self.mailbox = None;
                match OpenMailbox::open(&*self.opener, &partition.file) {
                    Ok(mailbox) => {
                        debug!(
                            "{} Opened {}",
                            self.log_prefix,
                            partition.file.display()
                        );
                        self.mailbox = Some(mailbox);
                    },
                    Err(e) => {
                        error!(
                            "{} Failed to open {}, skipping {} rows: {}",
                            self.log_prefix,
                            partition.file.display(),
                            partition.count(),
                            e
                        );
                        self.partition = None;
                        continue;
                    },
                }
            }

            self.partition = Some(partition);
            return true;
        }
    }

    /// Whether the current partition (if any) has no more nodes.
    pub fn finished(&self) -> bool {
        self.partition
            .as_ref()
            .map_or(true, |p| self.cursor >= p.nodes.len())
    }

    /// Advance to the next node of the scan, binding new partitions as
    /// needed.
    ///
    /// A node that cannot be opened still produces an item, with no entity.
    pub fn next(&mut self) -> Option<ScanItem> {
        while self.finished() {
            if !self.bind_partition() {
                return None;
            }
        }

        let partition = self.partition.as_ref()?;
        let mailbox = self.mailbox.as_ref()?;
        let node_id = partition.nodes[self.cursor];
        self.cursor += 1;

        let entity = match open_entity(mailbox, partition.mode, node_id) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(
                    "{} Failed to open node {}: {}",
                    self.log_prefix, node_id, e
                );
                None
            },
        };

        Some(ScanItem {
            node_id,
            partition_index: partition.index,
            entity,
        })
    }

    /// Fill `batch` with up to its capacity of rows.
    ///
    /// Returns the number of rows written; 0 means this worker is done. Only
    /// fatal errors are returned.
    pub fn emit_rows(&mut self, batch: &mut RowBatch) -> Result<usize, Error> {
        batch.reset();

        let mut rows = 0;
        while rows < batch.capacity() {
            let item = match self.next() {
                Some(item) => item,
                None => break,
            };
            let mailbox = match self.mailbox.as_ref() {
                Some(mailbox) => mailbox,
                None => break,
            };

            let ctx = RowContext {
                mailbox,
                schema: self.global.schema(),
                options: self.global.options(),
                log_prefix: &self.log_prefix,
            };
            into_row(&ctx, self.global.column_ids(), &item, batch, rows)?;
            rows += 1;
        }

        batch.set_len(rows);
        Ok(rows)
    }
}

fn open_entity(
    mailbox: &OpenMailbox,
    mode: ReadMode,
    node_id: NodeId,
) -> Result<Entity, Error> {
    let node = mailbox.file().open_node(node_id)?;
    let class = match mode {
        ReadMode::Folders => return Ok(Entity::Folder(node)),
        // Planning already classified the node
        ReadMode::Class(class) => class,
        // An unreadable class only affects the message_class column
        ReadMode::Messages => {
            MessageClass::of(node.props()).unwrap_or(MessageClass::Note)
        },
    };
    Ok(Entity::Message { class, node })
}
