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

//! Enumerating archive nodes and cutting them into partitions.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{error, info, warn};

use super::partition::{chunk, Plan};
use crate::mapi::{MailboxOpener, NodeId, Scope};
use crate::schema::{MessageClass, ReadMode};
use crate::support::error::Error;
use crate::support::log_prefix::LogPrefix;
use crate::support::scan_config::ScanConfig;
use crate::support::threading;

/// Builds a `Plan` for a set of archive files.
pub struct Planner<'a> {
    opener: &'a dyn MailboxOpener,
    mode: ReadMode,
    partition_size: usize,
    read_limit: Option<u64>,
    max_threads: usize,
    log_prefix: LogPrefix,
}

/// The number of nodes the whole plan may still take.
struct RowBudget {
    remaining: Option<AtomicU64>,
}

impl RowBudget {
    fn try_take(&self) -> bool {
        match self.remaining {
            None => true,
            Some(ref remaining) => remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                    n.checked_sub(1)
                })
                .is_ok(),
        }
    }
}

impl<'a> Planner<'a> {
    pub fn new(
        opener: &'a dyn MailboxOpener,
        mode: ReadMode,
        config: &ScanConfig,
    ) -> Self {
        Self {
            opener,
            mode,
            partition_size: config.effective_partition_size(),
            read_limit: config.read_limit,
            max_threads: threading::max_threads(),
            log_prefix: LogPrefix::new(format!(
                "{}-plan",
                mode.function_name()
            )),
        }
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Plan a scan over `files`.
    ///
    /// Files are enumerated concurrently, but partitions are numbered in the
    /// order the files are given. A file that cannot be enumerated is logged
    /// and contributes no partitions.
    pub fn plan(&self, files: &[PathBuf]) -> Plan {
        let budget = RowBudget {
            remaining: self.read_limit.map(AtomicU64::new),
        };

        let collect = |path: PathBuf| {
            let log_prefix = self.log_prefix.deep_clone();
            log_prefix.set_file(&path);
            match self.collect_nodes(&path, &budget, &log_prefix) {
                Ok(nodes) => nodes,
                Err(e) => {
                    error!(
                        "{} Failed to enumerate {}, skipping: {}",
                        log_prefix,
                        path.display(),
                        e
                    );
                    Vec::new()
                },
            }
        };
        let node_lists = threading::map_concurrently(
            files.to_vec(),
            self.max_threads,
            collect,
        );

        let mut partitions = Vec::new();
        let mut next_index = 0;
        let mut row_start = 0;
        for (path, nodes) in files.iter().zip(node_lists) {
            let file: Arc<Path> = Arc::from(path.as_path());
            partitions.extend(chunk(
                &file,
                self.mode,
                &nodes,
                self.partition_size,
                &mut next_index,
                &mut row_start,
            ));
        }

        info!(
            "{} Planned {} rows in {} partitions over {} files",
            self.log_prefix,
            row_start,
            partitions.len(),
            files.len()
        );

        Plan {
            mode: self.mode,
            files: files.to_vec(),
            partition_size: self.partition_size,
            partitions,
        }
    }

    fn collect_nodes(
        &self,
        path: &Path,
        budget: &RowBudget,
        log_prefix: &LogPrefix,
    ) -> Result<Vec<NodeId>, Error> {
        let file = self.opener.open(path)?;
        let ids = if self.mode.reads_folders() {
            file.folder_nodes(Scope::File)?
        } else {
            file.message_nodes(Scope::File)?
        };

        let mut nodes = Vec::new();
        for id in ids {
            let id = id?;

            if let ReadMode::Class(_) = self.mode {
                let class = file
                    .open_node(id)
                    .and_then(|node| MessageClass::of(node.props()));
                match class {
                    Ok(class) if self.mode.accepts(class) => (),
                    Ok(_) => continue,
                    Err(e) => {
                        warn!(
                            "{} Skipping unclassifiable node {}: {}",
                            log_prefix, id, e
                        );
                        continue;
                    },
                }
            }

            if !budget.try_take() {
                break;
            }
            nodes.push(id);
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mapi::{tags, PropValue};
    use crate::test_data::{MemoryArchive, MemoryNode, MemoryOpener};

    fn archive(path: &str, messages: u32) -> MemoryArchive {
        let mut archive =
            MemoryArchive::new(path).with_node(MemoryNode::folder(100, 100));
        for i in 0..messages {
            archive = archive.with_node(MemoryNode::message(1000 + i, 100));
        }
        archive
    }

    fn config(partition_size: u64, read_limit: Option<u64>) -> ScanConfig {
        ScanConfig {
            partition_size,
            read_limit,
            ..ScanConfig::default()
        }
    }

    #[test]
    fn partitions_follow_file_order() {
        let opener = MemoryOpener::new()
            .with_archive(archive("/a.pst", 5))
            .with_archive(archive("/b.pst", 2));
        let files = vec![PathBuf::from("/a.pst"), PathBuf::from("/b.pst")];

        let plan = Planner::new(&opener, ReadMode::Messages, &config(2, None))
            .with_max_threads(4)
            .plan(&files);

        assert_eq!(7, plan.cardinality());
        assert_eq!(
            vec![2, 2, 1, 2],
            plan.partitions.iter().map(|p| p.count()).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![0, 1, 2, 3],
            plan.partitions.iter().map(|p| p.index).collect::<Vec<_>>()
        );
        assert_eq!(Path::new("/a.pst"), &*plan.partitions[2].file);
        assert_eq!(Path::new("/b.pst"), &*plan.partitions[3].file);
        assert_eq!(vec![1000, 1001], plan.partitions[3].nodes);
    }

    #[test]
    fn unopenable_file_contributes_nothing() {
        let opener = MemoryOpener::new()
            .with_archive(archive("/a.pst", 3))
            .with_failing("/bad.pst");
        let files = vec![PathBuf::from("/bad.pst"), PathBuf::from("/a.pst")];

        let plan = Planner::new(&opener, ReadMode::Messages, &config(10, None))
            .plan(&files);

        assert_eq!(1, plan.partitions.len());
        assert_eq!(0, plan.partitions[0].index);
        assert_eq!(3, plan.cardinality());
        assert_eq!(2, plan.files.len());
    }

    #[test]
    fn folder_mode_enumerates_folders() {
        let opener = MemoryOpener::new().with_archive(
            archive("/a.pst", 3).with_node(MemoryNode::folder(200, 100)),
        );

        let plan = Planner::new(&opener, ReadMode::Folders, &config(10, None))
            .plan(&[PathBuf::from("/a.pst")]);

        assert_eq!(vec![100, 200], plan.partitions[0].nodes);
    }

    #[test]
    fn class_mode_keeps_only_matching_messages() {
        let opener = MemoryOpener::new().with_archive(
            MemoryArchive::new("/a.pst")
                .with_node(MemoryNode::folder(100, 100))
                .with_node(MemoryNode::message(1, 100).with_prop(
                    tags::MESSAGE_CLASS,
                    PropValue::Unicode("IPM.Contact".to_owned()),
                ))
                .with_node(MemoryNode::message(2, 100).with_prop(
                    tags::MESSAGE_CLASS,
                    PropValue::Unicode("IPM.Note".to_owned()),
                ))
                .with_node(MemoryNode::message(3, 100).with_prop(
                    tags::MESSAGE_CLASS,
                    PropValue::String8(b"ipm.contact.custom".to_vec()),
                ))
                .with_node(MemoryNode::message(4, 100)),
        );
        let files = [PathBuf::from("/a.pst")];

        let contacts = Planner::new(
            &opener,
            ReadMode::Class(MessageClass::Contact),
            &config(10, None),
        )
        .plan(&files);
        assert_eq!(vec![1, 3], contacts.partitions[0].nodes);

        // Messages without a recognisable class are notes
        let notes = Planner::new(
            &opener,
            ReadMode::Class(MessageClass::Note),
            &config(10, None),
        )
        .plan(&files);
        assert_eq!(vec![2, 4], notes.partitions[0].nodes);

        let tasks = Planner::new(
            &opener,
            ReadMode::Class(MessageClass::Task),
            &config(10, None),
        )
        .plan(&files);
        assert!(tasks.partitions.is_empty());
        assert_eq!(0, tasks.cardinality());
    }

    #[test]
    fn read_limit_is_global() {
        let opener = MemoryOpener::new()
            .with_archive(archive("/a.pst", 5))
            .with_archive(archive("/b.pst", 5));
        let files = vec![PathBuf::from("/a.pst"), PathBuf::from("/b.pst")];

        let plan =
            Planner::new(&opener, ReadMode::Messages, &config(2, Some(7)))
                .plan(&files);
        assert_eq!(7, plan.cardinality());

        let plan =
            Planner::new(&opener, ReadMode::Messages, &config(2, Some(0)))
                .plan(&files);
        assert_eq!(0, plan.cardinality());
        assert!(plan.partitions.is_empty());

        let plan =
            Planner::new(&opener, ReadMode::Messages, &config(2, Some(100)))
                .plan(&files);
        assert_eq!(10, plan.cardinality());
    }
}
