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

//! The read functions the host engine registers, one per read mode.
//!
//! The host calls these in order: `bind` once per query,
//! `BindData::init_global` once per execution, `init_local` once per worker
//! thread, then `scan` repeatedly on each worker until it returns 0.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::{error, info};

use crate::batch::{RowBatch, Value};
use crate::mapi::MailboxOpener;
use crate::materialize::RowOptions;
use crate::scan::{
    ColumnId, GlobalScanState, LocalScanState, PartitionStats, Plan, Planner,
    PushdownFilter,
};
use crate::schema::{ColumnDef, ColumnType, ReadMode};
use crate::support::error::Error;
use crate::support::log_prefix::LogPrefix;
use crate::support::scan_config::ScanConfig;

/// Everything decided when a read function is bound to its arguments.
#[derive(Clone, Debug)]
pub struct BindData {
    mode: ReadMode,
    config: ScanConfig,
    plan: Plan,
}

/// Bind the read function `function_name` to the already-resolved list of
/// `files` and its named parameters, planning the scan.
pub fn bind(
    opener: &dyn MailboxOpener,
    function_name: &str,
    files: &[PathBuf],
    named: &BTreeMap<String, Value>,
) -> Result<BindData, Error> {
    let mode = ReadMode::from_function_name(function_name)?;
    let config = ScanConfig::from_named(named)?;
    Ok(bind_with_config(opener, mode, files, config))
}

/// Like `bind`, but with the mode and configuration already known.
pub fn bind_with_config(
    opener: &dyn MailboxOpener,
    mode: ReadMode,
    files: &[PathBuf],
    config: ScanConfig,
) -> BindData {
    let plan = Planner::new(opener, mode, &config).plan(files);
    BindData { mode, config, plan }
}

impl BindData {
    pub fn mode(&self) -> ReadMode {
        self.mode
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// The output columns of the function, in order.
    pub fn schema(&self) -> &'static [ColumnDef] {
        self.mode.schema()
    }

    /// The name and type of every column the host should expose, including
    /// virtual columns.
    pub fn output_columns(&self) -> Vec<(ColumnId, &'static str, ColumnType)> {
        self.schema()
            .iter()
            .enumerate()
            .map(|(ix, def)| (ColumnId::Schema(ix), def.name, def.ty))
            .chain(ColumnId::VIRTUAL.iter().filter_map(|&id| {
                id.virtual_def().map(|(name, ty)| (id, name, ty))
            }))
            .collect()
    }

    /// The columns produced when the host does not project anything.
    pub fn default_projection(&self) -> Vec<ColumnId> {
        (0..self.schema().len()).map(ColumnId::Schema).collect()
    }

    /// Look a column up by name.
    pub fn column_id(&self, name: &str) -> Option<ColumnId> {
        self.output_columns()
            .into_iter()
            .find(|&(_, n, _)| n == name)
            .map(|(id, _, _)| id)
    }

    pub fn cardinality(&self) -> u64 {
        self.plan.cardinality()
    }

    pub fn partition_stats(&self) -> Vec<PartitionStats> {
        self.plan.stats()
    }

    pub fn explain(&self) -> Vec<(&'static str, String)> {
        self.plan.explain()
    }

    /// Set up the shared state of one execution of the scan, producing
    /// `column_ids` for each row.
    ///
    /// `filter`, if given, prunes partitions and nodes before any worker
    /// starts.
    pub fn init_global(
        &self,
        column_ids: Vec<ColumnId>,
        filter: Option<&PushdownFilter>,
    ) -> Result<Arc<GlobalScanState>, Error> {
        let partitions = match filter {
            Some(filter) if !filter.is_empty() => {
                let partitions = self.plan.filtered(filter);
                info!(
                    "{}: pushdown kept {} of {} partitions",
                    self.mode.function_name(),
                    partitions.len(),
                    self.plan.partitions.len()
                );
                partitions
            },
            _ => self.plan.partitions.clone(),
        };

        GlobalScanState::new(
            self.mode,
            partitions,
            column_ids,
            RowOptions::from(&self.config),
        )
        .map(Arc::new)
    }
}

/// Set up the state of worker number `worker`.
pub fn init_local(
    global: &Arc<GlobalScanState>,
    opener: &Arc<dyn MailboxOpener>,
    worker: usize,
) -> LocalScanState {
    let log_prefix = LogPrefix::new(format!(
        "{}-{}",
        global.mode().function_name(),
        worker
    ));
    LocalScanState::new(Arc::clone(global), Arc::clone(opener), log_prefix)
}

/// Fill `batch` with the next rows for this worker.
///
/// Returns 0 once the worker has nothing more to do.
pub fn scan(
    local: &mut LocalScanState,
    batch: &mut RowBatch,
) -> Result<usize, Error> {
    local.emit_rows(batch)
}

/// Scan progress as a percentage.
pub fn progress(global: &GlobalScanState) -> f64 {
    global.progress()
}

/// Drive a whole scan on `nthreads` worker threads.
///
/// Each worker owns one `LocalScanState` and repeatedly fills a batch of
/// `batch_capacity` rows, handing each non-empty batch to `sink`. Returns the
/// total number of rows produced, or the first fatal error any worker hit.
/// A worker that hits a fatal error stops; the others run to completion.
pub fn run_scan(
    global: &Arc<GlobalScanState>,
    opener: &Arc<dyn MailboxOpener>,
    nthreads: usize,
    batch_capacity: usize,
    sink: impl Fn(&RowBatch) + Sync,
) -> Result<u64, Error> {
    let nthreads = nthreads.max(1).min(global.max_parallelism());
    let total_rows = AtomicU64::new(0);
    let first_error = Mutex::new(None::<Error>);

    crossbeam::scope(|s| {
        for worker in 0..nthreads {
            let sink = &sink;
            let total_rows = &total_rows;
            let first_error = &first_error;
            s.spawn(move |_| {
                let mut local = init_local(global, opener, worker);
                let mut batch =
                    RowBatch::new(local.column_count(), batch_capacity);

                loop {
                    match scan(&mut local, &mut batch) {
                        Ok(0) => break,
                        Ok(n) => {
                            total_rows.fetch_add(n as u64, Ordering::Relaxed);
                            sink(&batch);
                        },
                        Err(e) => {
                            error!(
                                "{}-{} Scan aborted: {}",
                                global.mode().function_name(),
                                worker,
                                e
                            );
                            first_error.lock().unwrap().get_or_insert(e);
                            break;
                        },
                    }
                }
            });
        }
    })
    .unwrap();

    match first_error.into_inner().unwrap() {
        Some(e) => Err(e),
        None => Ok(total_rows.into_inner()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mapi::entry_id::test::{one_off, wrapped};
    use crate::mapi::entry_id::WRAPPED_TYPE_CONTACT;
    use crate::mapi::{named, tags, NodeId, PropValue};
    use crate::scan::ScalarFilter;
    use crate::test_data::{MemoryArchive, MemoryBag, MemoryNode, MemoryOpener};

    const ROOT: NodeId = 0x122;
    const INBOX: NodeId = 0x8022;

    fn unicode(s: &str) -> PropValue {
        PropValue::Unicode(s.to_owned())
    }

    fn varchar(s: &str) -> Value {
        Value::Varchar(s.to_owned())
    }

    fn message(id: NodeId, class: &str) -> MemoryNode {
        MemoryNode::message(id, INBOX)
            .with_prop(tags::MESSAGE_CLASS, unicode(class))
    }

    fn archive() -> MemoryArchive {
        MemoryArchive::new("/a.pst")
            .with_store_prop(tags::DISPLAY_NAME, unicode("Personal Folders"))
            .with_store_prop(tags::RECORD_KEY, PropValue::Binary(vec![1, 2]))
            .with_node(MemoryNode::folder(ROOT, ROOT))
            .with_node(
                MemoryNode::folder(INBOX, ROOT)
                    .with_prop(tags::DISPLAY_NAME, unicode("Inbox"))
                    .with_prop(tags::CONTAINER_CLASS, unicode("IPF.Note"))
                    .with_prop(tags::CONTENT_COUNT, PropValue::Int32(3))
                    .with_prop(tags::CONTENT_UNREAD, PropValue::Int32(1)),
            )
    }

    fn files() -> Vec<PathBuf> {
        vec![PathBuf::from("/a.pst")]
    }

    fn params(params: &[(&str, Value)]) -> BTreeMap<String, Value> {
        params
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    /// Run a whole scan, returning the rows ordered by node id.
    fn run(
        opener: MemoryOpener,
        function: &str,
        named: &[(&str, Value)],
        columns: &[&str],
        filter: Option<&PushdownFilter>,
    ) -> Result<(BindData, Vec<Vec<Value>>), Error> {
        crate::init_test_log();

        let opener: Arc<dyn MailboxOpener> = Arc::new(opener);
        let bind = bind(&*opener, function, &files(), &params(named))?;

        let mut column_ids = vec![bind.column_id("pst_node_id").unwrap()];
        column_ids.extend(columns.iter().map(|&c| {
            bind.column_id(c)
                .unwrap_or_else(|| panic!("no column {}", c))
        }));
        let global = bind.init_global(column_ids, filter)?;

        let rows = Mutex::new(Vec::<Vec<Value>>::new());
        run_scan(&global, &opener, 3, 2, |batch| {
            let mut rows = rows.lock().unwrap();
            for r in 0..batch.len() {
                rows.push(batch.row(r));
            }
        })?;
        assert_eq!(100.0, progress(&global));

        let mut rows = rows.into_inner().unwrap();
        rows.sort_by_key(|row| match row[0] {
            Value::UInteger(id) => id,
            ref v => panic!("unexpected node id {:?}", v),
        });
        for row in &mut rows {
            row.remove(0);
        }
        Ok((bind, rows))
    }

    #[test]
    fn end_to_end_messages() {
        let opener = MemoryOpener::new().with_archive(
            archive()
                .with_node(message(0x2004, "IPM.Note"))
                .with_node(message(0x2024, "IPM.Note"))
                .with_node(message(0x2044, "IPM.Appointment")),
        );

        let (bind, rows) = run(
            opener,
            "read_pst_messages",
            &[("partition_size", Value::UBigInt(2))],
            &["pst_path", "pst_name", "node_id", "parent_node_id"],
            None,
        )
        .unwrap();

        assert_eq!(3, bind.cardinality());
        assert_eq!(
            vec![2, 1],
            bind.partition_stats()
                .iter()
                .map(|s| s.count)
                .collect::<Vec<_>>()
        );
        assert_eq!(
            vec![0, 2],
            bind.partition_stats()
                .iter()
                .map(|s| s.row_start)
                .collect::<Vec<_>>()
        );

        assert_eq!(3, rows.len());
        for (row, &id) in rows.iter().zip(&[0x2004, 0x2024, 0x2044]) {
            assert_eq!(
                &vec![
                    varchar("/a.pst"),
                    varchar("Personal Folders"),
                    Value::UInteger(id),
                    Value::UInteger(INBOX),
                ],
                row
            );
        }
    }

    #[test]
    fn folders() {
        let opener = MemoryOpener::new()
            .with_archive(archive().with_node(message(0x2004, "IPM.Note")));

        let (bind, rows) = run(
            opener,
            "read_pst_folders",
            &[],
            &[
                "display_name",
                "container_class",
                "subfolder_count",
                "message_count",
                "unread_message_count",
            ],
            None,
        )
        .unwrap();

        assert_eq!(2, bind.cardinality());
        assert_eq!(
            vec![
                vec![
                    Value::Null,
                    Value::Null,
                    Value::UInteger(1),
                    Value::Null,
                    Value::Null,
                ],
                vec![
                    varchar("Inbox"),
                    varchar("IPF.Note"),
                    Value::UInteger(0),
                    Value::BigInt(3),
                    Value::BigInt(1),
                ],
            ],
            rows
        );
    }

    #[test]
    fn bind_errors() {
        let opener = MemoryOpener::new().with_archive(archive());

        assert_matches!(
            Err(Error::UnknownReadFunction(..)),
            bind(&opener, "read_pst_everything", &files(), &params(&[]))
        );
        assert_matches!(
            Err(Error::UnknownOption(..)),
            bind(
                &opener,
                "read_pst_messages",
                &files(),
                &params(&[("partition_sise", Value::UBigInt(2))])
            )
        );
        assert_matches!(
            Err(Error::BadOptionType { .. }),
            bind(
                &opener,
                "read_pst_messages",
                &files(),
                &params(&[("partition_size", varchar("big"))])
            )
        );

        let bind =
            bind(&opener, "read_pst_folders", &files(), &params(&[])).unwrap();
        assert_matches!(
            Err(Error::UnknownColumn(999)),
            bind.init_global(vec![ColumnId::Schema(999)], None)
        );
    }

    #[test]
    fn missing_file_plans_nothing() {
        let opener = MemoryOpener::new();
        let bind =
            bind(&opener, "read_pst_messages", &files(), &params(&[])).unwrap();
        assert_eq!(0, bind.cardinality());
        assert_eq!(
            vec![
                ("Files read", "1".to_owned()),
                ("Partitions read", "0".to_owned()),
                ("Partition size", "4096".to_owned()),
            ],
            bind.explain()
        );
    }

    #[test]
    fn output_columns() {
        let opener = MemoryOpener::new();
        let bind =
            bind(&opener, "read_pst_folders", &files(), &params(&[])).unwrap();

        let projection = bind.default_projection();
        assert_eq!(bind.schema().len(), projection.len());
        assert!(!projection.contains(&ColumnId::NodeId));
        assert!(!projection.contains(&ColumnId::PartitionIndex));

        let columns = bind.output_columns();
        assert_eq!(projection.len() + 2, columns.len());
        assert_eq!(
            Some(ColumnId::PartitionIndex),
            bind.column_id("pst_partition_index")
        );
        assert_eq!(Some(ColumnId::Schema(0)), bind.column_id("pst_path"));
        assert_eq!(None, bind.column_id("subject"));
    }

    #[test]
    fn pushdown_on_virtual_columns() {
        let mut archive = archive();
        for i in 0..5 {
            archive = archive.with_node(message(0x2004 + i * 0x20, "IPM.Note"));
        }
        let opener = MemoryOpener::new().with_archive(archive);

        let filter = PushdownFilter {
            partition_index: Some(ScalarFilter::In(vec![0, 2, 9])),
            node_id: None,
        };
        let (_, rows) = run(
            opener,
            "read_pst_messages",
            &[("partition_size", Value::UBigInt(2))],
            &["pst_partition_index", "node_id"],
            Some(&filter),
        )
        .unwrap();
        assert_eq!(
            vec![
                vec![Value::UBigInt(0), Value::UInteger(0x2004)],
                vec![Value::UBigInt(0), Value::UInteger(0x2024)],
                vec![Value::UBigInt(2), Value::UInteger(0x2084)],
            ],
            rows
        );

        let mut archive = self::archive();
        for i in 0..5 {
            archive = archive.with_node(message(0x2004 + i * 0x20, "IPM.Note"));
        }
        let opener: Arc<dyn MailboxOpener> =
            Arc::new(MemoryOpener::new().with_archive(archive));
        let bind = bind(
            &*opener,
            "read_pst_messages",
            &files(),
            &params(&[("partition_size", Value::UBigInt(2))]),
        )
        .unwrap();
        let global = bind
            .init_global(
                vec![ColumnId::NodeId],
                Some(&PushdownFilter {
                    partition_index: None,
                    node_id: Some(ScalarFilter::Or(vec![
                        ScalarFilter::Eq(0x2024),
                        ScalarFilter::GtEq(0x2084),
                    ])),
                }),
            )
            .unwrap();
        assert_eq!(2, global.cardinality());
        assert_eq!(2, global.max_parallelism());

        let mut local = init_local(&global, &opener, 0);
        let mut batch = RowBatch::new(1, 10);
        assert_eq!(2, scan(&mut local, &mut batch).unwrap());
        assert_eq!(
            &[Value::UInteger(0x2024), Value::UInteger(0x2084)],
            batch.column(0)
        );
        assert_eq!(0, scan(&mut local, &mut batch).unwrap());
    }

    #[test]
    fn message_details() {
        let opener = MemoryOpener::new().with_archive(
            archive().with_node(
                message(0x2004, "IPM.Note")
                    .with_prop(tags::SUBJECT, unicode("Greetings"))
                    .with_prop(tags::BODY, unicode("Hello world"))
                    .with_prop(tags::PRIORITY, PropValue::Int32(1))
                    .with_prop(tags::IMPORTANCE, PropValue::Int32(9))
                    .with_recipient(
                        MemoryBag::default()
                            .with(tags::DISPLAY_NAME, unicode("Bob"))
                            .with(tags::EMAIL_ADDRESS, unicode("bob@x"))
                            .with(tags::ADDRESS_TYPE, unicode("SMTP"))
                            .with(tags::RECIPIENT_TYPE, PropValue::Int32(1)),
                    )
                    .with_broken_recipient("bad row")
                    .with_attachment(
                        MemoryBag::default()
                            .with(tags::ATTACH_METHOD, PropValue::Int32(1))
                            .with(tags::ATTACH_FILENAME, unicode("a.txt"))
                            .with(
                                tags::ATTACH_DATA,
                                PropValue::Binary(b"hello".to_vec()),
                            ),
                    )
                    .with_attachment(
                        MemoryBag::default()
                            .with(tags::ATTACH_METHOD, PropValue::Int32(5)),
                    )
                    .with_broken_attachment("bad attachment"),
            ),
        );

        let (_, rows) = run(
            opener,
            "read_pst_messages",
            &[
                ("read_body_size_bytes", Value::UBigInt(4)),
                ("read_attachment_body", Value::Boolean(true)),
            ],
            &[
                "subject",
                "body",
                "priority",
                "importance",
                "has_attachments",
                "attachment_count",
                "recipients",
                "attachments",
            ],
            None,
        )
        .unwrap();

        assert_eq!(
            vec![vec![
                varchar("Greetings"),
                varchar("He"),
                Value::Enum(2),
                Value::Null,
                Value::Boolean(true),
                Value::UInteger(3),
                Value::List(vec![
                    Value::Struct(vec![
                        varchar("Bob"),
                        Value::Null,
                        varchar("bob@x"),
                        varchar("SMTP"),
                        Value::Enum(1),
                        Value::Integer(1),
                    ]),
                    Value::Null,
                ]),
                Value::List(vec![
                    Value::Struct(vec![
                        Value::Null,
                        Value::Enum(1),
                        varchar("a.txt"),
                        Value::Null,
                        Value::Null,
                        Value::Null,
                        Value::UBigInt(5),
                        Value::Boolean(false),
                        Value::Blob(b"hello".to_vec()),
                    ]),
                    Value::Struct(vec![
                        Value::Null,
                        Value::Enum(5),
                        Value::Null,
                        Value::Null,
                        Value::Null,
                        Value::Null,
                        Value::Null,
                        Value::Boolean(true),
                        Value::Null,
                    ]),
                    // The unreadable attachment leaves its siblings intact
                    Value::Null,
                ]),
            ]],
            rows
        );
    }

    #[test]
    fn notes_include_unknown_classes() {
        let opener = MemoryOpener::new().with_archive(
            archive()
                .with_node(message(0x2004, "IPM.Note.SMIME"))
                .with_node(message(0x2024, "IPM.Contact"))
                .with_node(message(0x2044, "IPM.Schedule.Meeting.Request"))
                .with_node(MemoryNode::message(0x2064, INBOX)),
        );

        let (_, rows) =
            run(opener, "read_pst_notes", &[], &["node_id"], None).unwrap();
        assert_eq!(
            vec![
                vec![Value::UInteger(0x2004)],
                vec![Value::UInteger(0x2044)],
                vec![Value::UInteger(0x2064)],
            ],
            rows
        );
    }

    #[test]
    fn contacts() {
        let opener = MemoryOpener::new().with_archive(
            archive()
                .with_node(message(0x2004, "IPM.Note"))
                .with_node(
                    message(0x2024, "IPM.Contact")
                        .with_prop(tags::GIVEN_NAME, unicode("Ada"))
                        .with_prop(tags::SURNAME, unicode("Lovelace"))
                        .with_prop(tags::GENDER, PropValue::Int16(1))
                        .with_prop(
                            tags::BIRTHDAY,
                            PropValue::Time(132_223_104_000_000_000),
                        ),
                ),
        );

        let (bind, rows) = run(
            opener,
            "read_pst_contacts",
            &[],
            &["message_class", "given_name", "surname", "gender", "nickname"],
            None,
        )
        .unwrap();

        assert_eq!(1, bind.cardinality());
        assert_eq!(
            vec![vec![
                varchar("IPM.Contact"),
                varchar("Ada"),
                varchar("Lovelace"),
                Value::SmallInt(1),
                Value::Null,
            ]],
            rows
        );
    }

    #[test]
    fn appointments() {
        let opener = MemoryOpener::new().with_archive(
            archive()
                .with_named(named::LOCATION, 0x8001)
                .with_node(
                    message(0x2004, "IPM.Appointment")
                        .with_prop(0x8001, unicode("Room 1"))
                        .with_prop(tags::SENSITIVITY, PropValue::Int32(2))
                        .with_prop(
                            tags::SENT_REPRESENTING_NAME,
                            unicode("Alice"),
                        ),
                )
                .with_node(
                    message(0x2024, "IPM.Appointment")
                        .with_prop(tags::SENSITIVITY, PropValue::Int32(1)),
                ),
        );

        let (_, rows) = run(
            opener,
            "read_pst_appointments",
            &[],
            &["location", "is_private", "organizer_name", "start_time"],
            None,
        )
        .unwrap();

        assert_eq!(
            vec![
                vec![
                    varchar("Room 1"),
                    Value::Boolean(true),
                    varchar("Alice"),
                    Value::Null,
                ],
                vec![
                    Value::Null,
                    Value::Boolean(false),
                    Value::Null,
                    Value::Null,
                ],
            ],
            rows
        );
    }

    #[test]
    fn sticky_notes_and_tasks() {
        let opener = MemoryOpener::new().with_archive(
            archive()
                .with_named(named::NOTE_COLOR, 0x8001)
                .with_named(named::PERCENT_COMPLETE, 0x8002)
                .with_named(named::TASK_COMPLETE, 0x8003)
                .with_node(
                    message(0x2004, "IPM.StickyNote")
                        .with_prop(0x8001, PropValue::Int32(3)),
                )
                .with_node(
                    message(0x2024, "IPM.Task")
                        .with_prop(0x8002, PropValue::Float64(0.5))
                        .with_prop(0x8003, PropValue::Boolean(false)),
                ),
        );

        let (_, rows) = run(
            opener,
            "read_pst_sticky_notes",
            &[],
            &["note_color", "note_width"],
            None,
        )
        .unwrap();
        assert_eq!(vec![vec![Value::Integer(3), Value::Null]], rows);

        let opener = MemoryOpener::new().with_archive(
            archive()
                .with_named(named::PERCENT_COMPLETE, 0x8002)
                .with_named(named::TASK_COMPLETE, 0x8003)
                .with_node(
                    message(0x2024, "IPM.Task")
                        .with_prop(0x8002, PropValue::Float64(0.5))
                        .with_prop(0x8003, PropValue::Boolean(false)),
                ),
        );
        let (_, rows) = run(
            opener,
            "read_pst_tasks",
            &[],
            &["percent_complete", "is_complete", "task_owner"],
            None,
        )
        .unwrap();
        assert_eq!(
            vec![vec![Value::Double(0.5), Value::Boolean(false), Value::Null]],
            rows
        );
    }

    fn dist_list_archive(members: Vec<Vec<u8>>) -> MemoryArchive {
        archive()
            .with_named(named::DISTRIBUTION_LIST_NAME, 0x8001)
            .with_named(named::DISTRIBUTION_LIST_ONE_OFF_MEMBERS, 0x8002)
            .with_named(named::DISTRIBUTION_LIST_MEMBERS, 0x8003)
            .with_node(
                message(0x2004, "IPM.DistList")
                    .with_prop(0x8001, unicode("Team"))
                    .with_prop(
                        0x8002,
                        PropValue::MultiBinary(vec![
                            one_off("Zoë", "SMTP", "zoe@x", true),
                            one_off("Yan", "SMTP", "yan@x", false),
                        ]),
                    )
                    .with_prop(0x8003, PropValue::MultiBinary(members)),
            )
    }

    #[test]
    fn distribution_lists() {
        let opener = MemoryOpener::new().with_archive(dist_list_archive(vec![
            wrapped(WRAPPED_TYPE_CONTACT, 0x2224),
            one_off("Zoë", "SMTP", "zoe@x", true),
        ]));

        let (_, rows) = run(
            opener,
            "read_pst_distribution_lists",
            &[],
            &["list_name", "one_off_members", "member_node_ids"],
            None,
        )
        .unwrap();

        assert_eq!(
            vec![vec![
                varchar("Team"),
                Value::List(vec![
                    Value::Struct(vec![
                        varchar("Zoë"),
                        varchar("SMTP"),
                        varchar("zoe@x"),
                    ]),
                    Value::Struct(vec![
                        varchar("Yan"),
                        varchar("SMTP"),
                        varchar("yan@x"),
                    ]),
                ]),
                Value::List(vec![Value::UInteger(0x2224)]),
            ]],
            rows
        );
    }

    #[test]
    fn unknown_member_provider_aborts_scan() {
        let mut bogus = wrapped(WRAPPED_TYPE_CONTACT, 0x2224);
        bogus[4] ^= 0xFF;
        let opener = MemoryOpener::new()
            .with_archive(dist_list_archive(vec![bogus]));

        assert_matches!(
            Err(Error::UnknownEntryIdProvider(..)),
            run(
                opener,
                "read_pst_distribution_lists",
                &[],
                &["list_name", "member_node_ids"],
                None,
            )
        );
    }
}
