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

//! An in-memory mailbox facade for tests.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::mapi::*;
use crate::support::error::Error;

/// A property bag backed by a map.
#[derive(Clone, Debug, Default)]
pub struct MemoryBag {
    props: BTreeMap<PropId, PropValue>,
    broken: BTreeSet<PropId>,
    streamed: Arc<AtomicU64>,
}

impl MemoryBag {
    pub fn with(mut self, tag: PropId, value: PropValue) -> Self {
        self.props.insert(tag, value);
        self
    }

    /// Make `tag` present but unreadable.
    pub fn with_broken(mut self, tag: PropId) -> Self {
        self.broken.insert(tag);
        self
    }

    /// Total bytes handed out by streams opened on this bag or its clones.
    pub fn bytes_streamed(&self) -> u64 {
        self.streamed.load(Ordering::SeqCst)
    }

    fn check(&self, tag: PropId) -> Result<(), Error> {
        if self.broken.contains(&tag) {
            Err(Error::Archive(format!("property {:04X} is corrupt", tag)))
        } else {
            Ok(())
        }
    }

    fn stored(&self, tag: PropId) -> Result<Vec<u8>, Error> {
        self.check(tag)?;
        let value = self.props.get(&tag).ok_or_else(|| {
            Error::Archive(format!("property {:04X} not found", tag))
        })?;

        Ok(match *value {
            PropValue::Int16(v) => v.to_le_bytes().to_vec(),
            PropValue::Int32(v) => v.to_le_bytes().to_vec(),
            PropValue::Int64(v) => v.to_le_bytes().to_vec(),
            PropValue::Float64(v) => v.to_le_bytes().to_vec(),
            PropValue::Boolean(v) => vec![v as u8],
            PropValue::Time(v) => v.to_le_bytes().to_vec(),
            PropValue::Unicode(ref s) => {
                s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
            },
            PropValue::String8(ref b) | PropValue::Binary(ref b) => b.clone(),
            PropValue::MultiBinary(ref v) => v.concat(),
        })
    }
}

impl PropertyBag for MemoryBag {
    fn prop_type(&self, id: PropId) -> Option<PropType> {
        if self.broken.contains(&id) {
            return Some(PropType::Binary);
        }
        self.props.get(&id).map(PropValue::prop_type)
    }

    fn read_prop(&self, id: PropId) -> Result<Option<PropValue>, Error> {
        self.check(id)?;
        Ok(self.props.get(&id).cloned())
    }

    fn prop_size(&self, id: PropId) -> Result<u64, Error> {
        Ok(self.stored(id)?.len() as u64)
    }

    fn open_prop_stream(
        &self,
        id: PropId,
    ) -> Result<Box<dyn Read + '_>, Error> {
        Ok(Box::new(CountingReader {
            inner: io::Cursor::new(self.stored(id)?),
            count: &self.streamed,
        }))
    }
}

struct CountingReader<'a, R> {
    inner: R,
    count: &'a AtomicU64,
}

impl<R: Read> Read for CountingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count.fetch_add(n as u64, Ordering::SeqCst);
        Ok(n)
    }
}

/// A folder or message in a `MemoryArchive`.
#[derive(Clone, Debug)]
pub struct MemoryNode {
    id: NodeId,
    parent: NodeId,
    folder: bool,
    props: MemoryBag,
    recipients: Vec<Result<MemoryBag, String>>,
    attachments: Vec<Result<MemoryBag, String>>,
    subfolders: u32,
}

impl MemoryNode {
    fn new(id: NodeId, parent: NodeId, folder: bool) -> Self {
        Self {
            id,
            parent,
            folder,
            props: MemoryBag::default(),
            recipients: Vec::new(),
            attachments: Vec::new(),
            subfolders: 0,
        }
    }

    /// A folder; a folder which is its own parent is a root.
    pub fn folder(id: NodeId, parent: NodeId) -> Self {
        Self::new(id, parent, true)
    }

    pub fn message(id: NodeId, parent: NodeId) -> Self {
        Self::new(id, parent, false)
    }

    pub fn with_prop(mut self, tag: PropId, value: PropValue) -> Self {
        self.props = self.props.with(tag, value);
        self
    }

    pub fn with_broken_prop(mut self, tag: PropId) -> Self {
        self.props = self.props.with_broken(tag);
        self
    }

    pub fn with_recipient(mut self, recipient: MemoryBag) -> Self {
        self.recipients.push(Ok(recipient));
        self
    }

    pub fn with_broken_recipient(mut self, why: &str) -> Self {
        self.recipients.push(Err(why.to_owned()));
        self
    }

    pub fn with_attachment(mut self, attachment: MemoryBag) -> Self {
        self.attachments.push(Ok(attachment));
        self
    }

    pub fn with_broken_attachment(mut self, why: &str) -> Self {
        self.attachments.push(Err(why.to_owned()));
        self
    }

    fn is_child_folder_of(&self, parent: NodeId) -> bool {
        self.folder && self.parent == parent && self.id != parent
    }
}

fn sub_objects(objects: &[Result<MemoryBag, String>]) -> SubObjects {
    objects
        .iter()
        .map(|o| match *o {
            Ok(ref bag) => Ok(Box::new(bag.clone()) as Box<dyn PropertyBag>),
            Err(ref why) => Err(Error::Archive(why.clone())),
        })
        .collect()
}

impl MailboxNode for MemoryNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn parent_id(&self) -> NodeId {
        self.parent
    }

    fn props(&self) -> &dyn PropertyBag {
        &self.props
    }

    fn subfolder_count(&self) -> Result<u32, Error> {
        Ok(self.subfolders)
    }

    fn recipients(&self) -> Result<SubObjects, Error> {
        Ok(sub_objects(&self.recipients))
    }

    fn attachments(&self) -> Result<SubObjects, Error> {
        Ok(sub_objects(&self.attachments))
    }
}

/// The contents of one archive file.
#[derive(Debug)]
pub struct MemoryArchive {
    path: PathBuf,
    reported_path: Option<PathBuf>,
    store: MemoryBag,
    nodes: BTreeMap<NodeId, MemoryNode>,
    named: HashMap<(Guid, u32), PropId>,
    named_lookups: AtomicUsize,
}

impl MemoryArchive {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            reported_path: None,
            store: MemoryBag::default(),
            nodes: BTreeMap::new(),
            named: HashMap::new(),
            named_lookups: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make open handles report `path` instead of the path they were opened
    /// from, as a facade which canonicalises paths would.
    pub fn reporting_path(mut self, path: impl AsRef<Path>) -> Self {
        self.reported_path = Some(path.as_ref().to_owned());
        self
    }

    pub fn with_store_prop(mut self, tag: PropId, value: PropValue) -> Self {
        self.store = self.store.with(tag, value);
        self
    }

    pub fn with_node(mut self, node: MemoryNode) -> Self {
        self.nodes.insert(node.id, node);
        self
    }

    pub fn with_named(mut self, prop: NamedProp, tag: PropId) -> Self {
        self.named.insert((prop.set, prop.id), tag);
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn open_file(self: &Arc<Self>) -> Box<dyn MailboxFile> {
        Box::new(MemoryFile {
            archive: Arc::clone(self),
        })
    }

    /// The number of named-property lookups made against this archive by
    /// any handle.
    pub fn named_lookups(&self) -> usize {
        self.named_lookups.load(Ordering::SeqCst)
    }

    fn nodes(
        &self,
        folders: bool,
        scope: Scope,
    ) -> Result<NodeIter<'_>, Error> {
        Ok(Box::new(
            self.nodes
                .values()
                .filter(move |n| {
                    n.folder == folders
                        && match scope {
                            Scope::File => true,
                            Scope::Folder(parent) => {
                                n.parent == parent && n.id != parent
                            },
                        }
                })
                .map(|n| Ok::<_, Error>(n.id)),
        ))
    }
}

struct MemoryFile {
    archive: Arc<MemoryArchive>,
}

impl MailboxFile for MemoryFile {
    fn path(&self) -> &Path {
        self.archive
            .reported_path
            .as_deref()
            .unwrap_or(&self.archive.path)
    }

    fn store_props(&self) -> &dyn PropertyBag {
        &self.archive.store
    }

    fn folder_nodes(&self, scope: Scope) -> Result<NodeIter<'_>, Error> {
        self.archive.nodes(true, scope)
    }

    fn message_nodes(&self, scope: Scope) -> Result<NodeIter<'_>, Error> {
        self.archive.nodes(false, scope)
    }

    fn open_node(&self, id: NodeId) -> Result<Box<dyn MailboxNode>, Error> {
        let mut node = self
            .archive
            .nodes
            .get(&id)
            .cloned()
            .ok_or(Error::NodeNotFound(id))?;
        if node.folder {
            node.subfolders = self
                .archive
                .nodes
                .values()
                .filter(|n| n.is_child_folder_of(id))
                .count() as u32;
        }
        Ok(Box::new(node))
    }

    fn lookup_named_prop(
        &self,
        set: &Guid,
        id: u32,
    ) -> Result<Option<PropId>, Error> {
        self.archive.named_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.archive.named.get(&(*set, id)).copied())
    }
}

/// Opens `MemoryArchive`s by path and records every open.
#[derive(Debug, Default)]
pub struct MemoryOpener {
    archives: HashMap<PathBuf, Arc<MemoryArchive>>,
    failing: HashSet<PathBuf>,
    open_log: Mutex<Vec<PathBuf>>,
}

impl MemoryOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archive(mut self, archive: MemoryArchive) -> Self {
        self.archives
            .insert(archive.path.clone(), archive.into_shared());
        self
    }

    /// Make `path` exist but fail to open as an archive.
    pub fn with_failing(mut self, path: impl AsRef<Path>) -> Self {
        self.failing.insert(path.as_ref().to_owned());
        self
    }

    /// The number of successful opens so far.
    pub fn opens(&self) -> usize {
        self.open_log.lock().unwrap().len()
    }

    pub fn open_log(&self) -> Vec<PathBuf> {
        self.open_log.lock().unwrap().clone()
    }
}

impl MailboxOpener for MemoryOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn MailboxFile>, Error> {
        if self.failing.contains(path) {
            return Err(Error::Archive(format!(
                "{} is not an archive",
                path.display()
            )));
        }

        let archive = self.archives.get(path).ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })?;
        self.open_log.lock().unwrap().push(path.to_owned());
        Ok(archive.open_file())
    }
}
