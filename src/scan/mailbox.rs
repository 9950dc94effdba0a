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

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::mapi::{MailboxFile, MailboxOpener, NamedProp, PropId};
use crate::support::error::Error;

/// An open archive plus the named-property ids resolved against it so far.
///
/// Named-property ids are only meaningful within the file that assigned
/// them, so the cache lives and dies with the handle.
pub struct OpenMailbox {
    path: Arc<Path>,
    file: Box<dyn MailboxFile>,
    named: RefCell<HashMap<NamedProp, Option<PropId>>>,
}

impl OpenMailbox {
    pub fn open(
        opener: &dyn MailboxOpener,
        path: &Arc<Path>,
    ) -> Result<Self, Error> {
        let file = opener.open(path)?;
        Ok(Self::new(Arc::clone(path), file))
    }

    pub fn new(path: Arc<Path>, file: Box<dyn MailboxFile>) -> Self {
        Self {
            path,
            file,
            named: RefCell::new(HashMap::new()),
        }
    }

    /// The path this handle was opened from, which is not necessarily the
    /// form the archive itself reports.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &dyn MailboxFile {
        &*self.file
    }

    /// Resolve `prop` to this file's property id for it.
    ///
    /// Both hits and misses are cached; lookup errors are not.
    pub fn named_tag(&self, prop: NamedProp) -> Result<PropId, Error> {
        let cached = self.named.borrow().get(&prop).copied();
        let tag = match cached {
            Some(tag) => tag,
            None => {
                let tag = self.file.lookup_named_prop(&prop.set, prop.id)?;
                self.named.borrow_mut().insert(prop, tag);
                tag
            },
        };

        tag.ok_or(Error::UnmappedNamedProp(prop.name))
    }
}
