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

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Tracks text that should be included in at the start of every log statement
/// made on behalf of a scan worker.
///
/// Clones of a `LogPrefix` share the same underlying data.
#[derive(Clone)]
pub struct LogPrefix {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Clone)]
struct Inner {
    worker: String,
    file: Option<String>,
    partition: Option<u64>,
}

impl LogPrefix {
    pub fn new(worker: String) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                worker,
                file: None,
                partition: None,
            })),
        }
    }

    pub fn deep_clone(&self) -> Self {
        let inner = self.inner.lock().unwrap();
        Self {
            inner: Arc::new(Mutex::new(Inner::clone(&inner))),
        }
    }

    pub fn set_file(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.inner.lock().unwrap().file = Some(sanitise(name));
    }

    pub fn set_partition(&self, index: u64) {
        self.inner.lock().unwrap().partition = Some(index);
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.file = None;
        inner.partition = None;
    }
}

impl fmt::Display for LogPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.lock().unwrap();
        write!(f, "{}", inner.worker)?;
        if inner.file.is_some() || inner.partition.is_some() {
            write!(f, "[")?;
            if let Some(ref file) = inner.file {
                write!(f, "{file}")?;
                if inner.partition.is_some() {
                    write!(f, " ")?;
                }
            }

            if let Some(partition) = inner.partition {
                write!(f, "part={partition}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

fn sanitise(mut s: String) -> String {
    s.retain(|c| !c.is_control());
    if let Some((truncate_len, _)) = s.char_indices().nth(64) {
        s.truncate(truncate_len);
    }

    s
}
