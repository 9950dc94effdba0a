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

use crate::mapi::{MailboxNode, NodeId};
use crate::schema::MessageClass;

/// An opened node, tagged with what kind of thing it is.
pub enum Entity {
    Folder(Box<dyn MailboxNode>),
    Message {
        class: MessageClass,
        node: Box<dyn MailboxNode>,
    },
}

impl Entity {
    pub fn node(&self) -> &dyn MailboxNode {
        match *self {
            Entity::Folder(ref node) | Entity::Message { ref node, .. } => {
                &**node
            },
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match *self {
            Entity::Folder(..) => "folder",
            Entity::Message { class, .. } => class.name(),
        }
    }
}

/// One node produced by a scan, ready to be turned into a row.
pub struct ScanItem {
    pub node_id: NodeId,
    pub partition_index: u64,
    /// `None` if the node could not be opened.
    pub entity: Option<Entity>,
}
