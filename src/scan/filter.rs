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

//! Predicates the host may push down onto the virtual columns.

/// A predicate over a single non-null unsigned value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScalarFilter {
    Eq(u64),
    NotEq(u64),
    Lt(u64),
    LtEq(u64),
    Gt(u64),
    GtEq(u64),
    In(Vec<u64>),
    /// Virtual columns are never null, so this never matches.
    IsNull,
    IsNotNull,
    And(Vec<ScalarFilter>),
    Or(Vec<ScalarFilter>),
}

impl ScalarFilter {
    pub fn matches(&self, v: u64) -> bool {
        match *self {
            ScalarFilter::Eq(c) => v == c,
            ScalarFilter::NotEq(c) => v != c,
            ScalarFilter::Lt(c) => v < c,
            ScalarFilter::LtEq(c) => v <= c,
            ScalarFilter::Gt(c) => v > c,
            ScalarFilter::GtEq(c) => v >= c,
            ScalarFilter::In(ref values) => values.contains(&v),
            ScalarFilter::IsNull => false,
            ScalarFilter::IsNotNull => true,
            ScalarFilter::And(ref filters) => {
                filters.iter().all(|f| f.matches(v))
            },
            ScalarFilter::Or(ref filters) => {
                filters.iter().any(|f| f.matches(v))
            },
        }
    }
}

/// Predicates on the virtual columns of a scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushdownFilter {
    pub partition_index: Option<ScalarFilter>,
    pub node_id: Option<ScalarFilter>,
}

impl PushdownFilter {
    pub fn is_empty(&self) -> bool {
        self.partition_index.is_none() && self.node_id.is_none()
    }

    pub fn keeps_partition(&self, index: u64) -> bool {
        self.partition_index
            .as_ref()
            .map_or(true, |f| f.matches(index))
    }

    pub fn keeps_node(&self, node_id: u32) -> bool {
        self.node_id
            .as_ref()
            .map_or(true, |f| f.matches(node_id.into()))
    }
}
