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

//! Chrono helpers: panicking constructors for values that are obviously
//! valid, plus conversion from Windows FILETIME ticks.

use chrono::prelude::*;

/// Seconds between 1601-01-01 and 1970-01-01.
pub const FILETIME_UNIX_OFFSET_SECS: i64 = 11_644_473_600;
/// FILETIME ticks are 100 ns each.
pub const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;

pub trait NaiveDateX {
    fn from_ymdx(y: i32, m: u32, d: u32) -> Self;
    fn and_hmsx(&self, h: u32, m: u32, s: u32) -> NaiveDateTime;
    fn and_hmsx_utc(&self, h: u32, m: u32, s: u32) -> DateTime<Utc>;
}

impl NaiveDateX for NaiveDate {
    fn from_ymdx(y: i32, m: u32, d: u32) -> Self {
        Self::from_ymd_opt(y, m, d).unwrap()
    }

    fn and_hmsx(&self, h: u32, m: u32, s: u32) -> NaiveDateTime {
        self.and_hms_opt(h, m, s).unwrap()
    }

    fn and_hmsx_utc(&self, h: u32, m: u32, s: u32) -> DateTime<Utc> {
        self.and_hmsx(h, m, s).and_utc()
    }
}

/// Convert FILETIME ticks to a UTC timestamp with whole-second precision.
///
/// Sub-second ticks are discarded. Returns `None` only if chrono cannot
/// represent the result.
pub fn from_filetime(ticks: u64) -> Option<DateTime<Utc>> {
    let secs =
        (ticks / FILETIME_TICKS_PER_SEC) as i64 - FILETIME_UNIX_OFFSET_SECS;
    DateTime::from_timestamp(secs, 0)
}
