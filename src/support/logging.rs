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

use std::path::Path;

use log4rs::config::Deserializers;

use super::error::Error;

/// Initialise `log4rs` from the given configuration file.
///
/// Hosts embedding the scanner call this once at startup if they want its
/// log output routed somewhere other than their own logger.
pub fn init_file(path: &Path) -> Result<(), Error> {
    log4rs::init_file(path, Deserializers::default())
        .map_err(|e| Error::Logging(e.to_string()))
}
