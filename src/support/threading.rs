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

//! Utilities for working with threads.
//!
//! Everything here uses scoped threads, so once a call returns, any threads
//! it spawned have been cleaned up.

use std::sync::Mutex;

use lazy_static::lazy_static;

lazy_static! {
    static ref MAX_THREADS: usize = std::env::var("PSTSCAN_MAX_THREADS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or_else(num_cpus::get);
}

/// The maximum number of threads any one operation may use.
pub fn max_threads() -> usize {
    *MAX_THREADS
}

/// Apply `mapper` to every input, using up to `max_threads` threads.
///
/// Outputs are returned in the same order as the inputs, regardless of the
/// order in which they were computed.
pub fn map_concurrently<I: Send, O: Send>(
    inputs: Vec<I>,
    max_threads: usize,
    mapper: impl Fn(I) -> O + Sync,
) -> Vec<O> {
    let nthreads = max_threads.min(inputs.len());
    if nthreads <= 1 {
        return inputs.into_iter().map(mapper).collect();
    }

    let (input_send, input_recv) = crossbeam::channel::unbounded();
    for input in inputs.into_iter().enumerate() {
        input_send.send(input).unwrap();
    }
    drop(input_send);

    let outputs = Mutex::new(Vec::<(usize, O)>::new());
    crossbeam::scope(|s| {
        for _ in 0..nthreads {
            let input_recv = input_recv.clone();
            let mapper = &mapper;
            let outputs = &outputs;
            s.spawn(move |_| {
                for (ix, input) in input_recv.iter() {
                    let output = mapper(input);
                    outputs.lock().unwrap().push((ix, output));
                }
            });
        }
    })
    .unwrap();

    let mut outputs = outputs.into_inner().unwrap();
    outputs.sort_unstable_by_key(|&(ix, _)| ix);
    outputs.into_iter().map(|(_, output)| output).collect()
}
