// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the API crate.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod export_tests;
mod helpers;
mod recording_tests;
mod roster_tests;
