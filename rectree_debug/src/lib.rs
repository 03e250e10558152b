// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for rectree diagnostics.
//!
//! This crate provides [`TreeSink`](rectree_core::trace::TreeSink)
//! implementations for development, plus the JSON writer for finished
//! layouts:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`json`] — writes a [`TreeLayout`](rectree_core::TreeLayout) in the
//!   renderer's JSON shape, and turns recorded events into a JSON log.

pub mod json;
pub mod pretty;
pub mod recorder;
