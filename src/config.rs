// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Process-wide configuration for how string length is measured.
//!
//! Quill counts characters by extended grapheme cluster so that an emoji or
//! a combining accent occupies a single cursor position, matching what a
//! user sees on screen. Measuring raw bytes instead is cheaper and is
//! sometimes preferred on servers that only relay deltas without rendering
//! them. This module exposes a single global toggle for that choice; every
//! peer exchanging deltas over the wire must agree on the same setting, or
//! operation lengths will not line up.

use std::sync::atomic::{AtomicBool, Ordering};
use unicode_segmentation::UnicodeSegmentation;

static SUPPORT_UNICODE: AtomicBool = AtomicBool::new(true);

/// Sets the global grapheme-counting strategy.
///
/// `true` (the default) measures strings in extended grapheme clusters;
/// `false` measures raw bytes. This should be set once at process start-up,
/// before any delta is built: changing it mid-lifetime makes previously
/// computed lengths inconsistent with newly computed ones.
pub fn set_support_unicode(enabled: bool) {
    SUPPORT_UNICODE.store(enabled, Ordering::Relaxed);
}

/// Returns the current grapheme-counting strategy.
pub fn support_unicode() -> bool {
    SUPPORT_UNICODE.load(Ordering::Relaxed)
}

/// Length of `s` under the current counting strategy.
pub(crate) fn str_length(s: &str) -> usize {
    if support_unicode() {
        s.graphemes(true).count()
    } else {
        s.len()
    }
}

/// Substring of `s` from grapheme/byte index `start` (inclusive) to `end`
/// (exclusive), under the current counting strategy.
pub(crate) fn str_slice(s: &str, start: usize, end: usize) -> String {
    if support_unicode() {
        s.graphemes(true).skip(start).take(end - start).collect()
    } else {
        s[start..end].to_string()
    }
}
