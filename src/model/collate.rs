// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Locale-aware string collation.
//!
//! Names are compared in three passes, in the same spirit as the default
//! Unicode collation order:
//!
//! 1. **Primary**: base letters only, accents stripped and case folded, so
//!    `"Émile"` sorts next to `"emile"` rather than after `"z"`.
//! 2. **Secondary**: accented forms after unaccented ones.
//! 3. **Tertiary**: lowercase before uppercase.
//!
//! Names that are still level after the three passes, such as a ligature and
//! its spelled-out letters, fall back to code point order. Two names only
//! compare equal when they are identical.
//!
//! Substring matching is deliberately simpler: only case is ignored, see
//! [`contains_ignore_case`].

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Compares two display names using the collation described above.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test. Accents and compatibility forms are
/// significant, `"cafe"` does not match `"café"`.
///
/// An empty (or whitespace only) needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn primary_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> String {
    s.nfkd().flat_map(char::to_lowercase).collect()
}

// Swap case so that lowercase letters order before their uppercase forms.
fn tertiary_key(s: &str) -> Vec<(bool, char)> {
    s.nfkd().map(|c| (c.is_uppercase(), c)).collect()
}
