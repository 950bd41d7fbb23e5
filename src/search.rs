//! Byte and sub-pattern search over a [`StrView`].
//!
//! Every search returns an offset relative to the start of the view, or
//! [`END_POS`] when nothing matched.
//!
//! An empty pattern never matches, not even at offset 0. This differs from
//! `str::find`, which treats the empty string as matching everywhere.

use core::convert::AsRef;

use crate::view::END_POS;
use crate::view::StrView;

impl StrView<'_> {
  /// Returns the offset of the first `c` in the view, or [`END_POS`].
  #[inline]
  pub fn index_of_byte(&self, c: u8) -> usize {
    self
      .as_bytes()
      .iter()
      .position(|&b| b == c)
      .unwrap_or(END_POS)
  }

  /// Returns the offset of the last `c` in the view, or [`END_POS`].
  ///
  /// Offsets are examined from `len - 1` down to and including 0.
  #[inline]
  pub fn last_index_of_byte(&self, c: u8) -> usize {
    self
      .as_bytes()
      .iter()
      .rposition(|&b| b == c)
      .unwrap_or(END_POS)
  }

  /// Returns the offset of the first occurrence of `pattern`, or
  /// [`END_POS`].
  ///
  /// ```rust
  /// # use sview::*;
  /// assert_eq!(sv!("hello world").index_of("lo"), 3);
  /// assert_eq!(sv!("hello world").index_of(""), END_POS);
  /// ```
  pub fn index_of(&self, pattern: impl AsRef<[u8]>) -> usize {
    let hay = self.as_bytes();
    let needle = pattern.as_ref();
    match candidates(hay, needle) {
      Some(last) => (0..=last)
        .find(|&i| matches_at(hay, needle, i))
        .unwrap_or(END_POS),
      None => END_POS,
    }
  }

  /// Returns the offset of the last occurrence of `pattern`, or
  /// [`END_POS`].
  ///
  /// ```rust
  /// # use sview::*;
  /// assert_eq!(sv!("lollipop").last_index_of("lo"), 0);
  /// assert_eq!(sv!("lollipop lo").last_index_of("lo"), 9);
  /// ```
  pub fn last_index_of(&self, pattern: impl AsRef<[u8]>) -> usize {
    let hay = self.as_bytes();
    let needle = pattern.as_ref();
    match candidates(hay, needle) {
      Some(last) => (0..=last)
        .rev()
        .find(|&i| matches_at(hay, needle, i))
        .unwrap_or(END_POS),
      None => END_POS,
    }
  }

  /// Returns `true` if `pattern` occurs somewhere in the view.
  #[inline]
  pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
    self.index_of(pattern) != END_POS
  }

  /// Counts the occurrences of `c`, e.g. the number of lines in a
  /// newline-terminated buffer.
  #[inline]
  pub fn count(&self, c: u8) -> usize {
    self.as_bytes().iter().filter(|&&b| b == c).count()
  }
}

/// Last valid starting offset for `needle`, or `None` if it cannot match.
#[inline]
fn candidates(hay: &[u8], needle: &[u8]) -> Option<usize> {
  if needle.is_empty() || needle.len() > hay.len() {
    return None;
  }
  Some(hay.len() - needle.len())
}

/// First-byte filter, then a full compare of the window at `i`.
#[inline]
fn matches_at(hay: &[u8], needle: &[u8], i: usize) -> bool {
  hay[i] == needle[0] && hay[i..i + needle.len()] == *needle
}
