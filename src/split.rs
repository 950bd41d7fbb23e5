//! Delimiter tokenizer.
//!
//! [`StrView::chop_delim`] is the loop-driven primitive, and
//! [`StrView::split_delim`] wraps it in an iterator. Runs of consecutive
//! delimiters collapse into one; a trailing delimiter does not produce a
//! trailing empty token.

use core::iter::FusedIterator;

use crate::view::END_POS;
use crate::view::StrView;

impl<'a> StrView<'a> {
  /// Chops `self` up to the next `delim` and stores the token before it in
  /// `out`.
  ///
  /// Once a delimiter is found, every directly following occurrence of it is
  /// chopped as well, so `"A    space"` split on `b' '` leaves `out` as `"A"`
  /// and `self` as `"space"`. If no delimiter is found, `out` takes the whole
  /// of `self` and `self` becomes the absent view.
  ///
  /// Returns `false`, leaving `out` untouched, only if `self` was already
  /// empty on entry. That makes it usable directly as a loop condition:
  ///
  /// ```rust
  /// # use sview::*;
  /// let mut input = sv!("A    space");
  /// let mut out = StrView::empty();
  ///
  /// assert!(input.chop_delim(b' ', &mut out));
  /// assert_eq!((out, input), (sv!("A"), sv!("space")));
  ///
  /// assert!(input.chop_delim(b' ', &mut out));
  /// assert_eq!(out, "space");
  /// assert!(input.is_empty());
  ///
  /// assert!(!input.chop_delim(b' ', &mut out));
  /// ```
  pub fn chop_delim(&mut self, delim: u8, out: &mut StrView<'a>) -> bool {
    if self.is_empty() {
      return false;
    }

    let bytes = self.as_bytes();
    match self.index_of_byte(delim) {
      END_POS => {
        *out = *self;
        *self = StrView::empty();
      }
      i => {
        let run = bytes[i..].iter().take_while(|&&b| b == delim).count();
        *out = StrView::new(&bytes[..i]);
        self.chop_left(i + run);
      }
    }

    true
  }

  /// Returns an iterator over the tokens [`chop_delim`] would produce.
  ///
  /// ```rust
  /// # use sview::*;
  /// let words: Vec<_> = sv!("crane\nslate\n\ntrace\n")
  ///   .split_delim(b'\n')
  ///   .collect();
  ///
  /// assert_eq!(words, ["crane", "slate", "trace"]);
  /// ```
  ///
  /// [`chop_delim`]: StrView::chop_delim
  #[inline]
  pub fn split_delim(&self, delim: u8) -> SplitDelim<'a> {
    SplitDelim { rest: *self, delim }
  }
}

/// Iterator returned by [`StrView::split_delim`].
#[derive(Debug, Clone)]
pub struct SplitDelim<'a> {
  rest: StrView<'a>,
  delim: u8,
}

impl<'a> SplitDelim<'a> {
  /// Returns the part of the input that has not been tokenized yet.
  #[inline]
  pub fn remainder(&self) -> StrView<'a> {
    self.rest
  }
}

impl<'a> Iterator for SplitDelim<'a> {
  type Item = StrView<'a>;

  fn next(&mut self) -> Option<StrView<'a>> {
    let mut token = StrView::empty();
    if self.rest.chop_delim(self.delim, &mut token) {
      Some(token)
    } else {
      None
    }
  }
}

impl FusedIterator for SplitDelim<'_> {}
