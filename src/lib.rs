//! # sview
//!
//! ### Non-owning byte string views
//!
//! This crate provides [`StrView`], a `(length, reference)` pair describing a
//! contiguous run of bytes inside a buffer owned by somebody else, and a set of
//! operations for slicing, searching, tokenizing and comparing such views
//! without ever copying or allocating the bytes they point at.
//!
//! ---
//!
//! ## [`StrView`]
//!
//! A view is a `Copy` value borrowing from its source buffer for the lifetime
//! `'a`. Operations that "mutate" a view ([`chop_left`], [`chop_right`],
//! [`chop_delim`]) only move or shrink the window held by the caller; no
//! operation ever writes through the reference.
//!
//! ### Example
//!
//! ```rust
//! use sview::END_POS;
//! use sview::StrView;
//! use sview::sv;
//!
//! let words = sv!("crane\nslate\ntrace\n");
//! assert_eq!(words.count(b'\n'), 3);
//!
//! let mut rest = words;
//! let mut word = StrView::empty();
//! while rest.chop_delim(b'\n', &mut word) {
//!   assert_eq!(word.len(), 5);
//! }
//!
//! let hello = sv!("hello world");
//! assert_eq!(hello.index_of("lo"), 3);
//! assert_eq!(hello.index_of("xyz"), END_POS);
//! // "not found" doubles as "to the end"
//! assert_eq!(hello.substr(6, hello.index_of_byte(b'!')), "world");
//! ```
//!
//! ## The sentinel
//!
//! [`END_POS`] is the one out-of-range index used both as a search result
//! ("not found") and as a length argument ("capture to the end"). Search
//! results can be passed straight into [`StrView::substr`].
//!
//! ## Empty views
//!
//! There are two kinds of empty view. The *absent* view
//! ([`StrView::empty`], [`Default`]) has no reference at all and is produced
//! whenever no range could be formed. An *anchored* empty view still points
//! into (or just past) its source. Content comparisons never tell them apart;
//! [`StrView::is_absent`] and [`StrView::as_ptr`] do.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! Everything except the output operations works without the standard
//! library and without an allocator.
//!
//! ---
//!
//! ## Features
//!
//! - `std`†: Enables [`StrView::write_to`], [`StrView::write_stdout`] and,
//!   on unix, [`StrView::write_fd`].
//! - `serde`†: Enables borrowing (de)serialization via Serde.
//! - `log`: Emits `debug` records through the `log` facade when an argument
//!   is rejected or a write comes up short. Silent otherwise.
//!
//! > † enabled by default
//!
//! [`chop_left`]: StrView::chop_left
//! [`chop_right`]: StrView::chop_right
//! [`chop_delim`]: StrView::chop_delim

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate core;

mod cstr;
pub mod error;
pub mod inline_cstr;
mod search;
pub mod split;
pub mod view;

#[cfg(feature = "std")]
mod io;

pub use error::*;
pub use inline_cstr::*;
pub use split::SplitDelim;
pub use view::*;

/// Constructs a [`StrView`] over a string literal at compile time.
///
/// The length is known statically, so no terminator scan takes place.
///
/// ```rust
/// use sview::StrView;
/// use sview::sv;
///
/// const GREETING: StrView<'static> = sv!("hi there");
/// assert_eq!(GREETING.len(), 8);
/// ```
#[macro_export]
macro_rules! sv {
  ($lit:literal) => {
    $crate::StrView::new(::core::primitive::str::as_bytes($lit))
  };
}
