use core::borrow::Borrow;
use core::cmp::Ordering;
use core::convert::AsRef;
use core::convert::TryFrom;
use core::ffi::CStr;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;
use core::str;

use crate::error::InvalidArgumentError;
use crate::view::StrView;

/// Owned, null-terminated copy of a view, stored inline in `N` bytes.
///
/// Holds at most `N - 1` bytes of content followed by a zero byte; longer
/// views are truncated when copied in. This is the bounded owned buffer for
/// handing view contents to something that expects a terminated string, or
/// for keeping them once the source buffer is gone.
///
/// `N` must be at least 1. Every constructor fails with
/// [`InvalidArgumentError`] for `InlineCStr<0>`.
///
/// # Example
///
/// ```rust
/// # use sview::*;
/// # fn main() -> Result<(), InvalidArgumentError> {
/// let guess: InlineCStr<6> = sv!("crane\n").to_inline_cstr()?;
/// assert_eq!(guess.as_bytes(), b"crane");
/// assert_eq!(guess.as_bytes_with_nul(), b"crane\0");
///
/// let short: InlineCStr<4> = sv!("crane").to_inline_cstr()?;
/// assert_eq!(short, "cra");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct InlineCStr<const N: usize> {
  buf: [u8; N],
  len: usize,
}

impl<const N: usize> InlineCStr<N> {
  /// Largest number of content bytes this type can hold.
  pub const MAX_LEN: usize = N.saturating_sub(1);

  /// Copies `view` into a new inline buffer, truncating to
  /// [`MAX_LEN`](Self::MAX_LEN) bytes.
  pub fn from_view(view: StrView<'_>) -> Result<Self, InvalidArgumentError> {
    let mut buf = [0u8; N];
    let len = view.copy_to_cstr(&mut buf)?.len() - 1;
    Ok(Self { buf, len })
  }

  /// Returns the length of the content, excluding the terminator.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns whether the content is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the content bytes, excluding the terminator.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf[..self.len]
  }

  /// Returns the content bytes followed by the terminator.
  #[inline]
  pub fn as_bytes_with_nul(&self) -> &[u8] {
    &self.buf[..=self.len]
  }

  /// Returns the content as a C string.
  ///
  /// If the copied view contained a zero byte, the C string ends there.
  #[inline]
  pub fn as_cstr(&self) -> &CStr {
    CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
  }

  /// Returns the content as a string slice, if it is valid UTF-8.
  #[inline]
  pub fn as_str(&self) -> Result<&str, str::Utf8Error> {
    str::from_utf8(self.as_bytes())
  }

  /// Returns a view borrowing from this buffer.
  #[inline]
  pub fn as_view(&self) -> StrView<'_> {
    StrView::new(self.as_bytes())
  }
}

impl StrView<'_> {
  /// Copies the view into an [`InlineCStr`], truncating to `N - 1` bytes.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgumentError`] if `N` is 0.
  #[inline]
  pub fn to_inline_cstr<const N: usize>(
    &self,
  ) -> Result<InlineCStr<N>, InvalidArgumentError> {
    InlineCStr::from_view(*self)
  }
}

impl<const N: usize> Display for InlineCStr<N> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(&self.as_view(), f)
  }
}

impl<const N: usize> Debug for InlineCStr<N> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Debug::fmt(&self.as_view(), f)
  }
}

impl<const N: usize> Deref for InlineCStr<N> {
  type Target = [u8];

  #[inline(always)]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> AsRef<[u8]> for InlineCStr<N> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> Borrow<[u8]> for InlineCStr<N> {
  #[inline(always)]
  fn borrow(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<'a, const N: usize> TryFrom<StrView<'a>> for InlineCStr<N> {
  type Error = InvalidArgumentError;

  #[inline(always)]
  fn try_from(view: StrView<'a>) -> Result<Self, InvalidArgumentError> {
    InlineCStr::from_view(view)
  }
}

impl<const N: usize> TryFrom<&str> for InlineCStr<N> {
  type Error = InvalidArgumentError;

  #[inline(always)]
  fn try_from(s: &str) -> Result<Self, InvalidArgumentError> {
    InlineCStr::from_view(StrView::from(s))
  }
}

impl<const N: usize> Hash for InlineCStr<N> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl<const N: usize, const M: usize> PartialEq<InlineCStr<M>>
  for InlineCStr<N>
{
  #[inline(always)]
  fn eq(&self, other: &InlineCStr<M>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> Eq for InlineCStr<N> {}

impl<const N: usize> PartialEq<StrView<'_>> for InlineCStr<N> {
  #[inline(always)]
  fn eq(&self, other: &StrView<'_>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<InlineCStr<N>> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &InlineCStr<N>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<str> for InlineCStr<N> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<&str> for InlineCStr<N> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialOrd for InlineCStr<N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<const N: usize> Ord for InlineCStr<N> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}
