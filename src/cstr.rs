//! Interop with null-terminated strings: construction, comparison and
//! copying a view out into a terminated buffer.

use core::ffi::CStr;

use crate::error::InvalidArgumentError;
use crate::view::END_POS;
use crate::view::StrView;
use crate::view::bytes_eq;

impl<'a> StrView<'a> {
  /// Constructs a view over the bytes of `s` before its terminator.
  #[inline]
  pub fn from_cstr(s: &'a CStr) -> Self {
    StrView::new(s.to_bytes())
  }

  /// Constructs a view of `len` bytes of `s` starting at `start`.
  ///
  /// - If `len` is 0, or `start` is at or beyond the end of `s`, the absent
  ///   view is returned.
  /// - If `len` is [`END_POS`] or reaches past the end, the result captures
  ///   from `start` to the end.
  ///
  /// Unlike [`StrView::substr`], a `start` exactly at the end of `s` is
  /// rejected.
  ///
  /// ```rust
  /// # use sview::*;
  /// assert_eq!(StrView::from_sub_cstr(1, 3, c"hello"), "ell");
  /// assert!(StrView::from_sub_cstr(5, 3, c"hello").is_absent());
  /// ```
  pub fn from_sub_cstr(start: usize, len: usize, s: &'a CStr) -> Self {
    let bytes = s.to_bytes();
    if len == 0 || start >= bytes.len() {
      return StrView::empty();
    }

    let available = bytes.len() - start;
    let len = if len == END_POS || len > available {
      available
    } else {
      len
    };

    StrView::new(&bytes[start..start + len])
  }

  /// Returns `true` if the view holds exactly the bytes of `s` before its
  /// terminator.
  #[inline]
  pub fn eq_cstr(&self, s: &CStr) -> bool {
    bytes_eq(self.as_bytes(), s.to_bytes())
  }

  /// Copies the view into `buf` and appends a terminating zero byte.
  ///
  /// At most `buf.len() - 1` bytes are copied, so a view longer than the
  /// buffer is truncated and the result is still terminated. Returns the
  /// written part of `buf`, terminator included. Nothing past it is touched.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgumentError`] if `buf` is empty, since there is no
  /// room even for the terminator.
  ///
  /// ```rust
  /// # use sview::*;
  /// let mut buf = [0xAAu8; 4];
  /// let written = sv!("hello").copy_to_cstr(&mut buf)?;
  ///
  /// assert_eq!(written, b"hel\0");
  /// # Ok::<(), InvalidArgumentError>(())
  /// ```
  pub fn copy_to_cstr<'b>(
    &self,
    buf: &'b mut [u8],
  ) -> Result<&'b [u8], InvalidArgumentError> {
    let Some(room) = buf.len().checked_sub(1) else {
      #[cfg(feature = "log")]
      log::debug!(
        "refusing to copy {} bytes into a zero-capacity buffer",
        self.len()
      );
      return Err(InvalidArgumentError);
    };

    let len = self.len().min(room);
    buf[..len].copy_from_slice(&self.as_bytes()[..len]);
    buf[len] = 0;

    Ok(&buf[..=len])
  }
}

impl<'a> From<&'a CStr> for StrView<'a> {
  #[inline(always)]
  fn from(s: &'a CStr) -> Self {
    StrView::from_cstr(s)
  }
}

impl PartialEq<CStr> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &CStr) -> bool {
    self.eq_cstr(other)
  }
}

impl PartialEq<&CStr> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &&CStr) -> bool {
    self.eq_cstr(other)
  }
}
