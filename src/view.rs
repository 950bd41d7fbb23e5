use core::borrow::Borrow;
use core::cmp::Ordering;
use core::convert::AsRef;
use core::convert::From;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;
use core::ptr;
use core::slice;
use core::str;

/// Indicates the last or an unreachable position in a view.
///
/// Search operations return it when nothing matched, and range constructors
/// accept it as a length meaning "capture to the end". The two uses are the
/// same value on purpose, so a failed search can be fed directly into
/// [`StrView::substr`].
pub const END_POS: usize = usize::MAX;

/// Non-owning view of a contiguous run of bytes.
///
/// A `StrView` is a length and a reference into a buffer it does not own.
/// It never copies, extends, reallocates or frees that buffer. The lifetime
/// `'a` bounds every view (and every view derived from it) by the lifetime of
/// the source buffer, so a view cannot outlive the memory it points into.
///
/// Views are plain `Copy` values. Two views may overlap or alias the same
/// bytes freely since nothing ever writes through them.
///
/// # Example
///
/// ```rust
/// # use sview::*;
/// let text = String::from("key = value");
/// let view = StrView::from(text.as_str());
///
/// let eq = view.index_of_byte(b'=');
/// let mut key = view.substr(0, eq);
/// key.chop_right(1);
///
/// assert_eq!(key, "key");
/// assert_eq!(view.substr(eq + 2, END_POS), "value");
/// ```
#[derive(Clone, Copy, Default)]
pub struct StrView<'a> {
  /// `None` is the absent view; `Some(&[])` is an anchored empty view.
  data: Option<&'a [u8]>,
}

impl<'a> StrView<'a> {
  /// Creates a view over all of `bytes`.
  #[inline]
  pub const fn new(bytes: &'a [u8]) -> Self {
    Self { data: Some(bytes) }
  }

  /// Returns the absent empty view, which has no reference at all.
  #[inline]
  pub const fn empty() -> Self {
    Self { data: None }
  }

  /// Creates a view from a raw pointer and a length, without validation.
  ///
  /// A null `ptr` yields the absent view regardless of `len`.
  ///
  /// # Safety
  ///
  /// Unless `ptr` is null, it must be valid for reads of `len` bytes for the
  /// whole lifetime `'a`, and the bytes must not be mutated during that time.
  /// This is the usual contract for memory handed out by a mapping or a
  /// foreign allocator: the owner must keep it alive until every view derived
  /// from it is gone.
  #[inline]
  pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
    if ptr.is_null() {
      return Self::empty();
    }
    // SAFETY: upheld by the caller.
    Self::new(unsafe { slice::from_raw_parts(ptr, len) })
  }

  /// Returns the number of bytes in the view.
  #[inline]
  pub const fn len(&self) -> usize {
    self.as_bytes().len()
  }

  /// Returns `true` if the view holds no bytes, whether absent or anchored.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns `true` for the absent empty view.
  #[inline]
  pub const fn is_absent(&self) -> bool {
    self.data.is_none()
  }

  /// Returns the viewed bytes, borrowed from the source buffer rather than
  /// from `self`.
  #[inline]
  pub const fn as_bytes(&self) -> &'a [u8] {
    match self.data {
      Some(bytes) => bytes,
      None => &[],
    }
  }

  /// Returns the address of the first viewed byte, or null for the absent
  /// view.
  #[inline]
  pub const fn as_ptr(&self) -> *const u8 {
    match self.data {
      Some(bytes) => bytes.as_ptr(),
      None => ptr::null(),
    }
  }

  /// Returns `true` if both views have the same reference and length.
  #[inline]
  pub fn ptr_eq(&self, other: &StrView<'_>) -> bool {
    self.len() == other.len() && ptr::eq(self.as_ptr(), other.as_ptr())
  }

  /// Returns the viewed bytes as a string slice, if they are valid UTF-8.
  #[inline]
  pub fn as_str(&self) -> Result<&'a str, str::Utf8Error> {
    str::from_utf8(self.as_bytes())
  }

  /// Constructs a view of `len` bytes starting at `start` within this view.
  ///
  /// - If `len` is 0, or `start` lies beyond the end of the view, the absent
  ///   view is returned.
  /// - If `len` is [`END_POS`] or reaches past the end, the result captures
  ///   from `start` to the end.
  ///
  /// A `start` exactly equal to the length is accepted and yields an empty
  /// view anchored one past the last byte. [`StrView::from_sub_cstr`]
  /// rejects that same offset.
  ///
  /// ```rust
  /// # use sview::*;
  /// let hello = sv!("hello");
  /// assert_eq!(hello.substr(1, 3), "ell");
  /// assert_eq!(hello.substr(3, END_POS), "lo");
  /// assert!(hello.substr(6, 1).is_absent());
  ///
  /// let tail = hello.substr(5, 3);
  /// assert!(tail.is_empty() && !tail.is_absent());
  /// ```
  pub fn substr(&self, start: usize, len: usize) -> StrView<'a> {
    let Some(bytes) = self.data else {
      return StrView::empty();
    };
    if len == 0 || start > bytes.len() {
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

  /// Chops `n` bytes from the start of the view.
  ///
  /// Any `n` greater than or equal to the length leaves the view empty.
  #[inline]
  pub fn chop_left(&mut self, n: usize) {
    if n == 0 {
      return;
    }
    if let Some(bytes) = self.data {
      self.data = Some(if n >= bytes.len() {
        &bytes[..0]
      } else {
        &bytes[n..]
      });
    }
  }

  /// Chops `n` bytes from the end of the view.
  ///
  /// Any `n` greater than or equal to the length leaves the view empty.
  #[inline]
  pub fn chop_right(&mut self, n: usize) {
    if n == 0 {
      return;
    }
    if let Some(bytes) = self.data {
      self.data = Some(&bytes[..bytes.len() - n.min(bytes.len())]);
    }
  }

  /// Returns `true` if the view begins with `prefix`.
  ///
  /// ```rust
  /// # use sview::*;
  /// assert!(sv!("hello").starts_with("he"));
  /// assert!(!sv!("he").starts_with("hello"));
  /// ```
  pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
    let prefix = prefix.as_ref();
    if prefix.len() > self.len() {
      return false;
    }
    bytes_eq(prefix, &self.as_bytes()[..prefix.len()])
  }

  /// Returns `true` if the view ends with `suffix`.
  pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
    let suffix = suffix.as_ref();
    if suffix.len() > self.len() {
      return false;
    }
    bytes_eq(suffix, &self.as_bytes()[self.len() - suffix.len()..])
  }
}

/// Byte-exact equality with an address short-circuit: identical reference and
/// length imply identical content.
#[inline]
pub(crate) fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  if ptr::eq(a.as_ptr(), b.as_ptr()) {
    return true;
  }
  a == b
}

impl Display for StrView<'_> {
  /// Writes exactly the viewed bytes, without honoring width or precision.
  /// Bytes that are not valid UTF-8 come out as U+FFFD, so binary content
  /// should go through [`StrView::write_to`] instead, which is byte-exact.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for chunk in self.as_bytes().utf8_chunks() {
      f.write_str(chunk.valid())?;
      if !chunk.invalid().is_empty() {
        f.write_char(char::REPLACEMENT_CHARACTER)?;
      }
    }
    Ok(())
  }
}

impl Debug for StrView<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "b\"{}\"", self.as_bytes().escape_ascii())
  }
}

impl Deref for StrView<'_> {
  type Target = [u8];

  #[inline(always)]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for StrView<'_> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl Borrow<[u8]> for StrView<'_> {
  #[inline(always)]
  fn borrow(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
  #[inline(always)]
  fn from(bytes: &'a [u8]) -> Self {
    StrView::new(bytes)
  }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StrView<'a> {
  #[inline(always)]
  fn from(bytes: &'a [u8; N]) -> Self {
    StrView::new(bytes)
  }
}

impl<'a> From<&'a str> for StrView<'a> {
  #[inline(always)]
  fn from(s: &'a str) -> Self {
    StrView::new(s.as_bytes())
  }
}

impl<'a> From<StrView<'a>> for &'a [u8] {
  #[inline(always)]
  fn from(view: StrView<'a>) -> Self {
    view.as_bytes()
  }
}

impl Hash for StrView<'_> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl<'b> PartialEq<StrView<'b>> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &StrView<'b>) -> bool {
    bytes_eq(self.as_bytes(), other.as_bytes())
  }
}

impl Eq for StrView<'_> {}

impl PartialEq<[u8]> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &[u8]) -> bool {
    bytes_eq(self.as_bytes(), other)
  }
}

impl PartialEq<&[u8]> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &&[u8]) -> bool {
    bytes_eq(self.as_bytes(), other)
  }
}

impl<const N: usize> PartialEq<[u8; N]> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &[u8; N]) -> bool {
    bytes_eq(self.as_bytes(), other)
  }
}

impl<const N: usize> PartialEq<&[u8; N]> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &&[u8; N]) -> bool {
    bytes_eq(self.as_bytes(), *other)
  }
}

impl PartialEq<str> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    bytes_eq(self.as_bytes(), other.as_bytes())
  }
}

impl PartialEq<&str> for StrView<'_> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    bytes_eq(self.as_bytes(), other.as_bytes())
  }
}

impl PartialEq<StrView<'_>> for str {
  #[inline(always)]
  fn eq(&self, other: &StrView<'_>) -> bool {
    bytes_eq(self.as_bytes(), other.as_bytes())
  }
}

impl PartialEq<StrView<'_>> for &str {
  #[inline(always)]
  fn eq(&self, other: &StrView<'_>) -> bool {
    bytes_eq(self.as_bytes(), other.as_bytes())
  }
}

impl PartialEq<StrView<'_>> for [u8] {
  #[inline(always)]
  fn eq(&self, other: &StrView<'_>) -> bool {
    bytes_eq(self, other.as_bytes())
  }
}

impl<'b> PartialOrd<StrView<'b>> for StrView<'_> {
  #[inline(always)]
  fn partial_cmp(&self, other: &StrView<'b>) -> Option<Ordering> {
    Some(self.as_bytes().cmp(other.as_bytes()))
  }
}

impl PartialOrd<str> for StrView<'_> {
  #[inline(always)]
  fn partial_cmp(&self, other: &str) -> Option<Ordering> {
    Some(self.as_bytes().cmp(other.as_bytes()))
  }
}

impl Ord for StrView<'_> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use core::fmt;
  use core::str;

  use serde::Deserialize;
  use serde::Deserializer;
  use serde::Serialize;
  use serde::Serializer;
  use serde::de;

  use super::*;

  impl Serialize for StrView<'_> {
    /// Serializes as a string when the bytes are valid UTF-8, and as a byte
    /// sequence otherwise.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      match str::from_utf8(self.as_bytes()) {
        Ok(s) => serializer.serialize_str(s),
        Err(_) => serializer.serialize_bytes(self.as_bytes()),
      }
    }
  }

  struct StrViewVisitor;

  impl<'de> de::Visitor<'de> for StrViewVisitor {
    type Value = StrView<'de>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
      formatter.write_str("a borrowed string or byte slice")
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(StrView::from(v))
    }

    fn visit_borrowed_bytes<E>(self, v: &'de [u8]) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(StrView::new(v))
    }
  }

  /// A view can only be deserialized by borrowing from the input. Input that
  /// the deserializer has to unescape or copy is rejected.
  impl<'a, 'de: 'a> Deserialize<'de> for StrView<'a> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_str(StrViewVisitor)
    }
  }
}

#[cfg(test)]
mod tests {
  use quickcheck_macros::quickcheck;
  use rstest::rstest;

  use super::*;
  use crate::sv;

  #[test]
  fn view_is_two_words() {
    let size = std::mem::size_of::<StrView>();
    let word_size = std::mem::size_of::<usize>();
    assert_eq!(2 * word_size, size);
  }

  #[test]
  fn default_view_is_absent() {
    let view = StrView::default();
    assert!(view.is_absent());
    assert!(view.is_empty());
    assert!(view.as_ptr().is_null());
    assert_eq!(view, StrView::empty());
  }

  #[test]
  fn raw_parts_round_trip() {
    let buf = *b"mapped bytes";
    let view = unsafe { StrView::from_raw_parts(buf.as_ptr(), buf.len()) };
    assert_eq!(view, "mapped bytes");
    assert_eq!(view.as_ptr(), buf.as_ptr());

    let null = unsafe { StrView::from_raw_parts(ptr::null(), 42) };
    assert!(null.is_absent());
    assert_eq!(null.len(), 0);
  }

  #[rstest]
  #[case(0, 5, "hello")]
  #[case(1, 3, "ell")]
  #[case(2, END_POS, "llo")]
  #[case(3, 100, "lo")]
  #[case(4, 1, "o")]
  fn substr_captures_and_clamps(
    #[case] start: usize,
    #[case] len: usize,
    #[case] expected: &str,
  ) {
    let view = sv!("hello");
    let sub = view.substr(start, len);
    assert_eq!(sub, expected);
    assert!(ptr::eq(sub.as_ptr(), view.as_ptr().wrapping_add(start)));
  }

  #[rstest]
  #[case(0, 0)]
  #[case(3, 0)]
  #[case(6, 1)]
  #[case(END_POS, END_POS)]
  fn substr_out_of_range_is_absent(#[case] start: usize, #[case] len: usize) {
    let sub = sv!("hello").substr(start, len);
    assert!(sub.is_absent());
    assert!(sub.as_ptr().is_null());
  }

  #[test]
  fn substr_at_end_is_anchored() {
    let view = sv!("hello");
    let sub = view.substr(5, 3);
    assert!(sub.is_empty());
    assert!(!sub.is_absent());
    assert!(ptr::eq(sub.as_ptr(), view.as_ptr().wrapping_add(5)));
  }

  #[test]
  fn substr_of_absent_is_absent() {
    assert!(StrView::empty().substr(0, END_POS).is_absent());
  }

  #[test]
  fn substr_large_len_does_not_overflow() {
    let view = sv!("hello");
    assert_eq!(view.substr(2, usize::MAX - 1), "llo");
  }

  #[test]
  fn chop_left_advances_reference() {
    let mut view = sv!("hello world");
    let base = view.as_ptr();
    view.chop_left(6);
    assert_eq!(view, "world");
    assert!(ptr::eq(view.as_ptr(), base.wrapping_add(6)));
  }

  #[test]
  fn chop_right_keeps_reference() {
    let mut view = sv!("hello world");
    let base = view.as_ptr();
    view.chop_right(6);
    assert_eq!(view, "hello");
    assert!(ptr::eq(view.as_ptr(), base));
  }

  #[test]
  fn chop_past_end_empties() {
    let mut left = sv!("abc");
    left.chop_left(3);
    assert!(left.is_empty());

    let mut right = sv!("abc");
    right.chop_right(END_POS);
    assert!(right.is_empty());
  }

  #[test]
  fn chop_absent_stays_absent() {
    let mut view = StrView::empty();
    view.chop_left(1);
    view.chop_right(1);
    assert!(view.is_absent());
  }

  #[rstest]
  #[case("hello", "he", true)]
  #[case("hello", "hello", true)]
  #[case("hello", "", true)]
  #[case("hello", "hex", false)]
  #[case("he", "hello", false)]
  fn starts_with_cases(
    #[case] hay: &str,
    #[case] prefix: &str,
    #[case] expected: bool,
  ) {
    assert_eq!(StrView::from(hay).starts_with(prefix), expected);
  }

  #[rstest]
  #[case("hello", "lo", true)]
  #[case("hello", "hello", true)]
  #[case("hello", "", true)]
  #[case("hello", "xlo", false)]
  #[case("lo", "hello", false)]
  fn ends_with_cases(
    #[case] hay: &str,
    #[case] suffix: &str,
    #[case] expected: bool,
  ) {
    assert_eq!(StrView::from(hay).ends_with(suffix), expected);
  }

  #[test]
  fn equality_ignores_reference() {
    let a = String::from("same");
    let b = String::from("same");
    let va = StrView::from(a.as_str());
    let vb = StrView::from(b.as_str());
    assert_eq!(va, vb);
    assert!(!va.ptr_eq(&vb));
    assert_ne!(va, sv!("sane"));
    assert_ne!(va, sv!("same!"));
  }

  #[test]
  fn absent_and_anchored_empty_compare_equal() {
    let anchored = sv!("abc").substr(3, 1);
    assert_eq!(anchored, StrView::empty());
    assert!(!anchored.ptr_eq(&StrView::empty()));
  }

  #[test]
  fn equality_against_other_types() {
    let view = sv!("bytes");
    assert_eq!(view, "bytes");
    assert_eq!(view, *"bytes");
    assert_eq!(view, b"bytes");
    assert_eq!(view, &b"bytes"[..]);
    assert_eq!("bytes", view);
    assert!(view < sv!("bytez"));
    assert!(view > *"apple");
  }

  #[test]
  fn display_writes_exact_bytes() {
    let view = sv!("hello world").substr(0, 5);
    assert_eq!(format!("[{view}]"), "[hello]");
    assert_eq!(format!("[{view:>10}]"), "[hello]");
  }

  #[test]
  fn display_replaces_invalid_utf8() {
    let view = StrView::new(b"ab\xffcd");
    assert_eq!(view.to_string(), "ab\u{FFFD}cd");
  }

  #[test]
  fn debug_escapes_bytes() {
    let view = StrView::new(b"a\n\"b\"\x00");
    assert_eq!(format!("{view:?}"), r#"b"a\n\"b\"\x00""#);
  }

  #[test]
  fn as_str_checks_utf8() {
    assert_eq!(sv!("ok").as_str(), Ok("ok"));
    assert!(StrView::new(b"\xff").as_str().is_err());
  }

  #[test]
  fn as_bytes_outlives_view_binding() {
    let source = String::from("borrowed");
    let bytes: &[u8] = {
      let view = StrView::from(source.as_str());
      view.as_bytes()
    };
    assert_eq!(bytes, b"borrowed");
  }

  #[test]
  #[cfg(feature = "serde")]
  fn serde_borrows_from_input() {
    let json = String::from("\"crane\"");
    let view: StrView = serde_json::from_str(&json).unwrap();
    assert_eq!(view, "crane");
    assert!(ptr::eq(view.as_ptr(), json.as_ptr().wrapping_add(1)));
    assert_eq!(serde_json::to_string(&view).unwrap(), json);
  }

  #[test]
  #[cfg(feature = "serde")]
  fn serde_rejects_escaped_input() {
    let result: Result<StrView, _> = serde_json::from_str(r#""a\nb""#);
    assert!(result.is_err());
  }

  #[test]
  #[cfg(feature = "serde")]
  fn serde_non_utf8_as_bytes() {
    let view = StrView::new(b"a\xff");
    assert_eq!(serde_json::to_string(&view).unwrap(), "[97,255]");
  }

  #[quickcheck]
  fn chop_zero_is_noop(bytes: Vec<u8>) -> bool {
    let view = StrView::new(&bytes);
    let mut left = view;
    let mut right = view;
    left.chop_left(0);
    right.chop_right(0);
    left.ptr_eq(&view) && right.ptr_eq(&view)
  }

  #[quickcheck]
  fn chop_at_least_len_empties(bytes: Vec<u8>, extra: u8) -> bool {
    let view = StrView::new(&bytes);
    let n = bytes.len() + extra as usize;
    let mut left = view;
    let mut right = view;
    left.chop_left(n);
    right.chop_right(n);
    left.is_empty() && right.is_empty()
  }

  #[quickcheck]
  fn chop_left_then_right_matches_slice(
    bytes: Vec<u8>,
    l: usize,
    r: usize,
  ) -> bool {
    let mut view = StrView::new(&bytes);
    let l = l % (bytes.len() + 1);
    let r = r % (bytes.len() - l + 1);
    view.chop_left(l);
    view.chop_right(r);
    view == bytes[l..bytes.len() - r]
  }

  #[quickcheck]
  fn full_range_substr_is_identity(bytes: Vec<u8>) -> bool {
    let view = StrView::new(&bytes);
    view.substr(0, END_POS).ptr_eq(&view)
  }

  #[quickcheck]
  fn equality_is_reflexive_and_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
    let va = StrView::new(&a);
    let vb = StrView::new(&b);
    va == va && (va == vb) == (vb == va) && (va == vb) == (a == b)
  }
}
