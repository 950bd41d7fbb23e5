//! Writing views to byte sinks.
//!
//! Each call performs exactly one [`Write::write`] and hands back whatever
//! the sink returned. A short write is not retried; callers that need the
//! whole view written decide for themselves how to continue, e.g. by
//! chopping the written prefix off and trying again.
//!
//! Nothing here buffers. [`StrView::write_stdout`] writes to the standard
//! output descriptor directly rather than into Rust's line-buffered
//! `Stdout`, so the returned count is what the descriptor accepted.

#[cfg(unix)]
use std::fs::File;
use std::io;
use std::io::Write;
#[cfg(unix)]
use std::os::fd::AsFd;

use crate::view::StrView;

impl StrView<'_> {
  /// Writes the viewed bytes to `sink` with a single `write` call.
  ///
  /// Returns the number of bytes the sink accepted, which may be less than
  /// [`len`](StrView::len), or the sink's error.
  ///
  /// ```rust
  /// # use sview::*;
  /// let mut out = Vec::new();
  /// let written = sv!("hello").write_to(&mut out)?;
  ///
  /// assert_eq!(written, 5);
  /// assert_eq!(out, b"hello");
  /// # Ok::<(), std::io::Error>(())
  /// ```
  pub fn write_to<W>(&self, sink: &mut W) -> io::Result<usize>
  where
    W: Write + ?Sized,
  {
    let result = sink.write(self.as_bytes());

    #[cfg(feature = "log")]
    log_write(self.len(), &result);

    result
  }

  /// Writes the viewed bytes to the file descriptor `fd` with a single
  /// unbuffered `write` call.
  ///
  /// The descriptor is duplicated for the call, so `fd` stays open and its
  /// file offset advances as usual.
  #[cfg(unix)]
  pub fn write_fd(&self, fd: impl AsFd) -> io::Result<usize> {
    let mut file = File::from(fd.as_fd().try_clone_to_owned()?);
    self.write_to(&mut file)
  }

  /// Writes the viewed bytes to standard output with a single `write` call.
  ///
  /// Anything already sitting in the process-wide `Stdout` buffer is flushed
  /// first, then the view goes to the descriptor without buffering.
  pub fn write_stdout(&self) -> io::Result<usize> {
    let mut stdout = io::stdout().lock();
    stdout.flush()?;
    write_locked_stdout(self, &mut stdout)
  }
}

#[cfg(unix)]
fn write_locked_stdout(
  view: &StrView<'_>,
  stdout: &mut io::StdoutLock<'_>,
) -> io::Result<usize> {
  view.write_fd(&*stdout)
}

// TODO: write through a duplicated handle on Windows as well; the flush
// keeps ordering intact but the count is what the buffer accepted.
#[cfg(not(unix))]
fn write_locked_stdout(
  view: &StrView<'_>,
  stdout: &mut io::StdoutLock<'_>,
) -> io::Result<usize> {
  let n = view.write_to(stdout)?;
  stdout.flush()?;
  Ok(n)
}

#[cfg(feature = "log")]
fn log_write(len: usize, result: &io::Result<usize>) {
  match result {
    Ok(n) if *n < len => log::debug!("short write: {n} of {len} bytes"),
    Err(err) => log::debug!("write of {len} bytes failed: {err}"),
    Ok(_) => {}
  }
}
