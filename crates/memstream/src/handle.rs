//! Stream handles: per-open cursor and mode state over the store.
//!
//! All positional arithmetic lives here. A handle never holds buffer
//! bytes of its own — every operation goes back to the store, so
//! handles on the same path observe each other's writes immediately
//! (no snapshot isolation, no copy-on-open).

use crate::error::{StreamError, StreamResult};
use crate::store::BufferStore;
use crate::types::{Mode, Stat, Whence};

/// An open session against one path.
///
/// Obtained from [`StreamHandle::open`] or
/// [`SchemeRegistry::open`](crate::SchemeRegistry::open). The path and
/// mode are fixed for the handle's lifetime; only the cursor moves.
#[derive(Debug)]
pub struct StreamHandle {
    store: BufferStore,
    path: String,
    mode: Mode,
    cursor: usize,
}

impl StreamHandle {
    /// Open a handle on `path` with the given mode string.
    ///
    /// `r`/`r+` require the path to exist, `w`/`w+` reset it to an
    /// empty buffer, `a`/`a+` create it only if absent. The cursor
    /// starts at 0 in every mode. This is the single precondition
    /// check in the component — every other operation trusts a
    /// successfully opened handle.
    pub fn open(store: &BufferStore, path: impl Into<String>, mode: &str) -> StreamResult<Self> {
        let path = path.into();
        let mode = Mode::parse(mode)?;

        match mode {
            Mode::Read | Mode::ReadWrite => {
                if !store.exists(&path) {
                    return Err(StreamError::not_found(path));
                }
            }
            Mode::Write | Mode::WriteRead => store.set(path.clone(), Vec::new()),
            Mode::Append | Mode::AppendRead => {
                if !store.exists(&path) {
                    store.set(path.clone(), Vec::new());
                }
            }
        }

        tracing::trace!(path = %path, mode = %mode, "stream opened");
        Ok(Self {
            store: store.clone(),
            path,
            mode,
            cursor: 0,
        })
    }

    /// The path this handle is open on.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The resolved open mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current buffer contents. A buffer unlinked underneath a live
    /// handle reads as empty; a later write recreates it.
    fn buffer(&self) -> Vec<u8> {
        self.store.get(&self.path).unwrap_or_default()
    }

    /// Current buffer length.
    fn len(&self) -> usize {
        self.store.size(&self.path).unwrap_or(0)
    }

    /// Write `data` at the cursor, returning the number of bytes
    /// written.
    ///
    /// Read-only handles accept the call and write nothing (returns
    /// 0, matching read-only stream semantics). Append handles extend
    /// the buffer end regardless of the cursor and do not move it.
    /// Every other writable mode splice-overwrites: exactly
    /// `data.len()` bytes starting at the cursor are replaced, the
    /// buffer grows only past its old end, and the cursor advances by
    /// `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if !self.mode.writable() {
            return 0;
        }

        let mut buf = self.buffer();
        if self.mode.is_append() {
            buf.extend_from_slice(data);
        } else {
            // Bounds saturate at the old end: a cursor parked past it
            // (possible after a shrinking truncate) degenerates to a
            // plain append, no zero padding.
            let start = self.cursor.min(buf.len());
            let end = (self.cursor + data.len()).min(buf.len());
            buf.splice(start..end, data.iter().copied());
            self.cursor += data.len();
        }
        self.store.set(self.path.clone(), buf);
        data.len()
    }

    /// Read up to `count` bytes from the cursor, advancing it by the
    /// bytes actually returned. A `count` of 0 reads everything from
    /// the cursor to the end.
    ///
    /// Write-only handles (`w`, `a`) always return empty without
    /// moving the cursor; so does reading at or past end-of-buffer.
    pub fn read(&mut self, count: usize) -> Vec<u8> {
        if !self.mode.readable() {
            return Vec::new();
        }

        let buf = self.buffer();
        let start = self.cursor.min(buf.len());
        let end = if count == 0 {
            buf.len()
        } else {
            (start + count).min(buf.len())
        };
        let out = buf[start..end].to_vec();
        self.cursor += out.len();
        out
    }

    /// Resize the buffer to exactly `new_size` bytes.
    ///
    /// Growth pads with zero bytes, shrinking cuts. The cursor stays
    /// where it was — possibly past the new end, where reads yield
    /// empty and writes still splice (and may re-extend). Returns
    /// `false` on a read-only handle.
    pub fn truncate(&mut self, new_size: usize) -> bool {
        if !self.mode.writable() {
            return false;
        }
        let mut buf = self.buffer();
        buf.resize(new_size, 0);
        self.store.set(self.path.clone(), buf);
        true
    }

    /// Move the cursor.
    ///
    /// The target must land inside `[0, len]` — seek-to-end is valid,
    /// writing there extends the buffer. Out-of-range targets fail
    /// and leave the cursor unchanged.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> bool {
        let len = self.len() as i64;
        let target = match whence {
            Whence::Set => offset,
            Whence::Cur => self.cursor as i64 + offset,
            Whence::End => len + offset,
        };
        if (0..=len).contains(&target) {
            self.cursor = target as usize;
            true
        } else {
            false
        }
    }

    /// Current cursor position.
    pub fn tell(&self) -> usize {
        self.cursor
    }

    /// True once the cursor is at or past the end of the buffer.
    ///
    /// Recomputed from state on every call, never sticky — a seek
    /// back or an extending truncate makes it false again.
    pub fn eof(&self) -> bool {
        self.cursor >= self.len()
    }

    /// Metadata for the handle's path.
    pub fn stat(&self) -> Stat {
        Stat::of_len(self.len())
    }
}
