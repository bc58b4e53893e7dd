//! In-memory virtual file streams.
//!
//! Named byte buffers addressed by path strings, manipulated through
//! stream handles with filesystem semantics — open modes, cursors,
//! splice-overwrite writes, seek/truncate/stat — without touching
//! disk. Built for code that wants file-like behavior with no I/O:
//! tests, caches, scratch buffers, protocol shims. Key components:
//!
//! - [`BufferStore`] - shared path → buffer map owning all content
//! - [`StreamHandle`] - per-open cursor and mode over one path
//! - [`SchemeRegistry`] - routes `scheme://path` URLs to stores
//!
//! ## Design Decisions
//!
//! - **Explicit store, no global**: every handle borrows a store the
//!   caller constructed, so tests get a fresh buffer space instead of
//!   resetting hidden static state.
//! - **Mode resolved once**: the mode string is parsed into a closed
//!   enum at open; operations dispatch on the variant and never
//!   re-parse.
//! - **No snapshot isolation**: handles re-read the store on every
//!   operation, so a write through one handle is immediately visible
//!   to every other handle on the same path.

mod error;
mod handle;
mod registry;
mod store;
mod types;

pub use error::{StreamError, StreamResult};
pub use handle::StreamHandle;
pub use registry::SchemeRegistry;
pub use store::BufferStore;
pub use types::{Mode, Stat, Whence};
