//! Finding archives under a root directory.
//!
//! Scanning happens in two passes:
//!
//! - [`discover`]: walk the filesystem and collect candidate paths
//! - [`classify`]: keep the regular files with a supported archive extension
//!
//! Both passes preserve directory-listing order, descending depth-first when
//! recursive, so archives are later processed in the order they were found.

mod classify;
mod discovery;

pub use classify::{ArchivePath, SUPPORTED_EXTENSIONS, classify};
pub use discovery::{Discovery, discover};
