//! Output surfaces for a collected snapshot.
//!
//! The snapshot itself is assembled by the collector; these submodules are
//! thin formatting layers on top of it:
//!
//! - [`json`]: pretty-printed JSON for stdout and the optional output file
//! - [`text`]: the numbered Korean text report for terminal reading

pub mod json;
pub mod text;
