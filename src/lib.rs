//! # seqstat
//!
//! Small generic helpers for ordered sequences of primitive values.
//!
//! ## Modules
//!
//! - [`sequence`] — Concatenation, positional insertion, emptiness checks
//! - [`stats`] — Mean and median over every primitive numeric width
//! - [`format`] — Sequence-to-string rendering under a bracket/separator pattern
//! - [`numeric`] — The closed set of element types accepted by [`stats`]
//! - [`fs`] — File and directory sizes, home and system root paths
//! - [`error`] — The error taxonomy shared by all of the above
//!
//! ## Design Philosophy
//!
//! - **Fail loudly**: absent or empty input is an [`Error`], never a NaN
//! - **Read-only queries stay read-only**: [`stats::median`] sorts a copy
//! - **One generic body per operation**: monomorphized per element width
//! - **Property-based testing**: invariants verified via proptest

pub mod error;
pub mod format;
pub mod fs;
pub mod numeric;
pub mod sequence;
pub mod stats;

pub use error::{Error, Result};
pub use format::{to_display_string, DisplayKind, DisplayOptions, FormatSpec};
pub use numeric::Numeric;
pub use sequence::{concat_any, insert_into, is_null_or_empty, Sequence};
pub use stats::{mean, median};
