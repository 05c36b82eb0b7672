//! Business logic layer
//!
//! Services apply the command-line shell's policies on top of the ledger.

pub mod entry;

pub use entry::{default_description, EntryInput, EntryService};
