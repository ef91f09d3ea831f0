//! JSON file storage layer
//!
//! The entry store is an external collaborator from the core's point of
//! view: it only loads, replaces, and clears the flat entry list.

pub mod entries;
pub mod file_io;

pub use entries::EntryStore;
