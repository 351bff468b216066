//!
//! The benchmark history data model.
//!


pub mod commit;
pub mod document;
pub mod entry;
pub mod history;
pub mod key;
pub mod measurement;
pub mod range;
