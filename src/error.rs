use std::result;

use thiserror::Error;

/// Faults reported by the public API.
///
/// The container itself never fails: inserting a duplicate is a no-op and
/// removing or searching for a missing value returns a negative result. The
/// only recoverable error is asking a cursor that sits past the last element
/// for a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("cursor is at the end of the set")]
    CursorAtEnd,
}

pub type Result<T> = result::Result<T, Error>;
