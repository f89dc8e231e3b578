//! Recorded sink streams.
//!
//! Responsibilities:
//! - describe every path/paint sink call as data (`PathCmd`)
//! - record a deterministic, ordered command stream (`CmdList`)
//! - replay a stream against any other sink

mod cmd;
mod list;

pub use cmd::PathCmd;
pub use list::{CmdList, RecordedPath};
