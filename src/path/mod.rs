//! Path handling
//!
//! Decomposition of relative paths into their parts and the POSIX-style
//! joining used to put them back together.

mod join;
mod parts;

pub use join::{join, normalize, relative};
pub use parts::{PathParts, parse_path};
