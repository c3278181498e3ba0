//! Shared primitives for the scouting workspace: logging setup and the
//! `Vec2` point/size type used by every other crate.

pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

mod vec2;
pub use vec2::*;

// Re-export log crate so downstream crates can use base::log::*
pub use log;
