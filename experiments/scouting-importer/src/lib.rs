//! Live QR viewfinder: a capture thread that decodes and outlines symbols,
//! and a window that shows the annotated feed.

pub mod config;
pub mod error;
pub mod scanner;
pub mod shell;

pub use config::{CAMERA_ENV, LOG_DIR_ENV, ShellConfig, camera_config_from};
pub use error::ShellError;
pub use scanner::{Iteration, Notification, Scanner, scan_once};
pub use shell::{DisplayShell, Viewfinder, window_title};
