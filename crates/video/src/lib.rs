//! Video capture abstraction for the scouting workspace.
//!
//! A `FrameSource` is a blocking camera handle owned by exactly one capture
//! thread. Backends hand out frames as packed `Bgr8` images.

pub mod config;
pub mod error;
pub mod source;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::VideoError;
pub use source::FrameSource;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
