//! Frame and pixel utilities for the scouting workspace.
//!
//! Wraps the `image` crate (imported as `crates_image`) for JPEG decoding and
//! resampling, and provides the packed-pixel conversions between camera
//! formats, the BGR working order and the `u32` window surface.

mod convert;
pub use convert::*;

mod error;
pub use error::*;

mod image;
pub use image::*;

mod pixelformat;
pub use pixelformat::*;

mod scale;
pub use scale::*;

mod surface;
pub use surface::*;
