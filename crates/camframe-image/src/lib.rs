//! Pixel-format conversion and image persistence for camera frames.
//!
//! All matrices are `Tensor<u8>` from `camframe-base` in HWC layout:
//! `[height, width, channels]`.

pub mod bitmap;
pub mod error;
pub mod planar;
pub mod png;
pub mod yuv;

pub use bitmap::rgb_to_rgba;
pub use error::ImageError;
pub use planar::{frame_height_from_view_rows, planar420_to_rgb};
pub use png::{save_png, save_png_async};
pub use yuv::yuv_to_rgb;
