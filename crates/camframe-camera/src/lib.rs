//! Camera frame conversion.
//!
//! Reassembles a three-plane YUV 4:2:0 camera frame into one packed buffer
//! (luma, then the chroma planes in swapped order) and converts it to an RGB
//! `Tensor<u8>` in HWC layout `[height, width, 3]`.

pub mod converter;
pub mod error;
pub mod frame;
pub mod pack;

pub use converter::FrameConverter;
pub use error::ConvertError;
pub use frame::{MemoryFrame, PlanarFrame};
pub use pack::{pack_planes, yuv_view, yuv_view_shape};
