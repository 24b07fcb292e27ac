pub mod config;
pub mod fs;
pub mod logging;
pub mod range;
pub mod tensor;

pub use config::{LogConfig, LogSink};
pub use fs::{delete_recursive, load_mapped_file, MappedRegion};
pub use logging::{init_logger, FileLogger, StdoutLogger};
pub use range::is_between;
pub use tensor::{element_count, Tensor, TensorError};

// Re-export log crate so downstream crates can use camframe_base::log::*
pub use log;
