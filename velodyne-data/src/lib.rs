pub mod config;
pub mod firing;
pub mod flags;
pub mod point_cloud;
pub mod stats;

pub use config::{DriverConfig, DEFAULT_DATA_PORT};
pub use firing::{FiringBlock, Packet, BLOCKS_PER_PACKET, CHANNELS};
pub use flags::ReturnMode;
pub use point_cloud::PointCloud;
pub use stats::IngestStats;
