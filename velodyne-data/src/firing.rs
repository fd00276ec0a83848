#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flags::ReturnMode;

/// Number of laser channels on the sensor.
pub const CHANNELS: usize = 16;
/// Number of sub-blocks carried by one data packet.
pub const BLOCKS_PER_PACKET: usize = 12;

/// Ranges of one packet sub-block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FiringBlock {
    /// Rotation angle in hundredths of a degree (0-35999).
    pub azimuth: u16,
    /// Range per channel in wire order, 2mm units. Zero means no return.
    pub ranges: [u16; CHANNELS],
}

/// One decoded data packet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Packet {
    /// Firing blocks in packet order.
    pub blocks: Vec<FiringBlock>,
    /// Microseconds past the top of the hour.
    pub timestamp_us: u32,
    /// Return mode from the first factory byte.
    pub return_mode: ReturnMode,
    /// Sensor model from the second factory byte (0x22 for a VLP-16).
    pub product_id: u8,
}
