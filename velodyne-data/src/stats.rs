#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagnostic counters of the ingest loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IngestStats {
    /// Packets decoded and written into the scene.
    pub packets_processed: u64,
    /// Datagrams shorter than a full packet.
    pub malformed_packets: u64,
    /// Datagrams with a bad sub-block sync marker.
    pub invalid_block_markers: u64,
    /// Datagrams dropped because they came from another port.
    pub foreign_source_datagrams: u64,
}

impl IngestStats {
    pub fn discarded(&self) -> u64 {
        self.malformed_packets + self.invalid_block_markers + self.foreign_source_datagrams
    }
}
