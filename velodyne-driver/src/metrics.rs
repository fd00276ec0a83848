use crate::error::VelodyneError;
use std::sync::{Mutex, PoisonError};
use velodyne_data::IngestStats;

/// Counters shared between the ingest thread and the owning handle.
#[derive(Default)]
pub(crate) struct IngestMetrics {
    inner: Mutex<IngestStats>,
}

impl IngestMetrics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_processed(&self) {
        self.update(|stats| stats.packets_processed += 1);
    }

    pub(crate) fn record_foreign_source(&self) {
        self.update(|stats| stats.foreign_source_datagrams += 1);
    }

    pub(crate) fn record_error(&self, error: &VelodyneError) {
        match error {
            VelodyneError::MalformedPacket(_) => self.update(|stats| stats.malformed_packets += 1),
            VelodyneError::InvalidBlockMarker { .. } => {
                self.update(|stats| stats.invalid_block_markers += 1)
            }
            _ => (),
        }
    }

    pub(crate) fn snapshot(&self) -> IngestStats {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, f: impl FnOnce(&mut IngestStats)) {
        let mut stats = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_by_kind() {
        let metrics = IngestMetrics::new();
        metrics.record_processed();
        metrics.record_foreign_source();
        metrics.record_error(&VelodyneError::MalformedPacket(10));
        metrics.record_error(&VelodyneError::InvalidBlockMarker {
            block: 0,
            observed: "00 00".to_string(),
        });
        metrics.record_error(&VelodyneError::IngestPanicked);

        let stats = metrics.snapshot();
        assert_eq!(stats.packets_processed, 1);
        assert_eq!(stats.foreign_source_datagrams, 1);
        assert_eq!(stats.malformed_packets, 1);
        assert_eq!(stats.invalid_block_markers, 1);
        assert_eq!(stats.discarded(), 3);
    }
}
