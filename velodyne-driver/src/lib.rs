mod constants;
mod driver_threads;
mod error;
mod flags;
mod geometry;
mod metrics;
mod numeric;
mod packet;
mod scene;
#[cfg(test)]
mod time;
mod udp;

use crate::driver_threads::{join, spawn_ingest, DriverThreads, IngestTarget};
use crate::metrics::IngestMetrics;
use log::info;
use ndarray::Array2;
use std::sync::Arc;
use velodyne_data::{DriverConfig, IngestStats, PointCloud};

pub use crate::constants::{
    AZIMUTH_BINS, PACKET_SIZE, PHYSICAL_ORDER, RANGE_RESOLUTION_M, RECV_BUFFER_SIZE,
    VERTICAL_ANGLES_DEGREES,
};
pub use crate::error::VelodyneError;
pub use crate::geometry::TrigTables;
pub use crate::packet::{
    decode_azimuth, decode_packet, decode_ranges, decode_reflectivities, validate_block,
};
pub use crate::scene::SceneBuffer;
pub use crate::udp::{bind, DatagramSource};

/// Handle to a VLP-16 data stream and the scene it keeps up to date.
///
/// The scene is readable at any time. Between [`Velodyne::begin`] and
/// [`Velodyne::close`] a background thread keeps overwriting it with the
/// columns of every received packet. Dropping the handle stops the thread.
pub struct Velodyne {
    config: DriverConfig,
    source: Option<Box<dyn DatagramSource>>,
    scene: Arc<SceneBuffer>,
    metrics: Arc<IngestMetrics>,
    threads: Option<DriverThreads>,
}

impl Velodyne {
    /// Binds the data port described by `config`. Nothing is received before `begin`.
    pub fn new(config: DriverConfig) -> Result<Velodyne, VelodyneError> {
        let socket = bind(&config)?;
        Ok(Velodyne::with_source(Box::new(socket), config))
    }

    /// Same as [`Velodyne::new`] with an already opened datagram source.
    pub fn with_source(source: Box<dyn DatagramSource>, config: DriverConfig) -> Velodyne {
        Velodyne {
            config,
            source: Some(source),
            scene: Arc::new(SceneBuffer::new()),
            metrics: Arc::new(IngestMetrics::new()),
            threads: None,
        }
    }

    /// Starts the ingest thread.
    pub fn begin(&mut self) -> Result<(), VelodyneError> {
        if self.threads.is_some() {
            return Err(VelodyneError::AlreadyRunning);
        }
        let mut source = self.source.take().ok_or(VelodyneError::SourceUnavailable)?;
        // close() relies on receives returning within the timeout
        if let Err(e) = source.set_recv_timeout(self.config.read_timeout) {
            self.source = Some(source);
            return Err(e.into());
        }
        let target = IngestTarget {
            source_port: self.config.source_port,
            scene: self.scene.clone(),
            metrics: self.metrics.clone(),
        };
        self.threads = Some(spawn_ingest(source, target)?);
        info!("Receiving on {}", self.config.bind_addr);
        Ok(())
    }

    /// Stops the ingest thread and waits for it to exit, releasing the socket.
    ///
    /// Returns the error that ended the loop early, if any. Calling it again
    /// or without `begin` does nothing.
    pub fn close(&mut self) -> Result<(), VelodyneError> {
        let mut threads = match self.threads.take() {
            Some(threads) => threads,
            None => return Ok(()),
        };
        let result = join(&mut threads);
        info!("Stopped receiving on {}", self.config.bind_addr);
        result
    }

    pub fn is_running(&self) -> bool {
        self.threads
            .as_ref()
            .map_or(false, |threads| threads.is_running())
    }

    /// Range image in meters, rows in physical order.
    pub fn scene(&self) -> Array2<f64> {
        self.scene.scene()
    }

    /// Range image in 2mm units, rows in physical order.
    pub fn scene_raw(&self) -> Array2<u16> {
        self.scene.scene_raw()
    }

    /// Point cloud in meters, wire channel order.
    pub fn xyz(&self) -> PointCloud {
        self.scene.xyz()
    }

    pub fn stats(&self) -> IngestStats {
        self.metrics.snapshot()
    }

    pub fn scene_buffer(&self) -> Arc<SceneBuffer> {
        self.scene.clone()
    }
}
