use crate::constants::RECV_BUFFER_SIZE;
use crate::error::VelodyneError;
use crate::metrics::IngestMetrics;
use crate::packet::decode_packet;
use crate::scene::SceneBuffer;
use crate::udp::{is_timeout, DatagramSource};
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use log::{debug, error, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Struct that contains the ingest thread.
pub struct DriverThreads {
    pub(crate) terminator_tx: Sender<bool>,
    pub(crate) ingest_thread: Option<JoinHandle<Result<(), VelodyneError>>>,
}

impl DriverThreads {
    /// False once the ingest loop has returned, whether stopped or failed.
    pub fn is_running(&self) -> bool {
        self.ingest_thread
            .as_ref()
            .map_or(false, |thread| !thread.is_finished())
    }
}

/// Where decoded packets go.
pub(crate) struct IngestTarget {
    pub(crate) source_port: Option<u16>,
    pub(crate) scene: Arc<SceneBuffer>,
    pub(crate) metrics: Arc<IngestMetrics>,
}

pub(crate) fn spawn_ingest(
    mut source: Box<dyn DatagramSource>,
    target: IngestTarget,
) -> Result<DriverThreads, VelodyneError> {
    let (terminator_tx, terminator_rx) = bounded(10);
    let ingest_thread = std::thread::Builder::new()
        .name("velodyne-ingest".to_string())
        .spawn(move || ingest_datagrams(source.as_mut(), &target, terminator_rx))?;

    Ok(DriverThreads {
        terminator_tx,
        ingest_thread: Some(ingest_thread),
    })
}

pub(crate) fn ingest_datagrams(
    source: &mut dyn DatagramSource,
    target: &IngestTarget,
    terminator_rx: Receiver<bool>,
) -> Result<(), VelodyneError> {
    let mut buf = [0u8; RECV_BUFFER_SIZE];
    loop {
        if do_terminate(&terminator_rx) {
            return Ok(());
        }

        let (n_read, from) = match source.recv_datagram(&mut buf) {
            Ok(received) => received,
            Err(e) if is_timeout(&e) => continue,
            Err(e) => {
                // A source torn down for shutdown is not a failure
                if do_terminate(&terminator_rx) {
                    return Ok(());
                }
                error!("Receiving datagrams failed: {e}");
                return Err(VelodyneError::TransportError(e));
            }
        };

        handle_datagram(&buf[..n_read], from, target);
    }
}

/// Decodes one datagram and writes it into the scene. Bad input is counted and dropped.
pub(crate) fn handle_datagram(datagram: &[u8], from: SocketAddr, target: &IngestTarget) {
    if let Some(port) = target.source_port {
        if from.port() != port {
            debug!("Ignoring datagram from {from}");
            target.metrics.record_foreign_source();
            return;
        }
    }

    match decode_packet(datagram) {
        Ok(packet) => {
            target.scene.write_packet(&packet.blocks);
            target.metrics.record_processed();
        }
        Err(e) => {
            warn!("Discarding datagram from {from}: {e}");
            target.metrics.record_error(&e);
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    match terminator_rx.try_recv() {
        Ok(terminate) => terminate,
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Disconnected) => true,
    }
}

/// Function to stop and join the ingest thread.
/// Returns the error that ended the loop, if any.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) -> Result<(), VelodyneError> {
    let thread = match driver_threads.ingest_thread.take() {
        Some(thread) => thread,
        None => return Ok(()),
    };
    // The loop may already be gone after a transport failure
    let _ = driver_threads.terminator_tx.send(true);
    thread.join().map_err(|_| VelodyneError::IngestPanicked)?
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        if let Err(e) = join(self) {
            error!("{e}");
        }
    }
}
