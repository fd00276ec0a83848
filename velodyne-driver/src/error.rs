use std::io;

#[derive(thiserror::Error, Debug)]
pub enum VelodyneError {
    #[error("Packet must be at least 1206 bytes. Actually {0} bytes.")]
    MalformedPacket(usize),
    #[error("Block {block} must start with 0xFF 0xEE. Observed = {observed}.")]
    InvalidBlockMarker { block: usize, observed: String },
    #[error("Transport error: {0}")]
    TransportError(#[from] io::Error),
    #[error("The ingest loop is already running")]
    AlreadyRunning,
    #[error("The datagram source was consumed by a previous run")]
    SourceUnavailable,
    #[error("The ingest thread panicked")]
    IngestPanicked,
}
