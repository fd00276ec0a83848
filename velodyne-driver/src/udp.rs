use crate::error::VelodyneError;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;
use velodyne_data::DriverConfig;

/// Shortest receive timeout applied. Sockets reject a zero timeout.
pub(crate) const MIN_READ_TIMEOUT: Duration = Duration::from_millis(1);

/// Source of raw sensor datagrams.
///
/// Implementations should return `WouldBlock` or `TimedOut` when nothing
/// arrived for a while, so the ingest loop gets a chance to stop.
pub trait DatagramSource: Send {
    fn recv_datagram(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;

    /// Bounds how long `recv_datagram` may block. Called before the ingest
    /// loop starts. Sources that already time out can keep the default.
    fn set_recv_timeout(&mut self, _timeout: Duration) -> io::Result<()> {
        Ok(())
    }
}

impl DatagramSource for UdpSocket {
    fn recv_datagram(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        self.recv_from(buf)
    }

    fn set_recv_timeout(&mut self, timeout: Duration) -> io::Result<()> {
        UdpSocket::set_read_timeout(self, Some(timeout.max(MIN_READ_TIMEOUT)))
    }
}

/// Binds the receiving socket described by `config`.
pub fn bind(config: &DriverConfig) -> Result<UdpSocket, VelodyneError> {
    let mut socket = UdpSocket::bind(config.bind_addr)?;
    socket.set_recv_timeout(config.read_timeout)?;
    Ok(socket)
}

pub(crate) fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted
    )
}
