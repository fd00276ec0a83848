pub(crate) const BLOCK_SIZE: usize = 100;
pub(crate) const BLOCK_FLAG: [u8; 2] = [0xFF, 0xEE];
pub(crate) const AZIMUTH_OFFSET: usize = 2;
pub(crate) const RECORDS_OFFSET: usize = 4;
pub(crate) const RECORD_SIZE: usize = 3;
pub(crate) const RECORDS_PER_BLOCK: usize = 32;
pub(crate) const TIMESTAMP_OFFSET: usize = 1200;
pub(crate) const RETURN_MODE_OFFSET: usize = 1204;
pub(crate) const PRODUCT_ID_OFFSET: usize = 1205;
/// Shortest datagram that holds a complete packet.
pub const PACKET_SIZE: usize = 1206;
/// Receive buffer size, leaves room for padded datagrams.
pub const RECV_BUFFER_SIZE: usize = 1248;

/// Number of azimuth bins in one rotation (0.4 degree each).
pub const AZIMUTH_BINS: usize = 900;
pub(crate) const BIN_DEGREES: f64 = 0.4;
/// Column that azimuth zero lands on.
pub(crate) const AZIMUTH_ZERO_BIN: usize = 450;
/// Hundredths of a degree per azimuth bin.
pub(crate) const HUNDREDTHS_PER_BIN: u16 = 40;
/// Meters per range unit.
pub const RANGE_RESOLUTION_M: f64 = 0.002;

/// Vertical firing angle of each channel in wire order.
pub const VERTICAL_ANGLES_DEGREES: [f64; 16] = [
    -15., 1., -13., 3., -11., 5., -9., 7., -7., 9., -5., 11., -3., 13., -1., 15.,
];
/// Wire channel shown on each row of the range image, top beam first.
pub const PHYSICAL_ORDER: [usize; 16] = [15, 13, 11, 9, 7, 5, 3, 1, 14, 12, 10, 8, 6, 4, 2, 0];
