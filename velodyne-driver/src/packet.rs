use crate::constants::{
    AZIMUTH_OFFSET, BLOCK_FLAG, BLOCK_SIZE, PACKET_SIZE, PRODUCT_ID_OFFSET, RECORDS_OFFSET,
    RECORDS_PER_BLOCK, RECORD_SIZE, RETURN_MODE_OFFSET, TIMESTAMP_OFFSET,
};
use crate::error::VelodyneError;
use crate::flags::to_return_mode;
use crate::numeric::{to_string, to_u16, to_u32};
use velodyne_data::{FiringBlock, Packet, BLOCKS_PER_PACKET, CHANNELS};

/// Returns true if the sub-block starts with the 0xFF 0xEE sync marker.
pub fn validate_block(block: &[u8]) -> bool {
    block.len() >= BLOCK_FLAG.len() && block[0..2] == BLOCK_FLAG
}

/// Azimuth of a sub-block in hundredths of a degree.
///
/// # Panics
///
/// Panics if `block` is shorter than 4 bytes.
pub fn decode_azimuth(block: &[u8]) -> u16 {
    to_u16(block[AZIMUTH_OFFSET], block[AZIMUTH_OFFSET + 1])
}

/// All 32 ranges of a sub-block. The second 16 belong to the second firing group.
///
/// # Panics
///
/// Panics if `block` is too short to hold all 32 range fields.
pub fn decode_ranges(block: &[u8]) -> [u16; RECORDS_PER_BLOCK] {
    let mut ranges = [0u16; RECORDS_PER_BLOCK];
    for (i, range) in ranges.iter_mut().enumerate() {
        let idx = record_index(i);
        *range = to_u16(block[idx], block[idx + 1]);
    }
    ranges
}

/// Reflectivity byte following each of the 32 ranges.
///
/// # Panics
///
/// Panics if `block` is shorter than a 100-byte sub-block.
pub fn decode_reflectivities(block: &[u8]) -> [u8; RECORDS_PER_BLOCK] {
    let mut reflectivities = [0u8; RECORDS_PER_BLOCK];
    for (i, reflectivity) in reflectivities.iter_mut().enumerate() {
        *reflectivity = block[record_index(i) + 2];
    }
    reflectivities
}

fn record_index(idx: usize) -> usize {
    RECORDS_OFFSET + idx * RECORD_SIZE
}

fn decode_block(block: &[u8], block_index: usize) -> Result<FiringBlock, VelodyneError> {
    if !validate_block(block) {
        return Err(VelodyneError::InvalidBlockMarker {
            block: block_index,
            observed: to_string(&block[0..2]),
        });
    }
    let ranges = decode_ranges(block);
    let mut first_group = [0u16; CHANNELS];
    first_group.copy_from_slice(&ranges[..CHANNELS]);
    Ok(FiringBlock {
        azimuth: decode_azimuth(block),
        ranges: first_group,
    })
}

/// Decodes a full data packet. Nothing is returned unless every sub-block is valid.
pub fn decode_packet(datagram: &[u8]) -> Result<Packet, VelodyneError> {
    if datagram.len() < PACKET_SIZE {
        return Err(VelodyneError::MalformedPacket(datagram.len()));
    }
    let blocks = datagram
        .chunks_exact(BLOCK_SIZE)
        .take(BLOCKS_PER_PACKET)
        .enumerate()
        .map(|(i, block)| decode_block(block, i))
        .collect::<Result<Vec<_>, _>>()?;

    let mut timestamp = [0u8; 4];
    timestamp.copy_from_slice(&datagram[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 4]);
    Ok(Packet {
        blocks,
        timestamp_us: to_u32(timestamp),
        return_mode: to_return_mode(datagram[RETURN_MODE_OFFSET]),
        product_id: datagram[PRODUCT_ID_OFFSET],
    })
}
