use crate::constants::{AZIMUTH_BINS, AZIMUTH_ZERO_BIN, HUNDREDTHS_PER_BIN};

pub(crate) fn to_u16(lo: u8, hi: u8) -> u16 {
    (lo as u16) + ((hi as u16) << 8)
}

pub(crate) fn to_u32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

/// Nearest azimuth bin, ties to even. Not wrapped.
pub(crate) fn azimuth_to_bin(azimuth: u16) -> usize {
    let q = azimuth / HUNDREDTHS_PER_BIN;
    let r = azimuth % HUNDREDTHS_PER_BIN;
    let half = HUNDREDTHS_PER_BIN / 2;
    let rounded = if r > half || (r == half && q % 2 == 1) {
        q + 1
    } else {
        q
    };
    rounded as usize
}

/// Scene column an azimuth is written to.
pub(crate) fn azimuth_to_column(azimuth: u16) -> usize {
    (AZIMUTH_ZERO_BIN + azimuth_to_bin(azimuth)) % AZIMUTH_BINS
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u16() {
        assert_eq!(to_u16(0x34, 0x12), 0x1234);
        assert_eq!(to_u16(0xFF, 0x00), 0x00FF);
    }

    #[test]
    fn test_azimuth_to_column() {
        assert_eq!(azimuth_to_column(0), 450);
        assert_eq!(azimuth_to_column(35999), 450);
        assert_eq!(azimuth_to_column(18000), 0);
        assert_eq!(azimuth_to_column(40), 451);
        assert_eq!(azimuth_to_column(17960), 899);
        for azimuth in 0..36000 {
            assert!(azimuth_to_column(azimuth) < AZIMUTH_BINS);
        }
        // Values past 359.99 degrees still wrap
        assert!(azimuth_to_column(u16::MAX) < AZIMUTH_BINS);
    }

    #[test]
    fn test_azimuth_to_bin_rounds_half_to_even() {
        assert_eq!(azimuth_to_bin(19), 0);
        assert_eq!(azimuth_to_bin(20), 0);
        assert_eq!(azimuth_to_bin(21), 1);
        assert_eq!(azimuth_to_bin(60), 2);
        assert_eq!(azimuth_to_bin(100), 2);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&[0xFF, 0x0E]), "FF 0E");
    }
}
