use crate::constants::{AZIMUTH_BINS, PHYSICAL_ORDER, RANGE_RESOLUTION_M, VERTICAL_ANGLES_DEGREES};
use crate::geometry::TrigTables;
use crate::numeric::azimuth_to_column;
use ndarray::{aview1, Array2, Axis};
use std::sync::{PoisonError, RwLock};
use velodyne_data::{FiringBlock, PointCloud, CHANNELS};

/// Range image of the most recent rotation, one row per channel in wire order
/// and one column per azimuth bin.
///
/// The ingest thread writes and any number of readers copy the grid out.
/// A write of one block (or one packet through [`SceneBuffer::write_packet`])
/// is never observed half done, but a read mixes columns from different
/// rotations and is not a snapshot of a single revolution.
pub struct SceneBuffer {
    grid: RwLock<Array2<u16>>,
    tables: TrigTables,
}

impl SceneBuffer {
    pub fn new() -> SceneBuffer {
        SceneBuffer {
            grid: RwLock::new(Array2::zeros((CHANNELS, AZIMUTH_BINS))),
            tables: TrigTables::new(&VERTICAL_ANGLES_DEGREES, AZIMUTH_BINS),
        }
    }

    /// Overwrites the column of the block's azimuth with its ranges.
    pub fn write(&self, block: &FiringBlock) {
        self.write_packet(std::slice::from_ref(block));
    }

    /// Writes several blocks while holding the lock once.
    pub fn write_packet(&self, blocks: &[FiringBlock]) {
        let mut grid = self.grid.write().unwrap_or_else(PoisonError::into_inner);
        for block in blocks {
            let column = azimuth_to_column(block.azimuth);
            grid.column_mut(column).assign(&aview1(&block.ranges));
        }
    }

    /// Copy of the grid in wire channel order.
    pub fn snapshot(&self) -> Array2<u16> {
        self.grid
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Range image in 2mm units, rows in physical order.
    pub fn scene_raw(&self) -> Array2<u16> {
        self.grid
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .select(Axis(0), &PHYSICAL_ORDER)
    }

    /// Range image in meters, rows in physical order.
    pub fn scene(&self) -> Array2<f64> {
        self.scene_raw().mapv(|r| r as f64 * RANGE_RESOLUTION_M)
    }

    /// Point cloud of the whole grid. Points keep wire channel order.
    pub fn xyz(&self) -> PointCloud {
        let grid = self.snapshot();
        self.tables.project(grid.view())
    }
}

impl Default for SceneBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_utils::thread;

    fn block(azimuth: u16) -> FiringBlock {
        let mut ranges = [0u16; CHANNELS];
        for (c, range) in ranges.iter_mut().enumerate() {
            *range = 1000 + c as u16;
        }
        FiringBlock { azimuth, ranges }
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = SceneBuffer::new();
        let raw = scene.scene_raw();
        assert_eq!(raw.dim(), (CHANNELS, AZIMUTH_BINS));
        assert!(raw.iter().all(|r| *r == 0));
        assert!(scene.xyz().x.iter().all(|x| *x == 0.));
    }

    #[test]
    fn test_write_then_read() {
        let scene = SceneBuffer::new();
        let b = block(18000);
        scene.write(&b);

        let raw = scene.scene_raw();
        for (row, wire) in PHYSICAL_ORDER.iter().enumerate() {
            assert_eq!(raw[[row, 0]], b.ranges[*wire]);
        }
        // top row is the +15 degree beam
        assert_eq!(raw[[0, 0]], 1015);
        assert_eq!(raw[[15, 0]], 1000);

        let touched = raw.iter().filter(|r| **r != 0).count();
        assert_eq!(touched, CHANNELS);
        assert!(raw.slice(ndarray::s![.., 1..]).iter().all(|r| *r == 0));

        let snapshot = scene.snapshot();
        assert_eq!(snapshot.column(0).to_vec(), b.ranges.to_vec());
    }

    #[test]
    fn test_scene_in_meters() {
        let scene = SceneBuffer::new();
        scene.write(&block(0));
        let meters = scene.scene();
        assert!((meters[[0, 450]] - 1015. * 0.002).abs() < 1e-12);
        assert_eq!(meters[[0, 449]], 0.);
    }

    #[test]
    fn test_write_is_idempotent() {
        let once = SceneBuffer::new();
        once.write(&block(12345));
        let twice = SceneBuffer::new();
        twice.write(&block(12345));
        twice.write(&block(12345));
        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_write_overwrites() {
        let scene = SceneBuffer::new();
        scene.write(&block(0));
        scene.write(&FiringBlock {
            azimuth: 10,
            ranges: [7; CHANNELS],
        });
        // 10 hundredths rounds to the same bin as 0
        assert!(scene.snapshot().column(450).iter().all(|r| *r == 7));
    }

    #[test]
    fn test_xyz_uses_wire_order() {
        let scene = SceneBuffer::new();
        let mut ranges = [0u16; CHANNELS];
        // wire channel 0 fires at -15 degrees
        ranges[0] = 500;
        scene.write(&FiringBlock {
            azimuth: 18000,
            ranges,
        });
        let cloud = scene.xyz();
        assert_eq!(cloud.len(), CHANNELS * AZIMUTH_BINS);
        let v = (-15f64).to_radians();
        assert!((cloud.z[0] - v.sin()).abs() < 1e-9);
        assert!((cloud.y[0] - v.cos()).abs() < 1e-9);
        assert_eq!(cloud.z[1], 0.);
    }

    #[test]
    fn test_packet_writes_are_not_torn() {
        let scene = SceneBuffer::new();
        let azimuths: Vec<u16> = (0..12).map(|i| i * 40).collect();

        thread::scope(|s| {
            s.spawn(|_| {
                for value in 1..500u16 {
                    let blocks = azimuths
                        .iter()
                        .map(|azimuth| FiringBlock {
                            azimuth: *azimuth,
                            ranges: [value; CHANNELS],
                        })
                        .collect::<Vec<_>>();
                    scene.write_packet(&blocks);
                }
            });
            s.spawn(|_| {
                for _ in 0..200 {
                    let grid = scene.snapshot();
                    let first = grid[[0, 450]];
                    for azimuth in &azimuths {
                        let column = azimuth_to_column(*azimuth);
                        assert!(grid.column(column).iter().all(|r| *r == first));
                    }
                }
            });
        })
        .unwrap();

        assert!(scene.snapshot().column(450).iter().all(|r| *r == 499));
    }
}
