use crate::constants::{BIN_DEGREES, RANGE_RESOLUTION_M};
use crate::numeric::degree_to_radian;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use velodyne_data::PointCloud;

/// Precomputed trigonometry of every (channel, azimuth bin) pair.
///
/// Built once, after which projecting a range grid is a table lookup and an
/// elementwise multiply.
#[derive(Clone, Debug)]
pub struct TrigTables {
    /// cos(vertical) * sin(azimuth)
    to_x: Array2<f64>,
    /// cos(vertical) * cos(azimuth)
    to_y: Array2<f64>,
    /// sin(vertical), one row per channel
    to_z: Array2<f64>,
}

impl TrigTables {
    /// # Arguments
    ///
    /// * `vertical_degrees` - Vertical angle of each channel, in grid row order.
    /// * `n_bins` - Number of azimuth bins, bin `j` is at `j * 0.4` degrees.
    pub fn new(vertical_degrees: &[f64], n_bins: usize) -> TrigTables {
        let vertical = Array1::from_iter(vertical_degrees.iter().map(|v| degree_to_radian(*v)));
        let azimuth =
            Array1::from_iter((0..n_bins).map(|j| degree_to_radian(j as f64 * BIN_DEGREES)));

        let cos_v = vertical.mapv(f64::cos).insert_axis(Axis(1));
        let sin_v = vertical.mapv(f64::sin).insert_axis(Axis(1));
        let sin_a = azimuth.mapv(f64::sin).insert_axis(Axis(0));
        let cos_a = azimuth.mapv(f64::cos).insert_axis(Axis(0));

        TrigTables {
            to_x: &cos_v * &sin_a,
            to_y: &cos_v * &cos_a,
            to_z: sin_v,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.to_x.dim()
    }

    /// Projects a range grid in sensor units (2mm) to Cartesian meters.
    ///
    /// Coordinates are flattened row by row, so point `c * n_bins + j` comes
    /// from row `c` and bin `j`.
    pub fn project(&self, ranges: ArrayView2<u16>) -> PointCloud {
        assert_eq!(ranges.dim(), self.shape());
        let meters = ranges.mapv(|r| r as f64 * RANGE_RESOLUTION_M);
        let x = &meters * &self.to_x;
        let y = &meters * &self.to_y;
        let z = &meters * &self.to_z;
        PointCloud {
            x: x.iter().copied().collect(),
            y: y.iter().copied().collect(),
            z: z.iter().copied().collect(),
        }
    }
}
