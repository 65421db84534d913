// File: crates/plot-core/src/kde.rs
// Summary: Univariate kernel density estimation with the Epanechnikov kernel.

/// Default smoothing bandwidth used by the age-density chart.
pub const DEFAULT_BANDWIDTH: f64 = 7.0;

/// Number of evaluation grid points the density chart uses.
pub const GRID_RESOLUTION: usize = 40;

/// One evaluated point of a density curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Bounded parabolic kernel: `0.75 * (1 - (u/k)^2) / k` inside `|u/k| <= 1`,
/// zero outside.
pub fn epanechnikov(k: f64, u: f64) -> f64 {
    let v = u / k;
    if v.abs() <= 1.0 {
        0.75 * (1.0 - v * v) / k
    } else {
        0.0
    }
}

/// Kernel density estimator over a fixed evaluation grid.
///
/// The grid is captured at construction, so the curve length is a constant
/// independent of how many samples each update carries.
#[derive(Clone, Debug)]
pub struct KernelDensityEstimator {
    grid: Vec<f64>,
    bandwidth: f64,
}

impl KernelDensityEstimator {
    pub fn new(grid: Vec<f64>, bandwidth: f64) -> Self {
        Self { grid, bandwidth }
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Evaluate the density at every grid point: the mean kernel weight over
    /// all samples. The mean of an empty sample set is defined as zero, so an
    /// empty vector yields a flat zero curve rather than NaN.
    pub fn estimate(&self, samples: &[f64]) -> Vec<DensityPoint> {
        self.grid
            .iter()
            .map(|&x| {
                let density = if samples.is_empty() {
                    0.0
                } else {
                    let sum: f64 = samples.iter().map(|&v| epanechnikov(self.bandwidth, x - v)).sum();
                    sum / samples.len() as f64
                };
                DensityPoint { x, density }
            })
            .collect()
    }
}
