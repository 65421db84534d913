// File: crates/plot-core/src/scale.rs
// Summary: Linear and ordinal-band scales mapping data domains to pixel ranges.

/// Continuous linear scale: affine map from `[domain_min, domain_max]`
/// onto `[range_start, range_end]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self { domain: (0.0, 1.0), range: (0.0, 1.0) }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    /// Domain padded above the observed max by `pad` (e.g. 0.10 or 0.20)
    /// so the topmost shape never touches the plot edge.
    pub fn padded_domain(self, max_observed: f64, pad: f64) -> Self {
        self.domain(0.0, max_observed + max_observed * pad)
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to a pixel coordinate. A degenerate domain
    /// (zero extent) maps everything to the range start.
    pub fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_start, r_end) = self.range;
        let span = d_max - d_min;
        if span.abs() < f64::EPSILON {
            return r_start;
        }
        r_start + (value - d_min) / span * (r_end - r_start)
    }

    /// Inverse map, pixel coordinate back to domain value.
    pub fn invert(&self, px: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_start, r_end) = self.range;
        let span = r_end - r_start;
        if span.abs() < f64::EPSILON {
            return d_min;
        }
        d_min + (px - r_start) / span * (d_max - d_min)
    }

    /// `count` uniformly spaced values spanning the domain, endpoints
    /// included. Used as the KDE evaluation grid.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        if count <= 1 {
            return vec![min];
        }
        let step = (max - min) / (count - 1) as f64;
        (0..count).map(|i| min + step * i as f64).collect()
    }

    /// Tick values rounded to 1/2/5 steps, for axis labels.
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let span = max - min;
        if span == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = span / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;
        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let nice_min = (min / nice_step).floor() * nice_step;
        let nice_max = (max / nice_step).ceil() * nice_step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;
        while tick <= nice_max + nice_step * 0.5 {
            if tick >= min && tick <= max {
                ticks.push(tick);
            }
            tick += nice_step;
        }
        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordinal band scale: a finite ordered set of labels mapped to equal-width
/// slots within the range, each band shrunk by an inner padding fraction and
/// centered within its slot.
#[derive(Clone, Debug)]
pub struct BandScale {
    labels: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, range: (0.0, 1.0), padding: 0.0 }
    }

    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding.clamp(0.0, 1.0);
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Slot width (band plus gap).
    pub fn step(&self) -> f64 {
        if self.labels.is_empty() {
            return 0.0;
        }
        let (start, end) = self.range;
        (end - start) / self.labels.len() as f64
    }

    /// Drawable width of each band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band at `index`, centered within its slot.
    pub fn position(&self, index: usize) -> f64 {
        let (start, _) = self.range;
        let step = self.step();
        start + index as f64 * step + (step - self.bandwidth()) / 2.0
    }

    /// Band left edge by label; unknown labels map to the range start.
    pub fn position_of(&self, label: &str) -> f64 {
        match self.labels.iter().position(|l| l == label) {
            Some(i) => self.position(i),
            None => self.range.0,
        }
    }

    /// Band center at `index`, where axis ticks sit.
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.bandwidth() / 2.0
    }
}
