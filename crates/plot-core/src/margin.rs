// File: crates/plot-core/src/margin.rs
// Summary: Fractional margin configuration and inner-rectangle resolution.

use crate::geometry::{RectF, Size};

/// Margins as fractions of the *container's* corresponding dimension,
/// each in `[0, 1)`. Invariant: `top + bottom < 1` and `left + right < 1`;
/// a violating config resolves to zero margins (logged) instead of producing
/// a degenerate inner rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl MarginConfig {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Build margins from occupation fractions: the chart body occupies
    /// `w_occ` of the width and `h_occ` of the height, remainder split
    /// evenly between the opposing sides.
    pub fn from_occupation(w_occ: f64, h_occ: f64) -> Self {
        let w_rest = (1.0 - w_occ.clamp(0.0, 1.0)) / 2.0;
        let h_rest = (1.0 - h_occ.clamp(0.0, 1.0)) / 2.0;
        Self { top: h_rest, right: w_rest, bottom: h_rest, left: w_rest }
    }

    fn is_valid(&self) -> bool {
        let in_range = |f: f64| (0.0..1.0).contains(&f);
        in_range(self.top)
            && in_range(self.right)
            && in_range(self.bottom)
            && in_range(self.left)
            && self.top + self.bottom < 1.0
            && self.left + self.right < 1.0
    }

    /// Resolve against a measured container size. Fraction pairs summing to
    /// one or more clamp the whole config to zero margins.
    pub fn resolve(&self, size: Size) -> PixelMargins {
        if !self.is_valid() {
            log::warn!(
                "margin fractions violate sum invariant (top={} right={} bottom={} left={}); clamping to zero",
                self.top, self.right, self.bottom, self.left
            );
            return PixelMargins::ZERO;
        }
        PixelMargins {
            top: self.top * size.h,
            right: self.right * size.w,
            bottom: self.bottom * size.h,
            left: self.left * size.w,
        }
    }
}

impl Default for MarginConfig {
    /// The dashboard's bar-chart occupation defaults (0.9 wide, 0.8 tall).
    fn default() -> Self {
        Self::from_occupation(0.9, 0.8)
    }
}

/// Margins resolved to pixels for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PixelMargins {
    pub const ZERO: PixelMargins = PixelMargins { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// The inner rectangle: container minus resolved margins.
    pub fn inner_rect(&self, size: Size) -> RectF {
        RectF::from_xywh(
            self.left,
            self.top,
            (size.w - self.left - self.right).max(0.0),
            (size.h - self.top - self.bottom).max(0.0),
        )
    }
}
