//! Biased randomized target selection
//!
//! Produces gaze targets that cluster near an axis's centre while still
//! making the occasional full excursion. The clustering is what sells the
//! idle-gaze illusion: real eyes linger near a fixation point and only
//! sometimes sweep wide.

use rand_core::RngCore;

use super::range::AxisRange;

/// One draw in this many ignores the centre band and sweeps the full range
///
/// Empirically tuned for visual naturalness; kept verbatim from the
/// hand-calibrated eye mechanism rather than re-derived.
pub const FULL_RANGE_ONE_IN: u32 = 3;

/// An axis range plus a centre-bias strength
///
/// `bias_pct` is fixed-point percent: 0 draws uniformly over the whole
/// travel, 100 bounds the band at the full span centred on `centre`
/// (clamped to the travel limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BiasedRange {
    /// Travel limits and centre of the axis
    pub range: AxisRange,
    /// Band width as percent of the full span (0-100)
    pub bias_pct: u8,
}

impl BiasedRange {
    /// Create a biased range spec
    pub fn new(range: AxisRange, bias_pct: u8) -> Self {
        Self { range, bias_pct }
    }

    /// The centre band `[lo, hi]`, clamped to the travel limits
    pub fn band(&self) -> (i16, i16) {
        let span = self.range.span() as i32;
        let half_band = span * self.bias_pct.min(100) as i32 / 200;
        let centre = self.range.centre as i32;
        let lo = self.range.min() as i32;
        let hi = self.range.max() as i32;
        let band_lo = (centre - half_band).clamp(lo, hi) as i16;
        let band_hi = (centre + half_band).clamp(lo, hi) as i16;
        (band_lo, band_hi)
    }
}

/// Draw a random position for the given biased range
///
/// Two draws in three land inside the centre band; the remainder sweep
/// the full travel. The result always lies within the normalized travel
/// limits, for any bias and either limit order.
pub fn random_position<R: RngCore>(rng: &mut R, spec: &BiasedRange) -> i16 {
    if one_in(rng, FULL_RANGE_ONE_IN) {
        return uniform_i16(rng, spec.range.min(), spec.range.max());
    }
    let (band_lo, band_hi) = spec.band();
    uniform_i16(rng, band_lo, band_hi)
}

/// Uniform draw from the closed interval `[lo, hi]`
pub fn uniform_i16<R: RngCore>(rng: &mut R, lo: i16, hi: i16) -> i16 {
    debug_assert!(lo <= hi);
    let width = (hi as i32 - lo as i32) as u32 + 1;
    (lo as i32 + (rng.next_u32() % width) as i32) as i16
}

/// Uniform draw from the closed interval `[lo, hi]`
pub fn uniform_u32<R: RngCore>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    debug_assert!(lo <= hi);
    lo + rng.next_u32() % (hi - lo + 1)
}

/// True one time in `n`
pub fn one_in<R: RngCore>(rng: &mut R, n: u32) -> bool {
    rng.next_u32() % n == 0
}
