//! Spectrum analysis kernels
//!
//! Pure reductions over one frequency-magnitude snapshot (one byte per
//! bin, as an analyser node hands them out). Each function tolerates
//! arbitrary snapshot sizes, including empty, so the classifier can run
//! against captures other than the default 128-bin FFT.

use heapless::Vec;
use libm::sqrtf;

use crate::constants::{
    BAR_COUNT, HIGH_DOMINANCE_RATIO, LOUDNESS_MAX, LOUDNESS_SCALE, LOW_BAND_DENOMINATOR,
    LOW_BAND_NUMERATOR, LOW_DOMINANCE_RATIO, MID_BAND_NUMERATOR, MID_DOMINANCE_RATIO,
};
use crate::environment::FrequencyBand;

/// Per-band mean magnitudes for one snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandAverages {
    /// Mean magnitude of the low band (first 20% of bins)
    pub low: f32,
    /// Mean magnitude of the mid band (next 40%)
    pub mid: f32,
    /// Mean magnitude of the high band (remaining 40%)
    pub high: f32,
}

/// Overall loudness estimate on a 0-100 scale.
///
/// Scaled RMS of all magnitudes, clamped to [0, 100]. An empty or
/// all-zero snapshot estimates 0; an all-255 snapshot clamps to 100.
pub fn loudness_estimate(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }

    let mut sum_sq = 0.0f32;
    for &magnitude in bins {
        let m = magnitude as f32;
        sum_sq += m * m;
    }
    let rms = sqrtf(sum_sq / bins.len() as f32);

    (rms * LOUDNESS_SCALE).clamp(0.0, LOUDNESS_MAX)
}

/// Mean magnitude per band: low = first 20% of bins, mid = next 40%,
/// high = the rest. An empty band averages to 0.
pub fn band_averages(bins: &[u8]) -> BandAverages {
    let n = bins.len();
    let low_end = n * LOW_BAND_NUMERATOR / LOW_BAND_DENOMINATOR;
    let mid_end = n * MID_BAND_NUMERATOR / LOW_BAND_DENOMINATOR;

    BandAverages {
        low: mean(&bins[..low_end]),
        mid: mean(&bins[low_end..mid_end]),
        high: mean(&bins[mid_end..]),
    }
}

fn mean(range: &[u8]) -> f32 {
    if range.is_empty() {
        return 0.0;
    }
    let sum: u32 = range.iter().map(|&m| m as u32).sum();
    sum as f32 / range.len() as f32
}

/// Judge the dominant band from per-band averages.
///
/// Fixed priority, not a continuous score: Low wins only by beating both
/// other bands by 30%; otherwise High beats Mid by 10%; otherwise Mid
/// beats Low by 10%; otherwise the snapshot is Balanced. Ties fall
/// through to Balanced.
pub fn dominant_band(averages: BandAverages) -> FrequencyBand {
    let BandAverages { low, mid, high } = averages;

    if low > mid * LOW_DOMINANCE_RATIO && low > high * LOW_DOMINANCE_RATIO {
        FrequencyBand::Low
    } else if high > mid * HIGH_DOMINANCE_RATIO {
        FrequencyBand::High
    } else if mid > low * MID_DOMINANCE_RATIO {
        FrequencyBand::Mid
    } else {
        FrequencyBand::Balanced
    }
}

/// Up to 16 evenly-strided bars, peak-normalized to [0, 1], for the
/// dashboard's visualization strip. An all-zero snapshot yields all-zero
/// bars; an empty snapshot yields none.
pub fn visual_bars(bins: &[u8]) -> Vec<f32, BAR_COUNT> {
    let mut bars = Vec::new();
    if bins.is_empty() {
        return bars;
    }

    let peak = bins.iter().copied().max().unwrap_or(0).max(1) as f32;
    let stride = (bins.len() / BAR_COUNT).max(1);

    for i in 0..BAR_COUNT {
        let index = i * stride;
        if index >= bins.len() {
            break;
        }
        // Capacity equals BAR_COUNT, push cannot fail inside this loop.
        let _ = bars.push(bins[index] as f32 / peak);
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loudness_of_silence_is_zero() {
        assert_eq!(loudness_estimate(&[0u8; 128]), 0.0);
        assert_eq!(loudness_estimate(&[]), 0.0);
    }

    #[test]
    fn loudness_of_saturated_snapshot_clamps_to_100() {
        // RMS 255 × 0.7 = 178.5, clamped.
        assert_eq!(loudness_estimate(&[255u8; 128]), 100.0);
    }

    #[test]
    fn loudness_is_scaled_rms() {
        // Uniform 100s: RMS 100 × 0.7 = 70.
        let estimate = loudness_estimate(&[100u8; 64]);
        assert!((estimate - 70.0).abs() < 1e-3);
    }

    #[test]
    fn band_split_follows_20_40_40() {
        let mut bins = [0u8; 100];
        bins[..20].fill(200); // low fifth
        bins[20..60].fill(50); // mid
        bins[60..].fill(10); // high

        let averages = band_averages(&bins);
        assert_eq!(averages.low, 200.0);
        assert_eq!(averages.mid, 50.0);
        assert_eq!(averages.high, 10.0);
    }

    #[test]
    fn tiny_snapshot_has_empty_low_band() {
        // 4 bins: low range is empty (4/5 = 0), averages to zero.
        let averages = band_averages(&[10, 20, 30, 40]);
        assert_eq!(averages.low, 0.0);
    }

    #[test]
    fn dominance_priority_order() {
        let low = BandAverages { low: 200.0, mid: 50.0, high: 50.0 };
        assert_eq!(dominant_band(low), FrequencyBand::Low);

        let high = BandAverages { low: 50.0, mid: 50.0, high: 60.0 };
        assert_eq!(dominant_band(high), FrequencyBand::High);

        let mid = BandAverages { low: 50.0, mid: 60.0, high: 50.0 };
        assert_eq!(dominant_band(mid), FrequencyBand::Mid);

        let flat = BandAverages { low: 50.0, mid: 50.0, high: 50.0 };
        assert_eq!(dominant_band(flat), FrequencyBand::Balanced);
    }

    #[test]
    fn exact_ties_default_to_balanced() {
        // Equal everywhere: no strict margin is met.
        let tie = BandAverages { low: 0.0, mid: 0.0, high: 0.0 };
        assert_eq!(dominant_band(tie), FrequencyBand::Balanced);
    }

    #[test]
    fn bars_are_peak_normalized() {
        let mut bins = [0u8; 128];
        bins[0] = 200;
        bins[8] = 100;

        let bars = visual_bars(&bins);
        assert_eq!(bars.len(), 16);
        assert_eq!(bars[0], 1.0);
        assert_eq!(bars[1], 0.5); // stride 8 lands on bins[8]
        assert_eq!(bars[2], 0.0);
    }

    #[test]
    fn all_zero_snapshot_yields_zero_bars() {
        let bars = visual_bars(&[0u8; 128]);
        assert!(bars.iter().all(|&b| b == 0.0));
    }

    #[test]
    fn short_snapshot_yields_fewer_bars() {
        let bars = visual_bars(&[10u8; 5]);
        assert_eq!(bars.len(), 5);
        assert!(visual_bars(&[]).is_empty());
    }
}
