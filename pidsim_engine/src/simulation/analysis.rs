//! Step-response metrics.
//!
//! Computes tracking error, peak and overshoot of the pose, the peak
//! controller effort, and how many output samples fall outside the display
//! band of the reference chart. The trace itself is never altered: values
//! outside the band are valid simulation output.

use pidsim_common::consts::{DISPLAY_MAX, DISPLAY_MIN, SETPOINT_STEP};
use serde::Serialize;

use crate::simulation::trace::SimulationTrace;

/// Vertical range a renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayBand {
    pub min: f64,
    pub max: f64,
}

impl Default for DisplayBand {
    fn default() -> Self {
        Self {
            min: DISPLAY_MIN,
            max: DISPLAY_MAX,
        }
    }
}

impl DisplayBand {
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Summary of one trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TraceSummary {
    /// Pose at the last tick.
    pub final_pose: f64,
    /// |setpoint − pose| at the last tick.
    pub final_error: f64,
    /// Largest pose reached.
    pub peak_pose: f64,
    /// Time of `peak_pose` [s].
    pub peak_time: f64,
    /// Amount by which the pose exceeded the step target (0 if it never did).
    pub overshoot: f64,
    /// Largest |output|.
    pub peak_output: f64,
    /// Output samples outside the display band (including NaN).
    pub clipped_samples: usize,
}

/// Evaluate `trace` against `band`. An empty trace yields all zeros.
pub fn summarize(trace: &SimulationTrace, band: DisplayBand) -> TraceSummary {
    let Some(last) = trace.len().checked_sub(1).and_then(|i| trace.sample(i)) else {
        return TraceSummary::default();
    };

    let (peak_idx, peak_pose) = trace
        .pose()
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, p)| {
            if p > best.1 { (i, p) } else { best }
        });
    // No comparable pose (all NaN): report the origin.
    let peak_pose = if peak_pose == f64::NEG_INFINITY { 0.0 } else { peak_pose };

    let peak_output = trace
        .output()
        .iter()
        .fold(0.0_f64, |acc, u| acc.max(u.abs()));

    let clipped_samples = trace.output().iter().filter(|&&u| !band.contains(u)).count();

    TraceSummary {
        final_pose: last.pose,
        final_error: (last.setpoint - last.pose).abs(),
        peak_pose,
        peak_time: trace.time()[peak_idx],
        overshoot: (peak_pose - SETPOINT_STEP).max(0.0),
        peak_output,
        clipped_samples,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
