//! Simulation output: four aligned series, one entry per tick.

use serde::Serialize;

/// Result of one full run.
///
/// `output` holds the controller command as computed, not the delayed value
/// that reached the plant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationTrace {
    time: Vec<f64>,
    setpoint: Vec<f64>,
    pose: Vec<f64>,
    output: Vec<f64>,
}

/// One row of a [`SimulationTrace`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceSample {
    pub time: f64,
    pub setpoint: f64,
    pub pose: f64,
    pub output: f64,
}

impl SimulationTrace {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            time: Vec::with_capacity(steps),
            setpoint: Vec::with_capacity(steps),
            pose: Vec::with_capacity(steps),
            output: Vec::with_capacity(steps),
        }
    }

    pub(crate) fn push(&mut self, sample: TraceSample) {
        self.time.push(sample.time);
        self.setpoint.push(sample.setpoint);
        self.pose.push(sample.pose);
        self.output.push(sample.output);
    }

    #[inline]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    #[inline]
    pub fn setpoint(&self) -> &[f64] {
        &self.setpoint
    }

    #[inline]
    pub fn pose(&self) -> &[f64] {
        &self.pose
    }

    #[inline]
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Row `i`, if in range.
    pub fn sample(&self, i: usize) -> Option<TraceSample> {
        Some(TraceSample {
            time: *self.time.get(i)?,
            setpoint: *self.setpoint.get(i)?,
            pose: *self.pose.get(i)?,
            output: *self.output.get(i)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = TraceSample> + '_ {
        (0..self.len()).filter_map(|i| self.sample(i))
    }

    /// X-axis labels: times with one decimal place ("0.0", "0.1", ...).
    ///
    /// Exact halfway values round away from zero (0.25 → "0.3").
    pub fn time_labels(&self) -> Vec<String> {
        self.time.iter().map(|&t| time_label(t)).collect()
    }

    /// True if every recorded value is finite.
    pub fn is_finite(&self) -> bool {
        self.pose
            .iter()
            .chain(self.output.iter())
            .all(|v| v.is_finite())
    }
}

fn time_label(t: f64) -> String {
    // Only multiples of 0.25 with an odd quarter sit exactly between two
    // tenths; `{:.1}` would send those to the even digit.
    let quarters = t * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (t * 10.0).round() / 10.0)
    } else {
        format!("{t:.1}")
    }
}
