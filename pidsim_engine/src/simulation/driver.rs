//! Fixed-step simulation driver.
//!
//! Per tick, in this order:
//! 1. `setpoint = 1.0` for `t > 0`, `0.0` at `t = 0`
//! 2. PID output from the setpoint and the pose of the previous tick
//! 3. Output enters the delay line; the oldest value leaves it
//! 4. The plant advances with the delayed value
//! 5. `(t, setpoint, pose, output)` is recorded with the undelayed output
//!
//! Every run starts from the zero state; nothing carries across runs.

use pidsim_common::config::{ConfigError, SimulationConfig};
use pidsim_common::consts::SETPOINT_STEP;
use pidsim_common::params::ControllerParams;
use tracing::{debug, warn};

use crate::control::delay::DelayLine;
use crate::control::pid::{PidState, pid_compute};
use crate::plant::{PlantParams, PlantState, plant_step};
use crate::simulation::trace::{SimulationTrace, TraceSample};

/// Everything that happened in one tick, including the delayed input that
/// actually drove the plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub time: f64,
    pub setpoint: f64,
    /// Controller output computed this tick.
    pub output: f64,
    /// Input applied to the plant this tick (output of `len` ticks ago).
    pub applied: f64,
    /// Plant state after this tick's update.
    pub plant: PlantState,
}

impl From<Tick> for TraceSample {
    fn from(t: Tick) -> Self {
        TraceSample {
            time: t.time,
            setpoint: t.setpoint,
            pose: t.plant.pose,
            output: t.output,
        }
    }
}

/// Unit step applied strictly after t = 0.
#[inline]
pub fn setpoint_at(time: f64) -> f64 {
    if time > 0.0 { SETPOINT_STEP } else { 0.0 }
}

/// Controller, plant and delay line for one validated configuration.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    plant_params: PlantParams,
    pid: PidState,
    plant: PlantState,
    delay: DelayLine,
}

impl Simulator {
    /// Validate `config` and build zeroed components.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            plant_params: PlantParams {
                spring: config.spring,
                damping: config.damping,
            },
            pid: PidState::default(),
            plant: PlantState::default(),
            delay: DelayLine::new(config.delay_steps),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    pub fn plant(&self) -> PlantState {
        self.plant
    }

    /// Return every component to its initial zero state.
    pub fn reset(&mut self) {
        self.pid.reset();
        self.plant.reset();
        self.delay.reset();
    }

    /// Advance by one tick. `index` determines the time (`index * dt`).
    pub fn tick(&mut self, gains: &ControllerParams, index: usize) -> Tick {
        let dt = self.config.dt;
        let time = index as f64 * dt;
        let setpoint = setpoint_at(time);

        let output = pid_compute(&mut self.pid, gains, setpoint, self.plant.pose, dt);
        let applied = self.delay.push_pop(output);
        let plant = plant_step(&mut self.plant, &self.plant_params, applied, dt);

        Tick {
            time,
            setpoint,
            output,
            applied,
            plant,
        }
    }

    /// Reset, then simulate the full horizon.
    pub fn run(&mut self, gains: &ControllerParams) -> SimulationTrace {
        let steps = self.config.num_steps();
        debug!(
            kp = gains.kp,
            ki = gains.ki,
            kd = gains.kd,
            steps,
            delay_steps = self.config.delay_steps,
            "running simulation"
        );

        self.reset();
        let mut trace = SimulationTrace::with_capacity(steps);
        for i in 0..steps {
            trace.push(self.tick(gains, i).into());
        }

        if !trace.is_finite() {
            warn!(
                kp = gains.kp,
                ki = gains.ki,
                kd = gains.kd,
                "trajectory diverged to non-finite values"
            );
        }
        trace
    }
}

/// Run one simulation from scratch.
///
/// Fails before producing any trace if `config` or `params` is invalid.
pub fn run(
    config: &SimulationConfig,
    params: &ControllerParams,
) -> Result<SimulationTrace, ConfigError> {
    params.validate()?;
    let mut sim = Simulator::new(*config)?;
    Ok(sim.run(params))
}

// ─── Tests ──────────────────────────────────────────────────────────
