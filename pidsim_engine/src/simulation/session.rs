//! Simulation session: gains in, trace out.
//!
//! A session owns the configuration, the current gains, the components and
//! the latest trace. Every gain change reruns the whole horizon from t = 0
//! and hands the new trace to each subscribed [`TraceSink`].

use pidsim_common::config::{ConfigError, SimulationConfig};
use pidsim_common::params::ControllerParams;
use tracing::trace;

use crate::simulation::driver::Simulator;
use crate::simulation::trace::SimulationTrace;

/// Consumer of finished traces (chart, file writer, ...).
pub trait TraceSink {
    fn on_trace(&mut self, trace: &SimulationTrace);
}

impl<F: FnMut(&SimulationTrace)> TraceSink for F {
    fn on_trace(&mut self, trace: &SimulationTrace) {
        self(trace)
    }
}

pub struct SimulationSession {
    simulator: Simulator,
    params: ControllerParams,
    trace: SimulationTrace,
    sinks: Vec<Box<dyn TraceSink>>,
}

impl std::fmt::Debug for SimulationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationSession")
            .field("config", self.simulator.config())
            .field("params", &self.params)
            .field("trace_len", &self.trace.len())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl SimulationSession {
    /// Validate `config` and compute the initial trace with zero gains.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_params(config, ControllerParams::default())
    }

    /// Validate `config` and `params` and compute the initial trace.
    pub fn with_params(
        config: SimulationConfig,
        params: ControllerParams,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut simulator = Simulator::new(config)?;
        let trace = simulator.run(&params);
        Ok(Self {
            simulator,
            params,
            trace,
            sinks: Vec::new(),
        })
    }

    /// Register a sink. It is not called for the trace already computed.
    pub fn subscribe(&mut self, sink: impl TraceSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Store new gains, rerun from scratch, notify subscribers.
    ///
    /// Invalid gains leave the session untouched.
    pub fn on_params_changed(
        &mut self,
        params: ControllerParams,
    ) -> Result<&SimulationTrace, ConfigError> {
        params.validate()?;
        trace!(kp = params.kp, ki = params.ki, kd = params.kd, "gains changed");

        self.params = params;
        self.trace = self.simulator.run(&self.params);
        for sink in &mut self.sinks {
            sink.on_trace(&self.trace);
        }
        Ok(&self.trace)
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        self.simulator.config()
    }

    #[inline]
    pub fn params(&self) -> &ControllerParams {
        &self.params
    }

    #[inline]
    pub fn trace(&self) -> &SimulationTrace {
        &self.trace
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
