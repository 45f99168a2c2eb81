//! Second-order damped plant (unit mass-spring-damper).
//!
//! `acc = u - damping * vel - spring * pose`, advanced with semi-implicit
//! Euler: the updated velocity is used to move the position.

/// Plant physical constants, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantParams {
    /// Restoring-force coefficient.
    pub spring: f64,
    /// Velocity damping coefficient.
    pub damping: f64,
}

/// Plant state. Both fields are zero at the start of every run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlantState {
    /// Position.
    pub pose: f64,
    /// Velocity.
    pub vel: f64,
}

impl PlantState {
    /// Reset to rest at the origin.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Advance the plant by one tick with control input `u`.
///
/// Mutates `state` and returns the new state.
#[inline]
pub fn plant_step(state: &mut PlantState, params: &PlantParams, u: f64, dt: f64) -> PlantState {
    let acc = u - params.damping * state.vel - params.spring * state.pose;
    // Velocity first; order matters for trajectory fidelity.
    state.vel += acc * dt;
    state.pose += state.vel * dt;
    *state
}

// ─── Tests ──────────────────────────────────────────────────────────
