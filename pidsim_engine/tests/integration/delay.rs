//! Actuation delay through the full driver.

use pidsim_common::config::SimulationConfig;
use pidsim_common::params::ControllerParams;
use pidsim_engine::simulation::driver::{Simulator, Tick};

fn ticks(delay_steps: usize, gains: ControllerParams, count: usize) -> Vec<Tick> {
    let cfg = SimulationConfig {
        delay_steps,
        ..Default::default()
    };
    let mut sim = Simulator::new(cfg).unwrap();
    (0..count).map(|i| sim.tick(&gains, i)).collect()
}

#[test]
fn plant_input_is_output_from_n_ticks_earlier() {
    let gains = ControllerParams::new(0.3, 0.02, 0.3);
    for n in [0, 1, 2, 10, 37] {
        let run = ticks(n, gains, 200);
        for (i, t) in run.iter().enumerate() {
            let expected = if i < n { 0.0 } else { run[i - n].output };
            assert_eq!(t.applied, expected, "delay {n}, tick {i}");
        }
    }
}

#[test]
fn plant_rests_while_zero_fill_drains() {
    let n = 10;
    let run = ticks(n, ControllerParams::new(1.0, 0.0, 0.0), 30);
    // Tick 0 output is zero (setpoint 0), so the plant first moves at n + 1.
    for t in &run[..=n] {
        assert_eq!(t.plant.pose, 0.0);
        assert_eq!(t.plant.vel, 0.0);
    }
    assert!(run[n + 1].plant.pose > 0.0);
}

#[test]
fn recorded_output_is_undelayed() {
    let cfg = SimulationConfig {
        max_time: 3.0,
        ..Default::default()
    };
    let gains = ControllerParams::new(1.0, 0.0, 0.0);
    let trace = pidsim_engine::run(&cfg, &gains).unwrap();
    // Controller reacts at tick 1 even though the plant has not moved yet.
    assert_eq!(trace.output()[1], 1.0);
    assert_eq!(trace.pose()[1], 0.0);
}

#[test]
fn longer_delay_slows_first_motion() {
    let gains = ControllerParams::new(1.0, 0.0, 0.0);
    let first_motion = |n: usize| {
        ticks(n, gains, 100)
            .iter()
            .position(|t| t.plant.pose != 0.0)
            .unwrap()
    };
    assert_eq!(first_motion(0), 1);
    assert_eq!(first_motion(3), 4);
    assert_eq!(first_motion(10), 11);
}
