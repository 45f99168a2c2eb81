//! Pinned traces and whole-run invariants.

use pidsim_common::config::SimulationConfig;
use pidsim_common::params::ControllerParams;
use pidsim_engine::run;

const EPS: f64 = 1e-12;

fn fixture_config() -> SimulationConfig {
    SimulationConfig {
        dt: 0.1,
        max_time: 1.0,
        delay_steps: 2,
        spring: 0.1,
        damping: 0.5,
    }
}

fn assert_series(actual: &[f64], expected: &[f64], name: &str) {
    assert_eq!(actual.len(), expected.len(), "{name} length");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPS, "{name}[{i}] = {a}, expected {e}");
    }
}

// ─── Regression fixture: P-only, two-tick delay ─────────────────────

#[test]
fn p_only_two_tick_delay_fixture() {
    let trace = run(&fixture_config(), &ControllerParams::new(1.0, 0.0, 0.0)).unwrap();

    assert_eq!(trace.len(), 10);
    assert_series(
        trace.time(),
        &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
        "time",
    );
    assert_series(
        trace.setpoint(),
        &[0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        "setpoint",
    );
    assert_series(
        trace.pose(),
        &[
            0.0,
            0.0,
            0.0,
            0.010000000000000002,
            0.029490000000000006,
            0.05797601000000001,
            0.09487974349,
            0.13954851056201,
            0.1912645306698575,
            0.24925468780674276,
        ],
        "pose",
    );
    assert_series(
        trace.output(),
        &[
            0.0,
            1.0,
            1.0,
            1.0,
            0.99,
            0.97051,
            0.94202399,
            0.90512025651,
            0.86045148943799,
            0.8087354693301425,
        ],
        "output",
    );
}

#[test]
fn pid_no_delay_fixture() {
    let cfg = SimulationConfig {
        delay_steps: 0,
        ..fixture_config()
    };
    let trace = run(&cfg, &ControllerParams::new(2.0, 0.5, 0.1)).unwrap();

    // tick 1: e = 1, I = 0.1, D = 10 → u = 2 + 0.05 + 1
    assert_series(
        &trace.output()[..4],
        &[0.0, 3.05, 2.006975, 1.9364565374999998],
        "output",
    );
    assert_series(
        &trace.pose()[..4],
        &[0.0, 0.0305, 0.07951425000000001, 0.14536283862500002],
        "pose",
    );
}

// ─── Whole-run invariants ───────────────────────────────────────────

#[test]
fn default_config_produces_3000_ticks() {
    let trace = run(
        &SimulationConfig::default(),
        &ControllerParams::new(0.3, 0.02, 0.3),
    )
    .unwrap();

    assert_eq!(trace.len(), 3000);
    assert_eq!(trace.setpoint().len(), 3000);
    assert_eq!(trace.pose().len(), 3000);
    assert_eq!(trace.output().len(), 3000);
    assert_eq!(trace.setpoint()[0], 0.0);
    assert!(trace.setpoint()[1..].iter().all(|&s| s == 1.0));

    let labels = trace.time_labels();
    assert_eq!(labels[0], "0.0");
    assert_eq!(labels[1], "0.1");
    assert_eq!(labels[2999], "299.9");
}

#[test]
fn quarter_step_labels_round_halfway_up() {
    let cfg = SimulationConfig {
        dt: 0.25,
        ..fixture_config()
    };
    let trace = run(&cfg, &ControllerParams::new(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(trace.time_labels(), vec!["0.0", "0.3", "0.5", "0.8"]);
}

#[test]
fn zero_gains_keep_everything_at_zero() {
    let trace = run(&SimulationConfig::default(), &ControllerParams::default()).unwrap();
    assert!(trace.pose().iter().all(|&p| p == 0.0));
    assert!(trace.output().iter().all(|&u| u == 0.0));
}

#[test]
fn identical_arguments_give_identical_traces() {
    let cfg = SimulationConfig::default();
    let gains = ControllerParams::new(0.4, 0.03, 0.4);
    let a = run(&cfg, &gains).unwrap();
    let b = run(&cfg, &gains).unwrap();
    // Bit-identical, not merely close.
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(a.pose()), bits(b.pose()));
    assert_eq!(bits(a.output()), bits(b.output()));
    assert_eq!(a, b);
}

#[test]
fn first_nonzero_output_grows_with_kp() {
    let cfg = fixture_config();
    let mut prev = 0.0;
    for kp in [0.25, 0.5, 1.0, 4.0] {
        let trace = run(&cfg, &ControllerParams::new(kp, 0.0, 0.0)).unwrap();
        let first = trace
            .output()
            .iter()
            .copied()
            .find(|&u| u != 0.0)
            .unwrap();
        assert!(first > prev, "kp = {kp}: {first} <= {prev}");
        prev = first;
    }
}
