use super::*;

fn settle_time(simulation: &SpringSimulation) -> Option<f32> {
    (1..=600)
        .map(|frame| frame as f32 / 60.0)
        .find(|&t| simulation.is_done(t))
}

#[test]
fn fling_spec_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
    assert_eq!(spec.stiffness, 500.0);
}

#[test]
fn simulation_starts_at_start_with_initial_velocity() {
    let simulation = SpringSimulation::new(SpringSpec::fling(), 0.25, 1.001, 2.0);
    assert!((simulation.x(0.0) - 0.25).abs() < 1e-5);
    assert!((simulation.dx(0.0) - 2.0).abs() < 1e-4);
}

#[test]
fn critically_damped_simulation_settles_without_overshoot() {
    let simulation = SpringSimulation::new(SpringSpec::fling(), 0.0, 1.0, 0.0);
    let mut previous = simulation.x(0.0);
    for frame in 1..120 {
        let value = simulation.x(frame as f32 / 60.0);
        assert!(value >= previous - 1e-6, "critically damped spring went back");
        assert!(value <= 1.0 + 1e-4, "critically damped spring overshot: {value}");
        previous = value;
    }
    assert!(settle_time(&simulation).is_some());
}

#[test]
fn under_damped_simulation_overshoots_then_settles() {
    let spec = SpringSpec::fling().with_damping_ratio(0.3);
    let simulation = SpringSimulation::new(spec, 0.0, 1.0, 0.0);
    let peak = (1..120)
        .map(|frame| simulation.x(frame as f32 / 60.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "under-damped spring should overshoot");
    assert!(settle_time(&simulation).is_some());
}

#[test]
fn over_damped_simulation_reaches_target() {
    let spec = SpringSpec::fling().with_damping_ratio(2.0);
    let simulation = SpringSimulation::new(spec, 1.0, -0.001, -1.0);
    assert!((simulation.x(0.0) - 1.0).abs() < 1e-5);
    assert!(settle_time(&simulation).is_some());
    assert!(simulation.x(10.0).abs() < 0.01);
}

#[test]
fn stiffer_spring_settles_sooner() {
    let soft = SpringSimulation::new(SpringSpec::fling(), 0.0, 1.0, 0.0);
    let stiff = SpringSimulation::new(SpringSpec::fling().with_stiffness(2000.0), 0.0, 1.0, 0.0);
    let soft_time = settle_time(&soft).expect("soft spring settles");
    let stiff_time = settle_time(&stiff).expect("stiff spring settles");
    assert!(stiff_time < soft_time);
}
