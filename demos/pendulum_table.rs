use pendulum_physics::oscillators::{
    CompoundPendulum, ElectricOscillatingCircuit, MathematicalPendulum, Oscillator, SpringPendulum,
};
use pendulum_physics::oscillators::Oscillating;
use pendulum_physics::report::collect_reports;

fn main() {
    let oscillators: Vec<Oscillator> = vec![
        ElectricOscillatingCircuit::new("tank", 1e-6, 1e-9).into(), // 1 µH, 1 nF
        MathematicalPendulum::new("clock", 0.994).into(),          // ~2 s period
        SpringPendulum::new("bob", 0.5).into(),
        // Uniform 1 m rod of 2 kg pivoting at one end.
        CompoundPendulum::new("rod", 2.0 / 3.0, 2.0, 0.5).into(),
    ];

    println!("name, omega(rad/s), T(s), T/omega");
    for oscillator in &oscillators {
        println!(
            "{}: {:.4} / {:.4}",
            oscillator.name(),
            oscillator.cyclic_frequency_quantity(),
            oscillator.oscillation_period_quantity()
        );
    }

    println!();
    for r in collect_reports(&oscillators) {
        println!(
            "{}, {:.6e}, {:.6e}, {:.6e}",
            r.name, r.cyclic_frequency, r.oscillation_period, r.ratio
        );
    }
}
