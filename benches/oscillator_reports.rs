use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pendulum_physics::oscillators::{
    CompoundPendulum, ElectricOscillatingCircuit, MathematicalPendulum, Oscillator, SpringPendulum,
};
use pendulum_physics::report::collect_reports;
use pendulum_physics::session::Session;

fn build_collection(n: usize) -> Vec<Oscillator> {
    (0..n)
        .map(|i| {
            let x = 0.1 + i as f64 * 1.0e-3;
            match i % 4 {
                0 => ElectricOscillatingCircuit::new("LC", x * 1e-6, 1e-9).into(),
                1 => MathematicalPendulum::new("M", x).into(),
                2 => SpringPendulum::new("S", x).into(),
                _ => CompoundPendulum::new("C", x, 1.0, 0.5).into(),
            }
        })
        .collect()
}

fn session_script(n: usize) -> String {
    let mut script = format!("{n}\n");
    for i in 0..n {
        script.push_str(match i % 4 {
            0 => "1 LC 1e-6 1e-9\n",
            1 => "2 M 0.75\n",
            2 => "3 S 3.2\n",
            _ => "4 C 0.4 1.3 0.25\n",
        });
    }
    script
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillator_reports");
    let collection = build_collection(10_000);

    group.bench_function(BenchmarkId::new("collect", collection.len()), |b| {
        b.iter(|| collect_reports(&collection))
    });

    let script = session_script(1_000);
    group.bench_function(BenchmarkId::new("session", 1_000), |b| {
        b.iter_batched(
            Vec::<u8>::new,
            |mut out| {
                Session::new(script.as_bytes(), &mut out, std::io::sink())
                    .run()
                    .expect("scripted session");
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
