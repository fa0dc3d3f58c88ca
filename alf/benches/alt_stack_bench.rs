use alf::config::AlfConfig;
use alf::opt::alt_stack::AltStackOptimizer;
use criterion::{Criterion, criterion_group, criterion_main};
use pallet_rs::entities::{Carton, Pallet};

fn alt_stack_bench(c: &mut Criterion) {
    let carton = Carton::new(20.0, 35.0, 40.0).unwrap();
    let pallet = Pallet::new(120.0, 100.0, 200.0).unwrap();

    let mut group = c.benchmark_group("alt_stack");
    for parallel in [false, true] {
        let config = AlfConfig {
            parallel_orientations: parallel,
            ..AlfConfig::default()
        };
        let optimizer = AltStackOptimizer::new(carton, pallet, config);
        let label = match parallel {
            true => "parallel",
            false => "sequential",
        };
        group.bench_function(label, |b| {
            b.iter(|| std::hint::black_box(optimizer.solve()))
        });
    }
    group.finish();
}

criterion_group!(benches, alt_stack_bench);
criterion_main!(benches);
