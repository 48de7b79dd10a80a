use nth_conway::{Seed, initialize, run};
use std::time::Instant;

fn bench_run(size: usize, generations: usize) -> (f64, usize) {
    let mut rng = Seed::Fixed(0x5EED_1234_ABCD_EF01).rng();
    let initial = initialize(size, size, &mut rng).expect("bench sizes are non-zero");
    let run = run(initial, generations);

    let start = Instant::now();
    let last = run.last();
    let duration = start.elapsed();

    (duration.as_secs_f64() * 1000.0, last.population())
}

fn main() {
    let scales: &[(usize, usize)] = &[
        (64, 1000),
        (256, 200),
        (1024, 20),
        (2048, 5),
    ];

    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>10}",
        "Grid", "Cells", "Gens", "Total(ms)", "Avg(ms)"
    );
    println!("{}", "-".repeat(60));

    for &(size, generations) in scales {
        let (total_ms, _pop) = bench_run(size, generations);
        let avg_ms = total_ms / generations as f64;
        println!(
            "{:<10} {:>12} {:>12} {:>12.1} {:>10.4}",
            format!("{}x{}", size, size),
            size * size,
            generations,
            total_ms,
            avg_ms
        );
    }
}
