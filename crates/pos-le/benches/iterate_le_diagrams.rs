use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pos_le::{grassmann_necklace_to_le_diagram, le_diagram_to_grassmann_necklace, le_diagrams};

fn le_bench(c: &mut Criterion) {
    c.bench_function("le_diagrams_7_3", |b| {
        b.iter(|| black_box(le_diagrams(7, 3).unwrap().count()));
    });

    let diagrams: Vec<_> = le_diagrams(6, 3).unwrap().collect();
    c.bench_function("le_necklace_round_trip_6_3", |b| {
        b.iter(|| {
            for diagram in &diagrams {
                let necklace = le_diagram_to_grassmann_necklace(diagram).unwrap();
                black_box(grassmann_necklace_to_le_diagram(&necklace).unwrap());
            }
        });
    });
}

criterion_group!(benches, le_bench);
criterion_main!(benches);
