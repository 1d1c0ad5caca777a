use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pos_core::family_from;
use pos_matroid::{generate_matroids, is_matroid_circuit, matroid_closure, par_generate_matroids};

fn enumeration_bench(c: &mut Criterion) {
    c.bench_function("generate_matroids_5_2", |b| {
        b.iter(|| black_box(generate_matroids(5, 2).unwrap().count()));
    });

    c.bench_function("par_generate_matroids_5_2", |b| {
        b.iter(|| black_box(par_generate_matroids(5, 2).unwrap().len()));
    });

    let circuits = family_from([
        vec![1, 2, 3],
        vec![3, 4, 5],
        vec![1, 2, 4, 6],
        vec![1, 2, 4, 7],
    ]);
    c.bench_function("matroid_closure_scratch", |b| {
        b.iter(|| {
            let closed = matroid_closure(black_box(&circuits)).unwrap();
            black_box(is_matroid_circuit(&closed))
        });
    });
}

criterion_group!(benches, enumeration_bench);
criterion_main!(benches);
