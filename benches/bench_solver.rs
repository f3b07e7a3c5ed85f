use criterion::{criterion_group, criterion_main, Criterion};

use kociemba::cubie::CubieCube;
use kociemba::facelet::SOLVED_FACE_CUBE;
use kociemba::moves::Move::*;
use kociemba::solver::solve;

fn cc_apply_move() {
    let _ = CubieCube::default().apply_move(R).apply_move(U);
}

fn cc_mul() {
    let a = CubieCube::default().apply_move(R);
    let b = CubieCube::default().apply_move(U);
    let _ = a.mul(&b);
}

fn bench_cubie(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube");
    group.bench_function("mul", |b| b.iter(cc_mul));
    group.bench_function("apply_move", |b| b.iter(cc_apply_move));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let target = SOLVED_FACE_CUBE.to_string();
    c.bench_function("solve", |b| {
        b.iter(|| {
            solve(
                "RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF",
                &target,
                23,
                false,
            )
        })
    });
}

criterion_group!(benches, bench_solver, bench_cubie);
criterion_main!(benches);
