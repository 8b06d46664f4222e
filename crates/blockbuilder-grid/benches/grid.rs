//! Benchmarks for bulk block grid edits

use blockbuilder_core::{CellCoord, EditorConfig, LatticeDims, MergePolicy, Region};
use blockbuilder_grid::VoxelGrid;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn lattice() -> LatticeDims {
    LatticeDims::new(65, 65, 65).expect("valid lattice")
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let dims = lattice();
    group.throughput(Throughput::Elements(dims.cell_count() as u64));

    group.bench_function("add_all", |b| {
        let mut grid = VoxelGrid::new(dims, &EditorConfig::default());
        b.iter(|| {
            grid.add_all();
            black_box(&grid);
        });
    });

    group.bench_function("add_region_full", |b| {
        let mut grid = VoxelGrid::new(dims, &EditorConfig::default());
        let region = dims.full_region();
        b.iter(|| grid.add_region(black_box(region)));
    });

    group.bench_function("add_region_slab", |b| {
        let mut grid = VoxelGrid::new(dims, &EditorConfig::default());
        let region = Region::new(CellCoord::new(0, 0, 10), CellCoord::new(63, 63, 10));
        b.iter(|| grid.add_region(black_box(region)));
    });

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let dims = lattice();
    let config = EditorConfig::default();

    let mut source = VoxelGrid::new(dims, &config);
    source
        .add_region(Region::new(CellCoord::new(0, 0, 0), CellCoord::new(63, 63, 31)))
        .expect("region inside lattice");

    for policy in [MergePolicy::External, MergePolicy::Internal] {
        group.bench_function(format!("{policy:?}"), |b| {
            let mut dest = VoxelGrid::new(dims, &config);
            dest.add_region(Region::new(CellCoord::new(0, 0, 16), CellCoord::new(63, 63, 47)))
                .expect("region inside lattice");
            b.iter(|| black_box(dest.merge(&source, policy)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill, bench_merge);
criterion_main!(benches);
