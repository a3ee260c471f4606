use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ngmesh_core::{decode, encode, Mesh};

fn grid_mesh(side: usize) -> Mesh {
    let mut vertices = Vec::with_capacity(side * side * 3);
    for row in 0..side {
        for col in 0..side {
            vertices.push(col as f32);
            vertices.push(row as f32);
            vertices.push(0.0);
        }
    }

    let mut triangles = Vec::with_capacity((side - 1) * (side - 1) * 6);
    for row in 0..side - 1 {
        for col in 0..side - 1 {
            let a = (row * side + col) as u32;
            let b = a + 1;
            let c = a + side as u32;
            let d = c + 1;
            triangles.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    Mesh::new(vertices, triangles)
}

fn bench_codec(c: &mut Criterion) {
    let mesh = grid_mesh(100);
    let encoded = encode(&mesh).unwrap();

    c.bench_function("encode_grid_100x100", |b| {
        b.iter(|| encode(black_box(&mesh)).unwrap())
    });
    c.bench_function("decode_grid_100x100", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
