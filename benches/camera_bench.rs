use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use geocam::camera::{FreeCamera, LookAtCamera};
use geocam::globe::{GeodeticPosition, Globe, Projection};

fn look_at_camera(globe: &Arc<Globe>) -> LookAtCamera {
    let mut camera = LookAtCamera::new(Arc::clone(globe));
    camera.position = GeodeticPosition::new(45.0, -100.0, 1.0e6);
    camera.range = 6.0e6;
    camera.heading = 50.0;
    camera.tilt = 70.0;
    camera.roll = 45.0;
    camera
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_view_matrix");
    for projection in [Projection::Ellipsoidal, Projection::Equirectangular] {
        let globe = Arc::new(Globe::wgs84().with_projection(projection));
        let mut camera = look_at_camera(&globe);
        group.bench_function(format!("{projection:?}"), |b| {
            b.iter(|| black_box(camera.create_view_matrix()));
        });
    }
    group.finish();
}

fn conversion_benchmark(c: &mut Criterion) {
    let globe = Arc::new(Globe::wgs84());
    let mut look_at = look_at_camera(&globe);
    let mut free = FreeCamera::new(Arc::clone(&globe));

    c.bench_function("look_at_to_free", |b| {
        b.iter(|| {
            let _ = black_box(look_at.as_free_camera(&mut free));
        });
    });

    let mut target = LookAtCamera::new(Arc::clone(&globe));
    c.bench_function("free_to_look_at", |b| {
        b.iter(|| {
            target.range = 6.0e6;
            let _ = black_box(free.as_look_at_camera(&mut target));
        });
    });
}

fn geodetic_benchmark(c: &mut Criterion) {
    let globe = Globe::wgs84();
    let point =
        globe.geographic_to_cartesian(&GeodeticPosition::new(21.9, -125.05, 4.6e6));
    c.bench_function("cartesian_to_geographic", |b| {
        b.iter(|| black_box(globe.cartesian_to_geographic(black_box(point))));
    });
}

criterion_group!(
    benches,
    view_matrix_benchmark,
    conversion_benchmark,
    geodetic_benchmark
);
criterion_main!(benches);
