use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::chart::arcs::{bridge_points, collision_matrix, layer_arcs};
use urania::{
    AngleSegment, ChartSpec, ChartStyle, EphemerisSettings, Horoscope, LinearEphemeris,
    StarCatalog,
};

fn bench_compute_horoscope(c: &mut Criterion) {
    let ephemeris = LinearEphemeris::mean_motions();
    let catalog = StarCatalog::new();
    let settings = EphemerisSettings::default();

    c.bench_function("compute_horoscope", |b| {
        b.iter(|| {
            Horoscope::compute(
                black_box(&ephemeris),
                black_box(ephemeris.epoch()),
                black_box(&settings),
                black_box(&catalog),
            )
        })
    });
}

fn bench_layer_arcs(c: &mut Criterion) {
    let arcs: Vec<AngleSegment> = (0..40)
        .map(|i| {
            let start = (i as f64 * 37.0) % 360.0;
            AngleSegment::new(start, start + 20.0 + (i % 7) as f64 * 20.0)
        })
        .collect();

    c.bench_function("layer_arcs", |b| {
        b.iter(|| {
            let matrix = collision_matrix(black_box(&arcs));
            let layers = layer_arcs(&arcs, &matrix);
            bridge_points(&arcs, &matrix, &layers)
        })
    });
}

fn bench_chart_spec(c: &mut Criterion) {
    let ephemeris = LinearEphemeris::mean_motions();
    let horoscope = Horoscope::compute(
        &ephemeris,
        ephemeris.epoch(),
        &EphemerisSettings::default(),
        &StarCatalog::new(),
    )
    .unwrap();

    for style in ChartStyle::ALL {
        c.bench_function(&format!("chart_spec_{}", style), |b| {
            b.iter(|| ChartSpec::draw(black_box(&horoscope), style))
        });
    }
}

criterion_group!(benches, bench_compute_horoscope, bench_layer_arcs, bench_chart_spec);
criterion_main!(benches);
