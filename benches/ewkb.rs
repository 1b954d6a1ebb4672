use geo::polygon;

use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_ewkb::geometry::{Geometry, GeometryCollection, MultiPolygon, Polygon};
use geoarrow_ewkb::io::ewkb::{marshal, to_ewkb, Decoder, EncodeOptions};
use geoarrow_ewkb::srid::Srid;

fn create_data() -> MultiPolygon {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    let polygons = vec![Polygon::from(poly); 1000];
    MultiPolygon::new(polygons).with_srid(Srid::WGS84)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let multi_polygon = create_data();
    let bytes = to_ewkb(&multi_polygon, &EncodeOptions::default()).unwrap();
    let text = marshal(&multi_polygon).unwrap();
    let decoder = Decoder::default();

    c.bench_function("encode MultiPolygon to EWKB bytes", |b| {
        b.iter(|| {
            let _bytes = to_ewkb(&multi_polygon, &EncodeOptions::default()).unwrap();
        })
    });
    c.bench_function("decode EWKB bytes to MultiPolygon", |b| {
        b.iter(|| {
            let _value: Option<MultiPolygon> = decoder.decode(&bytes).unwrap();
        })
    });
    c.bench_function("decode hex EWKB to MultiPolygon", |b| {
        b.iter(|| {
            let _value: Option<MultiPolygon> = decoder.decode(&text).unwrap();
        })
    });

    let collection: GeometryCollection = multi_polygon
        .polygons
        .iter()
        .cloned()
        .map(Geometry::from)
        .collect();
    let bytes = to_ewkb(&collection, &EncodeOptions::default()).unwrap();
    c.bench_function("decode EWKB bytes to GeometryCollection through the registry", |b| {
        b.iter(|| {
            let _value: Option<GeometryCollection> = decoder.decode(&bytes).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
