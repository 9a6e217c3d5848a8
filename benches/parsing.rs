use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_cfg::{from_str, parse, scan, stringify, to_string};

#[derive(Serialize, Deserialize, Clone)]
struct Server {
    name: String,
    host: String,
    port: u16,
    weight: f64,
    enabled: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Cluster {
    id: u32,
    servers: Vec<Server>,
    tags: Vec<String>,
}

fn cluster(size: u32) -> Cluster {
    Cluster {
        id: 7,
        servers: (0..size)
            .map(|i| Server {
                name: format!("node-{}", i),
                host: format!("10.0.0.{}", i % 255),
                port: 8000 + (i % 1000) as u16,
                weight: 0.5 + f64::from(i),
                enabled: i % 3 != 0,
            })
            .collect(),
        tags: vec!["prod".to_string(), "eu-west".to_string()],
    }
}

const HANDWRITTEN: &str = r#"
// service definition
{
    name = "gateway"
    listen = { host = '0.0.0.0' port = 8080 backlog = 0x400 }
    workers = [1 2 4 8 16]
    ratios = [0.25 -0.5 +1.75]
    tls = { enabled = true cert = "/etc/tls/cert.pem" key = "/etc/tls/key.pem" }
    upstream = nil
}
"#;

fn benchmark_scan(c: &mut Criterion) {
    c.bench_function("scan_handwritten", |b| b.iter(|| scan(black_box(HANDWRITTEN))));
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_handwritten", |b| b.iter(|| parse(black_box(HANDWRITTEN))));
}

fn benchmark_stringify(c: &mut Criterion) {
    let value = parse(HANDWRITTEN).unwrap();
    c.bench_function("stringify_handwritten", |b| {
        b.iter(|| stringify(black_box(&value)))
    });
}

fn benchmark_serialize_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_cluster");

    for size in [10, 100, 500].iter() {
        let data = cluster(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| to_string(black_box(data)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_cluster");

    for size in [10, 100, 500].iter() {
        let text = to_string(&cluster(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Cluster>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_deep_nesting(c: &mut Criterion) {
    let text = format!("{}1{}", "{a=".repeat(100), "}".repeat(100));
    c.bench_function("parse_nested_100", |b| b.iter(|| parse(black_box(&text))));
}

criterion_group!(
    benches,
    benchmark_scan,
    benchmark_parse,
    benchmark_stringify,
    benchmark_serialize_cluster,
    benchmark_deserialize_cluster,
    benchmark_deep_nesting
);
criterion_main!(benches);
