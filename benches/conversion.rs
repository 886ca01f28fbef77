use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;
use serde_vars::{format_float, from_str, parse, parse_bool, parse_float, to_string};

#[derive(Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(dead_code)]
struct GoEnv {
    goarch: String,
    goos: String,
    goroot: String,
    cc: String,
    gogccflags: String,
    cgo_enabled: bool,
}

const GO_ENV: &str = "GOARCH=\"amd64\"\nGOHOSTARCH=\"amd\"\nGOHOSTOS=\"linux\"\nGOOS=\"linux\"\n\
GOPATH=\"/go-workspace\"\nGOROOT=\"/usr/lib/golang\"\n\
GOTOOLDIR=\"/usr/lib/golang/pkg/tool/linux_amd64\"\nGCCGO=\"gccgo\"\nCC=\"gcc\"\n\
GOGCCFLAGS=\"-fPIC -m64 -pthread -fmessage-length=0\"\nCXX=\"g++\"\nPKG_CONFIG=\"pkg-config\"\n\
CGO_ENABLED=\"1\"\nCGO_CFLAGS=\"-g -O2\"\nCGO_CPPFLAGS=\"\"\nCGO_CXXFLAGS=\"-g -O2\"\n\
CGO_FFLAGS=\"-g -O2\"\nCGO_LDFLAGS=\"-g -O2\"\n";

fn benchmark_parse_document(c: &mut Criterion) {
    c.bench_function("parse_go_env", |b| b.iter(|| parse(black_box(GO_ENV))));
    c.bench_function("deserialize_go_env", |b| {
        b.iter(|| from_str::<GoEnv>(black_box(GO_ENV)))
    });

    let vars = parse(GO_ENV).unwrap();
    c.bench_function("serialize_go_env", |b| b.iter(|| to_string(black_box(&vars))));
}

fn benchmark_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_by_size");

    for size in [10, 100, 1000].iter() {
        let text: String = (0..*size)
            .map(|i| format!("KEY_{i}=\"value number {i}\"\n"))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_float");

    group.bench_function("fast_path", |b| b.iter(|| parse_float(black_box("625e-3"))));
    group.bench_function("seventeen_digits", |b| {
        b.iter(|| parse_float(black_box("1.7976931348623157e308")))
    });
    group.bench_function("halfway", |b| {
        b.iter(|| {
            parse_float(black_box(
                "1.00000000000000011102230246251565404236316680908203125",
            ))
        })
    });
    group.bench_function("subnormal", |b| b.iter(|| parse_float(black_box("4e-324"))));

    let long = format!("2.{}e+1", "2".repeat(4000));
    group.bench_function("long_literal", |b| b.iter(|| parse_float(black_box(&long))));
    group.finish();
}

fn benchmark_format_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_float");

    group.bench_function("fixed", |b| b.iter(|| format_float(black_box(0.625))));
    group.bench_function("exponent", |b| b.iter(|| format_float(black_box(1e23))));
    group.bench_function("max", |b| b.iter(|| format_float(black_box(f64::MAX))));
    group.finish();
}

fn benchmark_parse_bool(c: &mut Criterion) {
    c.bench_function("parse_bool", |b| {
        b.iter(|| {
            for s in ["1", "True", "FALSE", "yes"] {
                let _ = parse_bool(black_box(s));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_document,
    benchmark_document_sizes,
    benchmark_parse_float,
    benchmark_format_float,
    benchmark_parse_bool
);
criterion_main!(benches);
