//! Encode/decode benchmarks for the wire codec and message framing.

use std::collections::BTreeMap;

use cipc::msg::Msg;
use cipc::wire::Codec;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

fn make_string(len: usize) -> String {
    "x".repeat(len)
}

fn make_table(pairs: usize) -> BTreeMap<String, u64> {
    (0..pairs)
        .map(|i| (format!("key-{i:04}"), i as u64))
        .collect()
}

fn bench_string_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_serialize");

    for size in [100, 1000, 10000] {
        let value = make_string(size);
        let mut buf = vec![0u8; value.serialized_size()];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| black_box(value.serialize(&mut buf)));
        });
    }

    group.finish();
}

fn bench_string_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_deserialize");

    for size in [100, 1000, 10000] {
        let value = make_string(size);
        let mut buf = vec![0u8; value.serialized_size()];
        value.serialize(&mut buf);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buf, |b, buf| {
            let mut out = String::new();
            b.iter(|| black_box(out.deserialize(buf)));
        });
    }

    group.finish();
}

fn bench_map_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_round_trip");

    for pairs in [10, 100, 1000] {
        let value = make_table(pairs);
        let mut buf = vec![0u8; value.serialized_size()];
        value.serialize(&mut buf);

        group.throughput(Throughput::Elements(pairs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &buf, |b, buf| {
            let mut out = BTreeMap::<String, u64>::new();
            b.iter(|| black_box(out.deserialize(buf)));
        });
    }

    group.finish();
}

fn bench_request_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_build");

    for size in [100, 1000, 10000] {
        let payload = make_string(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &payload,
            |b, payload| {
                b.iter(|| {
                    black_box(Msg::request(
                        1,
                        2,
                        3,
                        &(payload.clone(), 0xDEAD_BEEF_u32),
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_request_parse_and_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_parse_and_decode");

    for size in [100, 1000, 10000] {
        let wire = Msg::request(1, 2, 3, &(make_string(size), 0xDEAD_BEEF_u32))
            .into_bytes();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &wire, |b, wire| {
            b.iter(|| {
                let msg = Msg::parse(wire.clone()).unwrap();
                black_box(msg.decode_args::<(String, u32)>().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_string_serialize,
    bench_string_deserialize,
    bench_map_round_trip,
    bench_request_build,
    bench_request_parse_and_decode,
);

criterion_main!(benches);
