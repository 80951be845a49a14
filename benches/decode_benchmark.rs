// benches/decode_benchmark.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use bytes::Bytes;
use isf_rs::*;

fn isf_buffer(size: usize) -> Vec<u8> {
    let header = format!(
        ":WFMPRE:BYT_NR 2;BN_FMT RI;BYT_OR MSB;NR_PT {};PT_FMT Y;PT_OFF 0;XINCR 1.0E-9;\
         XZERO 0.0;YOFF 0.0;YMULT 1.0E-3;YZERO 0.0;XUNIT \"s\";YUNIT \"V\";",
        size
    );
    let len = (size * 2).to_string();
    let mut buffer = format!("{}:CURVE #{}{}", header, len.len(), len).into_bytes();
    buffer.extend((0..size).flat_map(|i| ((i % 4096) as i16 - 2048).to_be_bytes()));
    buffer
}

fn benchmark_parse_i16(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_i16");

    for size in [1000, 10000, 100000].iter() {
        let buffer = isf_buffer(*size);
        group.throughput(Throughput::Bytes((*size * 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| parse(buffer).unwrap());
        });
    }

    group.finish();
}

fn benchmark_split_and_decode_raw(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_raw_i16");

    for size in [1000, 10000, 100000].iter() {
        let buffer = Bytes::from(isf_buffer(*size));
        group.throughput(Throughput::Bytes((*size * 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| {
                // Bytes::clone only bumps a reference count
                let (header, payload) = split_header_and_payload(buffer.clone()).unwrap();
                decode_raw(&header, &payload).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_i16, benchmark_split_and_decode_raw);
criterion_main!(benches);
