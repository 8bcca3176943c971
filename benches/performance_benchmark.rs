use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ethereum_rlp::{decode, encode_item, encoded_length, RlpItem};

/// A transaction-shaped list: small integers, a 20-byte address and a payload.
fn create_transaction_like(payload_size: usize) -> RlpItem {
    RlpItem::list(vec![
        RlpItem::string(vec![0x01]),
        RlpItem::string(vec![0x04, 0xa8, 0x17, 0xc8, 0x00]),
        RlpItem::string(vec![0x52, 0x08]),
        RlpItem::string(vec![0x35; 20]),
        RlpItem::string(vec![0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00]),
        RlpItem::string(vec![0xab; payload_size]),
        RlpItem::empty_list(),
    ])
}

fn create_nested(depth: usize, width: usize) -> RlpItem {
    if depth == 0 {
        return RlpItem::string(vec![0x80; 32]);
    }
    RlpItem::list((0..width).map(|_| create_nested(depth - 1, width)).collect())
}

/// Benchmark encoding of transaction-shaped payloads
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rlp_encode");

    for payload_size in &[0usize, 100, 1_000, 100_000] {
        let item = create_transaction_like(*payload_size);
        let length = encoded_length(&item).unwrap();

        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload_size),
            &item,
            |b, item| {
                b.iter(|| encode_item(black_box(item)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark decoding of the same payloads
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rlp_decode");

    for payload_size in &[0usize, 100, 1_000, 100_000] {
        let encoded = encode_item(&create_transaction_like(*payload_size)).unwrap();

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload_size),
            &encoded,
            |b, encoded| {
                b.iter(|| decode(black_box(encoded)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark deeply nested trees
fn bench_nested(c: &mut Criterion) {
    let item = create_nested(4, 6);
    let encoded = encode_item(&item).unwrap();

    c.bench_function("nested_encode", |b| {
        b.iter(|| encode_item(black_box(&item)).unwrap())
    });
    c.bench_function("nested_decode", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_nested);
criterion_main!(benches);
