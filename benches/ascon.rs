use ascon_lw::reference::{AesGcmAdapter, HmacSha256Adapter, Sha256Adapter};
use ascon_lw::{ascon_hash, permute, Ascon128, AsconMac, KeyInit, Nonce, State};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CASES: &[usize] = &[0, 64, 256, 1024, 16 * 1024];
const KEY: [u8; 16] = [0x42; 16];

fn deterministic_input(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascon/permutation");
    for rounds in [6, 12] {
        group.bench_function(BenchmarkId::from_parameter(rounds), |b| {
            let mut state: State = [0; 5];
            b.iter(|| {
                permute(black_box(&mut state), rounds);
            });
        });
    }
    group.finish();
}

fn bench_aead(c: &mut Criterion) {
    let ascon = Ascon128::new(&KEY.into());
    let ascon_nonce: Nonce<Ascon128> = [0x24u8; 16].into();
    let gcm = AesGcmAdapter::new(&KEY).expect("reference backend is required for this bench");
    let gcm_nonce = [0x24u8; 12];

    let mut group = c.benchmark_group("aead/encrypt");
    for &size in CASES {
        let msg = deterministic_input(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ascon-128", size), &msg, |b, msg| {
            b.iter(|| black_box(ascon.encrypt(&ascon_nonce, b"", msg)));
        });
        group.bench_with_input(BenchmarkId::new("aes-128-gcm", size), &msg, |b, msg| {
            b.iter(|| black_box(gcm.encrypt(&gcm_nonce, msg, b"")));
        });
    }
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let sha = Sha256Adapter::new().expect("reference backend is required for this bench");

    let mut group = c.benchmark_group("hash");
    for &size in CASES {
        let msg = deterministic_input(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ascon", size), &msg, |b, msg| {
            b.iter(|| black_box(ascon_hash(msg)));
        });
        group.bench_with_input(BenchmarkId::new("sha-256", size), &msg, |b, msg| {
            b.iter(|| black_box(sha.hash(msg)));
        });
    }
    group.finish();
}

fn bench_mac(c: &mut Criterion) {
    let ascon = AsconMac::new(&KEY.into());
    let hmac = HmacSha256Adapter::new(&KEY).expect("reference backend is required for this bench");

    let mut group = c.benchmark_group("mac");
    for &size in CASES {
        let msg = deterministic_input(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ascon", size), &msg, |b, msg| {
            b.iter(|| black_box(ascon.mac(msg)));
        });
        group.bench_with_input(BenchmarkId::new("hmac-sha-256", size), &msg, |b, msg| {
            b.iter(|| black_box(hmac.mac(msg)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permutation, bench_aead, bench_hash, bench_mac);
criterion_main!(benches);
