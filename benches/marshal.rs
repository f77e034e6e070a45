//! Benchmark: compare decode vs decode+validate vs decode+encode over a synthetic
//! stream of J1 and base segment lines. Every line is well formed, so each iteration
//! does the full per-field work.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metro2::frame::decode_stream;
use metro2::{BaseSegment, J1Segment, Segment};

const RECORDS: usize = 1_000;

fn j1_lines() -> Vec<String> {
    (0..RECORDS)
        .map(|i| {
            format!(
                "J1 {:<25}{:<20}{:<20} {:09}{}{}1   ",
                format!("SURNAME{}", i),
                "ROBERT",
                "",
                100_000_000 + i,
                "01151980",
                "2125551234"
            )
        })
        .collect()
}

fn base_lines() -> Vec<String> {
    let template = BaseSegment {
        time_stamp: chrono::NaiveDate::from_ymd_opt(2024, 3, 31).and_then(|d| d.and_hms_opt(12, 0, 0)),
        identification_number: "ABC1234567".into(),
        portfolio_type: "R".into(),
        account_type: "18".into(),
        date_opened: chrono::NaiveDate::from_ymd_opt(2019, 6, 1),
        terms_duration: "REV".into(),
        account_status: "11".into(),
        payment_history_profile: "0".repeat(24),
        date_account_information: chrono::NaiveDate::from_ymd_opt(2024, 3, 31),
        surname: "DOE".into(),
        first_name: "JANE".into(),
        ecoa_code: "1".into(),
        first_line_address: "100 MAIN ST".into(),
        city: "CHICAGO".into(),
        state: "IL".into(),
        zip_code: "60601".into(),
        date_birth: chrono::NaiveDate::from_ymd_opt(1975, 7, 4),
        ..BaseSegment::new()
    };
    (0..RECORDS)
        .map(|i| {
            let mut b = template.clone();
            b.consumer_account_number = format!("ACCT-{:06}", i);
            b.current_balance = i as i64 * 10;
            b.encode()
        })
        .collect()
}

fn bench_j1(c: &mut Criterion) {
    let lines = j1_lines();
    let stream = lines.join("\n");

    c.bench_function("decode_j1", |b| {
        b.iter(|| {
            let mut j1 = J1Segment::default();
            for line in &lines {
                let _ = black_box(j1.decode(black_box(line)));
            }
        })
    });

    c.bench_function("decode_validate_j1", |b| {
        b.iter(|| {
            let mut j1 = J1Segment::default();
            for line in &lines {
                if j1.decode(black_box(line)).is_ok() {
                    let _ = black_box(j1.validate());
                }
            }
        })
    });

    c.bench_function("decode_encode_j1", |b| {
        b.iter(|| {
            let mut j1 = J1Segment::default();
            for line in &lines {
                if j1.decode(black_box(line)).is_ok() {
                    black_box(j1.encode());
                }
            }
        })
    });

    c.bench_function("decode_stream_j1", |b| {
        b.iter(|| black_box(decode_stream::<J1Segment>(black_box(&stream), true)))
    });
}

fn bench_base(c: &mut Criterion) {
    let lines = base_lines();

    c.bench_function("decode_validate_base", |b| {
        b.iter(|| {
            let mut base = BaseSegment::default();
            for line in &lines {
                if base.decode(black_box(line)).is_ok() {
                    let _ = black_box(base.validate());
                }
            }
        })
    });
}

criterion_group!(benches, bench_j1, bench_base);
criterion_main!(benches);
