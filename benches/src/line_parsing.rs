use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flate2::Compression;
use flate2::write::GzEncoder;
use futures::StreamExt;
use navdat::prelude::*;

const NAVAID_LINE: &str = "4 40.462883 -3.554656 1998 10990 18 179.850 IBR LEMD 18R ILS-cat-III";
const AIRPORT_LINE: &str = "1 2000 1 0 LEMD Madrid Barajas";
const RUNWAY_LINE: &str = "100 60.00 1 1 0.25 1 3 1 18R 40.50186200 -003.57485500 0.00 0.00 3 9 1 1 36L 40.46301000 -003.55439900 120.00 0.00 3 9 1 1";

/// Generate a navaid catalogue with `count` records
fn generate_nav_dat(count: usize) -> String {
    let mut out = String::from("I\n810 Version\n");
    for i in 0..count {
        let kind = [2, 3, 4, 6, 12][i % 5];
        out.push_str(&format!(
            "{kind} {:.6} {:.6} {} {} 50 0.000 N{:02}\n",
            (i % 180) as f64 - 90.0,
            (i % 360) as f64 - 180.0,
            i % 5000,
            10800 + i % 1000,
            i % 100
        ));
    }
    out.push_str("99\n");
    out
}

/// Generate an airport catalogue with `count` airports of two runways each
fn generate_apt_dat(count: usize) -> String {
    let mut out = String::from("I\n850 Version\n");
    for i in 0..count {
        out.push_str(&format!("1 {} 0 0 X{:03} Field {i}\n", i % 3000, i % 1000));
        out.push_str(RUNWAY_LINE);
        out.push('\n');
        out.push_str(RUNWAY_LINE);
        out.push('\n');
    }
    out.push_str("99\n");
    out
}

fn write_gz(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn bench_single_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_line");

    group.bench_function("navaid", |b| {
        b.iter(|| black_box(SourceFormat::Navaids.parse_line(black_box(NAVAID_LINE))))
    });
    group.bench_function("airport", |b| {
        b.iter(|| black_box(SourceFormat::Airports.parse_line(black_box(AIRPORT_LINE))))
    });
    group.bench_function("runway", |b| {
        b.iter(|| black_box(SourceFormat::Airports.parse_line(black_box(RUNWAY_LINE))))
    });

    group.finish();
}

fn bench_multiplexed_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplexed_read");
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    for count in [1_000, 10_000] {
        let nav = write_gz(dir.path(), &format!("nav{count}.dat.gz"), &generate_nav_dat(count));
        let apt = write_gz(dir.path(), &format!("apt{count}.dat.gz"), &generate_apt_dat(count));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.to_async(&runtime).iter(|| {
                let multiplexer = SourceMultiplexer::new()
                    .add_source(SourceReader::navaids(&nav))
                    .add_source(SourceReader::airports(&apt));
                async move { black_box(multiplexer.spawn().count().await) }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_line, bench_multiplexed_read);
criterion_main!(benches);
