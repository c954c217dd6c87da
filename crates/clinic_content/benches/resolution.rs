use clinic_content::{clean_markup, resolve_field, ContentResolver};
use clinic_core::{localized, ApiSuffix, Banner, ContentBundle, SiteConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::PathBuf;

fn bench_resolution(c: &mut Criterion) {
    let banner = Banner {
        title: localized!(uz = "Asosiy", ru = "Главный", en = ""),
        ..Default::default()
    };

    let mut group = c.benchmark_group("Field Resolution");

    group.bench_function("primary", |b| {
        b.iter(|| resolve_field(black_box(&banner), "title", ApiSuffix::Ru, ""))
    });

    group.bench_function("fallback", |b| {
        b.iter(|| resolve_field(black_box(&banner), "title", ApiSuffix::En, ""))
    });

    group.finish();

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let bundle_json = fs::read_to_string(manifest_dir.join("tests/fixtures/bundle.json"))
        .expect("failed to read bundle.json");
    let bundle: ContentBundle =
        serde_json::from_str(&bundle_json).expect("failed to parse bundle json");
    let config = SiteConfig::default();

    let mut group = c.benchmark_group("Bundle");

    group.bench_function("deserialize", |b| {
        b.iter(|| {
            let _: ContentBundle = serde_json::from_str(black_box(&bundle_json)).unwrap();
        })
    });

    group.bench_function("resolve", |b| {
        let resolver = ContentResolver::new(&config, "uz-cyrillic");
        b.iter(|| resolver.bundle(black_box(&bundle)))
    });

    group.finish();
}

fn bench_markup(c: &mut Criterion) {
    let raw = "<п data-start=\"0\" data-end=\"42\">Zamonaviy   uskunalar\r\nva <стронг>tajribali</стронг> shifokorlar</п>".repeat(20);

    c.bench_function("clean_markup", |b| b.iter(|| clean_markup(black_box(&raw))));
}

criterion_group!(benches, bench_resolution, bench_markup);
criterion_main!(benches);
