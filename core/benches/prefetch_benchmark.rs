use criterion::{criterion_group, criterion_main, Criterion};
use pfcore::{core::parse_toml_file, prefetch::parse_prefetch};
use std::{
    fs::{create_dir_all, write},
    hint::black_box,
    path::PathBuf,
};

/// Windows Vista style record with one filename string and no other sections
fn vista_record() -> Vec<u8> {
    let mut data = vec![0; 84 + 156];
    data[0..4].copy_from_slice(&23u32.to_le_bytes());
    data[4..8].copy_from_slice(b"SCCA");
    for (index, value) in "CMD.EXE".encode_utf16().enumerate() {
        data[16 + index * 2..18 + index * 2].copy_from_slice(&value.to_le_bytes());
    }
    data[76..80].copy_from_slice(&0xac113aa8u32.to_le_bytes());

    let sections = (data.len() as u32).to_le_bytes();
    for offset in [84, 92, 100] {
        data[offset..offset + 4].copy_from_slice(&sections);
    }
    data[84 + 44..84 + 52].copy_from_slice(&128930364000000000u64.to_le_bytes());
    data[84 + 68..84 + 72].copy_from_slice(&5u32.to_le_bytes());

    let resource: Vec<u8> = "\\WINDOWS\\SYSTEM32\\NTDLL.DLL\0"
        .encode_utf16()
        .flat_map(|value| value.to_le_bytes())
        .collect();
    data[104..108].copy_from_slice(&(resource.len() as u32).to_le_bytes());
    data.extend(resource);
    let end = (data.len() as u32).to_le_bytes();
    data[108..112].copy_from_slice(&end);
    data
}

fn bench_parse_prefetch(c: &mut Criterion) {
    let data = vista_record();
    c.bench_function("Benching Prefetch record", |b| {
        b.iter(|| parse_prefetch(black_box(&data)).unwrap())
    });
}

fn bench_prefetch_collection(c: &mut Criterion) {
    let input = "./tmp/prefetch_benchmark";
    create_dir_all(input).unwrap();
    write(format!("{input}/CMD.EXE-AC113AA8.pf"), vista_record()).unwrap();

    let mut test_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_path.push("tests/test_data/benchmarks/prefetch.toml");

    c.bench_function("Benching Prefetch collection", |b| {
        b.iter(|| parse_toml_file(&test_path.display().to_string()).unwrap())
    });
}

criterion_group!(benches, bench_parse_prefetch, bench_prefetch_collection);
criterion_main!(benches);
