use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Write;
use tempfile::TempDir;
use xjs_store::frontmatter::{self, EntryDocument};
use xjs_store::prelude::*;

const PERSON_POOL: [&str; 5] = [
    "Jan Novák (Honza)",
    "Jana Nováková",
    "Petr Svoboda",
    "Marie Svobodová (Majka)",
    "Tomáš Dvořák",
];

fn prepare_entry_file(file: &mut std::fs::File, id: usize) {
    writeln!(file, "---").unwrap();
    writeln!(file, "id: \"entry-{id}\"").unwrap();
    writeln!(file, "title: \"Entry number {id}\"").unwrap();
    writeln!(file, "dateCreated: 2006-04-15T10:30:00").unwrap();
    writeln!(
        file,
        "persons: [\"{}\"]",
        PERSON_POOL[id % PERSON_POOL.len()]
    )
    .unwrap();
    writeln!(file, "categories: [\"Category {}\"]", id % 7).unwrap();
    writeln!(file, "attachments: []").unwrap();
    writeln!(file, "attachmentIds: []").unwrap();
    writeln!(file, "source: \"legacy-xjs-system\"").unwrap();
    writeln!(file, "extractedAt: 2026-08-22T12:00:00").unwrap();
    writeln!(file, "---").unwrap();
    writeln!(file).unwrap();

    for paragraph in 0..=(id % 5) {
        writeln!(file, "<p>Paragraph {paragraph} of entry {id}.</p>").unwrap();
    }
}

fn generate_test_store(num_entries: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let entries_dir = temp_dir.path().join("entries");
    std::fs::create_dir_all(&entries_dir).unwrap();

    for i in 0..num_entries {
        let file_path = entries_dir.join(format!("entry_{i}.md"));
        prepare_entry_file(&mut std::fs::File::create(file_path).unwrap(), i);
    }

    temp_dir
}

fn store_load_benchmark(c: &mut Criterion) {
    let num_entries = 1000;

    let temp_dir = generate_test_store(num_entries);
    let path = temp_dir.path();

    c.bench_function("store_load_all", |b| {
        b.iter(|| {
            let loaded = Store::new(black_box(path)).load_all().unwrap();
            black_box(loaded);
        })
    });
}

fn codec_benchmark(c: &mut Criterion) {
    let persons: Vec<String> = PERSON_POOL.iter().map(|&name| name.to_owned()).collect();
    let categories = vec!["Travel".to_owned(), "Family".to_owned()];
    let attachments = vec!["scan.pdf".to_owned(), "photo 1.jpg".to_owned()];
    let attachment_ids = vec!["att-1".to_owned(), "att-2".to_owned()];
    let body = "<p>TEST DATA</p>\n".repeat(40);

    let document = EntryDocument {
        id: "entry-1",
        title: r#"Dinner with O'Brien "Tim", Jr."#,
        location: Some("Entries/first.html"),
        created: "2006-04-15T10:30:00".parse().unwrap(),
        persons: &persons,
        categories: &categories,
        attachments: &attachments,
        attachment_ids: &attachment_ids,
        source: "legacy-xjs-system",
        extracted_at: "2026-08-22T12:00:00".parse().unwrap(),
        body: Some(&body),
    };
    let raw = document.to_string();

    c.bench_function("render_entry_document", |b| {
        b.iter(|| {
            let rendered = black_box(&document).to_string();
            black_box(rendered);
        })
    });

    c.bench_function("parse_entry", |b| {
        b.iter(|| {
            let parsed = frontmatter::parse_entry(black_box(&raw)).unwrap();
            black_box(parsed);
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .warm_up_time(std::time::Duration::from_secs(1));
    targets = store_load_benchmark, codec_benchmark
}

criterion_main!(benches);
