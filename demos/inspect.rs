use clap::Parser;
use std::{path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;
use xjs_store::prelude::*;

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.is_dir() {
        return Err(format!("{} is not dir", path.display()));
    }

    Ok(path)
}

#[derive(Parser, Debug)]
struct Args {
    /// Root directory of the intermediate store
    #[arg(long, value_parser = parse_path)]
    path: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let load_store = Instant::now();
    let store = Store::new(&args.path);
    let loaded = match store.load_all() {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("Load error: {error}");
            std::process::exit(1);
        }
    };
    println!("Time load store: {:.2?}", load_store.elapsed());

    if let Some(manifest) = store.load_manifest() {
        println!(
            "Manifest: {} (format {}), extracted {} from {}",
            manifest.source_system,
            manifest.extractor_version,
            manifest.extracted_at,
            manifest.source_path
        );
    }

    println!("Count entries: {}", loaded.entries.len());
    println!("Count people: {}", loaded.metadata.people.len());
    println!("Count categories: {}", loaded.metadata.categories.len());
    println!("Count attachments: {}", loaded.metadata.attachments.len());
    println!("Skipped files: {}", loaded.skipped);

    let attachment_bytes: u64 = loaded
        .metadata
        .attachments
        .values()
        .filter_map(|attachment| attachment.size)
        .sum();
    println!("Attachment bytes on disk: {attachment_bytes}");

    for attachment in loaded
        .metadata
        .attachments
        .values()
        .filter(|attachment| attachment.size.is_none())
    {
        println!("Missing attachment file: {}", attachment.file_name);
    }

    if let (Some(first), Some(last)) = (loaded.entries.first(), loaded.entries.last()) {
        println!("First entry: {} ({})", first.title, first.created);
        println!("Last entry: {} ({})", last.title, last.created);
    }
}
