use std::path::Path;
use std::process;

use hanpin_core::dict::{DictLayout, DictLoader, FileDictLoader};

pub fn info(data_dir: &str) {
    let dir = Path::new(data_dir);
    if !dir.is_dir() {
        eprintln!("Error: {data_dir} is not a directory");
        process::exit(1);
    }

    let layout = DictLayout::default();
    let stats = FileDictLoader::with_layout(dir, layout.clone()).stats();

    println!("Directory:  {}", dir.display());
    println!(
        "Layout:     {} (0..{}), {}",
        layout.segment_pattern, layout.max_segments, layout.surname_file
    );
    println!("Segments:   {}", stats.segments);
    println!("Entries:    {}", stats.entries);
    println!("Surnames:   {}", stats.surnames);
}
