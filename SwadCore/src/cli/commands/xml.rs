//! CLI command for printing XML trees

use std::path::Path;

use crate::xml::{self, Escape, print_tree};

pub fn print(source: &Path, html: bool, format: &str) -> anyhow::Result<()> {
    let root = xml::parse_file(source)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&root)?);
        return Ok(());
    }

    let escape = if html { Escape::Html } else { Escape::Plain };
    print!("{}", print_tree(&root, escape));
    tracing::info!("{}: {} elements", source.display(), root.descendant_count());
    Ok(())
}
