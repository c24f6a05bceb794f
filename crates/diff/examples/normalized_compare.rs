use anyhow::{Context, Result};
use std::env;
use std::fs;
use text_compare::{DiffMode, Options, TextDiff};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: normalized_compare <old_file> <new_file> [--mode=<mode>]");
        println!("Available modes: character, word");
        return Ok(());
    }

    let old_file = &args[1];
    let new_file = &args[2];

    // Parse mode option
    let mut mode = DiffMode::Character;
    if let Some(mode_str) = args.get(3).and_then(|arg| arg.strip_prefix("--mode=")) {
        mode = mode_str.parse()?;
    }

    let old_content =
        fs::read_to_string(old_file).with_context(|| format!("reading {}", old_file))?;
    let new_content =
        fs::read_to_string(new_file).with_context(|| format!("reading {}", new_file))?;

    println!("Comparing {} and {} in {} mode", old_file, new_file, mode);

    let options = TextDiff::configure()
        .mode(mode)
        .case_sensitive(false)
        .ignore_whitespace(true);
    let diff = options.compare(&old_content, &new_content);

    if diff.has_changes() {
        println!("\nDifferences ignoring case and whitespace:");
        println!("{}", diff.to_inline_markup());
    } else {
        println!("\nNo differences once case and whitespace are ignored.");
    }

    Ok(())
}
