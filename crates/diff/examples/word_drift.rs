use anyhow::Result;
use text_compare::{DiffMode, Options, TextDiff};

fn main() -> Result<()> {
    env_logger::init();

    let text1 = "the quick fox jumps";
    let text2 = "the very quick fox jumps";

    // Character mode resynchronizes along the diagonal
    println!("=== Character mode ===");
    println!("{}", TextDiff::inline_diff(text1, text2, &Options::default()));

    // Word mode walks in lockstep and never recovers after the inserted word
    println!("\n=== Word mode ===");
    let options = Options::new().mode(DiffMode::Word);
    println!("{}", TextDiff::inline_diff(text1, text2, &options));

    println!("\n=== Word mode, unified ===");
    print!("{}", TextDiff::unified_diff(text1, text2, &options));

    Ok(())
}
