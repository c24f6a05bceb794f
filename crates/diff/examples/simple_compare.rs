use anyhow::Result;
use text_compare::{EditKind, TextDiff};

fn main() -> Result<()> {
    env_logger::init();

    // Two sample texts to compare
    let text1 = "The quick brown fox jumps over the lazy dog.";
    let text2 = "The quick brown cat jumps over the lazy dog!";

    let diff = TextDiff::diff(text1, text2);

    println!("Inline markup:");
    println!("  {}", diff.to_inline_markup());

    // Print diff statistics
    let stats = diff.stats();
    println!("\nDiff statistics:");
    println!("  Operations: {}", diff.len());
    println!("  Deleted bytes: {}", stats.deleted_bytes);
    println!("  Inserted bytes: {}", stats.inserted_bytes);
    println!("  Similarity: {:.1}%", diff.similarity() * 100.0);

    println!("\nOperations:");
    for (change, location) in diff.changes().zip(diff.locations()) {
        let at = match change.kind {
            EditKind::Insert => location.new,
            _ => location.old,
        };
        let (line, column) = at.map_or((0, 0), |at| (at.line, at.column));
        println!(
            "  {:>6} {:?} at {}:{}",
            change.kind.to_string(),
            change.text(),
            line,
            column
        );
    }

    Ok(())
}
