//! Roster utility commands.

use std::path::Path;

use whodis_infra::roster;

/// Validate the roster file and print a small report.
pub async fn check(path: &Path) -> anyhow::Result<()> {
    let corpus = roster::load_corpus(path).await?;

    println!();
    println!(
        "  {} {} unique names in {}",
        console::style("✓").green(),
        console::style(corpus.len()).bold(),
        console::style(path.display()).cyan()
    );
    if corpus.len() > 100 {
        println!(
            "  {}",
            console::style("Each game samples 100 of them.").dim()
        );
    }
    println!();

    Ok(())
}
