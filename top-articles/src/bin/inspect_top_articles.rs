use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wiki_top_articles::config::DEFAULT_OUTPUT_DIR;
use wiki_top_articles::{check_top_articles, load_top_articles, OUTPUT_FILE_NAME};

/// Load a generated top_articles.json and check that the game can use it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the list; defaults to the generator's output location
    file: Option<PathBuf>,

    /// How many titles to print
    #[arg(long, default_value_t = 10)]
    show: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli
        .file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR).join(OUTPUT_FILE_NAME));

    let titles = load_top_articles(&path)?;
    println!("{} titles in {}", titles.len(), path.display());
    for (idx, title) in titles.iter().take(cli.show).enumerate() {
        println!("{}. {}", idx + 1, title);
    }

    check_top_articles(&titles)?;
    println!("\nAll titles are usable articles");

    Ok(())
}
