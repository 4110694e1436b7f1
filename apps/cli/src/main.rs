//! Interactive vocabulary trainer.
//!
//! Loads a word list, then loops over a numbered menu offering
//! flashcards, translation quizzes and focused practice of previously
//! missed ("hard") words.

mod modes;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;
use vocab_core::{load_words, CsvHardWordStore, HardWordStore, Word};

use render::Style;

#[derive(Parser)]
#[command(name = "vocab", about = "Vocabulary drilling with hard-word tracking", version)]
struct Cli {
    /// Word list file (.csv or .tsv)
    #[arg(long, default_value = "words.csv")]
    words: PathBuf,

    /// File tracking missed words and their mastery state
    #[arg(long, default_value = "hard_words.csv")]
    hard_words: PathBuf,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let style = Style::new(!cli.no_color);

    let words = load_words(&cli.words)
        .with_context(|| format!("loading word list from {}", cli.words.display()))?;
    let store = CsvHardWordStore::new(&cli.hard_words);
    debug!(
        "loaded {} words; hard-word store at {}",
        words.len(),
        store.path().display()
    );

    println!("{}", style.header("Welcome to the Language Learning Helper!"));
    println!("Successfully loaded {} words.", words.len());

    loop {
        println!("\n{}", style.header("--- Main Menu ---"));
        println!("{}", style.menu("1. Flashcards Mode"));
        println!("{}", style.menu("2. Quiz Mode"));
        println!("{}", style.menu("3. Practice Hard Words (Quiz)"));
        println!("{}", style.menu("4. Exit"));

        let choice = modes::read_line(&style.bold("Please choose a mode (1-4): "))?;
        match choice.as_str() {
            "1" => modes::flashcards_mode(&words, style)?,
            "2" => modes::quiz_mode(&words, &store, style, false)?,
            "3" => {
                let practice: Vec<Word> = store
                    .active_records()
                    .context("loading hard words")?
                    .into_iter()
                    .map(|record| record.word)
                    .collect();
                if practice.is_empty() {
                    println!(
                        "\n{}",
                        style.warn("No hard words to practice yet. Keep taking quizzes!")
                    );
                } else {
                    modes::quiz_mode(&practice, &store, style, true)?;
                }
            }
            "4" => {
                println!("{}", style.ok("Happy learning! Goodbye!"));
                return Ok(());
            }
            _ => println!(
                "{}",
                style.fail("Invalid choice. Please enter a number between 1 and 4.")
            ),
        }
    }
}
