//! Interactive study modes: flashcards, quiz, hard-word practice.

use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::Context;
use rand::seq::SliceRandom;
use vocab_core::{
    is_acceptable, is_perfect_match, HardWordStore, Language, Word,
    DEFAULT_SIMILARITY_THRESHOLD, MASTERY_STREAK_THRESHOLD,
};

use crate::render::Style;

/// Print `prompt`, read one line from stdin and return it trimmed.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn wants_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("q")
}

/// Narrow the study set by section, then by unit. `all` keeps everything
/// at either level. Returns `None` (after a message) on an invalid pick.
fn select_words_to_study(words: &[Word], style: Style) -> io::Result<Option<Vec<Word>>> {
    let sections: BTreeSet<&str> = words.iter().map(|w| w.section.as_str()).collect();
    let listed = sections.iter().copied().collect::<Vec<_>>().join(", ");
    println!("{} {listed}", style.info("Available sections:"));

    let choice = read_line(&style.bold(
        "Enter a section to study or type 'all' to study all sections: ",
    ))?;
    if choice.eq_ignore_ascii_case("all") {
        return Ok(Some(words.to_vec()));
    }
    if !sections.contains(choice.as_str()) {
        println!("{}", style.fail("Invalid section."));
        return Ok(None);
    }

    let section_words: Vec<Word> = words
        .iter()
        .filter(|w| w.section == choice)
        .cloned()
        .collect();
    let units: BTreeSet<&str> = section_words.iter().map(|w| w.unit.as_str()).collect();
    let listed = units.iter().copied().collect::<Vec<_>>().join(", ");
    println!(
        "{} {listed}",
        style.info(&format!("Available units in section {choice}:"))
    );

    let unit_choice = read_line(&style.bold(
        "Enter a unit to study or type 'all' to study all units in this section: ",
    ))?;
    if unit_choice.eq_ignore_ascii_case("all") {
        return Ok(Some(section_words));
    }
    if !units.contains(unit_choice.as_str()) {
        println!("{}", style.fail("Invalid unit."));
        return Ok(None);
    }

    Ok(Some(
        section_words
            .into_iter()
            .filter(|w| w.unit == unit_choice)
            .collect(),
    ))
}

/// Numbered language picker. Returns `None` (after a message) on an
/// invalid pick.
fn choose_language(heading: &str, style: Style) -> io::Result<Option<Language>> {
    println!("\n{}", style.menu(heading));
    for (index, lang) in Language::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, lang.label());
    }
    let choice = read_line(&style.bold("Choose a language (1-3): "))?;
    let picked = match choice.as_str() {
        "1" => Language::Dutch,
        "2" => Language::English,
        "3" => Language::Russian,
        _ => {
            println!("{}", style.fail("Invalid language choice."));
            return Ok(None);
        }
    };
    Ok(Some(picked))
}

/// Flashcards: show one language on the front, reveal the rest on Enter.
pub fn flashcards_mode(words: &[Word], style: Style) -> io::Result<()> {
    println!("\n{}", style.header("--- Flashcards Mode ---"));
    let Some(study_words) = select_words_to_study(words, style)? else {
        return Ok(());
    };
    if study_words.is_empty() {
        println!("{}", style.warn("No words to study. Returning to main menu."));
        return Ok(());
    }

    let Some(front) = choose_language("Which language to show on the front of the card?", style)?
    else {
        return Ok(());
    };
    let backs: Vec<Language> = Language::ALL
        .iter()
        .copied()
        .filter(|&lang| lang != front)
        .collect();

    let mut cards = study_words;
    cards.shuffle(&mut rand::thread_rng());

    println!(
        "\n{}",
        style.info(&format!(
            "Starting flashcards for {} words. Press Enter to reveal, type 'q' to quit.",
            cards.len()
        ))
    );
    for (index, card) in cards.iter().enumerate() {
        println!(
            "\n{}",
            style.header(&format!("--- Card {}/{} ---", index + 1, cards.len()))
        );
        println!(
            "{} {}",
            style.bold(&format!("{}:", front.label())),
            card.text(front)
        );

        if wants_quit(&read_line("")?) {
            break;
        }

        println!("{}", style.ok("--- Answer ---"));
        for &lang in &backs {
            println!(
                "{} {}",
                style.bold(&format!("{}:", lang.label())),
                card.text(lang)
            );
        }
        if !card.section.is_empty() {
            println!("{} {}", style.bold("Section:"), card.section);
        }
    }
    println!("\n{}", style.ok("Flashcards session finished!"));
    Ok(())
}

/// Translation quiz. Misses always land in the hard-word store; in
/// hard-words practice, correct answers also build the streak that
/// eventually retires a word.
pub fn quiz_mode(
    words: &[Word],
    store: &dyn HardWordStore,
    style: Style,
    hard_words_practice: bool,
) -> anyhow::Result<()> {
    let title = if hard_words_practice {
        format!("{} {}", style.header("--- Quiz Mode ---"), style.warn("(Hard Words)"))
    } else {
        style.header("--- Quiz Mode ---")
    };
    println!("\n{title}");

    let study_words = if hard_words_practice {
        // The practice set was already narrowed to active hard words.
        words.to_vec()
    } else {
        match select_words_to_study(words, style)? {
            Some(selected) => selected,
            None => return Ok(()),
        }
    };
    if study_words.is_empty() {
        println!("{}", style.warn("No words to study. Returning to main menu."));
        return Ok(());
    }

    let Some(from) = choose_language("Select the language to translate FROM:", style)? else {
        return Ok(());
    };
    let Some(to) = choose_language("Select the language to translate TO:", style)? else {
        return Ok(());
    };
    if from == to {
        println!("{}", style.fail("Languages must differ. Returning to main menu."));
        return Ok(());
    }

    let mut queue = study_words;
    queue.shuffle(&mut rand::thread_rng());

    let total = queue.len();
    let mut score = 0usize;
    println!(
        "\n{}",
        style.info(&format!("Starting quiz for {total} words. Type 'q' to quit."))
    );

    for (index, word) in queue.iter().enumerate() {
        let question = word.text(from);
        let reference = word.text(to);
        let answer = read_line(&style.bold(&format!(
            "\nQ{}: Translate '{}' from {} to {}: ",
            index + 1,
            question,
            from.label(),
            to.label()
        )))?;
        if wants_quit(&answer) {
            break;
        }

        if is_acceptable(&answer, reference, DEFAULT_SIMILARITY_THRESHOLD) {
            score += 1;
            if is_perfect_match(&answer, reference) {
                println!("{}", style.ok("Correct!"));
            } else {
                // Close enough; show the canonical spelling.
                println!("{}", style.warn("Correct!"));
                println!("{}", style.warn(&format!("Correct answer: {reference}")));
            }
            if hard_words_practice {
                let streak = store
                    .record_correct(word)
                    .context("updating hard-word streak")?;
                if streak >= MASTERY_STREAK_THRESHOLD {
                    store.mark_learned(word).context("marking word learned")?;
                    println!(
                        "{}",
                        style.info(&format!(
                            "You've mastered '{question}'! It will be removed from hard words."
                        ))
                    );
                }
            }
        } else {
            println!(
                "{}",
                style.fail(&format!("Incorrect. The correct answer is: {reference}"))
            );
            store.record_miss(word).context("recording missed word")?;
        }
    }

    println!("\n{}", style.header("--- Quiz Finished ---"));
    println!("Your final score: {score}/{total}");
    if total > 0 {
        let percent = score as f64 / total as f64 * 100.0;
        println!("You answered {} correctly.", style.ok(&format!("{percent:.2}%")));
    }
    Ok(())
}
