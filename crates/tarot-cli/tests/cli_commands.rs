//! End-to-end tests for the `tarot` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A three-card deck file.
fn tiny_deck() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("deck.json"),
        r#"[
  {"number": 0, "name": "The Fool", "arcana": "major", "suit": null,
   "keywords": ["beginnings"], "meaning_up": "Leap.", "meaning_rev": "Stumble."},
  {"number": 1, "name": "Ace of Cups", "arcana": "minor", "suit": "cups",
   "keywords": ["love"], "meaning_up": "New feelings.", "meaning_rev": "Blocked feelings."},
  {"number": 2, "name": "Two of Cups", "arcana": "minor", "suit": "cups",
   "keywords": ["unity"], "meaning_up": "Partnership.", "meaning_rev": "Imbalance."}
]
"#,
    )
    .unwrap();
    dir
}

fn tarot() -> Command {
    let mut cmd = Command::cargo_bin("tarot").unwrap();
    cmd.env_remove("TAROT_DECK")
        .env_remove("TAROT_SPREADS")
        .env_remove("TAROT_SEED")
        .env_remove("TAROT_ASSETS")
        .env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_three_card_with_question() {
    let assets = TempDir::new().unwrap();
    tarot()
        .args(["--seed", "7", "--assets"])
        .arg(assets.path())
        .args(["read", "three_card", "Will I get the job?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarot Reading - Three Card"))
        .stdout(predicate::str::contains("### Past"))
        .stdout(predicate::str::contains("### Present"))
        .stdout(predicate::str::contains("### Future"))
        .stdout(predicate::str::contains("Will I get the job?"))
        .stdout(predicate::str::contains("Reading for you"))
        .stdout(predicate::str::contains("card_3.png"));
}

#[test]
fn read_defaults_to_single() {
    tarot()
        .args(["--seed", "1", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarot Reading - Single"))
        .stdout(predicate::str::contains("### Present"));
}

#[test]
fn read_is_reproducible_with_seed() {
    let first = tarot()
        .args(["--seed", "99", "read", "celtic_cross"])
        .output()
        .unwrap();
    let second = tarot()
        .args(["--seed", "99", "read", "celtic_cross"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn read_writes_images() {
    let out = TempDir::new().unwrap();
    tarot()
        .args(["--seed", "3", "--out"])
        .arg(out.path())
        .args(["read", "relationship"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    for i in 1..=4 {
        let bytes = fs::read(out.path().join(format!("card_{i}.png"))).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}

#[test]
fn read_unknown_spread_lists_catalog() {
    tarot()
        .args(["read", "tree_of_life"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Tarot Spreads"))
        .stdout(predicate::str::contains("Celtic Cross"))
        .stdout(predicate::str::contains("!tarot career [question]"));
}

#[test]
fn read_too_large_for_deck() {
    let deck = tiny_deck();
    tarot()
        .arg("--deck")
        .arg(deck.path().join("deck.json"))
        .args(["read", "celtic_cross"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "needs 10 cards but the deck only has 3",
        ));
}

#[test]
fn read_with_custom_spread_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spreads.json");
    fs::write(
        &path,
        r#"[{"id": "crossroads", "positions": ["Left Path", "Right Path"]}]"#,
    )
    .unwrap();
    tarot()
        .arg("--spreads")
        .arg(&path)
        .args(["--seed", "2", "read", "crossroads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Left Path"))
        .stdout(predicate::str::contains("### Right Path"));
}

// ---------------------------------------------------------------------------
// card / cards / daily / spreads
// ---------------------------------------------------------------------------

#[test]
fn card_lookup() {
    tarot()
        .args(["card", "fool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool"))
        .stdout(predicate::str::contains("Upright Meaning"))
        .stdout(predicate::str::contains("Reversed Meaning"));
}

#[test]
fn card_multi_word_lookup() {
    tarot()
        .args(["card", "queen", "of", "swords"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Queen of Swords"))
        .stdout(predicate::str::contains("Swords"));
}

#[test]
fn card_not_found() {
    tarot()
        .args(["card", "zzzznotacard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card 'zzzznotacard' not found"));
}

#[test]
fn cards_listing() {
    tarot()
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("Major Arcana (22 cards)"))
        .stdout(predicate::str::contains("Total: 78 cards"));
}

#[test]
fn cards_table() {
    tarot()
        .args(["cards", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("King of Pentacles"))
        .stdout(predicate::str::contains("78 cards"));
}

#[test]
fn daily_card() {
    tarot()
        .args(["--user", "ana", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Daily Tarot Card"))
        .stdout(predicate::str::contains("Message for Today"))
        .stdout(predicate::str::contains("For ana"));
}

#[test]
fn spreads_listing() {
    tarot()
        .arg("spreads")
        .assert()
        .success()
        .stdout(predicate::str::contains("Three Card"))
        .stdout(predicate::str::contains("10 cards"));
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_answers_prefixed_messages() {
    tarot()
        .args(["--seed", "5", "chat"])
        .write_stdin("hello\n!daily\n!tarot three_card\n!nope\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Daily Tarot Card"))
        .stdout(predicate::str::contains("Tarot Reading - Three Card"))
        .stdout(predicate::str::contains("Command not found"));
}

#[test]
fn chat_custom_prefix() {
    tarot()
        .args(["chat", "--prefix", "?"])
        .write_stdin("?help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("?tarot [spread] [question]"));
}

// ---------------------------------------------------------------------------
// startup errors
// ---------------------------------------------------------------------------

#[test]
fn malformed_deck_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.json");
    fs::write(&path, "[]").unwrap();
    tarot()
        .arg("--deck")
        .arg(&path)
        .arg("daily")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to load deck: deck contains no cards"));
}

#[test]
fn missing_deck_file_is_fatal() {
    tarot()
        .args(["--deck", "/nonexistent/deck.json", "cards"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read deck file"));
}

#[test]
fn deck_from_environment() {
    let deck = tiny_deck();
    tarot()
        .env("TAROT_DECK", deck.path().join("deck.json"))
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 3 cards"));
}
