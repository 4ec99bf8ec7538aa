//! Integration tests for the nlpscrub CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Copy a fixture into a fresh temp dir so cleaned files land there
fn fixture_in_temp(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::copy(fixture_path(name), &path).unwrap();
    (temp_dir, path)
}

fn nlpscrub() -> Command {
    Command::cargo_bin("nlpscrub").unwrap()
}

#[test]
fn test_clean_file_writes_sibling() {
    let (temp_dir, input) = fixture_in_temp("tweets-sample.txt");
    let expected = temp_dir.path().join("cleaned_tweets-sample.txt");

    nlpscrub()
        .args(["clean", "-q", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("cleaned_tweets-sample.txt"));

    assert_eq!(
        fs::read_to_string(expected).unwrap(),
        "preprocessor is loving the new release"
    );
}

#[test]
fn test_clean_inline_text() {
    nlpscrub()
        .args([
            "clean",
            "--text",
            "RT @user: Preprocessor is #awesome 👍 https://github.com/s/preprocessor #NLP 123 !@#$",
        ])
        .assert()
        .success()
        .stdout("preprocessor is\n");
}

#[test]
fn test_clean_with_disabled_steps() {
    nlpscrub()
        .args([
            "clean",
            "--disable",
            "remove_punctuation",
            "--disable",
            "remove_numbers",
            "--text",
            "RT @user: Preprocessor is #awesome 👍 https://github.com/s/preprocessor #NLP 123 !@#$",
        ])
        .assert()
        .success()
        .stdout("preprocessor is 123\n");
}

#[test]
fn test_clean_unknown_option_fails() {
    nlpscrub()
        .args(["clean", "--disable", "remove_digits", "--text", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option: remove_digits"));
}

#[test]
fn test_clean_stdout_with_report_json() {
    let (temp_dir, input) = fixture_in_temp("tweets-sample.txt");

    let output = nlpscrub()
        .args([
            "clean",
            "--stdout",
            "--report",
            "--disable",
            "clean_emojis",
            "--disable",
            "remove_punctuation",
            "--disable",
            "remove_special_characters",
            "-f",
            "json",
            "-i",
        ])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["emojis"], serde_json::json!(["👍", "🔥", "🔥"]));
    assert_eq!(value["emoji_frequency"][0]["token"], "🔥");
    assert_eq!(value["emoji_frequency"][0]["count"], 2);
    assert!(value.get("output").is_none());

    // Nothing written in stdout mode
    assert!(!temp_dir.path().join("cleaned_tweets-sample.txt").exists());
}

#[test]
fn test_clean_glob_multiple_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("one.txt"), "First #tweet").unwrap();
    fs::write(temp_dir.path().join("two.txt"), "Second @tweet").unwrap();

    nlpscrub()
        .args(["clean", "-q", "--prefix", "clean-", "-i"])
        .arg(format!("{}/*.txt", temp_dir.path().display()))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("clean-one.txt")).unwrap(),
        "first"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("clean-two.txt")).unwrap(),
        "second"
    );
}

#[test]
fn test_clean_missing_file_fails() {
    nlpscrub()
        .args(["clean", "-i", "nonexistent_dir/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no files found"));
}

#[test]
fn test_clean_empty_prefix_keeps_input() {
    let (_temp_dir, input) = fixture_in_temp("tweets-sample.txt");
    let original = fs::read_to_string(&input).unwrap();

    nlpscrub()
        .args(["clean", "-q", "--prefix", "", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("output prefix must not be empty"));

    assert_eq!(fs::read_to_string(&input).unwrap(), original);
}

#[test]
fn test_clean_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("nlpscrub.toml");
    fs::write(
        &config,
        "[pipeline]\nconvert_to_lowercase = false\nclean_hashtags = false\n",
    )
    .unwrap();

    nlpscrub()
        .args(["clean", "--text", "Hello #World"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("Hello World\n");
}

#[test]
fn test_parse_text_output() {
    nlpscrub()
        .args(["parse", "-i"])
        .arg(fixture_path("tweets-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "url: https://github.com/s/preprocessor www.example.com/notes",
        ))
        .stdout(predicate::str::contains("hashtag: #awesome #NLP"))
        .stdout(predicate::str::contains("mention: @user @dev_team"))
        .stdout(predicate::str::contains("reserved_word: RT FAV"))
        .stdout(predicate::str::contains("emoji: 👍 🔥 🔥"))
        .stdout(predicate::str::contains("smiley: :-)"));
}

#[test]
fn test_parse_json_output() {
    let output = nlpscrub()
        .args(["parse", "--text", "see :-) and ;-D now", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["text"], "see :-) and ;-D now");
    assert_eq!(value["smileys"], serde_json::json!([":-)", ";-D"]));
}

#[test]
fn test_analyze_commands() {
    nlpscrub()
        .args(["analyze", "tokens", "--text", "It's great."])
        .assert()
        .success()
        .stdout("It\n's\ngreat\n.\n");

    nlpscrub()
        .args(["analyze", "stopwords", "--text", "This is a simple sentence"])
        .assert()
        .success()
        .stdout("simple sentence\n");

    nlpscrub()
        .args(["analyze", "embed", "--text", "Nice 👍"])
        .assert()
        .success()
        .stdout("Nice :thumbs_up:\n");

    nlpscrub()
        .args(["analyze", "emoji-frequency", "--text", "🔥 👍 🔥"])
        .assert()
        .success()
        .stdout("🔥\t2\n👍\t1\n");
}

#[test]
fn test_list_options() {
    nlpscrub()
        .args(["list", "options"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            " 1. clean_reserved_words (default: true)",
        ))
        .stdout(predicate::str::contains("14. remove_emojis"));
}

#[test]
fn test_generate_config_then_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("generated.toml");

    nlpscrub()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("[pipeline]"));
    assert!(content.contains("# remove_extra_whitespace = true"));

    nlpscrub()
        .args(["clean", "--text", "Hello   World"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_validate_and_use_language_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[metadata]
code = "xx"
name = "Custom"

[stopwords]
words = ["simple"]

[lemmatizer]
rules = [{ suffix = "s", replacement = "" }]
"#,
    )
    .unwrap();

    nlpscrub()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Language name: Custom"));

    nlpscrub()
        .args(["analyze", "stopwords", "--text", "This is a simple sentence"])
        .arg("--language-config")
        .arg(&config)
        .assert()
        .success()
        .stdout("This is a sentence\n");
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "[metadata]\ncode = \"\"\nname = \"X\"\n").unwrap();

    nlpscrub()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_help_lists_commands() {
    nlpscrub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("analyze"));
}
