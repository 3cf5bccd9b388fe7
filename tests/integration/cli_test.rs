//! Integration tests for the flick CLI

use std::process::Command;

use crate::helpers::{fixtures_dir, load_fixture, temp_cache};

/// Helper to run flick CLI and capture output
fn run_flick(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_flick"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute flick");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn swan_path() -> String {
    fixtures_dir().join("swan.txt").to_str().unwrap().to_string()
}

fn noise_path() -> String {
    fixtures_dir().join("noise.txt").to_str().unwrap().to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_flick(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("play"));
    assert!(stdout.contains("fetch"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("clean"));
}

#[test]
fn play_help_shows_playback_flags() {
    let (stdout, _stderr, exit_code) = run_flick(&["play", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--fps"));
    assert!(stdout.contains("--loops"));
    assert!(stdout.contains("--file"));
}

// ============================================================================
// Usage Error Tests
// ============================================================================

#[test]
fn play_without_id_or_file_shows_usage_error() {
    let (_stdout, stderr, exit_code) = run_flick(&["play"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required"));
}

#[test]
fn play_rejects_id_combined_with_file() {
    let (_stdout, stderr, exit_code) = run_flick(&["play", "7", "--file", &swan_path()]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn play_rejects_negative_loop_count() {
    let (_stdout, stderr, exit_code) =
        run_flick(&["play", "--file", &swan_path(), "--loops", "-1"]);

    assert_eq!(exit_code, 2);
    assert!(!stderr.is_empty());
}

// ============================================================================
// Local File Playback Tests
// ============================================================================

#[test]
fn play_local_file_finishes_and_reports_loops() {
    let (stdout, stderr, exit_code) =
        run_flick(&["play", "--file", &swan_path(), "--fps", "200", "--loops", "2"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Finished after 2 loop(s)."));
    // The swan made it to the screen
    assert!(stdout.contains("(o_ )___"));
}

#[test]
fn play_missing_file_fails_with_helpful_error() {
    let (_stdout, stderr, exit_code) = run_flick(&["play", "--file", "/no/such/file.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read animation file"));
}

#[test]
fn play_frameless_page_fails_with_extraction_error() {
    let (_stdout, stderr, exit_code) =
        run_flick(&["play", "--file", &noise_path(), "--fps", "200"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No playable animation"));
    assert!(stderr.contains("no animation frames found"));
}

#[test]
fn play_rejects_zero_fps_before_touching_the_screen() {
    let (stdout, stderr, exit_code) =
        run_flick(&["play", "--file", &swan_path(), "--fps", "0"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("invalid frame rate"));
    // No cursor-hide escape ever reached stdout
    assert!(!stdout.contains("\u{1b}[?25l"));
}

// ============================================================================
// Cache-Backed Playback Tests
// ============================================================================

#[test]
fn play_by_id_is_served_from_the_cache() {
    let swan = load_fixture("swan.txt");
    let cache = temp_cache(&[(7, swan.as_str())]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, stderr, exit_code) = run_flick(&[
        "--cache-dir", cache_dir, "play", "7", "--fps", "200", "--loops", "1",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Finished after 1 loop(s)."));
}

#[test]
fn fetch_reports_cached_entry_without_network() {
    let swan = load_fixture("swan.txt");
    let cache = temp_cache(&[(9, swan.as_str())]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "fetch", "9"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Cached animation 9 at"));
    assert!(stdout.contains("9.txt"));
    assert!(stdout.contains("4 frames"));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn list_empty_cache_prints_placeholder() {
    let cache = temp_cache(&[]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "list"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No cached animations."));
}

#[test]
fn list_empty_cache_as_json_is_an_empty_array() {
    let cache = temp_cache(&[]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "list", "--json"]);

    assert_eq!(exit_code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn list_shows_entries_sorted_by_id() {
    let cache = temp_cache(&[(30, "c"), (1, "a"), (12, "b")]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "list"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ID"));
    let pos_1 = stdout.find("\n1 ").expect("id 1 in listing");
    let pos_12 = stdout.find("\n12 ").expect("id 12 in listing");
    let pos_30 = stdout.find("\n30 ").expect("id 30 in listing");
    assert!(pos_1 < pos_12 && pos_12 < pos_30);
}

#[test]
fn list_json_carries_ids_sizes_and_paths() {
    let cache = temp_cache(&[(5, "hello")]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "list", "--json"]);

    assert_eq!(exit_code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["id"], 5);
    assert_eq!(parsed[0]["size"], 5);
    assert!(parsed[0]["path"].as_str().unwrap().ends_with("5.txt"));
}

// ============================================================================
// Clean Tests
// ============================================================================

#[test]
fn clean_with_ids_removes_only_those_entries() {
    let cache = temp_cache(&[(1, "a"), (2, "b")]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "clean", "2"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Removed animation 2."));
    assert!(cache.path().join("1.txt").exists());
    assert!(!cache.path().join("2.txt").exists());
}

#[test]
fn clean_reports_ids_that_were_not_cached() {
    let cache = temp_cache(&[]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "clean", "42"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Animation 42 was not cached."));
}

#[test]
fn clean_all_with_yes_empties_the_cache() {
    let cache = temp_cache(&[(1, "a"), (2, "b"), (3, "c")]);
    let cache_dir = cache.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "clean", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Removed 3 cached animation(s)."));
    assert!(!cache.path().join("1.txt").exists());
}

#[test]
fn clean_all_without_yes_is_refused_when_not_interactive() {
    let cache = temp_cache(&[(1, "a")]);
    let cache_dir = cache.path().to_str().unwrap();

    // stdin is not a TTY under the test runner, so the prompt declines
    let (stdout, _stderr, exit_code) = run_flick(&["--cache-dir", cache_dir, "clean"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made."));
    assert!(cache.path().join("1.txt").exists());
}

// ============================================================================
// Config and Completions Tests
// ============================================================================

#[test]
fn config_path_prints_the_config_location() {
    let (stdout, _stderr, exit_code) = run_flick(&["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_show_emits_all_sections() {
    let (stdout, _stderr, exit_code) = run_flick(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[remote]"));
    assert!(stdout.contains("[playback]"));
    assert!(stdout.contains("[extract]"));
}

#[test]
fn completions_generates_a_bash_script() {
    let (stdout, _stderr, exit_code) = run_flick(&["completions", "--shell", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("flick"));
}

#[test]
fn version_includes_the_crate_version() {
    let (stdout, _stderr, exit_code) = run_flick(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
