//! Playback tests that inspect the escape stream the binary emits

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::fixtures_dir;

const HIDE_CURSOR: &str = "\u{1b}[?25l";
const SHOW_CURSOR: &str = "\u{1b}[?25h";
const CLEAR_SCREEN: &str = "\u{1b}[2J";

fn flick() -> Command {
    let mut cmd = Command::cargo_bin("flick").expect("flick binary");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn swan_arg() -> String {
    fixtures_dir().join("swan.txt").to_str().unwrap().to_string()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[test]
fn playback_hides_and_restores_the_cursor_exactly_once() {
    flick()
        .args(["play", "--file", &swan_arg(), "--fps", "200", "--loops", "2"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            count(out, HIDE_CURSOR) == 1 && count(out, SHOW_CURSOR) == 1
        }))
        .stdout(predicate::function(|out: &str| {
            // Cursor comes back before the summary line, never before play
            out.find(HIDE_CURSOR).unwrap() < out.find(SHOW_CURSOR).unwrap()
        }))
        .stdout(predicate::str::contains("Finished after 2 loop(s)."));
}

#[test]
fn each_loop_redraws_every_frame() {
    flick()
        .args(["play", "--file", &swan_arg(), "--fps", "200", "--loops", "3"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            // One clear per frame write, plus the take-over and hand-back clears
            count(out, CLEAR_SCREEN) == 4 * 3 + 2
        }))
        .stdout(predicate::function(|out: &str| {
            count(out, "(o_ )___") == 3 && count(out, "(o_ )__~") == 3
        }));
}

#[test]
fn invalid_frame_rate_fails_before_touching_the_screen() {
    flick()
        .args(["play", "--file", &swan_arg(), "--fps", "nan"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid frame rate"))
        .stdout(predicate::str::contains(HIDE_CURSOR).not());
}

#[test]
fn frameless_page_fails_before_any_drawing() {
    let noise = fixtures_dir().join("noise.txt");

    flick()
        .args(["play", "--file", noise.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No playable animation"))
        .stdout(predicate::str::is_empty());
}
