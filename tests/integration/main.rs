//! Integration test harness
//!
//! One binary with a module per test area, plus shared helpers.

mod helpers;

mod cli_test;
mod play_test;
