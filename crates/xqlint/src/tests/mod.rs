//! Unit tests for `xqlint`.

mod check_tests;
mod checks_tests;
