//! Unit tests for `xqlint_tree`.

mod query_tests;
