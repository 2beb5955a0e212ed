//! Integration test suite.

mod lifecycle_test;
mod persistence_test;
mod tree_test;
mod worker_test;
