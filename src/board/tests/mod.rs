//! Unit tests for work-item management.

mod store_tests;
