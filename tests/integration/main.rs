//! Integration test harness.

mod capture_test;
mod decoder_test;
