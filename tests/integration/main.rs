//! Integration tests for Contact Gatherer
//!
//! These tests use wiremock to create mock HTTP servers and test the full
//! crawl, extract and export cycle end-to-end.

mod cli_tests;
mod crawl_tests;
mod export_tests;
