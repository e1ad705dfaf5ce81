//! Integration test suite entry point.

mod helpers;

mod api_test;
mod realtime_test;
mod scan_test;
