mod common;
mod clear_tests;
mod query_tests;
mod store_tests;
