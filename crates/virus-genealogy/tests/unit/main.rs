//! Unit test harness for virus-genealogy.

mod export_test;
mod traversal_test;
