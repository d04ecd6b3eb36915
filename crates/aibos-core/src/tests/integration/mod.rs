#![cfg(test)]

pub mod common;
pub mod boot_tests;
pub mod lifecycle_tests;
