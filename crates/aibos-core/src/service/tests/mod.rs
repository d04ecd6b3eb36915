// Service system test module
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod schema_tests;
