// Event system test module
#[cfg(test)]
mod bus_tests;
