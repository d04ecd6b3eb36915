// Kernel test module
#[cfg(test)]
mod boot_tests;
