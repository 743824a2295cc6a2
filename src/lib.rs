pub mod domain;
pub mod repository;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;
