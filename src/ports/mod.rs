pub mod providers;
pub mod services;

// Re-export all port traits for convenience
pub use providers::LookupProvider;
pub use services::LookupService;
