pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    DisplayRow,
    DomainValidationError,
    // Errors
    LookupError,
    // Models
    LookupRecord,
    LookupResult,
    // Value objects
    MobileNumber,
};

// Port types - interfaces for external systems
pub use ports::{LookupProvider, LookupService};

// Service implementations - business logic
pub use services::LookupServiceImpl;

// Application factory and configuration
pub use app::{AppBuilder, AppConfig, AppError, AppServices, create_app};

// Adapter types - infrastructure implementations
pub use adapters::inbound::http::{AppState, TrackResponseDto, create_router};
pub use adapters::outbound::provider::{HttpLookupProvider, ProviderConfig, ProviderError, ProviderInitError};
