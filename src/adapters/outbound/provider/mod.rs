// Infrastructure error types
pub mod error;

// Provider implementations
pub mod http_provider;

// Re-export key types
pub use error::{ProviderError, ProviderInitError};
pub use http_provider::{HttpLookupProvider, ProviderConfig};
