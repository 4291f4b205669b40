use std::sync::Arc;

use crate::{
    adapters::{
        inbound::http::router::{AppState, create_router},
        outbound::provider::{HttpLookupProvider, ProviderConfig},
    },
    ports::providers::LookupProvider,
    services::LookupServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
}

/// Application services container
pub struct AppServices {
    pub lookup_service: LookupServiceImpl,
}

impl AppServices {
    /// Wrap the services into router state and build the HTTP router
    pub fn into_router(self) -> axum::Router {
        create_router(AppState {
            lookup_service: Arc::new(self.lookup_service),
        })
    }
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    provider: Option<Arc<dyn LookupProvider>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            provider: None,
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the upstream provider settings
    pub fn with_provider_config(mut self, provider: ProviderConfig) -> Self {
        self.config.provider = provider;
        self
    }

    /// Use a ready-made provider instead of building the HTTP one
    pub fn with_provider(mut self, provider: Arc<dyn LookupProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        self.validate_config()?;

        let provider = match &self.provider {
            Some(provider) => provider.clone(),
            None => self.create_provider()?,
        };

        Ok(AppServices {
            lookup_service: LookupServiceImpl::new(provider),
        })
    }

    fn validate_config(&self) -> Result<(), AppError> {
        if self.config.provider.timeout.is_zero() {
            return Err(AppError::Configuration {
                message: "lookup timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Create the HTTP provider from configuration
    fn create_provider(&self) -> Result<Arc<dyn LookupProvider>, AppError> {
        let provider = HttpLookupProvider::new(self.config.provider.clone()).map_err(|e| {
            AppError::ProviderInit {
                message: e.to_string(),
            }
        })?;

        Ok(Arc::new(provider))
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Provider initialization error: {message}")]
    ProviderInit { message: String },
}

/// Create an application that talks to the given provider configuration
pub fn create_app(provider: ProviderConfig) -> Result<AppServices, AppError> {
    AppBuilder::new().with_provider_config(provider).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{errors::LookupResult, models::LookupRecord, value_objects::MobileNumber},
        ports::services::LookupService,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    struct FixedProvider;

    #[async_trait]
    impl LookupProvider for FixedProvider {
        async fn fetch_record(&self, _mobile: &MobileNumber) -> LookupResult<LookupRecord> {
            Ok(serde_json::from_value(json!({"name": "John"})).unwrap())
        }
    }

    #[tokio::test]
    async fn test_injected_provider_is_used() {
        // An unusable endpoint proves the HTTP provider is never built
        let services = AppBuilder::new()
            .with_provider_config(ProviderConfig {
                endpoint: "::not-a-url".to_string(),
                ..ProviderConfig::default()
            })
            .with_provider(Arc::new(FixedProvider))
            .build()
            .unwrap();

        let record = services.lookup_service.track("6294782049").await.unwrap();
        assert_eq!(record.get("name"), Some(&json!("John")));
    }

    #[test]
    fn test_default_config_builds() {
        let config = AppConfig::default();
        assert_eq!(config.provider.endpoint, "https://hitackgrop.vercel.app/get_data");
        assert_eq!(config.provider.access_key, "Demo");
        assert_eq!(config.provider.timeout, Duration::from_secs(20));

        assert!(AppBuilder::new().with_config(config).build().is_ok());
    }

    #[test]
    fn test_bad_endpoint_fails_build() {
        let result = create_app(ProviderConfig {
            endpoint: "::not-a-url".to_string(),
            ..ProviderConfig::default()
        });

        match result {
            Err(AppError::ProviderInit { message }) => assert!(message.contains("::not-a-url")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected build to fail"),
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = AppBuilder::new()
            .with_provider_config(ProviderConfig {
                timeout: Duration::ZERO,
                ..ProviderConfig::default()
            })
            .build();

        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }
}
