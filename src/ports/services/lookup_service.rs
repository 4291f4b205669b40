use crate::domain::{errors::LookupResult, models::LookupRecord};
use async_trait::async_trait;

/// Port for the mobile number lookup service
/// This trait defines the business logic behind `/track`
#[async_trait]
pub trait LookupService: Send + Sync + 'static {
    /// Validate raw user input and look the number up upstream
    async fn track(&self, mobile: &str) -> LookupResult<LookupRecord>;
}
