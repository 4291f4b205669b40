use crate::domain::{errors::LookupResult, models::LookupRecord, value_objects::MobileNumber};
use async_trait::async_trait;

/// Port for the third-party mobile number lookup provider
/// This abstracts the actual upstream HTTP API
#[async_trait]
pub trait LookupProvider: Send + Sync + 'static {
    /// Fetch the first result record the provider holds for `mobile`
    async fn fetch_record(&self, mobile: &MobileNumber) -> LookupResult<LookupRecord>;
}
