use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    domain::{
        errors::{LookupError, LookupResult},
        models::LookupRecord,
        value_objects::MobileNumber,
    },
    ports::{providers::LookupProvider, services::LookupService},
};

/// Implementation of LookupService: validate, then one upstream call
#[derive(Clone)]
pub struct LookupServiceImpl {
    provider: Arc<dyn LookupProvider>,
}

impl LookupServiceImpl {
    /// Create a new LookupServiceImpl instance
    pub fn new(provider: Arc<dyn LookupProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl LookupService for LookupServiceImpl {
    async fn track(&self, mobile: &str) -> LookupResult<LookupRecord> {
        let mobile = MobileNumber::parse(mobile).map_err(|e| {
            debug!(error = %e, "rejected mobile number");
            LookupError::from(e)
        })?;

        debug!(mobile = %mobile, "looking up mobile number");

        match self.provider.fetch_record(&mobile).await {
            Ok(record) => {
                debug!(mobile = %mobile.masked(), fields = record.field_count(), "lookup succeeded");
                Ok(record)
            }
            Err(e) => {
                warn!(mobile = %mobile.masked(), error = %e, "lookup failed");
                Err(e)
            }
        }
    }
}
