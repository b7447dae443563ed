use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculationRequest, CalculatorClient, CalculatorError};

use crate::domain::{DomainError, Service};

/// In-process [`CalculatorClient`] backed directly by [`Service`].
#[derive(Debug, Clone)]
pub struct LocalCalculatorClient {
    service: Arc<Service>,
}

impl LocalCalculatorClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl Default for LocalCalculatorClient {
    fn default() -> Self {
        Self::new(Arc::new(Service::new()))
    }
}

impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        Self::rejected(err.kind())
    }
}

#[async_trait]
impl CalculatorClient for LocalCalculatorClient {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalculatorError> {
        self.service.apply(request).map_err(Into::into)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use calculator_sdk::{ErrorKind, Operator};

    #[tokio::test]
    async fn local_client_evaluates() {
        let client = LocalCalculatorClient::default();
        let value = client
            .calculate(&CalculationRequest::new(5.0, Operator::Add, 3.0))
            .await
            .unwrap();
        assert_eq!(value, 8.0);
    }

    #[tokio::test]
    async fn local_client_maps_domain_errors_to_rejections() {
        let client = LocalCalculatorClient::default();
        let err = client
            .calculate(&CalculationRequest::new(1.0, Operator::Divide, 0.0))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::DivisionByZero));
        assert_eq!(err.to_string(), "Error: Division by zero");
    }
}
