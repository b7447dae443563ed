#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculation service:
//! - Contract types (`Operator`, `CalculationRequest`, `CalculationOutcome`, `ErrorKind`)
//! - Wire body for `POST /calculate` (`CalculationResponse`)
//! - API trait (`CalculatorClient`) and its error type (`CalculatorError`)
//! - HTTP implementation of the trait (`CalculatorHttpClient`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculationRequest, CalculatorClient, CalculatorHttpClient, Operator};
//!
//! let client = CalculatorHttpClient::new(HttpClientConfig::default())?;
//! let request = CalculationRequest::new(2.0, Operator::Add, 3.0);
//! let result = client.calculate(&request).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === CONTRACT TYPES ===
mod models;
pub use models::{CalculationOutcome, CalculationRequest, ErrorKind, Operator, UnknownOperator};

// === WIRE FORMAT ===
pub mod wire;
pub use wire::CalculationResponse;

// === API TRAIT AND ERRORS ===
mod api;
pub use api::{CalculatorClient, CalculatorError};

// === HTTP CLIENT ===
mod http_client;
pub use http_client::{CALCULATE_PATH, CalculatorHttpClient, DEFAULT_BASE_URL, HttpClientConfig};
