#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Calculator Module
//!
//! A stateless service that evaluates one binary operation per request and
//! exposes it as `POST /calculate`.
//!
//! ## Architecture
//!
//! - `Service` contains the domain logic (validation and arithmetic)
//! - REST handlers call `Service` directly
//! - `LocalCalculatorClient` implements `calculator_sdk::CalculatorClient`
//!   in-process, for consumers that do not need the network hop
//! - `build_router()` assembles routes and the HTTP middleware stack

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub use config::{CalculatorConfig, CorsConfig};

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{DomainError, Operand, Service, UncheckedCalculation};

mod local_client;
pub use local_client::LocalCalculatorClient;

mod router;
pub use router::build_router;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
