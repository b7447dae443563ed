use anyhow::{Context, Result};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build a CORS layer from config.
///
/// # Errors
/// Returns an error if an origin, method or header name cannot be parsed.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let mut layer = CorsLayer::new();

    if cfg.allowed_origins.iter().any(|o| o == "*") {
        warn!("CORS is configured with allowed_origins=['*']; any website may call the service");
        layer = layer.allow_origin(Any);
    } else {
        let origins = cfg
            .allowed_origins
            .iter()
            .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin '{o}'")))
            .collect::<Result<Vec<_>>>()?;
        layer = layer.allow_origin(origins);
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods = cfg
            .allowed_methods
            .iter()
            .map(|m| {
                m.parse::<Method>()
                    .with_context(|| format!("invalid CORS method '{m}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        layer = layer.allow_methods(methods);
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers = cfg
            .allowed_headers
            .iter()
            .map(|h| {
                h.parse::<HeaderName>()
                    .with_context(|| format!("invalid CORS header '{h}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        layer = layer.allow_headers(headers);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(std::time::Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(build_cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn explicit_origins_build() {
        let cfg = CorsConfig {
            allowed_origins: vec!["http://localhost:8080".to_owned()],
            max_age_seconds: 600,
            ..CorsConfig::default()
        };
        assert!(build_cors_layer(&cfg).is_ok());
    }

    #[test]
    fn bad_method_is_reported() {
        let cfg = CorsConfig {
            allowed_methods: vec!["NOT A METHOD".to_owned()],
            ..CorsConfig::default()
        };
        let err = build_cors_layer(&cfg).unwrap_err();
        assert!(err.to_string().contains("NOT A METHOD"));
    }

    #[test]
    fn bad_origin_is_reported() {
        let cfg = CorsConfig {
            allowed_origins: vec!["http://bad\norigin".to_owned()],
            ..CorsConfig::default()
        };
        assert!(build_cors_layer(&cfg).is_err());
    }
}
