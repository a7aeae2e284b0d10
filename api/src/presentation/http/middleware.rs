use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::bootstrap::config::Config;

const METHODS: [Method; 4] = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

fn base() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(METHODS)
        .allow_headers([header::CONTENT_TYPE])
}

pub fn cors(cfg: &Config) -> CorsLayer {
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base().allow_origin(origin).allow_credentials(true),
        Some(Err(_)) | None if cfg.is_production => {
            // Config::from_env rejects this combination; deny everything if it slips through
            base().allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
        }
        _ => base()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true),
    }
}
