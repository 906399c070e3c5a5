//! HTTP Handlers

mod category;
mod ping;
mod question;
mod quiz;

pub use category::*;
pub use ping::*;
pub use question::*;
pub use quiz::*;

use super::error::ApiError;

/// 未匹配任何路由
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
