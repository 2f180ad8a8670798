//! Client identification for rate limiting.

use axum::http::HeaderMap;

/// Best-effort client key: first hop of `x-forwarded-for`, then `x-real-ip`.
/// Callers not behind a proxy and without either header all share the
/// `"unknown"` bucket, which fails safe (shared limit) rather than open.
pub fn client_key(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
        && !ip.trim().is_empty()
    {
        return ip.trim().to_string();
    }

    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(value) = real_ip.to_str()
        && !value.trim().is_empty()
    {
        return value.trim().to_string();
    }

    "unknown".to_string()
}
