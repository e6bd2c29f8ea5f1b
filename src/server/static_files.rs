//! Static asset helpers: cache headers for the static mount and URL building
//! for templates.

use axum::extract::{Request, State};
use axum::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

const DEFAULT_STATIC_BASE: &str = "/static";
const DEFAULT_SRCSET_WIDTHS: [u32; 3] = [64, 256, 600];

/// `secs == 0` disables caching entirely.
pub fn set_cache_headers(headers: &mut HeaderMap, secs: u64) {
    if secs == 0 {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, must-revalidate"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(EXPIRES, HeaderValue::from_static("0"));
        return;
    }
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={secs}")) {
        headers.insert(CACHE_CONTROL, value);
    }
}

/// Middleware for the static mount; state is the max-age in seconds.
pub async fn static_cache_headers(State(secs): State<u64>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    set_cache_headers(response.headers_mut(), secs);
    response
}

/// Full URL for a static asset. Absolute http(s) URLs pass through and a
/// leading `/static` on `path` is not repeated.
pub fn static_path(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    let base = base.trim();
    let base = if base.is_empty() { DEFAULT_STATIC_BASE } else { base };
    let base = format!("/{}", base.trim_matches('/'));

    let path = format!("/{}", path.trim_start_matches('/'));
    let path = path.strip_prefix("/static").unwrap_or(&path);

    format!("{base}{path}")
}

/// `srcset` for the WebP variants generated next to a unit image
/// (`dir/webp-<w>/<name>.webp`). Empty for remote or blank paths.
pub fn unit_webp_srcset(base: &str, path: &str, widths: &[u32]) -> String {
    if path.is_empty() || is_absolute_url(path) {
        return String::new();
    }

    let (dir, file) = match path.rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", path),
    };
    if file.is_empty() {
        return String::new();
    }
    let name = match file.rfind('.') {
        Some(idx) => &file[..idx],
        None => file,
    };

    let widths = if widths.is_empty() {
        &DEFAULT_SRCSET_WIDTHS[..]
    } else {
        widths
    };

    widths
        .iter()
        .filter(|w| **w > 0)
        .map(|w| {
            let webp = format!("{dir}/webp-{w}/{name}.webp");
            format!("{} {w}w", static_path(base, &webp))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
