//! Response compression for text payloads.

use std::io::Write;

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::header::{ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_LENGTH, VARY};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::{error, warn};

/// Middleware: gzip the body when the client accepts it and the path looks like text.
pub async fn compress_response(req: Request, next: Next) -> Response {
    if !should_compress(&req) {
        return next.run(req).await;
    }

    let response = next.run(req).await;
    if matches!(
        response.status(),
        StatusCode::NO_CONTENT | StatusCode::PARTIAL_CONTENT | StatusCode::NOT_MODIFIED
    ) || response.headers().contains_key(CONTENT_ENCODING)
    {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(error = %err, "failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match gzip_bytes(&bytes) {
        Ok(compressed) => {
            parts
                .headers
                .insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
            parts
                .headers
                .append(VARY, HeaderValue::from_static("Accept-Encoding"));
            // Stale length; axum sets it again from the compressed body.
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(compressed))
        }
        Err(err) => {
            warn!(error = %err, "gzip failed, sending uncompressed");
            Response::from_parts(parts, Body::from(bytes))
        }
    }
}

fn should_compress(req: &Request) -> bool {
    if req.method() == Method::HEAD {
        return false;
    }
    let accepts_gzip = req
        .headers()
        .get(ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("gzip"));
    accepts_gzip && is_compressible_path(req.uri().path())
}

/// Text extensions and extension-less routes compress; everything else is
/// assumed to be binary or already compressed.
pub fn is_compressible_path(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let ext = match file.rfind('.') {
        Some(idx) => file[idx..].to_ascii_lowercase(),
        None => return true,
    };
    matches!(
        ext.as_str(),
        ".html" | ".htm" | ".css" | ".js" | ".mjs" | ".json" | ".map" | ".svg" | ".txt"
    )
}

pub fn gzip_bytes(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::GzDecoder;

    use super::*;

    #[test]
    fn compressible_paths() {
        for path in ["/", "/api/units", "/static/app.css", "/a/b.JS", "/robots.txt", "/x.svg"] {
            assert!(is_compressible_path(path), "{path}");
        }
        for path in ["/static/a.png", "/b.webp", "/c.woff2", "/d.ico", "/e.zip", "/f.JPEG"] {
            assert!(!is_compressible_path(path), "{path}");
        }
    }

    #[test]
    fn dotted_directory_does_not_count_as_extension() {
        assert!(is_compressible_path("/v1.2/units"));
    }

    #[test]
    fn gzip_round_trips() {
        let compressed = gzip_bytes(b"hello hello hello").unwrap();
        let mut out = String::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "hello hello hello");
    }
}
