//! DTOs for the `/shorten` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// JSON form of a request body carrying a URL.
///
/// Bodies may also be a bare JSON string or raw text; see [`extract_url_input`].
#[derive(Debug, Deserialize)]
pub struct UrlBody {
    pub url: String,
}

/// Response of `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
}

/// Response of `GET /shorten/{code}`.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub original_url: String,
}

/// Full record returned by `PUT /shorten/{code}`.
#[derive(Debug, Serialize)]
pub struct UrlRecordResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            short_code: record.short_code,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Pulls the URL out of a request body.
///
/// Accepts `{"url": "..."}`, a JSON string `"..."`, or the raw URL text.
/// Anything that does not parse as one of the JSON forms is taken verbatim.
pub fn extract_url_input(body: &str) -> String {
    let trimmed = body.trim();

    if trimmed.starts_with('{') {
        if let Ok(UrlBody { url }) = serde_json::from_str::<UrlBody>(trimmed) {
            return url;
        }
    } else if trimmed.starts_with('"')
        && let Ok(url) = serde_json::from_str::<String>(trimmed)
    {
        return url;
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_raw_text() {
        assert_eq!(extract_url_input("https://example.com\n"), "https://example.com");
    }

    #[test]
    fn test_extract_json_string() {
        assert_eq!(extract_url_input("\"https://example.com\""), "https://example.com");
    }

    #[test]
    fn test_extract_json_object() {
        assert_eq!(
            extract_url_input(r#"{"url": "https://example.com/a"}"#),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_extract_malformed_json_taken_verbatim() {
        assert_eq!(extract_url_input("{not json"), "{not json");
    }

    #[test]
    fn test_record_response_serializes_second_precision() {
        let ts = chrono::DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let response = UrlRecordResponse::from(UrlRecord::new(
            1,
            "https://example.com/".to_string(),
            "abc123".to_string(),
            ts,
            ts,
        ));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["short_code"], "abc123");
        assert_eq!(json["created_at"], "2024-05-01T10:00:00Z");
    }
}
