//! Cross-entity search handler.
//!
//! ```text
//! GET /api/v1/search?query=an
//! ```
//!
//! Hits are written to the response as they arrive from either store query.
//! The body is a JSON array by default; clients sending
//! `Accept: application/x-ndjson` get one JSON object per line instead. A
//! store failure mid-stream aborts the body, so clients never see a
//! well-formed document missing hits.

use actix_web::http::header::{ACCEPT, HeaderMap};
use actix_web::{HttpRequest, HttpResponse, get, web};
use futures_util::stream::{self, Stream, StreamExt, TryStreamExt};
use serde::Deserialize;
use tracing::warn;
use utoipa::IntoParams;

use crate::domain::{Error, HitStream, SearchHit, TraceId};
use crate::inbound::http::schemas::{ErrorSchema, SearchHitSchema};
use crate::inbound::http::state::HttpState;

const NDJSON: &str = "application/x-ndjson";

/// Query string for `GET /api/v1/search`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Fragment matched against user and company names, ignoring case.
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitFormat {
    JsonArray,
    NdJson,
}

impl HitFormat {
    fn negotiate(headers: &HeaderMap) -> Self {
        let wants_ndjson = headers
            .get_all(ACCEPT)
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.contains(NDJSON));
        if wants_ndjson {
            Self::NdJson
        } else {
            Self::JsonArray
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            Self::JsonArray => "application/json",
            Self::NdJson => NDJSON,
        }
    }
}

fn encode_hit(hit: &SearchHit) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(hit).map_err(|err| Error::internal(format!("failed to encode hit: {err}")))
}

fn encode_hits(
    hits: HitStream,
    format: HitFormat,
) -> impl Stream<Item = Result<web::Bytes, Error>> {
    match format {
        HitFormat::NdJson => hits
            .and_then(|hit| async move {
                let mut line = encode_hit(&hit)?;
                line.push(b'\n');
                Ok::<_, Error>(web::Bytes::from(line))
            })
            .boxed(),
        HitFormat::JsonArray => {
            let items = hits.enumerate().map(|(index, item)| -> Result<web::Bytes, Error> {
                let hit = item?;
                let mut chunk = if index == 0 { Vec::new() } else { vec![b','] };
                chunk.extend(encode_hit(&hit)?);
                Ok(web::Bytes::from(chunk))
            });
            stream::once(async { Ok(web::Bytes::from_static(b"[")) })
                .chain(items)
                .chain(stream::once(async { Ok(web::Bytes::from_static(b"]")) }))
                .boxed()
        }
    }
}

/// Search users and companies by name.
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Hits in arrival order", body = [SearchHitSchema]),
        (status = 400, description = "Missing query parameter", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "search"
)]
#[get("/search")]
pub async fn search(
    state: web::Data<HttpState>,
    request: HttpRequest,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let format = HitFormat::negotiate(request.headers());
    let trace_id = TraceId::current();
    let hits = state.search.search(&query.query);
    let body = encode_hits(hits, format).inspect_err(move |error| {
        warn!(?trace_id, code = ?error.code(), message = error.message(), "search stream aborted");
    });
    HttpResponse::Ok()
        .content_type(format.content_type())
        .streaming(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HitKind;
    use actix_web::http::header::HeaderValue;
    use rstest::rstest;

    async fn render(items: Vec<Result<SearchHit, Error>>, format: HitFormat) -> Vec<u8> {
        let chunks: Vec<Result<web::Bytes, Error>> =
            encode_hits(stream::iter(items).boxed(), format).collect().await;
        chunks
            .into_iter()
            .map_while(Result::ok)
            .flat_map(|bytes| bytes.to_vec())
            .collect()
    }

    #[rstest]
    #[case(None, HitFormat::JsonArray)]
    #[case(Some("application/json"), HitFormat::JsonArray)]
    #[case(Some("application/x-ndjson"), HitFormat::NdJson)]
    #[case(Some("text/plain, application/x-ndjson;q=0.9"), HitFormat::NdJson)]
    fn accept_header_selects_format(
        #[case] accept: Option<&'static str>,
        #[case] expected: HitFormat,
    ) {
        let mut headers = HeaderMap::new();
        if let Some(value) = accept {
            headers.insert(ACCEPT, HeaderValue::from_static(value));
        }
        assert_eq!(HitFormat::negotiate(&headers), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_search_renders_an_empty_array() {
        assert_eq!(render(vec![], HitFormat::JsonArray).await, b"[]");
    }

    #[rstest]
    #[tokio::test]
    async fn hits_are_comma_separated() {
        let body = render(
            vec![
                Ok(SearchHit::new(1, "Ann", HitKind::User)),
                Ok(SearchHit::new(2, "Anderson Inc", HitKind::Company)),
            ],
            HitFormat::JsonArray,
        )
        .await;

        let value: serde_json::Value = serde_json::from_slice(&body).expect("valid JSON");
        assert_eq!(
            value,
            serde_json::json!([
                { "id": 1, "name": "Ann", "type": "USER" },
                { "id": 2, "name": "Anderson Inc", "type": "COMPANY" }
            ])
        );
    }

    #[rstest]
    #[tokio::test]
    async fn ndjson_writes_one_hit_per_line() {
        let body = render(
            vec![
                Ok(SearchHit::new(1, "Ann", HitKind::User)),
                Ok(SearchHit::new(2, "Anderson Inc", HitKind::Company)),
            ],
            HitFormat::NdJson,
        )
        .await;

        let text = String::from_utf8(body).expect("utf-8");
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[rstest]
    #[tokio::test]
    async fn failures_leave_the_array_unterminated() {
        let body = render(
            vec![
                Ok(SearchHit::new(1, "Ann", HitKind::User)),
                Err(Error::service_unavailable("company store unavailable")),
            ],
            HitFormat::JsonArray,
        )
        .await;

        assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
    }
}
