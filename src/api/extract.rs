//! Request extractors shared by the handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;

const ALIAS_QUERY_KEY: &str = "alias";

/// Alias taken from the `{alias}` path segment, falling back to the `alias`
/// query parameter.
///
/// Empty values count as absent, so routes without a path segment (`/`,
/// `/url/delete`) still work with `?alias=...`. When `alias` is repeated in
/// the query, the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasParam(pub Option<String>);

impl<S> FromRequestParts<S> for AliasParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let from_path = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|Path(alias)| alias)
            .filter(|alias| !alias.is_empty());

        if from_path.is_some() {
            return Ok(Self(from_path));
        }

        let from_query = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == ALIAS_QUERY_KEY)
                    .map(|(_, value)| value)
            })
            .filter(|alias| !alias.is_empty());

        Ok(Self(from_query))
    }
}
