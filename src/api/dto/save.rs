//! DTOs for the save endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to store a URL under an optional alias.
///
/// `url` is optional at the serde level so that a missing field surfaces as
/// a validation error rather than a decode error.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Redirect target; must be an absolute URL.
    #[validate(required, length(min = 1, code = "required"), url)]
    pub url: Option<String>,

    /// Optional alias; empty means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}
