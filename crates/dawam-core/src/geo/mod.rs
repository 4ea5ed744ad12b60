//! One-shot IP-geolocation country detection.
//!
//! Used exactly once per install to default the country setting. Any
//! failure -- network, malformed response, a country outside the
//! compiled table -- is logged and mapped to the fixed fallback
//! (United Arab Emirates, Friday/Saturday weekend). Detection failure is
//! never surfaced to the user as an error.

use serde::Deserialize;

use crate::calendar::{country_profile, CountryProfile};
use crate::error::GeoError;

const GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Country slug applied when detection fails.
pub const FALLBACK_COUNTRY: &str = "ae";

#[derive(Debug, Deserialize)]
struct GeoResponse {
    country_code: Option<String>,
}

/// Look up the caller's country from its IP address.
///
/// # Errors
/// Fails when the request fails, the response carries no country code,
/// or the code is not in the compiled country table.
pub async fn lookup() -> Result<&'static CountryProfile, GeoError> {
    lookup_at(GEOLOCATION_URL).await
}

async fn lookup_at(url: &str) -> Result<&'static CountryProfile, GeoError> {
    let response: GeoResponse = reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let code = response
        .country_code
        .ok_or(GeoError::MissingCountryCode)?
        .to_lowercase();

    country_profile(&code).ok_or(GeoError::UnsupportedCountry(code))
}

/// Detect the country, falling back to [`FALLBACK_COUNTRY`] on any
/// failure. Returns the profile and whether it came from the network.
pub async fn detect_or_default() -> (&'static CountryProfile, bool) {
    match lookup().await {
        Ok(profile) => {
            tracing::info!(country = profile.code, "country detected from IP geolocation");
            (profile, true)
        }
        Err(err) => {
            tracing::warn!(error = %err, "country detection failed, falling back to default");
            let fallback = country_profile(FALLBACK_COUNTRY)
                .expect("fallback country is in the compiled table");
            (fallback, false)
        }
    }
}
