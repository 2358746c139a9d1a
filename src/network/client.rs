//! HTTP client wrapper - fetches and decodes the country list

use std::time::Instant;

use serde::Deserialize;

use crate::messages::NetworkResponse;
use crate::models::Country;

/// Country as the REST Countries API serves it; everything but the name is
/// optional on the wire
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCountry {
    name: String,
    #[serde(default)]
    capital: Option<String>,
    #[serde(default)]
    alpha2_code: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

impl From<WireCountry> for Country {
    fn from(wire: WireCountry) -> Self {
        Country {
            name: wire.name,
            capital: wire.capital.unwrap_or_default(),
            code: wire.alpha2_code.unwrap_or_default(),
            region: wire.region.unwrap_or_default(),
        }
    }
}

/// Fetch the country list and decode it, converting every failure mode into
/// an error message for the app layer
pub async fn fetch_countries(
    client: &reqwest::Client,
    url: &str,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();

    let result = client.get(url).send().await;
    match result {
        Ok(resp) => match resp.error_for_status() {
            Ok(resp) => match resp.json::<Vec<WireCountry>>().await {
                Ok(wire) => NetworkResponse::Countries {
                    id: request_id,
                    countries: wire.into_iter().map(Country::from).collect(),
                    time_ms: start.elapsed().as_millis() as u64,
                },
                Err(e) => NetworkResponse::Error {
                    id: request_id,
                    message: format!("Error decoding body: {}", e),
                    time_ms: start.elapsed().as_millis() as u64,
                },
            },
            Err(e) => NetworkResponse::Error {
                id: request_id,
                message: format!("Request failed: {}", e),
                time_ms: start.elapsed().as_millis() as u64,
            },
        },
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Error {
                id: request_id,
                message: msg,
                time_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_country() {
        let json = r#"[
            {"name":"United States of America","capital":"Washington, D.C","alpha2Code":"US","region":"US"}
        ]"#;
        let wire: Vec<WireCountry> = serde_json::from_str(json).unwrap();
        let countries: Vec<Country> = wire.into_iter().map(Country::from).collect();

        assert_eq!(countries.len(), 1);
        assert_eq!(
            countries[0],
            Country::new("United States of America", "Washington, D.C", "US", "US")
        );
    }

    #[test]
    fn test_decode_defaults_missing_fields() {
        let json = r#"[{"name":"Antarctica"}]"#;
        let wire: Vec<WireCountry> = serde_json::from_str(json).unwrap();
        let countries: Vec<Country> = wire.into_iter().map(Country::from).collect();

        assert_eq!(countries[0], Country::new("Antarctica", "", "", ""));
    }

    #[test]
    fn test_decode_preserves_order() {
        let json = r#"[
            {"name":"Zimbabwe","capital":"Harare","alpha2Code":"ZW","region":"Africa"},
            {"name":"Albania","capital":"Tirana","alpha2Code":"AL","region":"Europe"}
        ]"#;
        let wire: Vec<WireCountry> = serde_json::from_str(json).unwrap();
        let countries: Vec<Country> = wire.into_iter().map(Country::from).collect();

        assert_eq!(countries[0].name, "Zimbabwe");
        assert_eq!(countries[1].name, "Albania");
    }
}
