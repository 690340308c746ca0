//! get_current_temperature tool - two-step open-meteo lookup
//!
//! Geocodes a city name to coordinates, then fetches the current
//! temperature for those coordinates. Both endpoints are keyless.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolResult};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Look up the current temperature for a city
pub struct GetCurrentTemperatureTool;

#[async_trait]
impl Tool for GetCurrentTemperatureTool {
    fn name(&self) -> &'static str {
        "get_current_temperature"
    }

    fn description(&self) -> &'static str {
        "Gets the current temperature in Celsius for a given location."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The city name, e.g. San Francisco"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, input: Value, _ctx: &ToolContext) -> ToolResult {
        let city = match input["city"].as_str() {
            Some(c) if !c.trim().is_empty() => c,
            _ => return ToolResult::error("city is required"),
        };

        let client = match reqwest::Client::builder().timeout(Duration::from_secs(30)).build() {
            Ok(c) => c,
            Err(e) => return ToolResult::error(format!("Failed to build HTTP client: {}", e)),
        };

        // Step 1: geocode city name to coordinates
        let geo: GeocodeResponse = match client
            .get(GEOCODING_URL)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await
        {
            Ok(resp) => match resp.json().await {
                Ok(data) => data,
                Err(e) => return ToolResult::error(format!("Failed to parse geocoding response: {}", e)),
            },
            Err(e) => return ToolResult::error(format!("Failed to reach geocoding service: {}", e)),
        };

        let location = match geo.results.and_then(|r| r.into_iter().next()) {
            Some(loc) => loc,
            None => return ToolResult::error(format!("Could not geocode city: \"{}\"", city)),
        };

        debug!(%city, lat = location.latitude, lon = location.longitude, "geocoded");

        // Step 2: current weather for those coordinates
        let weather: ForecastResponse = match client
            .get(FORECAST_URL)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", "celsius".to_string()),
            ])
            .send()
            .await
        {
            Ok(resp) => match resp.json().await {
                Ok(data) => data,
                Err(e) => return ToolResult::error(format!("Failed to parse weather response: {}", e)),
            },
            Err(e) => return ToolResult::error(format!("Failed to reach weather service: {}", e)),
        };

        match weather.current_weather {
            Some(current) => ToolResult::success(current.temperature.to_string()),
            None => ToolResult::error("Could not fetch current weather data"),
        }
    }
}

// open-meteo response types

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
}
