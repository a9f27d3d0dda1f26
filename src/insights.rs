//! AI insight collaborator
//!
//! Sends a snapshot of the fleet to a generative model and renders its
//! narrative answer. The collaborator is strictly optional: a missing
//! credential disables the feature and any failure collapses into a
//! static fallback, so it can never interrupt the rest of the
//! dashboard. There is no retry and no effect on store state.

use crate::error::{Error, Result};
use crate::metrics::TimeRange;
use crate::types::{Driver, RevenuePoint, Trip, Truck};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

/// Snapshot bundle handed to the model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest<'a> {
    pub trucks: &'a [Truck],
    pub drivers: &'a [Driver],
    pub revenue: &'a [RevenuePoint],
    /// The dashboard view the manager is looking at
    pub context: &'a str,
    pub time_range: TimeRange,
    pub filtered_trips: &'a [Trip],
}

/// A single suggested action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<String>,
    pub action: String,
    pub impact: String,
}

/// Narrative insight returned by the collaborator
///
/// Every field defaults on deserialization so a partial model response
/// still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetInsights {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl FleetInsights {
    /// Placeholder shown when no credential is configured
    fn disabled() -> Self {
        Self {
            summary: "AI analysis is currently unavailable. Please configure your API key."
                .to_string(),
            warnings: vec!["Missing API configuration".to_string()],
            recommendations: Vec::new(),
        }
    }

    /// Fallback shown when the collaborator fails
    fn unavailable() -> Self {
        Self {
            summary: "An error occurred while generating AI insights.".to_string(),
            warnings: vec!["Connectivity issues".to_string()],
            recommendations: Vec::new(),
        }
    }
}

/// Backend that turns a prompt into raw model text
pub trait InsightBackend {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini `generateContent` backend over HTTP
pub struct GeminiBackend {
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }
}

impl InsightBackend for GeminiBackend {
    fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        });

        let response = ureq::post(&url)
            .send_json(body)
            .map_err(|e| Error::Insight(format!("request failed: {}", e)))?;

        let value: serde_json::Value = response
            .into_json()
            .map_err(|e| Error::Insight(format!("unreadable response: {}", e)))?;

        value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| Error::Insight("no text in model response".to_string()))
    }
}

/// JSON schema the model is asked to answer in
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "warnings": { "type": "ARRAY", "items": { "type": "STRING" } },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "truckId": { "type": "STRING" },
                        "action": { "type": "STRING" },
                        "impact": { "type": "STRING" }
                    },
                    "required": ["action", "impact"]
                }
            }
        },
        "required": ["summary", "warnings", "recommendations"]
    })
}

fn build_prompt(request: &InsightRequest<'_>) -> String {
    let data = serde_json::to_string(request).unwrap_or_default();
    format!(
        "Analyze this fleet data and provide strategic recommendations for a logistics manager. \
         Focus on: underperforming trucks, high-cost routes, and maintenance risks.\n\
         Data: {}",
        data
    )
}

/// Ask the collaborator for insights. Never fails: with no backend the
/// feature is disabled, and backend errors are logged and replaced by
/// a static fallback.
pub fn fleet_insights(
    backend: Option<&dyn InsightBackend>,
    request: &InsightRequest<'_>,
) -> FleetInsights {
    let Some(backend) = backend else {
        warn!("insight backend not configured, AI insights disabled");
        return FleetInsights::disabled();
    };

    let prompt = build_prompt(request);
    let parsed = backend.generate(&prompt).and_then(|text| {
        serde_json::from_str::<FleetInsights>(&text)
            .map_err(|e| Error::Insight(format!("malformed insight payload: {}", e)))
    });

    match parsed {
        Ok(insights) => insights,
        Err(e) => {
            warn!("insight generation failed: {}", e);
            FleetInsights::unavailable()
        }
    }
}
