use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// Request shape shared by the text-in/text-out AI tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTextRequest {
    pub text: String,
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTranslateRequest {
    pub text: String,
    pub source: Locale,
    pub target: Locale,
}

/// Generic AI tool response: the produced text plus provider metadata the
/// client displays verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTextResponse {
    pub output: String,
    pub model: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckClaim {
    pub claim: String,
    pub verdict: String,
    pub confidence: f32,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckResponse {
    pub claims: Vec<FactCheckClaim>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    pub url: String,
    pub caption: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendTopic {
    pub topic: String,
    pub score: f32,
    #[serde(default)]
    pub related_queries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoSuggestion {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}
