use serde::{Deserialize, Serialize};

/// Token gauge floor used by the usage panel on the admin console.
pub const PANEL_GAUGE_FLOOR: f64 = 100_000.0;

/// Token gauge floor used by the detailed usage modal.
pub const MODAL_GAUGE_FLOOR: f64 = 50_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiModelDto {
    pub model_name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub max_tokens: u64,
    #[serde(default)]
    pub is_default: bool,
}

impl OpenAiModelDto {
    /// Text for the model `<option>`: display name plus description when present.
    pub fn option_label(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!("{} - {}", self.display_name, description)
            }
            _ => self.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiModelsDto {
    #[serde(default)]
    pub success: bool,
    pub current_model: String,
    #[serde(default)]
    pub available_models: Vec<OpenAiModelDto>,
    #[serde(default)]
    pub total_count: u64,
}

impl OpenAiModelsDto {
    /// Marks `model_name` as active, keeping the list of available models.
    /// An empty name leaves the current model unchanged.
    pub fn set_current_model(&mut self, model_name: &str) {
        if !model_name.is_empty() {
            self.current_model = model_name.to_string();
        }
    }

    pub fn find(&self, model_name: &str) -> Option<&OpenAiModelDto> {
        self.available_models
            .iter()
            .find(|model| model.model_name == model_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeModelDto {
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatsDto {
    pub model_name: String,
    pub usage_count: u64,
    pub avg_score: f64,
    pub avg_tokens: f64,
    pub avg_processing_time: f64,
    pub total_tokens: u64,
    pub first_used: String,
    pub last_used: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallStatsDto {
    pub total_evaluations: u64,
    pub total_tokens_used: u64,
    pub unique_models_used: u64,
}

impl OverallStatsDto {
    pub fn average_tokens_per_evaluation(&self) -> u64 {
        if self.total_evaluations == 0 {
            return 0;
        }
        (self.total_tokens_used as f64 / self.total_evaluations as f64).round() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStatsDto {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub overall_stats: OverallStatsDto,
    #[serde(default)]
    pub model_stats: Vec<ModelStatsDto>,
}

/// Capacity the token gauge is drawn against: 20% headroom over usage, never below `floor`.
pub fn token_gauge_capacity(used: u64, floor: f64) -> f64 {
    floor.max(used as f64 * 1.2)
}

/// Filled share of the gauge, clamped to `0.0..=1.0`.
pub fn gauge_fraction(used: u64, capacity: f64) -> f64 {
    if capacity <= 0.0 {
        return 0.0;
    }
    (used as f64 / capacity).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_tokens_handles_no_evaluations() {
        let stats = OverallStatsDto::default();
        assert_eq!(stats.average_tokens_per_evaluation(), 0);

        let stats = OverallStatsDto {
            total_evaluations: 3,
            total_tokens_used: 10_000,
            unique_models_used: 1,
        };
        assert_eq!(stats.average_tokens_per_evaluation(), 3_333);
    }

    #[test]
    fn gauge_capacity_uses_floor_until_usage_grows() {
        assert_eq!(token_gauge_capacity(10_000, PANEL_GAUGE_FLOOR), 100_000.0);
        assert_eq!(token_gauge_capacity(100_000, PANEL_GAUGE_FLOOR), 120_000.0);
        assert_eq!(token_gauge_capacity(10_000, MODAL_GAUGE_FLOOR), 50_000.0);
    }

    #[test]
    fn gauge_fraction_is_clamped() {
        assert_eq!(gauge_fraction(50_000, 100_000.0), 0.5);
        assert_eq!(gauge_fraction(5, 0.0), 0.0);
        assert_eq!(gauge_fraction(200, 100.0), 1.0);
    }

    #[test]
    fn models_response_resolves_current_model() {
        let body = r#"{
            "success": true,
            "current_model": "gpt-4o-mini",
            "available_models": [
                {"model_name": "gpt-4o", "display_name": "GPT-4o", "max_tokens": 128000, "is_default": false},
                {"model_name": "gpt-4o-mini", "display_name": "GPT-4o mini", "description": "fast", "max_tokens": 128000, "is_default": true}
            ],
            "total_count": 2
        }"#;
        let models: OpenAiModelsDto = serde_json::from_str(body).unwrap();
        let current = models.find(&models.current_model).unwrap();
        assert_eq!(current.option_label(), "GPT-4o mini - fast");
        assert_eq!(models.find("gpt-4o").unwrap().option_label(), "GPT-4o");
        assert!(models.find("o3").is_none());
    }

    #[test]
    fn current_model_only_response_keeps_available_models() {
        let body = r#"{
            "success": true,
            "current_model": "gpt-4o-mini",
            "available_models": [
                {"model_name": "gpt-4o", "display_name": "GPT-4o", "max_tokens": 128000, "is_default": false},
                {"model_name": "gpt-4o-mini", "display_name": "GPT-4o mini", "max_tokens": 128000, "is_default": true}
            ],
            "total_count": 2
        }"#;
        let mut models: OpenAiModelsDto = serde_json::from_str(body).unwrap();
        let read_back: OpenAiModelsDto =
            serde_json::from_str(r#"{"success": true, "current_model": "gpt-4o"}"#).unwrap();
        assert!(read_back.available_models.is_empty());

        models.set_current_model(&read_back.current_model);
        assert_eq!(models.current_model, "gpt-4o");
        assert_eq!(models.available_models.len(), 2);
        assert_eq!(models.total_count, 2);

        models.set_current_model("");
        assert_eq!(models.current_model, "gpt-4o");
    }
}
