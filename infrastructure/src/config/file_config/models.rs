//! Per-model overrides from TOML (`[models.<id>]` sections)

use jargon_domain::{
    ConfigIssue, ConfigIssueCode, ModelCatalog, ModelId, ModelSpec,
};
use serde::{Deserialize, Serialize};

/// Overrides for one model; unset fields keep the built-in value
///
/// # Example
///
/// ```toml
/// [models.grok]
/// display_name = "Grok 3"
/// model = "xai/grok-3-mini"
/// endpoint = "https://models.github.ai/inference"
/// max_tokens = 800
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelOverride {
    pub display_name: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub max_tokens: Option<u32>,
}

/// Model configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub gpt: FileModelOverride,
    pub mistral: FileModelOverride,
    pub grok: FileModelOverride,
}

impl FileModelsConfig {
    fn override_for(&self, id: ModelId) -> &FileModelOverride {
        match id {
            ModelId::Gpt => &self.gpt,
            ModelId::Mistral => &self.mistral,
            ModelId::Grok => &self.grok,
        }
    }

    /// Apply one override to the built-in spec, collecting issues for bad values.
    fn build_spec(id: ModelId, file: &FileModelOverride) -> (ModelSpec, Vec<ConfigIssue>) {
        let mut spec = ModelSpec::default_for(id);
        let mut issues = Vec::new();

        for (field, value, target) in [
            ("display_name", &file.display_name, &mut spec.display_name),
            ("model", &file.model, &mut spec.model),
        ] {
            match value {
                Some(s) if s.trim().is_empty() => issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: format!("models.{}.{}", id, field),
                    },
                    format!("models.{}.{}: cannot be empty", id, field),
                )),
                Some(s) => *target = s.trim().to_string(),
                None => {}
            }
        }

        if let Some(endpoint) = &file.endpoint {
            let endpoint = endpoint.trim();
            if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
                spec.endpoint = endpoint.to_string();
            } else {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidEndpoint {
                        field: format!("models.{}.endpoint", id),
                        value: endpoint.to_string(),
                    },
                    format!(
                        "models.{}.endpoint: '{}' is not an http(s) URL",
                        id, endpoint
                    ),
                ));
            }
        }

        if file.max_tokens.is_some() {
            spec.max_tokens = file.max_tokens;
        }

        (spec, issues)
    }

    /// Build the model catalog, collecting issues.
    pub fn to_catalog(&self) -> (ModelCatalog, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let specs: Vec<ModelSpec> = ModelId::ALL
            .iter()
            .map(|id| {
                let (spec, spec_issues) = Self::build_spec(*id, self.override_for(*id));
                issues.extend(spec_issues);
                spec
            })
            .collect();

        // ALL is non-empty, so this cannot fail
        let catalog = ModelCatalog::new(specs).unwrap_or_default();
        (catalog, issues)
    }
}
