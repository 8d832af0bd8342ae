use serde::{Deserialize, Serialize};

use super::source_model::SourceOperation;

// ============================================================================
// Screen naming strategy — title/url unit plus user-supplied definitions
// ============================================================================

/// Which recorded field identifies a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScreenDefUnit {
    #[default]
    Title,
    Url,
}

/// How a definition condition compares its word against the target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Contains,
    Equals,
}

/// One condition of a screen definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionCondition {
    pub match_type: MatchType,
    pub word: String,
    /// Field the condition inspects: the captured title or the URL
    pub target: ScreenDefUnit,
}

/// User-supplied screen definition: a fixed screen name assigned to every
/// operation matching all of its conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDefinition {
    pub screen_name: String,
    #[serde(default)]
    pub conditions: Vec<DefinitionCondition>,
}

/// Screen-naming configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub unit: ScreenDefUnit,
    #[serde(default)]
    pub definitions: Vec<ScreenDefinition>,
}

/// Resolve the effective screen name for an operation.
///
/// The first definition whose conditions all match wins; a definition
/// without conditions never matches. Otherwise the configured unit picks
/// the captured title or the URL.
pub fn screen_name_for(operation: &SourceOperation, view: &ViewConfig) -> String {
    for definition in &view.definitions {
        if !definition.conditions.is_empty()
            && definition
                .conditions
                .iter()
                .all(|c| condition_matches(c, operation))
        {
            return definition.screen_name.clone();
        }
    }

    match view.unit {
        ScreenDefUnit::Title => operation.screen_def.clone(),
        ScreenDefUnit::Url => operation.url.clone(),
    }
}

fn condition_matches(condition: &DefinitionCondition, operation: &SourceOperation) -> bool {
    let target = match condition.target {
        ScreenDefUnit::Title => operation.screen_def.as_str(),
        ScreenDefUnit::Url => operation.url.as_str(),
    };
    match condition.match_type {
        MatchType::Contains => target.contains(&condition.word),
        MatchType::Equals => target == condition.word,
    }
}
