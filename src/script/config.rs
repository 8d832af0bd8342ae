use serde::{Deserialize, Serialize};

use crate::model::page_object::ButtonDefinition;
use crate::trace::screen_def::ViewConfig;

// ============================================================================
// Generation configuration
// ============================================================================

/// Recognized options of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Async code shape plus graph-based scenario optimization when true;
    /// synchronous single-scenario scripts when false
    pub optimized: bool,

    /// Emit multi-locator element lookups instead of a single selector
    pub use_multi_locator: bool,

    pub test_data: TestDataConfig,

    /// Screen-naming strategy (title/url unit plus user definitions)
    pub view: ViewConfig,

    /// Extra click-eligible element matchers
    pub button_definitions: Vec<ButtonDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestDataConfig {
    /// Emit a data-driven suite plus test-data modules
    pub use_data_driven: bool,

    /// Upper bound on generated data combinations; zero means no explicit
    /// bound
    pub max_generation: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            optimized: true,
            use_multi_locator: false,
            test_data: TestDataConfig::default(),
            view: ViewConfig::default(),
            button_definitions: Vec::new(),
        }
    }
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            use_data_driven: false,
            max_generation: 10,
        }
    }
}
