use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Operation trace input contract (produced by the capture client)
// ============================================================================

/// One way to look an element up at runtime, e.g. `{ "id": "email" }` or
/// `{ "xpath": "//input[1]" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementLocator {
    /// Locator strategy: `id`, `name`, `css`, `xpath`, ...
    #[serde(rename = "type")]
    pub locator_type: String,

    /// Strategy-specific lookup value
    pub value: String,
}

/// DOM element snapshot attached to a recorded operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ElementInfo {
    /// Tag name as captured (`INPUT`, `BUTTON`, ...)
    pub tagname: String,

    /// Absolute xpath of the element at capture time
    pub xpath: String,

    /// Visible text, when any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Raw attribute map (`id`, `name`, `value`, `type`, ...)
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Alternative lookup strategies for the element, preferred order
    #[serde(default)]
    pub locators: Vec<ElementLocator>,
}

impl ElementInfo {
    pub fn attribute(&self, name: &str) -> &str {
        self.attributes.get(name).map(String::as_str).unwrap_or("")
    }
}

/// One recorded UI action from the capture client.
///
/// `operation_type` is the capture-side string (`change`, `click`,
/// `switch_window`, `pause_capturing`, ...); classification into the
/// engine's operation types happens when the page-object model is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceOperation {
    /// Raw screen label assigned by the capture client (typically the
    /// page title)
    #[serde(rename = "screenDef")]
    pub screen_def: String,

    #[serde(rename = "type")]
    pub operation_type: String,

    #[serde(rename = "elementInfo")]
    pub element_info: Option<ElementInfo>,

    pub url: String,

    #[serde(default)]
    pub input: String,

    /// Reference screenshot captured with the operation
    #[serde(rename = "imageFilePath", default)]
    pub image_file_path: String,
}
