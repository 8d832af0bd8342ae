use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::trace::sequence_builder::SKIPPED_OPERATIONS;
use crate::trace::source_model::{ElementInfo, ElementLocator};

// ============================================================================
// Page object model — per-screen classes with per-transition methods
// ============================================================================

/// Classification of a UI element, driving both the operation filter and
/// the shape of the generated accessor/setter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    Button,
    RadioButton,
    CheckBox,
    SelectBox,
    Link,
    Other,
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Other
    }
}

/// Extra click-eligible element matcher, configurable per project.
///
/// An element matches when its tag name equals `tagname`
/// (case-insensitive) and, if given, the named attribute has the expected
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDefinition {
    pub tagname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributeCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCondition {
    pub name: String,
    pub value: String,
}

/// Classify a captured element into an `ElementType`.
pub fn classify_element(info: &ElementInfo, button_definitions: &[ButtonDefinition]) -> ElementType {
    let tag = info.tagname.to_ascii_lowercase();
    let input_type = info.attribute("type").to_ascii_lowercase();

    match tag.as_str() {
        "input" => match input_type.as_str() {
            "radio" => ElementType::RadioButton,
            "checkbox" => ElementType::CheckBox,
            "button" | "submit" | "reset" | "image" => ElementType::Button,
            _ => ElementType::Other,
        },
        "button" => ElementType::Button,
        "select" => ElementType::SelectBox,
        "a" => ElementType::Link,
        _ if matches_button_definition(info, &tag, button_definitions) => ElementType::Button,
        _ => ElementType::Other,
    }
}

fn matches_button_definition(
    info: &ElementInfo,
    tag: &str,
    definitions: &[ButtonDefinition],
) -> bool {
    definitions.iter().any(|definition| {
        definition.tagname.to_ascii_lowercase() == tag
            && definition
                .attribute
                .as_ref()
                .is_none_or(|attr| info.attribute(&attr.name) == attr.value)
    })
}

// ============================================================================
// Operations and methods
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    Change,
    Click,
    SwitchWindow,
    SkippedOperations,
    Other,
}

impl OperationType {
    /// Map a capture-side type string onto the engine's classification.
    pub fn from_capture(operation_type: &str) -> Self {
        match operation_type {
            "change" => OperationType::Change,
            "click" => OperationType::Click,
            "switch_window" => OperationType::SwitchWindow,
            SKIPPED_OPERATIONS => OperationType::SkippedOperations,
            _ => OperationType::Other,
        }
    }
}

/// Element as referenced from generated code. Identity is `identifier`;
/// two elements with the same identifier but different xpaths have been
/// disambiguated by the identifier generator before this model is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageObjectElement {
    pub identifier: String,
    pub element_type: ElementType,
    pub name: String,
    pub xpath: String,
    pub locators: Vec<ElementLocator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageObjectOperation {
    pub target: PageObjectElement,
    pub operation_type: OperationType,
    pub input: String,
}

/// One generated method: the operations recorded on a screen before the
/// trace moved on, plus the page the application ended up on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageObjectMethod {
    pub id: String,
    pub page_object_id: String,
    pub operations: Vec<PageObjectOperation>,
    pub return_page_object_id: String,
}

impl PageObjectMethod {
    /// Whether this method performs everything `other` performs.
    pub fn includes(&self, other: &PageObjectMethod) -> bool {
        operations_include(&self.operations, &other.operations)
    }

    /// Element identifiers this method changes, in first-change order.
    pub fn change_targets(&self) -> Vec<String> {
        let mut targets = Vec::new();
        for operation in &self.operations {
            if operation.operation_type == OperationType::Change
                && !targets.contains(&operation.target.identifier)
            {
                targets.push(operation.target.identifier.clone());
            }
        }
        targets
    }
}

/// Containment relation over operation lists: every operation in `b` has
/// a counterpart in `a` with the same target identifier and type.
///
/// Inputs are deliberately not compared: a later method that repeats the
/// same interactions with different values is exactly what the variation
/// collection is looking for.
pub fn operations_include(a: &[PageObjectOperation], b: &[PageObjectOperation]) -> bool {
    b.iter().all(|needle| {
        a.iter().any(|op| {
            op.target.identifier == needle.target.identifier
                && op.operation_type == needle.operation_type
        })
    })
}

// ============================================================================
// Page objects and input variations
// ============================================================================

/// One named argument of a generated method call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodArgument {
    pub name: String,
    pub value: String,
}

/// One generated class per distinct screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageObject {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub methods: Vec<PageObjectMethod>,
}

impl PageObject {
    /// Collect input-value variations per method.
    ///
    /// Each method is compared against every later method of the page; a
    /// later method included by the earlier one contributes its change
    /// inputs as a new variation, with elements it does not touch
    /// defaulting to the empty string. The base variation (the method's
    /// own inputs) always comes first; identical variations are not
    /// duplicated. Methods without change operations get no entry.
    pub fn collect_method_input_variations(&self) -> HashMap<String, Vec<Vec<MethodArgument>>> {
        let mut variations_by_method = HashMap::new();

        for (i, method) in self.methods.iter().enumerate() {
            let targets = method.change_targets();
            if targets.is_empty() {
                continue;
            }

            let mut variations = vec![arguments_for(&targets, &change_inputs(method))];

            for later in &self.methods[i + 1..] {
                if !method.includes(later) {
                    continue;
                }
                let variation = arguments_for(&targets, &change_inputs(later));
                if !variations.contains(&variation) {
                    variations.push(variation);
                }
            }

            variations_by_method.insert(method.id.clone(), variations);
        }

        variations_by_method
    }
}

/// Last-wins map of element identifier to changed input value.
fn change_inputs(method: &PageObjectMethod) -> HashMap<String, String> {
    let mut inputs = HashMap::new();
    for operation in &method.operations {
        if operation.operation_type == OperationType::Change {
            inputs.insert(operation.target.identifier.clone(), operation.input.clone());
        }
    }
    inputs
}

fn arguments_for(targets: &[String], inputs: &HashMap<String, String>) -> Vec<MethodArgument> {
    targets
        .iter()
        .map(|target| MethodArgument {
            name: target.clone(),
            value: inputs.get(target).cloned().unwrap_or_default(),
        })
        .collect()
}
