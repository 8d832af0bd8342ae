use crate::model::name_map::NameGenerator;
use crate::model::page_object::{
    ElementType, OperationType, PageObject, PageObjectElement, PageObjectMethod,
    PageObjectOperation,
};

use super::source_builder::{SourceBuilder, escape_js_string, escape_js_template};

// ============================================================================
// Page object code generator — one class per screen
// ============================================================================

/// Comment emitted in place of operations the generator cannot express.
pub const MANUAL_OPERATION_COMMENT: &str =
    "// Please insert the code for the operations skipped during capture.";

/// Generated source plus the flag the caller surfaces as a user-facing
/// warning when a manual-completion placeholder had to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub content: String,
    pub invalid_operation_type_exists: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PageObjectGenerator<'a> {
    pub names: &'a NameGenerator,
    /// Async (`await`) code shape when true, synchronous call chains when
    /// false; the operation-to-code mapping is identical either way.
    pub asynchronous: bool,
    pub use_multi_locator: bool,
}

impl PageObjectGenerator<'_> {
    pub fn generate(&self, page: &PageObject) -> GeneratedSource {
        let class_name = self.names.class_name(&page.id);
        let mut invalid_operation_type_exists = false;
        let mut source = SourceBuilder::new();

        let imports = self.collect_imports(page, class_name);
        for import in &imports {
            source.line(&format!("import {import} from './{import}.page';"));
        }
        if !imports.is_empty() {
            source.blank();
        }

        source.line("/**");
        if let Some(comment) = &page.comment {
            source.line(&format!(" * {}", comment));
        }
        source.line(&format!(" * {}", page.url));
        source.line(" */");
        source.line(&format!("export default class {} {{", class_name));
        source.indent();

        for element in collect_distinct_elements(page) {
            self.emit_accessor(&mut source, &element);
            source.blank();
        }

        let method_count = page.methods.len();
        for (i, method) in page.methods.iter().enumerate() {
            let signature = self.method_signature(self.names.method_name(&method.id), method);
            source.line(&signature);
            source.indent();
            if self.emit_operations(&mut source, &method.operations) {
                invalid_operation_type_exists = true;
            }
            source.line(&format!(
                "return new {}();",
                self.names.class_name(&method.return_page_object_id)
            ));
            source.dedent();
            source.line("}");
            if i + 1 < method_count {
                source.blank();
            }
        }

        source.dedent();
        source.line("}");

        GeneratedSource {
            content: source.build(),
            invalid_operation_type_exists,
        }
    }

    fn collect_imports(&self, page: &PageObject, class_name: &str) -> Vec<String> {
        let mut imports = Vec::new();
        for method in &page.methods {
            let return_class = self.names.class_name(&method.return_page_object_id);
            if return_class != class_name && !imports.iter().any(|i| i == return_class) {
                imports.push(return_class.to_string());
            }
        }
        imports
    }

    fn method_signature(&self, name: &str, method: &PageObjectMethod) -> String {
        let targets = method.change_targets();
        let parameters = if targets.is_empty() {
            "()".to_string()
        } else {
            format!("({{ {} }})", targets.join(", "))
        };
        if self.asynchronous {
            format!("async {}{} {{", name, parameters)
        } else {
            format!("{}{} {{", name, parameters)
        }
    }

    /// Emit one accessor per distinct element, switching frames to the
    /// top level first. Radio buttons get a value-parameterized accessor
    /// so the generated setter can pick the concrete radio by value.
    fn emit_accessor(&self, source: &mut SourceBuilder, element: &PageObjectElement) {
        if element.element_type == ElementType::RadioButton {
            source.line(&format!("{}(value) {{", element.identifier));
            source.indent();
            source.line("browser.switchToFrame(null);");
            source.line(&format!(
                "return $(`//input[@name='{}' and @value='${{value}}']`);",
                escape_js_template(&element.name)
            ));
            source.dedent();
            source.line("}");
            return;
        }

        source.line(&format!("get {}() {{", element.identifier));
        source.indent();
        source.line("browser.switchToFrame(null);");
        if self.use_multi_locator {
            source.line(&format!(
                "return findElementMulti([{}]);",
                multi_locator_entries(element)
            ));
        } else {
            source.line(&format!("return $('{}');", single_selector(element)));
        }
        source.dedent();
        source.line("}");
    }

    /// Render operations into statements. Returns whether a
    /// manual-completion placeholder had to be emitted.
    fn emit_operations(
        &self,
        source: &mut SourceBuilder,
        operations: &[PageObjectOperation],
    ) -> bool {
        let await_prefix = if self.asynchronous { "await " } else { "" };
        let mut placeholder_emitted = false;

        for operation in operations {
            let identifier = &operation.target.identifier;
            match operation.operation_type {
                OperationType::Change => match operation.target.element_type {
                    ElementType::SelectBox => source.line(&format!(
                        "{}this.{}.selectByAttribute('value', {});",
                        await_prefix, identifier, identifier
                    )),
                    ElementType::RadioButton => source.line(&format!(
                        "{}this.{}({}).click();",
                        await_prefix, identifier, identifier
                    )),
                    ElementType::CheckBox => {
                        source.line(&format!("{}this.{}.click();", await_prefix, identifier))
                    }
                    _ => source.line(&format!(
                        "{}this.{}.setValue({});",
                        await_prefix, identifier, identifier
                    )),
                },
                OperationType::Click => {
                    source.line(&format!("{}this.{}.click();", await_prefix, identifier))
                }
                OperationType::SwitchWindow => source.line(&format!(
                    "{}browser.switchWindow('{}');",
                    await_prefix,
                    escape_js_string(&operation.input)
                )),
                OperationType::SkippedOperations | OperationType::Other => {
                    placeholder_emitted = true;
                    source.line(MANUAL_OPERATION_COMMENT)
                }
            };
        }

        placeholder_emitted
    }
}

/// Distinct elements referenced by the page's methods, in first-use
/// order. Window switches and skipped markers carry no element.
fn collect_distinct_elements(page: &PageObject) -> Vec<PageObjectElement> {
    let mut elements: Vec<PageObjectElement> = Vec::new();
    for method in &page.methods {
        for operation in &method.operations {
            if matches!(
                operation.operation_type,
                OperationType::SwitchWindow | OperationType::SkippedOperations
            ) || operation.target.identifier.is_empty()
            {
                continue;
            }
            if !elements
                .iter()
                .any(|e| e.identifier == operation.target.identifier)
            {
                elements.push(operation.target.clone());
            }
        }
    }
    elements
}

/// Selector for single-locator mode: the first captured locator, falling
/// back to the xpath.
fn single_selector(element: &PageObjectElement) -> String {
    match element.locators.first() {
        Some(locator) => match locator.locator_type.as_str() {
            "id" => format!("#{}", escape_js_string(&locator.value)),
            "name" => format!("[name=\"{}\"]", escape_js_string(&locator.value)),
            _ => escape_js_string(&locator.value),
        },
        None => escape_js_string(&element.xpath),
    }
}

/// `findElementMulti` entries for multi-locator mode.
fn multi_locator_entries(element: &PageObjectElement) -> String {
    if element.locators.is_empty() {
        return format!("{{ xpath: '{}' }}", escape_js_string(&element.xpath));
    }
    element
        .locators
        .iter()
        .map(|locator| {
            format!(
                "{{ {}: '{}' }}",
                locator.locator_type,
                escape_js_string(&locator.value)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
