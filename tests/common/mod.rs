#![allow(dead_code)]

use std::collections::HashMap;

use testscript_gen::model::page_object::{
    ElementType, OperationType, PageObjectElement, PageObjectMethod, PageObjectOperation,
};
use testscript_gen::trace::source_model::{ElementInfo, ElementLocator, SourceOperation};

// ============================================================================
// Helper builders shared across integration tests
// ============================================================================

pub fn element_info(tagname: &str, id: &str, xpath: &str) -> ElementInfo {
    let mut attributes = HashMap::new();
    if !id.is_empty() {
        attributes.insert("id".to_string(), id.to_string());
    }
    ElementInfo {
        tagname: tagname.to_string(),
        xpath: xpath.to_string(),
        text: None,
        attributes,
        locators: Vec::new(),
    }
}

pub fn element_info_with_type(tagname: &str, id: &str, input_type: &str, xpath: &str) -> ElementInfo {
    let mut info = element_info(tagname, id, xpath);
    info.attributes
        .insert("type".to_string(), input_type.to_string());
    info
}

pub fn locator(locator_type: &str, value: &str) -> ElementLocator {
    ElementLocator {
        locator_type: locator_type.to_string(),
        value: value.to_string(),
    }
}

pub fn source_operation(
    screen: &str,
    operation_type: &str,
    element: Option<ElementInfo>,
    input: &str,
) -> SourceOperation {
    SourceOperation {
        screen_def: screen.to_string(),
        operation_type: operation_type.to_string(),
        element_info: element,
        url: format!("https://example.com/{}", screen.to_lowercase().replace(' ', "-")),
        input: input.to_string(),
        image_file_path: format!("{}.png", screen.to_lowercase().replace(' ', "-")),
    }
}

pub fn change_operation(screen: &str, element_id: &str, input: &str) -> SourceOperation {
    let xpath = format!("//*[@id='{}']", element_id);
    source_operation(
        screen,
        "change",
        Some(element_info("input", element_id, &xpath)),
        input,
    )
}

pub fn click_button(screen: &str, element_id: &str) -> SourceOperation {
    let xpath = format!("//*[@id='{}']", element_id);
    source_operation(
        screen,
        "click",
        Some(element_info("button", element_id, &xpath)),
        "",
    )
}

// ============================================================================
// Page-object model builders
// ============================================================================

pub fn page_element(identifier: &str, element_type: ElementType) -> PageObjectElement {
    PageObjectElement {
        identifier: identifier.to_string(),
        element_type,
        name: identifier.to_string(),
        xpath: format!("//*[@id='{}']", identifier),
        locators: Vec::new(),
    }
}

pub fn change(identifier: &str, input: &str) -> PageObjectOperation {
    PageObjectOperation {
        target: page_element(identifier, ElementType::Other),
        operation_type: OperationType::Change,
        input: input.to_string(),
    }
}

pub fn click(identifier: &str, element_type: ElementType) -> PageObjectOperation {
    PageObjectOperation {
        target: page_element(identifier, element_type),
        operation_type: OperationType::Click,
        input: String::new(),
    }
}

pub fn method(
    id: &str,
    page_id: &str,
    operations: Vec<PageObjectOperation>,
    return_page_id: &str,
) -> PageObjectMethod {
    PageObjectMethod {
        id: id.to_string(),
        page_object_id: page_id.to_string(),
        operations,
        return_page_object_id: return_page_id.to_string(),
    }
}

pub fn screens(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
