use crate::codegen::page_object_gen::PageObjectGenerator;
use crate::codegen::suite_gen::{generate_data_driven_test_suite, generate_test_suite};
use crate::codegen::testdata_gen::generate_test_data;
use crate::diagram::mermaid::render_diagram;
use crate::graph::path_builder::build_paths;
use crate::graph::transition_graph::ScreenTransition;
use crate::identifier::generator::{ElementNameSource, IdentifierGenerator};
use crate::model::name_map::NameGenerator;
use crate::model::operation_filter::filter_unnecessary_operations;
use crate::model::page_object::{
    ElementType, OperationType, PageObject, PageObjectElement, PageObjectMethod,
    PageObjectOperation, classify_element,
};
use crate::model::suite::{MethodCall, TestCase, TestSuite};
use crate::testdata::combination::{CombinationGenerator, CombinationTestDataSelector};
use crate::testdata::repository::{TestDataRepository, TestDataSet};
use crate::trace::sequence_builder::{SequenceSegment, build_sequences};
use crate::trace::source_model::SourceOperation;

use super::config::GenerateConfig;
use super::error::GenerateError;

// ============================================================================
// Test script generation — the full pipeline
// ============================================================================

/// One emitted source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}

/// Everything one generation run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTestScripts {
    pub page_objects: Vec<GeneratedFile>,
    pub test_suites: Vec<GeneratedFile>,
    pub test_data: Vec<GeneratedFile>,
    pub diagram: String,

    /// At least one operation had to be rendered as a manual-completion
    /// placeholder; callers surface this as a user-facing warning.
    pub invalid_operation_type_exists: bool,
}

/// Generate test scripts from one or more operation traces.
///
/// Each call is one generation run: identifier state, graphs, and models
/// are constructed fresh and never shared, so independent runs may
/// execute concurrently with no coordination.
pub fn generate_test_scripts(
    test_results: &[Vec<SourceOperation>],
    config: &GenerateConfig,
) -> Result<GeneratedTestScripts, GenerateError> {
    let sequences: Vec<Vec<SequenceSegment>> = test_results
        .iter()
        .map(|operations| build_sequences(operations, &config.view))
        .filter(|segments| !segments.is_empty())
        .collect();

    let (pages, transitions) = build_page_objects(&sequences, config);
    let names = NameGenerator::from_page_objects(&pages);

    let test_cases = if config.optimized {
        build_graph_test_cases(&sequences, &pages, &names)?
    } else {
        build_sequence_test_cases(&sequences, &pages, &names)?
    };

    let top_page_url = sequences
        .first()
        .and_then(|segments| segments.first())
        .map(|segment| segment.url.clone())
        .unwrap_or_default();

    Ok(assemble_scripts(
        pages,
        transitions,
        test_cases,
        names,
        top_page_url,
        config,
    ))
}

// ============================================================================
// Page object construction
// ============================================================================

/// Build one page object per distinct screen, one method per recorded
/// segment, plus the trigger-annotated transitions for the diagram.
fn build_page_objects(
    sequences: &[Vec<SequenceSegment>],
    config: &GenerateConfig,
) -> (Vec<PageObject>, Vec<ScreenTransition>) {
    let mut id_generator = IdentifierGenerator::new();
    let mut pages: Vec<PageObject> = Vec::new();
    let mut transitions = Vec::new();
    let mut method_counter = 0usize;

    for segments in sequences {
        for segment in segments {
            let operations = segment
                .operations
                .iter()
                .map(|operation| convert_operation(operation, config, &mut id_generator))
                .collect();
            let operations = filter_unnecessary_operations(operations);

            method_counter += 1;
            let return_page_object_id = segment
                .dest_screen_def
                .clone()
                .unwrap_or_else(|| segment.screen_def.clone());
            let method = PageObjectMethod {
                id: format!("method{}", method_counter),
                page_object_id: segment.screen_def.clone(),
                operations,
                return_page_object_id,
            };

            match pages.iter_mut().find(|page| page.id == segment.screen_def) {
                Some(page) => page.methods.push(method),
                None => pages.push(PageObject {
                    id: segment.screen_def.clone(),
                    url: segment.url.clone(),
                    image_url: segment.image_url.clone(),
                    comment: None,
                    methods: vec![method],
                }),
            }

            if let Some(dest) = &segment.dest_screen_def {
                transitions.push(ScreenTransition {
                    source_screen_name: segment.screen_def.clone(),
                    dest_screen_name: dest.clone(),
                    trigger: transition_trigger(segment),
                });
            }
        }
    }

    (pages, transitions)
}

fn convert_operation(
    operation: &SourceOperation,
    config: &GenerateConfig,
    id_generator: &mut IdentifierGenerator,
) -> PageObjectOperation {
    let target = match &operation.element_info {
        Some(info) => {
            let element_type = classify_element(info, &config.button_definitions);
            let identifier = id_generator.element_identifier(&ElementNameSource {
                id: info.attribute("id"),
                name: info.attribute("name"),
                value: info.attribute("value"),
                text: info.text.as_deref().unwrap_or(""),
                xpath: &info.xpath,
                is_radio: element_type == ElementType::RadioButton,
            });
            PageObjectElement {
                identifier,
                element_type,
                name: info.attribute("name").to_string(),
                xpath: info.xpath.clone(),
                locators: info.locators.clone(),
            }
        }
        None => PageObjectElement::default(),
    };

    PageObjectOperation {
        target,
        operation_type: OperationType::from_capture(&operation.operation_type),
        input: operation.input.clone(),
    }
}

/// Label for the diagram edge out of a segment: the visible text of the
/// last element the user touched before the screen changed.
fn transition_trigger(segment: &SequenceSegment) -> Option<String> {
    segment
        .operations
        .iter()
        .rev()
        .find_map(|operation| operation.element_info.as_ref())
        .and_then(|info| info.text.clone())
        .filter(|text| !text.trim().is_empty())
}

// ============================================================================
// Scenario construction
// ============================================================================

/// Optimized mode: enumerate and prune paths over the merged screen
/// graph, then turn each surviving path into one test case.
fn build_graph_test_cases(
    sequences: &[Vec<SequenceSegment>],
    pages: &[PageObject],
    names: &NameGenerator,
) -> Result<Vec<TestCase>, GenerateError> {
    let traces: Vec<Vec<String>> = sequences
        .iter()
        .map(|segments| {
            segments
                .iter()
                .map(|segment| segment.screen_def.clone())
                .collect()
        })
        .collect();

    let paths = build_paths(&traces);
    if paths.is_empty() {
        return Err(GenerateError::NoSection);
    }

    let mut test_cases = Vec::new();
    for path in &paths {
        let mut method_calls = Vec::new();
        for hop in path.windows(2) {
            if let Some(method) = find_transition_method(pages, &hop[0], &hop[1]) {
                method_calls.push(method_call_for(method));
            }
        }
        if !method_calls.is_empty() {
            test_cases.push(TestCase {
                name: path_name(path, names),
                method_calls,
            });
        }
    }

    if test_cases.is_empty() {
        return Err(GenerateError::NoSection);
    }
    Ok(test_cases)
}

/// Simple mode: one test case per trace, replaying the recorded segments
/// in order.
fn build_sequence_test_cases(
    sequences: &[Vec<SequenceSegment>],
    pages: &[PageObject],
    names: &NameGenerator,
) -> Result<Vec<TestCase>, GenerateError> {
    let usable_operations: usize = pages
        .iter()
        .flat_map(|page| &page.methods)
        .map(|method| method.operations.len())
        .sum();
    if usable_operations == 0 {
        return Err(GenerateError::NoOperation);
    }

    let mut methods_by_page: Vec<usize> = vec![0; pages.len()];
    let mut test_cases = Vec::new();

    for segments in sequences {
        let mut method_calls = Vec::new();
        let mut screens = Vec::new();
        for segment in segments {
            screens.push(segment.screen_def.clone());
            let Some(page_index) = pages.iter().position(|p| p.id == segment.screen_def) else {
                continue;
            };
            // Segments were appended to their page in trace order, so the
            // next unclaimed method of that page is this segment's method.
            let method_index = methods_by_page[page_index];
            methods_by_page[page_index] += 1;
            if let Some(method) = pages[page_index].methods.get(method_index) {
                method_calls.push(method_call_for(method));
            }
        }
        if !method_calls.is_empty() {
            test_cases.push(TestCase {
                name: path_name(&screens, names),
                method_calls,
            });
        }
    }

    if test_cases.is_empty() {
        return Err(GenerateError::NoOperation);
    }
    Ok(test_cases)
}

fn find_transition_method<'a>(
    pages: &'a [PageObject],
    source: &str,
    dest: &str,
) -> Option<&'a PageObjectMethod> {
    pages
        .iter()
        .find(|page| page.id == source)?
        .methods
        .iter()
        .find(|method| method.return_page_object_id == dest)
}

fn method_call_for(method: &PageObjectMethod) -> MethodCall {
    MethodCall {
        method_id: method.id.clone(),
        page_object_id: method.page_object_id.clone(),
        return_page_object_id: method.return_page_object_id.clone(),
        comment: None,
    }
}

fn path_name(path: &[String], names: &NameGenerator) -> String {
    path.iter()
        .map(|screen| names.class_name(screen))
        .collect::<Vec<_>>()
        .join(" to ")
}

// ============================================================================
// File assembly
// ============================================================================

fn assemble_scripts(
    pages: Vec<PageObject>,
    transitions: Vec<ScreenTransition>,
    test_cases: Vec<TestCase>,
    names: NameGenerator,
    top_page_url: String,
    config: &GenerateConfig,
) -> GeneratedTestScripts {
    let page_generator = PageObjectGenerator {
        names: &names,
        asynchronous: config.optimized,
        use_multi_locator: config.use_multi_locator,
    };

    let mut invalid_operation_type_exists = false;
    let mut page_objects = Vec::new();
    for page in &pages {
        let generated = page_generator.generate(page);
        invalid_operation_type_exists |= generated.invalid_operation_type_exists;
        page_objects.push(GeneratedFile {
            name: format!("{}.page.js", names.class_name(&page.id)),
            content: generated.content,
        });
    }

    let top_class = pages
        .first()
        .map(|page| names.class_name(&page.id))
        .unwrap_or("Top");
    let suite = TestSuite {
        name: format!("{}TestSuite", top_class),
        top_page_url,
        test_cases,
    };

    let repository = TestDataRepository::from_page_objects(&pages);
    let max_count = if config.test_data.use_data_driven {
        config.test_data.max_generation
    } else {
        1
    };
    let selector =
        CombinationTestDataSelector::new(&repository, CombinationGenerator::new(max_count));
    let data_sets: Vec<TestDataSet> = suite
        .test_cases
        .iter()
        .enumerate()
        .map(|(i, test_case)| {
            selector.select(&test_case.method_calls, &format!("testCase{}", i + 1))
        })
        .collect();

    let (suite_content, test_data) = if config.test_data.use_data_driven {
        (
            generate_data_driven_test_suite(&suite, &data_sets, &names, "TestData"),
            vec![GeneratedFile {
                name: "TestData.js".to_string(),
                content: generate_test_data(&data_sets, &names),
            }],
        )
    } else {
        (
            generate_test_suite(&suite, &data_sets, &names, config.optimized),
            Vec::new(),
        )
    };

    let diagram_transitions: Vec<ScreenTransition> = transitions
        .iter()
        .map(|transition| ScreenTransition {
            source_screen_name: names.class_name(&transition.source_screen_name).to_string(),
            dest_screen_name: names.class_name(&transition.dest_screen_name).to_string(),
            trigger: transition.trigger.clone(),
        })
        .collect();

    GeneratedTestScripts {
        page_objects,
        test_suites: vec![GeneratedFile {
            name: format!("{}.spec.js", suite.name),
            content: suite_content,
        }],
        test_data,
        diagram: render_diagram(&diagram_transitions, &[]),
        invalid_operation_type_exists,
    }
}
