use crate::model::name_map::NameGenerator;
use crate::model::suite::{TestCase, TestSuite};
use crate::testdata::repository::TestDataSet;

use super::source_builder::{SourceBuilder, escape_js_string};

// ============================================================================
// Test suite code generators — plain and data-driven
// ============================================================================

/// Generate a plain (non data-driven) suite: one `describe` per suite,
/// one `it` per test case, arguments taken from the case's data set's
/// first variation.
///
/// `data_sets` is aligned with `suite.test_cases` by index.
pub fn generate_test_suite(
    suite: &TestSuite,
    data_sets: &[TestDataSet],
    names: &NameGenerator,
    asynchronous: bool,
) -> String {
    let mut source = SourceBuilder::new();
    emit_imports(&mut source, suite, names, None);

    source.line(&format!("describe('{}', () => {{", escape_js_string(&suite.name)));
    source.indent();
    emit_before_each(&mut source, &suite.top_page_url, asynchronous);

    let case_count = suite.test_cases.len();
    for (i, test_case) in suite.test_cases.iter().enumerate() {
        let data_set = data_sets.get(i);
        source.line(&format!(
            "it('{}', {} => {{",
            escape_js_string(&test_case.name),
            arrow_prefix(asynchronous)
        ));
        source.indent();
        emit_call_chain(&mut source, test_case, data_set, names, asynchronous);
        source.dedent();
        source.line("});");
        if i + 1 < case_count {
            source.blank();
        }
    }

    source.dedent();
    source.line("});");
    source.build()
}

/// Generate a data-driven suite: each test case body is wrapped in
/// `<dataset>.forEach((data) => it(...))`, with arguments referenced from
/// the externally generated test-data module.
pub fn generate_data_driven_test_suite(
    suite: &TestSuite,
    data_sets: &[TestDataSet],
    names: &NameGenerator,
    test_data_module: &str,
) -> String {
    let mut source = SourceBuilder::new();
    let dataset_names: Vec<&str> = data_sets.iter().map(|d| d.name.as_str()).collect();
    emit_imports(&mut source, suite, names, Some((test_data_module, &dataset_names)));

    source.line(&format!("describe('{}', () => {{", escape_js_string(&suite.name)));
    source.indent();
    emit_before_each(&mut source, &suite.top_page_url, true);

    let case_count = suite.test_cases.len();
    for (i, test_case) in suite.test_cases.iter().enumerate() {
        let Some(data_set) = data_sets.get(i) else {
            continue;
        };
        source.line(&format!(
            "describe('{}', () => {{",
            escape_js_string(&test_case.name)
        ));
        source.indent();
        source.line(&format!("{}.forEach((data) => {{", data_set.name));
        source.indent();
        source.line("it('run with the given data set', async () => {");
        source.indent();
        emit_data_driven_call_chain(&mut source, test_case, data_set, names);
        source.dedent();
        source.line("});");
        source.dedent();
        source.line("});");
        source.dedent();
        source.line("});");
        if i + 1 < case_count {
            source.blank();
        }
    }

    source.dedent();
    source.line("});");
    source.build()
}

// ============================================================================
// Shared emission helpers
// ============================================================================

fn arrow_prefix(asynchronous: bool) -> &'static str {
    if asynchronous { "async ()" } else { "()" }
}

fn emit_before_each(source: &mut SourceBuilder, top_page_url: &str, asynchronous: bool) {
    source.line(&format!(
        "beforeEach('open the top page', {} => {{",
        arrow_prefix(asynchronous)
    ));
    source.indent();
    if asynchronous {
        source.line(&format!(
            "await browser.url('{}');",
            escape_js_string(top_page_url)
        ));
    } else {
        source.line(&format!("browser.url('{}');", escape_js_string(top_page_url)));
    }
    source.dedent();
    source.line("});");
    source.blank();
}

/// Import every class a scenario chain starts from, plus the test-data
/// module for data-driven suites.
fn emit_imports(
    source: &mut SourceBuilder,
    suite: &TestSuite,
    names: &NameGenerator,
    test_data: Option<(&str, &[&str])>,
) {
    let mut classes: Vec<&str> = Vec::new();
    for test_case in &suite.test_cases {
        if let Some(first_call) = test_case.method_calls.first() {
            let class_name = names.class_name(&first_call.page_object_id);
            if !classes.contains(&class_name) {
                classes.push(class_name);
            }
        }
    }

    for class_name in &classes {
        source.line(&format!(
            "import {class_name} from '../page_objects/{class_name}.page';"
        ));
    }
    if let Some((module, dataset_names)) = test_data {
        if !dataset_names.is_empty() {
            source.line(&format!(
                "import {{ {} }} from '../test_data/{}';",
                dataset_names.join(", "),
                module
            ));
        }
    }
    if !classes.is_empty() || test_data.is_some() {
        source.blank();
    }
}

/// Emit the scenario body of a plain suite.
///
/// The synchronous shape is a single member chain; the async shape
/// re-assigns an awaited page variable per hop, since awaited calls
/// cannot be chained as one expression.
fn emit_call_chain(
    source: &mut SourceBuilder,
    test_case: &TestCase,
    data_set: Option<&TestDataSet>,
    names: &NameGenerator,
    asynchronous: bool,
) {
    let Some(first_call) = test_case.method_calls.first() else {
        return;
    };
    let top_class = names.class_name(&first_call.page_object_id);

    if asynchronous {
        source.line(&format!("let page = new {}();", top_class));
        for call in &test_case.method_calls {
            source.line(&format!(
                "page = await page.{}({});",
                names.method_name(&call.method_id),
                argument_literal(data_set, &call.page_object_id, &call.method_id)
            ));
        }
        return;
    }

    source.line(&format!("new {}()", top_class));
    source.indent();
    let call_count = test_case.method_calls.len();
    for (i, call) in test_case.method_calls.iter().enumerate() {
        let terminator = if i + 1 == call_count { ";" } else { "" };
        source.line(&format!(
            ".{}({}){}",
            names.method_name(&call.method_id),
            argument_literal(data_set, &call.page_object_id, &call.method_id),
            terminator
        ));
    }
    source.dedent();
}

fn emit_data_driven_call_chain(
    source: &mut SourceBuilder,
    test_case: &TestCase,
    data_set: &TestDataSet,
    names: &NameGenerator,
) {
    let Some(first_call) = test_case.method_calls.first() else {
        return;
    };
    source.line(&format!(
        "let page = new {}();",
        names.class_name(&first_call.page_object_id)
    ));
    for call in &test_case.method_calls {
        let argument = if has_data_for(data_set, &call.page_object_id, &call.method_id) {
            format!(
                "data.{}_{}",
                names.class_name(&call.page_object_id),
                names.method_name(&call.method_id)
            )
        } else {
            String::new()
        };
        source.line(&format!(
            "page = await page.{}({});",
            names.method_name(&call.method_id),
            argument
        ));
    }
}

/// Inline argument object for one method call, from the data set's first
/// variation; empty for methods without collected variations.
fn argument_literal(data_set: Option<&TestDataSet>, page_object_id: &str, method_id: &str) -> String {
    let Some(first_variation) = data_set.and_then(|d| d.variations.first()) else {
        return String::new();
    };
    let Some(test_data) = first_variation
        .method_call_test_datas
        .iter()
        .find(|d| d.page_object_id == page_object_id && d.method_id == method_id)
    else {
        return String::new();
    };
    if test_data.method_arguments.is_empty() {
        return String::new();
    }

    let fields: Vec<String> = test_data
        .method_arguments
        .iter()
        .map(|argument| format!("{}: '{}'", argument.name, escape_js_string(&argument.value)))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

fn has_data_for(data_set: &TestDataSet, page_object_id: &str, method_id: &str) -> bool {
    data_set.variations.iter().any(|variation| {
        variation
            .method_call_test_datas
            .iter()
            .any(|d| d.page_object_id == page_object_id && d.method_id == method_id)
    })
}
