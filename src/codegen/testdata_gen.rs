use crate::model::name_map::NameGenerator;
use crate::testdata::repository::TestDataSet;

use super::source_builder::{SourceBuilder, escape_js_string};

// ============================================================================
// Test data module generator
// ============================================================================

/// Generate one test-data module from the given data sets.
///
/// Each set becomes one exported const array; each variation becomes one
/// object keyed by `<PageClass>_<methodName>` mapping to that call's
/// argument object. A set with zero variations still emits one
/// empty-object entry so the data-driven suite's `forEach` runs once.
pub fn generate_test_data(data_sets: &[TestDataSet], names: &NameGenerator) -> String {
    let mut source = SourceBuilder::new();

    let set_count = data_sets.len();
    for (i, data_set) in data_sets.iter().enumerate() {
        if data_set.variations.is_empty() {
            source.line(&format!("export const {} = [{{}}];", data_set.name));
        } else {
            source.line(&format!("export const {} = [", data_set.name));
            source.indent();
            for variation in &data_set.variations {
                source.line("{");
                source.indent();
                for test_data in &variation.method_call_test_datas {
                    let fields: Vec<String> = test_data
                        .method_arguments
                        .iter()
                        .map(|argument| {
                            format!("{}: '{}'", argument.name, escape_js_string(&argument.value))
                        })
                        .collect();
                    source.line(&format!(
                        "{}_{}: {{ {} }},",
                        names.class_name(&test_data.page_object_id),
                        names.method_name(&test_data.method_id),
                        fields.join(", ")
                    ));
                }
                source.dedent();
                source.line("},");
            }
            source.dedent();
            source.line("];");
        }
        if i + 1 < set_count {
            source.blank();
        }
    }

    source.build()
}
