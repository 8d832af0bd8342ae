use crate::model::suite::MethodCall;

use super::repository::{
    MethodCallTestData, ScenarioArguments, TestDataRepository, TestDataSet, TestDataVariation,
};

// ============================================================================
// Combination selection — bounded, index-aligned data sets
// ============================================================================

/// Produces bounded combinations of method argument variations.
///
/// Combinations pair variations positionally: combination `k` takes
/// variation `k % len` from each method, wrapping short lists and
/// truncating at the bound. This is deliberately not a Cartesian product,
/// to keep the output size linear in the longest variation list.
#[derive(Debug, Clone, Copy)]
pub struct CombinationGenerator {
    max_count: usize,
}

impl CombinationGenerator {
    /// `max_count` of zero means no explicit bound.
    pub fn new(max_count: usize) -> Self {
        Self { max_count }
    }

    pub fn generate(&self, scenario_arguments: &[ScenarioArguments]) -> Vec<TestDataVariation> {
        let longest = scenario_arguments
            .iter()
            .map(|args| args.test_data_variations.len())
            .max()
            .unwrap_or(0);
        let count = if self.max_count == 0 {
            longest
        } else {
            longest.min(self.max_count)
        };

        (0..count)
            .map(|index| TestDataVariation {
                method_call_test_datas: scenario_arguments
                    .iter()
                    .map(|args| MethodCallTestData {
                        page_object_id: args.method_call.page_object_id.clone(),
                        method_id: args.method_call.method_id.clone(),
                        method_arguments: args.test_data_variations
                            [index % args.test_data_variations.len()]
                        .clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Assembles a named `TestDataSet` for one scenario.
#[derive(Debug)]
pub struct CombinationTestDataSelector<'a> {
    repository: &'a TestDataRepository,
    generator: CombinationGenerator,
}

impl<'a> CombinationTestDataSelector<'a> {
    pub fn new(repository: &'a TestDataRepository, generator: CombinationGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub fn select(&self, method_calls: &[MethodCall], dataset_name: &str) -> TestDataSet {
        let scenario_arguments = self.repository.collect_scenario_arguments(method_calls);
        TestDataSet {
            name: dataset_name.to_string(),
            variations: self.generator.generate(&scenario_arguments),
        }
    }
}
