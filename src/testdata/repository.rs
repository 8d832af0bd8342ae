use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::page_object::{MethodArgument, PageObject};
use crate::model::suite::MethodCall;

// ============================================================================
// Test data repository — per-method argument variations
// ============================================================================

/// Arguments for one method call within a data variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCallTestData {
    pub page_object_id: String,
    pub method_id: String,
    pub method_arguments: Vec<MethodArgument>,
}

/// One complete assignment of arguments across a scenario's method calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDataVariation {
    pub method_call_test_datas: Vec<MethodCallTestData>,
}

/// Named set of data variations feeding one data-driven test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDataSet {
    pub name: String,
    pub variations: Vec<TestDataVariation>,
}

/// A method call paired with its available argument-list alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioArguments {
    pub method_call: MethodCall,
    pub test_data_variations: Vec<Vec<MethodArgument>>,
}

/// Collects the input variations of every page-object method once per
/// run, keyed by `(page_object_id, method_id)`.
#[derive(Debug, Default)]
pub struct TestDataRepository {
    variations: HashMap<(String, String), Vec<Vec<MethodArgument>>>,
}

impl TestDataRepository {
    pub fn from_page_objects(page_objects: &[PageObject]) -> Self {
        let mut variations = HashMap::new();
        for page in page_objects {
            for (method_id, method_variations) in page.collect_method_input_variations() {
                variations.insert((page.id.clone(), method_id), method_variations);
            }
        }
        Self { variations }
    }

    /// Per method call, the available argument variations. Methods with
    /// zero variations are excluded entirely from combination.
    pub fn collect_scenario_arguments(&self, method_calls: &[MethodCall]) -> Vec<ScenarioArguments> {
        method_calls
            .iter()
            .filter_map(|call| {
                let key = (call.page_object_id.clone(), call.method_id.clone());
                let variations = self.variations.get(&key)?;
                if variations.is_empty() {
                    return None;
                }
                Some(ScenarioArguments {
                    method_call: call.clone(),
                    test_data_variations: variations.clone(),
                })
            })
            .collect()
    }
}
