use serde::{Deserialize, Serialize};

// ============================================================================
// Scenario model — method calls grouped into cases and suites
// ============================================================================

/// One edge of a test scenario: call a method on a page and land on the
/// page it returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method_id: String,
    pub page_object_id: String,
    pub return_page_object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An ordered method-call scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub method_calls: Vec<MethodCall>,
}

/// Named group of test cases sharing a top page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    pub name: String,
    pub top_page_url: String,
    pub test_cases: Vec<TestCase>,
}
