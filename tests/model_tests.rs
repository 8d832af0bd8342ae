mod common;

use common::{change, click, element_info, element_info_with_type, method, page_element};
use testscript_gen::model::name_map::NameGenerator;
use testscript_gen::model::operation_filter::filter_unnecessary_operations;
use testscript_gen::model::page_object::{
    AttributeCondition, ButtonDefinition, ElementType, OperationType, PageObject,
    PageObjectOperation, classify_element, operations_include,
};

// ============================================================================
// Element classification
// ============================================================================

#[test]
fn input_elements_classify_by_type_attribute() {
    assert_eq!(
        classify_element(&element_info_with_type("input", "g", "radio", "//input[1]"), &[]),
        ElementType::RadioButton
    );
    assert_eq!(
        classify_element(&element_info_with_type("input", "c", "checkbox", "//input[2]"), &[]),
        ElementType::CheckBox
    );
    assert_eq!(
        classify_element(&element_info_with_type("input", "s", "submit", "//input[3]"), &[]),
        ElementType::Button
    );
    assert_eq!(
        classify_element(&element_info_with_type("input", "t", "text", "//input[4]"), &[]),
        ElementType::Other
    );
}

#[test]
fn tag_level_classification() {
    assert_eq!(
        classify_element(&element_info("BUTTON", "b", "//button[1]"), &[]),
        ElementType::Button
    );
    assert_eq!(
        classify_element(&element_info("select", "s", "//select[1]"), &[]),
        ElementType::SelectBox
    );
    assert_eq!(
        classify_element(&element_info("a", "l", "//a[1]"), &[]),
        ElementType::Link
    );
    assert_eq!(
        classify_element(&element_info("div", "d", "//div[1]"), &[]),
        ElementType::Other
    );
}

#[test]
fn button_definitions_extend_click_eligibility() {
    let definitions = vec![ButtonDefinition {
        tagname: "div".to_string(),
        attribute: Some(AttributeCondition {
            name: "role".to_string(),
            value: "button".to_string(),
        }),
    }];

    let mut matching = element_info("div", "d", "//div[1]");
    matching
        .attributes
        .insert("role".to_string(), "button".to_string());
    assert_eq!(classify_element(&matching, &definitions), ElementType::Button);

    let plain = element_info("div", "d2", "//div[2]");
    assert_eq!(classify_element(&plain, &definitions), ElementType::Other);
}

// ============================================================================
// Unnecessary-operation filter
// ============================================================================

#[test]
fn click_on_select_box_is_always_removed() {
    let kept = filter_unnecessary_operations(vec![click("country", ElementType::SelectBox)]);
    assert!(kept.is_empty());
}

#[test]
fn switch_window_is_never_removed() {
    let operation = PageObjectOperation {
        target: page_element("", ElementType::Other),
        operation_type: OperationType::SwitchWindow,
        input: "https://example.com/popup".to_string(),
    };
    let kept = filter_unnecessary_operations(vec![operation.clone()]);
    assert_eq!(kept, vec![operation]);
}

#[test]
fn empty_identifier_operations_are_dropped() {
    let kept = filter_unnecessary_operations(vec![PageObjectOperation {
        target: page_element("", ElementType::Button),
        operation_type: OperationType::Click,
        input: String::new(),
    }]);
    assert!(kept.is_empty());
}

#[test]
fn change_and_eligible_clicks_are_kept() {
    let operations = vec![
        change("email", "a@example.com"),
        click("submit", ElementType::Button),
        click("gender", ElementType::RadioButton),
        click("agree", ElementType::CheckBox),
        click("next", ElementType::Link),
        click("banner", ElementType::Other),
    ];
    let kept = filter_unnecessary_operations(operations);
    let identifiers: Vec<&str> = kept.iter().map(|op| op.target.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["email", "submit", "gender", "agree", "next"]);
}

// ============================================================================
// Containment relation
// ============================================================================

#[test]
fn includes_matches_on_target_and_type_not_input() {
    let larger = vec![change("email", "aaa"), click("submit", ElementType::Button)];
    let smaller = vec![change("email", "zzz")];
    assert!(operations_include(&larger, &smaller));
    assert!(!operations_include(&smaller, &larger));
}

#[test]
fn includes_fails_on_unmatched_target() {
    let larger = vec![change("email", "aaa")];
    let other = vec![change("password", "bbb")];
    assert!(!operations_include(&larger, &other));
}

// ============================================================================
// Input variations
// ============================================================================

#[test]
fn later_included_methods_contribute_variations_with_empty_defaults() {
    let page = PageObject {
        id: "Login Page".to_string(),
        url: "https://example.com/login".to_string(),
        image_url: String::new(),
        comment: None,
        methods: vec![
            method(
                "method1",
                "Login Page",
                vec![change("el1", "aaa"), change("el2", "bbb")],
                "Home",
            ),
            method("method2", "Login Page", vec![change("el1", "aaa2")], "Home"),
        ],
    };

    let variations = page.collect_method_input_variations();
    let method1 = &variations["method1"];
    assert_eq!(method1.len(), 2);

    let values: Vec<Vec<(&str, &str)>> = method1
        .iter()
        .map(|variation| {
            variation
                .iter()
                .map(|arg| (arg.name.as_str(), arg.value.as_str()))
                .collect()
        })
        .collect();
    assert_eq!(
        values,
        vec![
            vec![("el1", "aaa"), ("el2", "bbb")],
            vec![("el1", "aaa2"), ("el2", "")],
        ]
    );
}

#[test]
fn identical_variations_are_not_duplicated() {
    let page = PageObject {
        id: "Login".to_string(),
        url: String::new(),
        image_url: String::new(),
        comment: None,
        methods: vec![
            method("method1", "Login", vec![change("el1", "aaa")], "Login"),
            method("method2", "Login", vec![change("el1", "aaa")], "Login"),
        ],
    };

    let variations = page.collect_method_input_variations();
    assert_eq!(variations["method1"].len(), 1);
}

#[test]
fn methods_without_change_operations_have_no_variations() {
    let page = PageObject {
        id: "Login".to_string(),
        url: String::new(),
        image_url: String::new(),
        comment: None,
        methods: vec![method(
            "method1",
            "Login",
            vec![click("submit", ElementType::Button)],
            "Home",
        )],
    };

    assert!(page.collect_method_input_variations().is_empty());
}

// ============================================================================
// Name generation
// ============================================================================

fn login_and_home_pages() -> Vec<PageObject> {
    vec![
        PageObject {
            id: "Login Page".to_string(),
            url: String::new(),
            image_url: String::new(),
            comment: None,
            methods: vec![
                method("method1", "Login Page", vec![change("email", "a")], "Home"),
                method("method2", "Login Page", vec![change("email", "b")], "Home"),
                method("method3", "Login Page", vec![], "Login Page"),
            ],
        },
        PageObject {
            id: "Home".to_string(),
            url: String::new(),
            image_url: String::new(),
            comment: None,
            methods: vec![method("method4", "Home", vec![], "Home")],
        },
    ]
}

#[test]
fn class_names_come_from_screen_names() {
    let names = NameGenerator::from_page_objects(&login_and_home_pages());
    assert_eq!(names.class_name("Login Page"), "LoginPage");
    assert_eq!(names.class_name("Home"), "Home");
}

#[test]
fn method_names_describe_the_transition() {
    let names = NameGenerator::from_page_objects(&login_and_home_pages());
    assert_eq!(names.method_name("method1"), "moveToHome");
    assert_eq!(names.method_name("method3"), "doLoginPage");
    assert_eq!(names.method_name("method4"), "doHome");
}

#[test]
fn colliding_method_names_get_numeric_suffixes() {
    let names = NameGenerator::from_page_objects(&login_and_home_pages());
    assert_eq!(names.method_name("method1"), "moveToHome");
    assert_eq!(names.method_name("method2"), "moveToHome2");
}

#[test]
fn unknown_ids_fall_back_to_the_raw_id() {
    let names = NameGenerator::from_page_objects(&[]);
    assert_eq!(names.class_name("Somewhere"), "Somewhere");
    assert_eq!(names.method_name("method9"), "method9");
}
