use testscript_gen::identifier::generator::{ElementNameSource, IdentifierGenerator};

// ============================================================================
// Attribute priority
// ============================================================================

fn source<'a>(
    id: &'a str,
    name: &'a str,
    value: &'a str,
    text: &'a str,
    xpath: &'a str,
) -> ElementNameSource<'a> {
    ElementNameSource {
        id,
        name,
        value,
        text,
        xpath,
        is_radio: false,
    }
}

#[test]
fn id_attribute_takes_priority() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("userName", "ignored", "", "", "//input[1]"));
    assert_eq!(identifier, "userName");
}

#[test]
fn radio_buttons_use_name_even_when_id_exists() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&ElementNameSource {
        id: "male-option",
        name: "gender",
        value: "male",
        text: "",
        xpath: "//input[3]",
        is_radio: true,
    });
    assert_eq!(identifier, "gender");
}

#[test]
fn name_and_value_concatenate_when_id_is_missing() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("", "color", "Red", "", "//input[1]"));
    assert_eq!(identifier, "colorRed");

    let name_only = generator.element_identifier(&source("", "color", "", "", "//input[2]"));
    assert_eq!(name_only, "color");
}

#[test]
fn visible_text_is_used_before_value() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("", "", "submit1", "Sign In", "//button[1]"));
    assert_eq!(identifier, "signIn");

    let from_value = generator.element_identifier(&source("", "", "submit1", "", "//button[2]"));
    assert_eq!(from_value, "submit1");
}

#[test]
fn element_with_no_usable_attribute_yields_empty_identifier() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("", "", "", "", "//div[1]"));
    assert_eq!(identifier, "");
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn separators_become_camel_case_boundaries() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("user name/field", "", "", "", "//input[1]"));
    assert_eq!(identifier, "userNameField");
}

#[test]
fn full_width_glyphs_become_underscores() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("a？b", "", "", "", "//input[1]"));
    assert_eq!(identifier, "a_b");
}

#[test]
fn other_symbols_are_stripped() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("user(name)!", "", "", "", "//input[1]"));
    assert_eq!(identifier, "username");
}

#[test]
fn numeric_leading_identifier_gets_underscore_prefix() {
    let mut generator = IdentifierGenerator::new();
    let identifier = generator.element_identifier(&source("01", "", "", "", "//input[1]"));
    assert_eq!(identifier, "_01");
}

#[test]
fn long_identifiers_are_truncated_to_100_chars() {
    let mut generator = IdentifierGenerator::new();
    let long_id = "a".repeat(150);
    let identifier = generator.element_identifier(&source(&long_id, "", "", "", "//input[1]"));
    assert_eq!(identifier.chars().count(), 100);
}

// ============================================================================
// Collision resolution
// ============================================================================

#[test]
fn same_identifier_same_xpath_is_idempotent() {
    let mut generator = IdentifierGenerator::new();
    let first = generator.element_identifier(&source("email", "", "", "", "//input[1]"));
    let second = generator.element_identifier(&source("email", "", "", "", "//input[1]"));
    assert_eq!(first, "email");
    assert_eq!(first, second);
}

#[test]
fn same_identifier_different_xpath_appends_md5_digest() {
    let mut generator = IdentifierGenerator::new();
    let first = generator.element_identifier(&source("email", "", "", "", "//input[1]"));
    let second = generator.element_identifier(&source("email", "", "", "", "//input[2]"));
    assert_eq!(first, "email");
    let digest = format!("{:x}", md5::compute("//input[2]".as_bytes()));
    assert_eq!(second, format!("email{}", digest));
}

#[test]
fn collision_resolution_is_stable_within_a_run() {
    let mut generator = IdentifierGenerator::new();
    generator.element_identifier(&source("email", "", "", "", "//input[1]"));
    let second = generator.element_identifier(&source("email", "", "", "", "//input[2]"));
    let second_again = generator.element_identifier(&source("email", "", "", "", "//input[2]"));
    assert_eq!(second, second_again);
}

// ============================================================================
// Screen class names
// ============================================================================

#[test]
fn screen_names_become_upper_camel_case() {
    let mut generator = IdentifierGenerator::new();
    assert_eq!(generator.screen_class_name("login page"), "LoginPage");
}

#[test]
fn pure_symbol_screen_name_degrades_to_underscore() {
    let mut generator = IdentifierGenerator::new();
    assert_eq!(generator.screen_class_name("!!!"), "_");
}

#[test]
fn numeric_leading_screen_name_gets_underscore_prefix() {
    let mut generator = IdentifierGenerator::new();
    assert_eq!(generator.screen_class_name("01 page"), "_01Page");
}

#[test]
fn distinct_screen_names_normalizing_alike_are_disambiguated() {
    let mut generator = IdentifierGenerator::new();
    let first = generator.screen_class_name("home page");
    let second = generator.screen_class_name("home-page");
    assert_eq!(first, "HomePage");
    assert_ne!(first, second);
    assert!(second.starts_with("HomePage"));
}
