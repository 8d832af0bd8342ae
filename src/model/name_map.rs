use std::collections::{HashMap, HashSet};

use crate::identifier::generator::IdentifierGenerator;

use super::page_object::PageObject;

// ============================================================================
// Name generator — stable class/method names for code emission
// ============================================================================

/// Deterministic mapping from model ids to emitted source names.
///
/// Built once per generation run. Class names come from the identifier
/// generator (screen names, UpperCamelCase, collision-disambiguated);
/// method names describe the transition (`moveTo<Dest>` for navigation,
/// `do<Self>` for self-returning methods) with a numeric suffix on
/// collisions within a page.
#[derive(Debug, Default)]
pub struct NameGenerator {
    class_names: HashMap<String, String>,
    method_names: HashMap<String, String>,
}

impl NameGenerator {
    pub fn from_page_objects(page_objects: &[PageObject]) -> Self {
        let mut id_generator = IdentifierGenerator::new();
        let mut class_names = HashMap::new();
        for page in page_objects {
            class_names.insert(page.id.clone(), id_generator.screen_class_name(&page.id));
        }

        let mut method_names = HashMap::new();
        for page in page_objects {
            let mut used: HashSet<String> = HashSet::new();
            for method in &page.methods {
                let base = if method.return_page_object_id == page.id {
                    format!("do{}", lookup(&class_names, &page.id))
                } else {
                    format!(
                        "moveTo{}",
                        lookup(&class_names, &method.return_page_object_id)
                    )
                };

                let mut name = base.clone();
                let mut suffix = 2;
                while used.contains(&name) {
                    name = format!("{}{}", base, suffix);
                    suffix += 1;
                }
                used.insert(name.clone());
                method_names.insert(method.id.clone(), name);
            }
        }

        Self {
            class_names,
            method_names,
        }
    }

    /// Class name for a page object id; falls back to the raw id when the
    /// page was never registered.
    pub fn class_name<'a>(&'a self, page_object_id: &'a str) -> &'a str {
        self.class_names
            .get(page_object_id)
            .map(String::as_str)
            .unwrap_or(page_object_id)
    }

    /// Method name for a method id.
    pub fn method_name<'a>(&'a self, method_id: &'a str) -> &'a str {
        self.method_names
            .get(method_id)
            .map(String::as_str)
            .unwrap_or(method_id)
    }
}

fn lookup<'a>(class_names: &'a HashMap<String, String>, id: &'a str) -> &'a str {
    class_names.get(id).map(String::as_str).unwrap_or(id)
}
