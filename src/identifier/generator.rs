use std::collections::HashMap;

// ============================================================================
// Identifier synthesis — normalized, collision-free source identifiers
// ============================================================================

/// Marker inserted where a separator run was found, collapsed into a
/// camelCase word boundary at the end of normalization.
const WORD_BREAK: char = '\u{1f}';

/// Characters that act as word separators in raw element/screen text.
const SEPARATORS: [char; 5] = [' ', '/', '?', '-', '|'];

/// Full-width separator glyphs that map to an underscore instead of being
/// stripped with the rest of the symbol characters.
const FULL_WIDTH_UNDERSCORE: [char; 6] = ['？', '・', '〜', '｜', '＿', '→'];

/// Upper bound on generated identifier length.
const MAX_IDENTIFIER_LENGTH: usize = 100;

/// Generates legal, human-readable source identifiers from element
/// attributes or screen names.
///
/// One instance is scoped to one generation run: the collision map
/// (`identifier -> source key`) must not leak across unrelated runs, or
/// identifiers could wrongly collide or diverge between independent
/// test results.
#[derive(Debug, Default)]
pub struct IdentifierGenerator {
    /// Identifiers handed out so far, mapped to the key (xpath or raw
    /// screen name) they were generated for.
    assigned: HashMap<String, String>,
}

/// Attribute view of an element, as needed for identifier synthesis.
#[derive(Debug, Clone, Default)]
pub struct ElementNameSource<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub value: &'a str,
    pub text: &'a str,
    pub xpath: &'a str,
    pub is_radio: bool,
}

impl IdentifierGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate an identifier for a UI element.
    ///
    /// Attribute priority: radio buttons use `name`; otherwise `id`, then
    /// `name` + `value` (`name` alone when `value` is empty), then the
    /// visible text, then `value`. An element with no usable attribute at
    /// all yields an empty identifier, which the operation filter drops.
    pub fn element_identifier(&mut self, source: &ElementNameSource) -> String {
        let raw = if source.is_radio && !source.name.trim().is_empty() {
            source.name.to_string()
        } else if !source.id.trim().is_empty() {
            source.id.to_string()
        } else if !source.name.trim().is_empty() {
            if source.value.trim().is_empty() {
                source.name.to_string()
            } else {
                format!("{}{}", source.name, source.value)
            }
        } else if !source.text.trim().is_empty() {
            source.text.to_string()
        } else {
            source.value.to_string()
        };

        let identifier = lower_camel(&normalize_words(&raw));
        if identifier.is_empty() {
            return String::new();
        }

        self.resolve(guard_leading_digit(identifier), source.xpath)
    }

    /// Generate an UpperCamelCase class identifier for a screen name.
    ///
    /// A name that normalizes to nothing (pure symbols) degrades to a
    /// single underscore rather than failing.
    pub fn screen_class_name(&mut self, screen_name: &str) -> String {
        let identifier = upper_camel(&normalize_words(screen_name));
        let identifier = if identifier.is_empty() {
            "_".to_string()
        } else {
            guard_leading_digit(identifier)
        };

        self.resolve(identifier, screen_name)
    }

    /// Resolve collisions against previously assigned identifiers.
    ///
    /// The same identifier requested for the same key is idempotent; the
    /// same identifier for a different key gets the MD5 hex digest of the
    /// key appended.
    fn resolve(&mut self, identifier: String, key: &str) -> String {
        match self.assigned.get(&identifier) {
            None => {
                self.assigned.insert(identifier.clone(), key.to_string());
                identifier
            }
            Some(existing) if existing == key => identifier,
            Some(_) => {
                let digest = format!("{:x}", md5::compute(key.as_bytes()));
                let disambiguated = format!("{}{}", identifier, digest);
                self.assigned
                    .entry(disambiguated.clone())
                    .or_insert_with(|| key.to_string());
                disambiguated
            }
        }
    }
}

// ============================================================================
// Normalization pipeline
// ============================================================================

/// Normalize raw text into identifier words.
///
/// Steps, in order: trim; collapse runs of space, `/`, `?`, `-`, `|` into
/// a word break; convert full-width separator glyphs to `_`; strip all
/// other symbol characters; split at word breaks. The joined result is
/// capped at 100 characters by the camelCase joiners.
fn normalize_words(text: &str) -> Vec<String> {
    let mut marked = String::new();
    let mut previous_was_separator = false;
    for c in text.trim().chars() {
        if SEPARATORS.contains(&c) {
            if !previous_was_separator {
                marked.push(WORD_BREAK);
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
            if FULL_WIDTH_UNDERSCORE.contains(&c) {
                marked.push('_');
            } else if c.is_alphanumeric() || c == '_' {
                marked.push(c);
            }
            // All other symbol characters are stripped.
        }
    }

    marked
        .split(WORD_BREAK)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

/// Join words into camelCase: the first word keeps a lowercase lead, every
/// later word gets an uppercase lead.
fn lower_camel(words: &[String]) -> String {
    let mut joined = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            joined.extend(lead_with(word, false));
        } else {
            joined.extend(lead_with(word, true));
        }
    }
    truncate_chars(&joined, MAX_IDENTIFIER_LENGTH)
}

/// Join words into UpperCamelCase.
fn upper_camel(words: &[String]) -> String {
    let mut joined = String::new();
    for word in words {
        joined.extend(lead_with(word, true));
    }
    truncate_chars(&joined, MAX_IDENTIFIER_LENGTH)
}

fn lead_with(word: &str, uppercase: bool) -> impl Iterator<Item = char> + '_ {
    let mut chars = word.chars();
    let lead: Vec<char> = match chars.next() {
        Some(c) if uppercase => c.to_uppercase().collect(),
        Some(c) => c.to_lowercase().collect(),
        None => Vec::new(),
    };
    lead.into_iter().chain(chars)
}

fn guard_leading_digit(identifier: String) -> String {
    if identifier.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("_{}", identifier)
    } else {
        identifier
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
