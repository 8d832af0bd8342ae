// ============================================================================
// Source builder — line/indent helpers for deterministic code emission
// ============================================================================

/// Accumulates emitted source lines with explicit indentation, instead of
/// deeply nested string templates. Output is byte-for-byte reproducible
/// for identical call sequences, which golden-file tests rely on.
#[derive(Debug, Default)]
pub struct SourceBuilder {
    lines: Vec<String>,
    depth: usize,
}

/// Two-space indentation, matching the emitted JavaScript convention.
const INDENT: &str = "  ";

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn build(&self) -> String {
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

/// Escape a string for embedding in a single-quoted JavaScript literal.
pub fn escape_js_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}

/// Escape a string for embedding in a backtick template literal, where
/// backticks and `${` carry syntax instead of quotes.
pub fn escape_js_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
