use std::collections::HashSet;

use crate::graph::transition_graph::ScreenTransition;

// ============================================================================
// Screen transition diagram — Mermaid text renderer
// ============================================================================

/// Render screen transitions as a Mermaid `graph TD` diagram.
///
/// One line per distinct (source, dest) edge, in first-seen order; a
/// transition with a trigger renders as `A --> |Trigger|B;`. Edges also
/// present in `strong` render with `==>` to highlight a sub-path within
/// the full diagram; strong-only edges are unioned in, and no edge is
/// ever emitted twice.
pub fn render_diagram(transitions: &[ScreenTransition], strong: &[ScreenTransition]) -> String {
    let strong_edges: HashSet<(&str, &str)> = strong
        .iter()
        .map(|t| {
            (
                t.source_screen_name.as_str(),
                t.dest_screen_name.as_str(),
            )
        })
        .collect();

    let mut lines = vec!["graph TD;".to_string()];
    let mut emitted: HashSet<(String, String)> = HashSet::new();

    for transition in transitions.iter().chain(strong.iter()) {
        let edge = (
            transition.source_screen_name.clone(),
            transition.dest_screen_name.clone(),
        );
        if !emitted.insert(edge) {
            continue;
        }

        let arrow = if strong_edges.contains(&(
            transition.source_screen_name.as_str(),
            transition.dest_screen_name.as_str(),
        )) {
            "==>"
        } else {
            "-->"
        };

        let line = match &transition.trigger {
            Some(trigger) if !trigger.is_empty() => format!(
                "  {} {} |{}|{};",
                transition.source_screen_name,
                arrow,
                sanitize_label(trigger),
                transition.dest_screen_name
            ),
            _ => format!(
                "  {} {} {};",
                transition.source_screen_name, arrow, transition.dest_screen_name
            ),
        };
        lines.push(line);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Strip characters that would break the Mermaid edge-label syntax.
fn sanitize_label(label: &str) -> String {
    label.chars().filter(|c| *c != '|' && *c != '\n').collect()
}
