use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Screen transition graph — directed adjacency over screen names
// ============================================================================

/// One recorded hop between two screens.
///
/// An empty `dest_screen_name` marks a terminal operation in a trace.
/// `trigger` carries the label of the element that caused the hop, when
/// known; it is rendered into the transition diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTransition {
    pub source_screen_name: String,
    pub dest_screen_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}

/// Directed adjacency from a screen name to the screens reachable from it.
///
/// Next-screen lists are deduplicated and kept in insertion order so every
/// downstream consumer (path building, diagram rendering) is
/// deterministic. Built fresh per generation run; `merge` returns a new
/// graph instead of mutating in place.
#[derive(Debug, Clone, Default)]
pub struct ScreenTransitionGraph {
    adjacency: HashMap<String, Vec<String>>,
    node_order: Vec<String>,
}

impl ScreenTransitionGraph {
    /// Build a graph from one ordered trace of screen names.
    ///
    /// For each consecutive pair (current, next), `current` gets an
    /// adjacency entry and `next` joins its set. The last screen of the
    /// trace has no outgoing edge unless the trace loops back to it.
    pub fn build(trace: &[String]) -> Self {
        let mut graph = Self::default();
        graph.add_trace(trace);
        graph
    }

    fn add_trace(&mut self, trace: &[String]) {
        for pair in trace.windows(2) {
            self.add_transition(&pair[0], &pair[1]);
        }
    }

    fn add_transition(&mut self, source: &str, dest: &str) {
        if !self.adjacency.contains_key(source) {
            self.node_order.push(source.to_string());
        }
        let next = self.adjacency.entry(source.to_string()).or_default();
        if !next.iter().any(|n| n == dest) {
            next.push(dest.to_string());
        }
    }

    /// Merge two graphs into a new one: a set union per key, not a
    /// replace. Neither input is modified.
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for source in &other.node_order {
            for dest in &other.adjacency[source] {
                merged.add_transition(source, dest);
            }
        }
        merged
    }

    /// Screens that have at least one outgoing edge, in insertion order.
    pub fn screen_names(&self) -> &[String] {
        &self.node_order
    }

    /// Screens reachable from `screen_name`, in first-seen order.
    pub fn next_screens(&self, screen_name: &str) -> &[String] {
        self.adjacency
            .get(screen_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }

    /// Flatten the adjacency into one `ScreenTransition` per edge, in
    /// deterministic insertion order. Triggers are unknown at graph level.
    pub fn collect_screen_transitions(&self) -> Vec<ScreenTransition> {
        let mut transitions = Vec::new();
        for source in &self.node_order {
            for dest in &self.adjacency[source] {
                transitions.push(ScreenTransition {
                    source_screen_name: source.clone(),
                    dest_screen_name: dest.clone(),
                    trigger: None,
                });
            }
        }
        transitions
    }
}
