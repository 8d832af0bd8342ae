use std::collections::{HashSet, VecDeque};

use super::transition_graph::ScreenTransitionGraph;

// ============================================================================
// Graph-based path builder — minimal covering set of navigation paths
// ============================================================================

/// Compute a minimal set of screen-name paths whose union covers every
/// edge observed across the given traces, favoring longer paths.
///
/// Each trace builds its own local graph and is traversed from its first
/// screen. The pruning pass runs twice: the first, length-sorted pass can
/// leave a path that is now a strict sub-path of another accepted path,
/// and the second pass removes such residues.
pub fn build_paths(traces: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut candidates = Vec::new();
    for trace in traces {
        let Some(start) = trace.first() else {
            continue;
        };
        let graph = ScreenTransitionGraph::build(trace);
        candidates.extend(enumerate_paths(&graph, start));
    }

    prune_paths(prune_paths(candidates))
}

/// Breadth-first path enumeration with an explicit queue.
///
/// The path accumulator is cloned per branch, never shared. A branch that
/// reaches a node already on its own path terminates there (cycle close,
/// repeated node included); a branch reaching a node without outgoing
/// edges terminates as a dead end.
pub fn enumerate_paths(graph: &ScreenTransitionGraph, start: &str) -> Vec<Vec<String>> {
    let mut finished = Vec::new();
    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    queue.push_back(vec![start.to_string()]);

    while let Some(path) = queue.pop_front() {
        let Some(current) = path.last() else {
            continue;
        };
        let next_screens = graph.next_screens(current);

        if next_screens.is_empty() {
            finished.push(path);
            continue;
        }

        for next in next_screens {
            let mut branch = path.clone();
            branch.push(next.clone());
            if path.iter().any(|visited| visited == next) {
                finished.push(branch);
            } else {
                queue.push_back(branch);
            }
        }
    }

    finished
}

/// One pruning pass over candidate paths.
///
/// Candidates are walked in descending length order (stable for ties). A
/// path is accepted only if it contributes at least one edge not covered
/// by previously accepted paths; its tail is truncated two positions past
/// the last new-edge index. All of a path's edges join the visited set
/// regardless of truncation, to keep later decisions consistent.
pub fn prune_paths(mut candidates: Vec<Vec<String>>) -> Vec<Vec<String>> {
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut visited: HashSet<(String, String)> = HashSet::new();
    let mut accepted = Vec::new();

    for path in candidates {
        let mut last_new_edge: Option<usize> = None;
        for i in 0..path.len().saturating_sub(1) {
            let edge = (path[i].clone(), path[i + 1].clone());
            if visited.insert(edge) {
                last_new_edge = Some(i);
            }
        }

        if let Some(index) = last_new_edge {
            let cut_off = (index + 2).min(path.len());
            accepted.push(path[..cut_off].to_vec());
        }
    }

    accepted
}
