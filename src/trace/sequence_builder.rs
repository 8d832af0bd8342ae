use super::screen_def::{ViewConfig, screen_name_for};
use super::source_model::SourceOperation;

// ============================================================================
// Sequence builder — segment a raw trace at screen boundaries
// ============================================================================

/// Capture-side marker: operations after this one were not recorded.
pub const PAUSE_CAPTURING: &str = "pause_capturing";

/// Capture-side marker: recording resumed.
pub const RESUME_CAPTURING: &str = "resume_capturing";

/// Engine-side marker standing in for everything between a pause and the
/// matching resume. Rendered as a manual-completion comment.
pub const SKIPPED_OPERATIONS: &str = "skipped_operations";

/// One contiguous stretch of operations on a single screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSegment {
    /// Effective screen name (after applying the view configuration)
    pub screen_def: String,

    /// URL of the first operation on the screen
    pub url: String,

    /// Representative screenshot (first operation's image)
    pub image_url: String,

    pub operations: Vec<SourceOperation>,

    /// Screen the trace moved to after this segment, `None` for the last
    /// segment of a trace
    pub dest_screen_def: Option<String>,
}

/// Segment one trace into per-screen sequences.
///
/// Pause/resume capture markers are collapsed first: everything between
/// them, including operations still queued when the resume arrives, is
/// replaced by a single `skipped_operations` marker.
pub fn build_sequences(operations: &[SourceOperation], view: &ViewConfig) -> Vec<SequenceSegment> {
    let collapsed = collapse_skipped_operations(operations);

    let mut segments: Vec<SequenceSegment> = Vec::new();
    for operation in collapsed {
        let screen = screen_name_for(&operation, view);
        match segments.last_mut() {
            Some(current) if current.screen_def == screen => {
                current.operations.push(operation);
            }
            _ => {
                segments.push(SequenceSegment {
                    screen_def: screen,
                    url: operation.url.clone(),
                    image_url: operation.image_file_path.clone(),
                    operations: vec![operation],
                    dest_screen_def: None,
                });
            }
        }
    }

    for i in 0..segments.len().saturating_sub(1) {
        segments[i].dest_screen_def = Some(segments[i + 1].screen_def.clone());
    }

    segments
}

fn collapse_skipped_operations(operations: &[SourceOperation]) -> Vec<SourceOperation> {
    let mut collapsed = Vec::new();
    let mut skipping = false;

    for operation in operations {
        match operation.operation_type.as_str() {
            PAUSE_CAPTURING => {
                skipping = true;
                collapsed.push(SourceOperation {
                    operation_type: SKIPPED_OPERATIONS.to_string(),
                    element_info: None,
                    input: String::new(),
                    ..operation.clone()
                });
            }
            RESUME_CAPTURING => {
                skipping = false;
            }
            // Operations queued before the resume are dropped with the rest.
            _ if skipping => {}
            _ => collapsed.push(operation.clone()),
        }
    }

    collapsed
}
