use super::page_object::{ElementType, OperationType, PageObjectOperation};

// ============================================================================
// Unnecessary-operation filter — drop noise before method construction
// ============================================================================

/// Drop operations that should not appear in generated code.
///
/// Rules, in order:
/// - `switch_window` and `skipped_operations` survive unconditionally
///   (they render as window switches / manual-completion comments even
///   without a target element);
/// - operations on an element with an empty identifier are dropped;
/// - `change` events are kept;
/// - `click` events are kept only on Button/RadioButton/CheckBox/Link
///   targets — a click on a SelectBox is noise from opening the dropdown;
/// - everything else is dropped.
pub fn filter_unnecessary_operations(
    operations: Vec<PageObjectOperation>,
) -> Vec<PageObjectOperation> {
    operations
        .into_iter()
        .filter(|operation| match operation.operation_type {
            OperationType::SwitchWindow | OperationType::SkippedOperations => true,
            _ if operation.target.identifier.is_empty() => false,
            OperationType::Change => true,
            OperationType::Click => matches!(
                operation.target.element_type,
                ElementType::Button
                    | ElementType::RadioButton
                    | ElementType::CheckBox
                    | ElementType::Link
            ),
            OperationType::Other => false,
        })
        .collect()
}
