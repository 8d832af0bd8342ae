use std::path::Path;

use crate::diagram::mermaid::render_diagram;
use crate::graph::transition_graph::{ScreenTransition, ScreenTransitionGraph};
use crate::identifier::generator::IdentifierGenerator;
use crate::script::config::GenerateConfig;
use crate::script::generator::{GeneratedFile, generate_test_scripts};
use crate::trace::sequence_builder::build_sequences;
use crate::trace::source_model::SourceOperation;

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    trace_paths: &[String],
    output_dir: &str,
    config: &GenerateConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let test_results = load_traces(trace_paths)?;

    if verbose > 0 {
        eprintln!(
            "Generating test scripts from {} trace file(s)...",
            test_results.len()
        );
    }

    let scripts = generate_test_scripts(&test_results, config)?;

    write_files(output_dir, "page_objects", &scripts.page_objects, verbose)?;
    write_files(output_dir, "test_suites", &scripts.test_suites, verbose)?;
    write_files(output_dir, "test_data", &scripts.test_data, verbose)?;

    let diagram_path = Path::new(output_dir).join("screen_transition_diagram.mmd");
    std::fs::create_dir_all(output_dir)?;
    std::fs::write(&diagram_path, &scripts.diagram)?;
    if verbose > 0 {
        eprintln!("  Wrote: {}", diagram_path.display());
    }

    println!(
        "Generated {} page object(s), {} test suite(s), {} test data module(s)",
        scripts.page_objects.len(),
        scripts.test_suites.len(),
        scripts.test_data.len()
    );

    if scripts.invalid_operation_type_exists {
        eprintln!(
            "Warning: some operations could not be expressed in code and were \
             replaced by comments; please complete them manually."
        );
    }

    Ok(())
}

// ============================================================================
// diagram subcommand
// ============================================================================

pub fn cmd_diagram(
    trace_paths: &[String],
    output: Option<&str>,
    config: &GenerateConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let test_results = load_traces(trace_paths)?;

    let diagram = render_trace_diagram(&test_results, config);
    match output {
        Some(path) => std::fs::write(path, &diagram)?,
        None => print!("{}", diagram),
    }

    Ok(())
}

/// Render the merged transition diagram for a set of traces.
///
/// Traces are segmented first, so consecutive operations on the same
/// screen never produce a self-edge, and screen names are mapped to class
/// identifiers so node ids stay legal Mermaid syntax.
pub fn render_trace_diagram(test_results: &[Vec<SourceOperation>], config: &GenerateConfig) -> String {
    let mut merged = ScreenTransitionGraph::default();
    for operations in test_results {
        let screens: Vec<String> = build_sequences(operations, &config.view)
            .iter()
            .map(|segment| segment.screen_def.clone())
            .collect();
        merged = merged.merge(&ScreenTransitionGraph::build(&screens));
    }

    let mut id_generator = IdentifierGenerator::new();
    let transitions: Vec<ScreenTransition> = merged
        .collect_screen_transitions()
        .iter()
        .map(|transition| ScreenTransition {
            source_screen_name: id_generator.screen_class_name(&transition.source_screen_name),
            dest_screen_name: id_generator.screen_class_name(&transition.dest_screen_name),
            trigger: transition.trigger.clone(),
        })
        .collect();

    render_diagram(&transitions, &[])
}

// ============================================================================
// Helpers
// ============================================================================

/// Load each trace file as one test result (a JSON array of operations).
pub fn load_traces(
    paths: &[String],
) -> Result<Vec<Vec<SourceOperation>>, Box<dyn std::error::Error>> {
    let mut results = Vec::new();
    for path in paths {
        let content = std::fs::read_to_string(path)?;
        let operations: Vec<SourceOperation> = serde_json::from_str(&content)?;
        results.push(operations);
    }
    Ok(results)
}

fn write_files(
    output_dir: &str,
    subdir: &str,
    files: &[GeneratedFile],
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Ok(());
    }
    let dir = Path::new(output_dir).join(subdir);
    std::fs::create_dir_all(&dir)?;
    for file in files {
        let path = dir.join(&file.name);
        std::fs::write(&path, &file.content)?;
        if verbose > 0 {
            eprintln!("  Wrote: {}", path.display());
        }
    }
    Ok(())
}
