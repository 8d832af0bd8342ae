use clap::Parser;
use testscript_gen::cli::commands::{cmd_diagram, cmd_generate};
use testscript_gen::cli::config::{Cli, Commands, apply_overrides, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            trace,
            output_dir,
            simple,
            data_driven,
            max_generation,
            multi_locator,
        } => {
            let config = apply_overrides(config, simple, data_driven, max_generation, multi_locator);
            cmd_generate(&trace, &output_dir, &config, cli.verbose)?;
        }
        Commands::Diagram { trace, output } => {
            cmd_diagram(&trace, output.as_deref(), &config)?;
        }
    }

    Ok(())
}
