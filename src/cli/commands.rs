//! Command dispatch: maps parsed arguments onto application services.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::RecordConvert;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(Some(Path::new(".")))?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Eval {
            input,
            output,
            compact,
        }) => eval(&container, input, output.as_deref(), *compact),
        Some(Commands::Print { input }) => print(&container, input),
        Some(Commands::Check { input }) => check(&container, input),
        Some(Commands::Tree { input }) => tree(&container, input),
        Some(Commands::Config { command }) => config_cmd(&container, command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

#[instrument(skip(container))]
fn eval(
    container: &ServiceContainer,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> CliResult<()> {
    let output = output.unwrap_or(&container.settings.output_path);
    let pretty = !compact && container.settings.pretty;
    debug!("eval: output={}, pretty={}", output.display(), pretty);

    let result = container.calculator.evaluate_file(input, output, pretty)?;
    output::success(&format!(
        "evaluated {} expressions -> {}",
        result.count,
        result.output_path.display()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn print(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let results = container.calculator.evaluate(input)?;
    for value in results {
        output::info(&value);
    }
    Ok(())
}

#[instrument(skip(container))]
fn check(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let count = container.calculator.check(input)?;
    output::success(&format!("{}: {} expressions", input.display(), count));
    Ok(())
}

#[instrument(skip(container))]
fn tree(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let records = container.calculator.load_records(input)?;
    for record in &records {
        output::info(&record.to_tree_string());
    }
    Ok(())
}

fn config_cmd(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Configuration");
            output::detail(&format!(
                "output_path = {}",
                container.settings.output_path.display()
            ));
            output::detail(&format!("pretty = {}", container.settings.pretty));
            Ok(())
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::detail(&format!(
                    "global: {}{}",
                    path.display(),
                    if path.exists() { "" } else { " (missing)" }
                )),
                None => output::detail("global: <unavailable>"),
            }
            let local = config::local_config_path(Path::new("."));
            output::detail(&format!(
                "local:  {}{}",
                local.display(),
                if local.exists() { "" } else { " (missing)" }
            ));
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                config::global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                config::local_config_path(Path::new("."))
            };

            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, config::config_template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;

            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
