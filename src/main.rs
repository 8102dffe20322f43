mod cli;

use cli::Args;
use license_list::adapters::outbound::console::StderrProgressReporter;
use license_list::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use license_list::adapters::outbound::formatters::JsonFormatter;
use license_list::application::dto::LicenseRequest;
use license_list::application::use_cases::GenerateLicensesUseCase;
use license_list::application::InvocationPlan;
use license_list::config::{self, GeneratorSettings, PROJECT_ROOT_ENV};
use license_list::license_generation::domain::LibraryRecord;
use license_list::ports::outbound::{LicenseListFormatter, OutputPresenter, ProgressReporter};
use license_list::shared::error::{ExitCode, LicenseListError};
use license_list::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported by clap as non-error "errors"
            let code = if e.use_stderr() {
                ExitCode::Failure
            } else {
                ExitCode::Success
            };
            println!("{}", e.render());
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        println!("\n❌ An error occurred:\n");
        println!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            println!("\nCaused by: {}", err);
            source = err.source();
        }

        if matches!(
            e.downcast_ref::<LicenseListError>(),
            Some(LicenseListError::InvalidArguments { .. })
        ) {
            println!("\n{}", cli::usage_with_examples());
        }

        println!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_root = project_root()?;
    let settings = load_settings(args.config.as_deref(), &project_root)?;

    let plan = InvocationPlan::resolve(&args.paths, &project_root, &settings)?;
    let libraries = collect_libraries(&plan, &settings)?;

    // Format and present output
    let output = JsonFormatter::new().format(&libraries)?;
    FileSystemWriter::new(plan.output_path().to_path_buf()).present(&output)?;

    StderrProgressReporter::new().report_completion(&format!(
        "✅ Output complete: {} ({} license(s))",
        plan.output_path().display(),
        libraries.len()
    ));

    Ok(())
}

fn collect_libraries(plan: &InvocationPlan, settings: &GeneratorSettings) -> Result<Vec<LibraryRecord>> {
    match plan {
        InvocationPlan::Generate { source_root, .. } => {
            // Create use case with injected dependencies
            let use_case = GenerateLicensesUseCase::new(
                FileSystemReader::new(),
                FileSystemReader::new(),
                StderrProgressReporter::new(),
            );
            let request = LicenseRequest::new(source_root.clone(), settings.layout.clone());
            Ok(use_case.execute(request)?.libraries)
        }
        InvocationPlan::EmptyList { .. } => {
            StderrProgressReporter::new().report_error(&format!(
                "⚠️  {} directory not found, writing an empty license list",
                settings.marker_directory
            ));
            Ok(Vec::new())
        }
    }
}

/// `$SRCROOT` when set, otherwise the current directory
fn project_root() -> Result<PathBuf> {
    match std::env::var_os(PROJECT_ROOT_ENV) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => Ok(std::env::current_dir()?),
    }
}

/// Explicit config files must load; an auto-discovered one is optional
fn load_settings(config_path: Option<&Path>, project_root: &Path) -> Result<GeneratorSettings> {
    let config = match config_path {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(project_root)?,
    };
    Ok(GeneratorSettings::from_config(config.unwrap_or_default()))
}
