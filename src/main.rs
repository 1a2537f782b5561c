mod cli;

use cli::{Args, Command};
use sbom_enricher::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use sbom_enricher::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::for_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let progress_reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(QuietProgressReporter::new())
    } else {
        Box::new(StderrProgressReporter::new())
    };

    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        for warning in config.unknown_field_warnings() {
            progress_reporter.report_error(&warning);
        }
    }

    match args.command {
        Command::Validate { path } => {
            let use_case =
                ValidateScanRequestUseCase::new(FileSystemReader::new(), &progress_reporter);
            let request = use_case.execute(&path)?;

            let settings = Settings::resolve(config.as_ref(), args.api_url.as_deref(), false);
            let output = to_json(&request, settings.pretty)?;
            StdoutPresenter::new().present(&output)
        }
        Command::Enrich {
            paths,
            output,
            compact,
        } => {
            let settings = Settings::resolve(config.as_ref(), args.api_url.as_deref(), compact);
            let reader = FileSystemReader::new();
            let documents = paths
                .iter()
                .map(|path| SbomDocument::load(&reader, path))
                .collect::<Result<Vec<_>>>()?;

            let language_repository =
                GitHubLanguageRepository::with_settings(&settings.api_base_url, settings.timeout)?;
            let use_case = EnrichSbomUseCase::new(language_repository, &progress_reporter);
            let enriched = use_case.execute(&documents)?;

            // One input yields one object; several yield an array.
            let rendered = match enriched.as_slice() {
                [single] => to_json(single, settings.pretty)?,
                _ => to_json(&enriched, settings.pretty)?,
            };

            match output {
                Some(output_path) => {
                    let writer = FileSystemWriter::new(output_path);
                    writer.present(&rendered)?;
                    progress_reporter.report_completion(&format!(
                        "✅ Output written: {}",
                        writer.output_path().display()
                    ));
                    Ok(())
                }
                None => StdoutPresenter::new().present(&rendered),
            }
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            discover_config(&cwd)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_pretty_and_compact() {
        let value = json!({"name": "widgets", "tag": "v1"});
        assert_eq!(to_json(&value, false).unwrap(), r#"{"name":"widgets","tag":"v1"}"#);
        assert!(to_json(&value, true).unwrap().contains("\n  \"name\""));
    }

    #[test]
    fn test_load_config_explicit_missing() {
        let result = load_config(Some(Path::new("/nonexistent/sbom-enricher.config.yml")));
        assert!(result.is_err());
    }
}
