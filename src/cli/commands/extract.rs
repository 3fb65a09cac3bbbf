//! Extract command - Scan controllers and write the business rules report

use chrono::Utc;
use tracing::{info, warn};

use super::ExtractArgs;
use crate::cli::output::{JsonOutput, ReportRenderer, SummaryOutput, TerminalOutput};
use crate::cli::{exit_codes, Context};
use crate::config::Config;
use crate::error::BizRulesError;
use crate::report::{write_artifacts, ReportDocument};
use crate::rules::engine::{ExtractionEngine, ExtractionEvent};
use crate::rules::AggregateReport;
use crate::scanner::Scanner;
use crate::utils::timing::Timer;

pub fn execute(args: ExtractArgs, context: &Context) -> Result<i32, BizRulesError> {
    let timer = Timer::start();

    let config_path = context
        .config_path
        .as_ref()
        .map(|path| Config::resolve(&context.directory, path));
    let mut config = Config::load(config_path.as_deref(), &context.directory)?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    let controllers_dir = Config::resolve(&context.directory, &config.controllers_dir);
    let output_dir = Config::resolve(&context.directory, &config.output_dir);

    let mut engine = ExtractionEngine::from_config(&config)?;
    let scanner = Scanner::new(controllers_dir, config.recursive)?;

    let show_progress = !args.quiet && !args.stdout;
    let terminal = TerminalOutput::new();
    if show_progress {
        print!(
            "{}",
            terminal.format_header(
                config.project_name.as_deref(),
                &config.controllers_dir.display().to_string()
            )
        );
        let progress = TerminalOutput::new();
        engine.set_progress_callback(Box::new(move |event: &ExtractionEvent<'_>| {
            let line = match event {
                ExtractionEvent::ModuleStarted {
                    module,
                    pattern,
                    files,
                } => progress.format_module_start(module, *pattern, *files),
                ExtractionEvent::FileProcessed { file, occurrences } => {
                    progress.format_processing(file, *occurrences)
                }
                ExtractionEvent::FileSkipped { file, error } => {
                    progress.format_skipped(file, error)
                }
            };
            print!("{line}");
        }));
    }

    let results = engine.run(&scanner);
    let aggregate = AggregateReport::from_results(&results);
    let document = ReportDocument::build(&aggregate, Utc::now(), config.sample_limit);

    let json = JsonOutput::new()
        .with_validation(args.validate)
        .render_report(&document)?;

    let paths = if args.stdout {
        println!("{json}");
        None
    } else {
        let summary = SummaryOutput::new(config.project_name.clone()).render_report(&document)?;
        let paths = write_artifacts(&output_dir, &json, &summary)?;
        info!(
            json = %paths.json.display(),
            summary = %paths.summary.display(),
            "Report written"
        );
        Some(paths)
    };

    let skipped = results.skipped_files().len();
    if skipped > 0 {
        warn!(skipped, "Some files could not be read");
    }

    if show_progress {
        print!(
            "{}",
            terminal.format_summary(
                &document,
                paths.as_ref(),
                skipped,
                &timer.elapsed_formatted()
            )
        );
    }

    Ok(if skipped > 0 {
        exit_codes::FILES_SKIPPED
    } else {
        exit_codes::SUCCESS
    })
}

fn apply_overrides(config: &mut Config, args: &ExtractArgs) {
    if let Some(dir) = &args.controllers_dir {
        config.controllers_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(limit) = args.sample_limit {
        config.sample_limit = limit;
    }
}
