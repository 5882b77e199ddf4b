//! Generate command

use std::io::{self, Write};

use anyhow::{Context, Result};

use suggestedsites::config::{Config, Verbosity};
use suggestedsites::presentation::output::{
    render_status, write_event, ConsoleEventSink, ErrorEvent, GenerateEvent,
};
use suggestedsites::presentation::{create_generate_use_case, Cli};
use suggestedsites::GenerateOptions;

pub fn run(cli: &Cli) -> Result<()> {
    let (mut config, warnings) =
        Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(verbosity) = cli.verbosity() {
        config.output.verbosity = verbosity;
    }
    let verbosity = config.output.verbosity;

    if verbosity > Verbosity::Quiet {
        for warning in &warnings {
            eprintln!("{}", warning);
        }
    }

    let options = GenerateOptions {
        inputs: cli.inputs.clone(),
        fallback: cli.fallback.clone(),
        package_name: cli.android_package_name.clone(),
        resources: cli.resources.clone(),
        output: cli.output.clone(),
        depfile: cli.depfile.clone(),
    };

    let progress = if cli.json { Verbosity::Quiet } else { verbosity };
    let sink = ConsoleEventSink::new(progress, io::stdout());
    let result = create_generate_use_case(&config).execute_with_events(&options, &sink)?;
    let mut out = sink.finish().context("failed to write progress output")?;

    let output = std::path::absolute(&result.output).unwrap_or_else(|_| result.output.clone());

    if cli.json {
        write_event(&mut out, &GenerateEvent::from_result(&result, &output))?;
    } else if verbosity > Verbosity::Quiet {
        render_status(&mut out, &result, &output)?;
        if verbosity >= Verbosity::Verbose {
            for dep in &result.dependencies {
                writeln!(out, "Dependency: {}", dep.display())?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

pub fn report_error(cli: &Cli, err: &anyhow::Error) {
    if cli.json {
        let _ = write_event(&mut io::stdout(), &ErrorEvent::new(format!("{err:#}")));
    }
    eprintln!("Error: {err:#}");
}
