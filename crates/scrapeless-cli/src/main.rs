//! scrapeless-cli - Command-line interface for managing Scrapeless actors

use clap::{CommandFactory, Parser};
use colored::Colorize;
use scrapeless_core::templates::MaterializedProject;
use scrapeless_core::tui::CliclackPrompt;
use scrapeless_core::{interactive_create, runtime, templates, Error};
use std::path::Path;
use std::process::ExitCode;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "scrapeless-cli")]
#[command(about = "Command-line interface for managing Scrapeless actors")]
#[command(long_about = "scrapeless-cli is a command-line tool for creating and running Scrapeless \
actor projects.\nIt supports interactive project generation, template-based initialization, and \
quick local execution.\nTo learn more, visit the GitHub repository: \
https://github.com/scrapeless-ai/scrapeless-cli")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Print the version number of scrapeless
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Specify the template type to generate the actor code template
    /// (supported values: golang-template, node-template, python-template)
    #[arg(short = 't', long = "tmpl", value_name = "TEMPLATE")]
    pub tmpl: Option<String>,

    /// Set the folder name for the generated actor code template
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        default_value = scrapeless_core::DEFAULT_ACTOR_NAME
    )]
    pub name: String,

    /// Generate a new actor code template interactively
    #[arg(short = 'c', long = "create")]
    pub create: bool,

    /// Build and run the current actor code immediately
    #[arg(short = 'r', long = "run")]
    pub run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; in-flight children share the foreground
    // process group and receive the signal themselves
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match dispatch(args).await {
        Ok(code) => to_exit_code(code),
        Err(err) => {
            let code = err.exit_code();
            if matches!(err, Error::UserCancelled) {
                println!("{}", "Cancelled.".yellow());
            } else {
                eprintln!("{} {:#}", "Error:".red().bold(), anyhow::Error::from(err));
            }
            to_exit_code(code)
        }
    }
}

/// Route flags to exactly one action. Priority: version > interactive create >
/// direct create > run > help.
async fn dispatch(args: Args) -> Result<i32, Error> {
    if args.version {
        println!("scrapeless-cli version: {}", CLI_VERSION);
        return Ok(0);
    }

    if args.create {
        let project = interactive_create(&CliclackPrompt, Path::new(".")).await?;
        report_created(&project);
        return Ok(0);
    }

    if let Some(template) = &args.tmpl {
        let project = templates::create(template, &args.name, Path::new(".")).await?;
        report_created(&project);
        return Ok(0);
    }

    if args.run {
        let cwd = std::env::current_dir()?;
        return runtime::auto_run(&cwd).await;
    }

    Args::command().print_help()?;
    Ok(0)
}

fn report_created(project: &MaterializedProject) {
    println!();
    println!(
        "{} {} {}",
        "Created".green().bold(),
        project.path.display(),
        format!("({} files, language: {})", project.files, project.language).dimmed()
    );
    println!();
    println!("Next steps:");
    println!("  cd {}", project.path.display());
    println!("  scrapeless-cli --run");
}

fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
