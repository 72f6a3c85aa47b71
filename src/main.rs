//! preflight - validate environment configuration before startup.
//!
//! Responsibilities:
//! - Parse command-line options (`--strict`, `--env-file`).
//! - Compile the deployment's rule registry, failing fast on registry
//!   defects before any value is evaluated.
//! - Build the value snapshot from the process environment plus the
//!   optional settings file, and run the report.
//!
//! Exit status: 0 when the configuration passes, 1 on any required-key
//! failure or, in strict mode, any warning.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use preflight::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(about = "Validate environment configuration before the application starts")]
#[command(version)]
struct Cli {
    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,

    /// Settings file merged over the process environment (file values win)
    #[arg(long, value_name = "FILE", default_value = ".env")]
    env_file: PathBuf,
}

/// The rule registry for this deployment.
///
/// This is the customization point: add a rule here for every
/// configuration key the project grows, e.g.
/// `.required(Rule::new("SUPABASE_URL").pattern("^https://[a-z0-9]+\\.supabase\\.co$").placeholder("CHANGE_ME"))`.
fn registry() -> Result<RuleSet, RegistryErrors> {
    RuleSet::builder()
        .required(
            Rule::new("PROJECT_NAME")
                .pattern("^[a-z][a-z0-9_-]+$")
                .message(
                    "project names start with a lowercase letter and use only \
                     lowercase letters, digits, hyphens, and underscores",
                )
                .placeholder("CHANGE_ME"),
        )
        .optional(
            Rule::new("ANTHROPIC_API_KEY")
                .pattern("^sk-ant-")
                .message("Anthropic API keys start with \"sk-ant-\""),
        )
        .optional(
            Rule::new("OPENAI_API_KEY")
                .pattern("^sk-")
                .message("OpenAI API keys start with \"sk-\""),
        )
        .optional(
            Rule::new("GITHUB_TOKEN")
                .pattern("^(ghp_|gho_|github_pat_)")
                .message("GitHub tokens start with \"ghp_\", \"gho_\", or \"github_pat_\""),
        )
        .build()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    ExitCode::from(run(&cli, &RealEnv::new(), &mut stdout))
}

fn run(cli: &Cli, env: &dyn ConfigEnv, out: &mut dyn Write) -> u8 {
    let rules = match registry() {
        Ok(rules) => rules,
        Err(errors) => {
            eprint!("{}", errors);
            return 1;
        }
    };

    let mut snapshot = Snapshot::from_env(env);
    let mut reporter = Reporter::new(ColorOption::Auto, out);
    match snapshot.load_file(&cli.env_file, env) {
        Ok(true) => {
            reporter.info(&format!("loaded settings from {}", cli.env_file.display()));
        }
        Ok(false) => {
            reporter.info(&format!(
                "settings file not found: {} (using the process environment only)",
                cli.env_file.display()
            ));
        }
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    }

    let report = reporter.run(&rules, &snapshot, cli.strict);
    if report.passed {
        0
    } else {
        1
    }
}
