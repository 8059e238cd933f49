use anyhow::Result;
use casekit::cli::output::{self, OutputFormat};
use casekit::cli::{self as runner, Action};
use casekit::config::Overrides;
use casekit::{Case, Config, Outcome};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "casekit")]
#[command(version, about = "Detect and convert naming-convention cases", long_about = None)]
struct Cli {
    /// Source case hint; unrecognized hints fall back to detection
    #[arg(short, long, global = true, value_name = "CASE")]
    from: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if some inputs are in no known case
    #[arg(long, global = true)]
    no_fail: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert inputs (or stdin lines) to another case
    Convert {
        /// Target case; defaults to `default_target` from the config file
        #[arg(short, long, value_enum)]
        to: Option<Case>,

        #[arg(value_name = "INPUT")]
        inputs: Vec<String>,
    },
    /// Print the case each input is written in
    Detect {
        #[arg(value_name = "INPUT")]
        inputs: Vec<String>,
    },
    /// Print the words each input splits into
    Split {
        #[arg(value_name = "INPUT")]
        inputs: Vec<String>,
    },
    /// List supported cases
    Cases,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casekit", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(Overrides {
        source_hint: cli.from.clone(),
        format: cli.format,
        no_color: cli.no_color,
    })?;

    let (action, inputs) = match command {
        Commands::Cases => {
            output::print_cases(config.color);
            return Ok(());
        }
        Commands::Convert { to, inputs } => {
            let Some(target) = to.or(config.default_target) else {
                anyhow::bail!("No target case given. Pass --to or set default_target in the config file.");
            };
            (Action::Convert(target), inputs)
        }
        Commands::Detect { inputs } => (Action::Detect, inputs),
        Commands::Split { inputs } => (Action::Split, inputs),
    };

    let inputs = runner::collect_inputs(inputs, io::stdin().lock(), &config)?;
    let records = runner::run(action, &inputs, config.source_case());
    output::print_records(&records, config.format, config.color)?;

    if action == Action::Detect {
        let unknown = records
            .iter()
            .filter(|r| r.outcome == Outcome::Detected(None))
            .count();
        output::print_unknown_summary(unknown, records.len(), config.color);

        if unknown > 0 && !cli.no_fail {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
