use bytecode_diff::cmd;
use bytecode_diff::compare::CompareOptions;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Compare contract bytecode sizes and deployment gas between builds
///
/// bytecode-diff compares two directories of compiled contract artifacts and reports,
/// per contract, how many bytes the constructor and runtime code gained or lost and
/// what that costs in deployment gas.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output warnings
    #[arg(short, long, global = true, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    warning: bool,

    /// Output verbosely
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract bytecode from Truffle build artifacts
    Extract {
        /// Directory of truffle build files [default: build/contracts]
        #[arg(short, long, value_name = "DIR")]
        build_dir: Option<PathBuf>,

        /// Output directory of extracted files [default: bytecode]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Compile before extracting
        #[arg(short, long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
        compile: bool,
    },

    /// Compare bytecode sets
    Compare {
        /// Directory with the original bytecode
        old: PathBuf,

        /// Directory with the new bytecode
        new: PathBuf,

        /// Don't output files whose bytecode hasn't changed
        #[arg(short, long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
        suppress_same: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match cli.command {
        Commands::Extract {
            build_dir,
            output,
            compile,
        } => cmd::cmd_extract(&cmd::ExtractArgs {
            build_dir,
            output,
            compile,
            warnings: cli.warning,
            verbose: cli.verbose,
        }),
        Commands::Compare {
            old,
            new,
            suppress_same,
            json,
        } => cmd::cmd_compare(
            &old,
            &new,
            CompareOptions {
                suppress_same,
                warnings: cli.warning,
                verbose: cli.verbose,
            },
            json,
        ),
        Commands::Completions { shell } => {
            cmd::cmd_completions(shell, &mut Cli::command());
            Ok(())
        }
    };

    if let Err(e) = result {
        use bytecode_diff::error::ErrorFormatter;
        eprint!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
