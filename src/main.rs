use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use log::debug;

use flow_log_tagger::commands;

#[derive(Parser)]
#[command(name = "flow-log-tagger")]
#[command(about = "Tag flow log records by destination port and protocol", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a flow log against a lookup table and write tag counts
    Tag {
        /// Flow log file (version 2 records, .gz and .zst supported)
        #[arg(long, default_value = "flow_logs.txt")]
        flow_log: String,

        /// Lookup table CSV (columns: dstport, protocol, tag)
        #[arg(long, default_value = "lookup_table.csv")]
        lookup: String,

        /// Output report file path
        #[arg(short, long, default_value = "output_results.txt")]
        output: String,

        /// Do not show a progress bar while reading the flow log
        #[arg(long)]
        no_progress: bool,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());
    let cli = Cli::parse();

    match cli.command {
        Commands::Tag {
            flow_log,
            lookup,
            output,
            no_progress,
        } => {
            debug!("flow_log={} lookup={} output={}", flow_log, lookup, output);
            commands::tag::run(&flow_log, &lookup, &output, !no_progress)
        }
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "flow-log-tagger", &mut std::io::stdout());
            Ok(())
        }
    }
}
