use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use engine_logging::{LogDestination, LogSettings};
use log::LevelFilter;
use pdfmagic_core::OperationKey;

/// Merge PDFs, convert images to PDF, and combine images with PDFs through the
/// PdfMagic service. The service address is read from `PDFMAGIC_API_BASE`.
#[derive(Parser, Debug)]
#[command(name = "pdfmagic", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Where log records are written.
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log file used with `--log file` or `--log both`.
    #[arg(long, global = true, default_value = "./pdfmagic.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the supported operations.
    List,
    /// Check that the processing service is reachable.
    Health,
    /// Submit files and save the generated PDF as `<operation>.pdf`.
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Operation key, see `pdfmagic list`.
    #[arg(short, long, default_value_t = OperationKey::MergePdf)]
    pub operation: OperationKey,

    /// Directory the generated PDF is saved into.
    #[arg(short = 'O', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Input files, in the order they should appear in the output.
    pub files: Vec<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl Cli {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            destination: match self.log {
                LogTarget::Terminal => LogDestination::Terminal,
                LogTarget::File => LogDestination::File,
                LogTarget::Both => LogDestination::Both,
            },
            level: match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
            file_path: self.log_file.clone(),
        }
    }
}
