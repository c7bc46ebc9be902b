use std::path::PathBuf;

use clap::{ArgAction, ValueHint};
use mesh_io::LoadOptions;
use mesh_types::DegenerateFacePolicy;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
        }
    }
}

/// Browse a directory of ASCII PLY meshes and report what a viewer would show
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); `RUST_LOG` sets the base filter
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Directory containing the meshes
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,
    /// File extension to look for
    #[arg(short, long, default_value = "ply")]
    pub extension: String,
    /// Index of the mesh to open
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,
    /// Report every mesh in the directory instead of one
    #[arg(short, long)]
    pub all: bool,
    /// Fail on zero-area faces instead of skipping them
    #[arg(long)]
    pub strict: bool,
    /// Rescale vertex normals to unit length
    #[arg(long)]
    pub unit_normals: bool,
    /// Viewport aspect ratio used for the printed projection
    #[arg(long, default_value_t = 4.0 / 3.0)]
    pub aspect: f32,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            degenerate_faces: if self.strict {
                DegenerateFacePolicy::Reject
            } else {
                DegenerateFacePolicy::Skip
            },
            renormalize_normals: self.unit_normals,
        }
    }
}

/// Level requested on the command line, if any
pub(crate) fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// `RUST_LOG` if set and valid, else `info`; `-v` overrides the global level
pub(crate) fn log_filter(verbose: u8) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::INFO.into()));
    match verbosity_level(verbose) {
        Some(level) => filter.add_directive(level.into()),
        None => filter,
    }
}

/// Set up log output on stderr
pub(crate) fn initialize_tracing(verbose: u8, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose));

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
    }
}
