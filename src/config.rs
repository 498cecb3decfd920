//! Runtime configuration and command-line surface

use crate::error::AppError;
use crate::session::ArraySpec;
use crate::sort::AlgorithmKind;
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ARRAY_SIZE: usize = 60;
pub const DEFAULT_MAX_VALUE: u32 = 30;
pub const DEFAULT_FPS: u32 = 5;

pub const MAX_ARRAY_SIZE: usize = 1024;
pub const MAX_VALUE_LIMIT: u32 = 10_000;
pub const MAX_FPS: u32 = 240;

/// Settings for one visualiser run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub array_size: usize,
    pub max_value: u32,
    /// Animation ticks per second
    pub fps: u32,
    pub algorithm: AlgorithmKind,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            array_size: DEFAULT_ARRAY_SIZE,
            max_value: DEFAULT_MAX_VALUE,
            fps: DEFAULT_FPS,
            algorithm: AlgorithmKind::Bubble,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Reject values outside the supported ranges
    pub fn validate(&self) -> Result<(), AppError> {
        if self.array_size == 0 || self.array_size > MAX_ARRAY_SIZE {
            return Err(AppError::Config(format!(
                "array size must be between 1 and {}, got {}",
                MAX_ARRAY_SIZE, self.array_size
            )));
        }
        if self.max_value == 0 || self.max_value > MAX_VALUE_LIMIT {
            return Err(AppError::Config(format!(
                "max value must be between 1 and {}, got {}",
                MAX_VALUE_LIMIT, self.max_value
            )));
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(AppError::Config(format!(
                "fps must be between 1 and {}, got {}",
                MAX_FPS, self.fps
            )));
        }
        Ok(())
    }

    /// Time between two animation ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn array_spec(&self) -> ArraySpec {
        ArraySpec {
            size: self.array_size,
            max_value: self.max_value,
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "sortty",
    version,
    about = "Visualise sorting algorithms in the terminal",
    after_help = "Keys: s start | p pause/resume | space step | r reset | 1 bubble | 2 selection | q quit"
)]
pub struct Args {
    /// Number of elements to sort
    #[arg(short = 'n', long = "size", default_value_t = DEFAULT_ARRAY_SIZE,
          value_parser = clap::value_parser!(u64).range(1..=MAX_ARRAY_SIZE as u64)
              .map(|v| v as usize))]
    pub size: usize,

    /// Largest value an element can take
    #[arg(short = 'm', long = "max-value", default_value_t = DEFAULT_MAX_VALUE,
          value_parser = clap::value_parser!(u32).range(1..=MAX_VALUE_LIMIT as i64))]
    pub max_value: u32,

    /// Animation ticks per second
    #[arg(short = 'f', long = "fps", default_value_t = DEFAULT_FPS,
          value_parser = clap::value_parser!(u32).range(1..=MAX_FPS as i64))]
    pub fps: u32,

    /// Algorithm to start with
    #[arg(short = 'a', long = "algorithm", value_enum, default_value_t = AlgorithmKind::Bubble)]
    pub algorithm: AlgorithmKind,

    /// Seed for reproducible arrays
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            array_size: args.size,
            max_value: args.max_value,
            fps: args.fps,
            algorithm: args.algorithm,
            seed: args.seed,
            log_file: args.log_file,
        }
    }
}
