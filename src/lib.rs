pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::settings::{LogFormat, Settings};
pub use core::arith::{parse_operand, sum};
pub use core::console::{log, log_to, Capture, Stdout, WriterSink};
pub use domain::ports::LineSink;
pub use utils::error::{Result, SumlogError};
