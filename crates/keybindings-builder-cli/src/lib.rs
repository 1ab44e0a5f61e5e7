// kbb CLI library

pub mod commands;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use manifest::{BindingSpec, Manifest, DEFAULT_MANIFEST};
pub use router::{Cli, CommandRouter, Commands};
