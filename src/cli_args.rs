use std::net::IpAddr;

use clap::Parser;

use crate::error::ErrorVerbosity;

#[derive(Debug, Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Port to listen on. Absent or empty means port 8080.
    #[clap(long, env = "PORT")]
    pub port: Option<String>,

    /// Address to bind to.
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// How much detail generic error responses carry.
    #[clap(long, env = "ERROR_VERBOSITY", value_enum, default_value_t = ErrorVerbosity::StatusCode)]
    pub error_verbosity: ErrorVerbosity,
}
