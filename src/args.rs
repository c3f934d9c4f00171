use clap::Parser;

use crate::controller::catalog::DEFAULT_API_BASE;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address and port to listen on
    #[arg(
        short = 'b',
        long,
        value_name = "ADDR",
        default_value = "0.0.0.0:8081"
    )]
    pub bind: String,

    /// Base url of TheSportsDB json api
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base_url: String,
}
