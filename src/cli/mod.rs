//! CLI definition and the export command

use std::path::PathBuf;

use clap::Parser;

pub mod export;

/// Export one API-Manager front-end API into a JSON document
#[derive(Parser, Debug)]
#[command(name = "apimex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API identifier; the front-end path the API is registered under
    #[arg(long = "apiId", short = 'a', value_name = "path")]
    pub api_id: String,

    /// API-Manager hostname, or a full origin like https://manager.example.com:8075
    #[arg(long, env = "APIMEX_HOST", hide_env = true)]
    pub host: Option<String>,

    /// API-Manager port
    #[arg(long, value_name = "8181", env = "APIMEX_PORT", hide_env = true)]
    pub port: Option<u16>,

    /// Account used to authenticate; listing subscribed applications needs the
    /// administrator role
    #[arg(long, short = 'u', env = "APIMEX_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Password used to authenticate
    #[arg(long, short = 'p', env = "APIMEX_PASSWORD", hide_env = true)]
    pub password: Option<String>,

    /// Output file
    #[arg(long, short = 'o', default_value = "exported.json")]
    pub output: PathBuf,

    /// Stage profile to read connection settings from (env.<stage>.yaml)
    #[arg(long, env = "APIMEX_STAGE", hide_env = true)]
    pub stage: Option<String>,

    /// Extra arguments are tolerated and ignored, so wrapper scripts can pass
    /// their own options through
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}
