use anyhow::{anyhow, Result};
use env_logger::Env;

use trailcount::{
    argsets::FetchArgs,
    command,
    constants::{defaults, envvars},
    helpers,
};

const CMD_AGGREGATE: &str = "aggregate";
const CMD_SYNC: &str = "sync";

fn main() -> Result<()> {
    helpers::load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    let fetch_args = FetchArgs {
        start: args.opt_value_from_str("--start")?,
        end: args.opt_value_from_str("--end")?,
    };
    match subcommand.as_deref() {
        // Running with no subcommand fetches and prints the combined table
        Some(CMD_AGGREGATE) | None => command::aggregate(fetch_args),
        Some(CMD_SYNC) => command::sync(fetch_args),
        Some(other) => Err(anyhow!(
            "Unknown subcommand '{other}'; must be one of '{CMD_AGGREGATE}', '{CMD_SYNC}'"
        )),
    }
}
