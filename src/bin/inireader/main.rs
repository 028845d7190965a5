mod args;

use std::process::ExitCode;

use env_logger::Env;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    args::run()
}
