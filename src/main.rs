use clap::Parser;
use students::cli::{self, Cli, Context};
use students::config::RosterConfig;
use students::logging::init_logger;

fn main() {
    let cli = Cli::parse();
    let cfg = RosterConfig::from_env();
    init_logger(&cfg);
    log::debug!("{}", cfg);

    if let Err(e) = cli::run(cli, &Context::new(cfg)) {
        // Логируем ошибку и выходим с кодом 1.
        log::error!("{:?}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
