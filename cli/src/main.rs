mod app;
mod commands;
mod terminal;

use std::sync::Arc;

use commands::CommandLine;
use pinger_common::config::Config;
use pinger_core::{Session, TcpProber, settings};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.into_config();

    logging::init(&cfg);
    print::banner(cfg.quiet);

    let repo = settings::open_repository(&cfg)?;
    let prober = Arc::new(TcpProber::new(cfg.probe_timeout));
    let session = Session::new(repo, prober);

    if let Some(target) = cfg.target_override.clone() {
        session.override_target(target);
    }

    app::run(session, &cfg).await
}
