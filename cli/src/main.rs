mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use is_root::is_root;
use pulse_common::network::interface;
use pulse_core::driver::Driver;
use pulse_core::resolver::SearchPath;
use pulse_core::runner::SystemRunner;
use pulse_core::shutdown::Shutdown;
use terminal::{logging, print};
use tracing::{debug, warn};

/// Exit status after a second interrupt, as a shell reports SIGINT.
const FORCED_EXIT_CODE: i32 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(commands.no_banner, cfg.quiet);
    print::header("target", cfg.quiet);
    print::target_details(&cfg);

    if !is_root() {
        warn!("Not running as root. hping3 and arping need raw socket access");
    }
    if let Err(reason) = interface::check_interface(&cfg.interface) {
        warn!("Interface {} {}", cfg.interface, reason.describe());
    }

    let (trigger, shutdown) = Shutdown::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        warn!("Interrupted. Finishing the current iteration, press Ctrl-C again to exit now");
        trigger.trigger();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(FORCED_EXIT_CODE);
        }
    });
    // Let the signal task install its handler before the first tool runs.
    tokio::task::yield_now().await;

    let runner = SystemRunner::new(cfg.quiet > 1);
    let mut driver = Driver::new(cfg.clone(), SearchPath::from_env(), runner);

    match driver.check() {
        Ok(()) => {}
        Err(e) if !e.missing_tools().is_empty() => {
            debug!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    }

    print::header("sending", cfg.quiet);
    let summary = driver.run(shutdown).await?;

    print::summary(&summary, cfg.quiet);
    Ok(ExitCode::SUCCESS)
}
