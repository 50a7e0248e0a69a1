use std::io;
use std::process::ExitCode;

use wsl_guard::Config;
use wsl_guard::hooks::Gatekeeper;
use wsl_guard::logging;

fn main() -> ExitCode {
    let config = Config::default();

    if let Err(_e) = logging::init(&config.logging) {
        // No sink to report to, and stderr is reserved for block messages.
        // The decision runs without the diagnostic log.
    }

    let gatekeeper = Gatekeeper::new(config);
    let decision = gatekeeper.run(io::stdin().lock(), &mut io::stderr().lock());

    ExitCode::from(decision.exit_code())
}
