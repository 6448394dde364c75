use std::process::ExitCode;

use verbs::{Config, Dispatcher, Registry};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior to prevent errors on broken pipe
    // (e.g., when piping `repeat` into `head`)
    #[cfg(unix)]
    reset_sigpipe();

    verbs_cli::logging::init();

    let mut registry = Registry::new();
    if let Err(e) = verbs_cli::commands::register_all(&mut registry) {
        log::error!("failed to register commands: {}", e);
        return ExitCode::FAILURE;
    }

    Dispatcher::new(&registry)
        .with_config(Config::from_env())
        .run()
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
