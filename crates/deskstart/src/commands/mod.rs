use clap::ArgMatches;

use deskstart_core::events;

mod run;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();
    run::handle_run_command(matches)
}
