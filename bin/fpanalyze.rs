mod subs;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use subs::analyze::Analyze;
use subs::runnable::RunnableSubcommand;

#[macro_use]
extern crate stump;

extern crate wild;

fn main() -> Result<(), anyhow::Error> {
    let t1 = std::time::Instant::now();

    stump::set_min_log_level(stump::LogEntryLevel::WARN);
    info!("Initialized logging"); // INFO, which means that this won't be seen
                                  // unless the user overrides via environment
                                  // variable.

    let args = Analyze::parse_from(wild::args());

    if args.verbose {
        stump::set_verbose(true);
    }

    if let Err(why) = args.run() {
        error!("{}", "Unhandled program error:".red());
        error!("{}", why);
        return Err(why);
    };
    info!("Runtime: {}s", t1.elapsed().as_secs_f64());
    Ok(())
}
