use clap::{Arg, ArgAction, Command};
use log::debug;
use std::time::Instant;

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    let start_time = Instant::now();
    let cmd = Command::new("valarm")
        .version("0.1.0")
        .author("Valarm Developers")
        .about("A Rust tool for triggering virtual alarms on Viewtron NVRs via their HTTP webhook API.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("trigger")
                .about("Sends the virtual alarm POST request to the configured NVR")
                .arg(Arg::new("host").long("host").value_name("HOST").help("Override the configured NVR host or IP address").action(ArgAction::Set))
                .arg(Arg::new("port").long("port").value_name("PORT").help("Override the configured NVR HTTP port").value_parser(clap::value_parser!(u16)).action(ArgAction::Set))
                .arg(Arg::new("path").long("path").value_name("PATH").help("Override the configured webhook endpoint path").action(ArgAction::Set))
                .arg(Arg::new("username").long("username").value_name("USER").help("Override the configured Basic Auth username").action(ArgAction::Set))
        )
        .subcommand(
            Command::new("show-config")
                .about("Prints the resolved NVR target without sending a request")
        );
    debug!("✅ CLI interface built in {:?}", start_time.elapsed());
    cmd
}
