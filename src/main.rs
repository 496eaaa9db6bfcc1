use anyhow::{bail, Result};
use log::{debug, error, info};
use std::time::Instant;

use valarm::cli;
use valarm::common::logging_setup;
use valarm::config_loader;
use valarm::operations;

fn main() -> Result<()> {
    let main_start_time = Instant::now();
    // Parse CLI arguments early for potential use in logging or config path
    let matches = cli::build_cli().get_matches();

    // Determine the configuration file path
    let config_path = matches.get_one::<String>("config").map(|s| s.as_str()).unwrap_or("config/valarm.yaml");

    let config_load_start_time = Instant::now();
    // Attempt to load the full configuration
    let master_config = match config_loader::load_config(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches);
            info!("✅ Full configuration loaded successfully from: {} in {:?}", config_path, config_load_start_time.elapsed());
            cfg
        }
        Err(e) => {
            // Config load is the one fatal path; without it no request can be attempted.
            logging_setup::initialize_logging(None, &matches);
            error!("❌ Failed to load configuration from '{}': {:#}. Exiting.", config_path, e);
            return Err(e.context(format!("Failed to load configuration from '{}'", config_path)));
        }
    };

    info!(
        "🚨 Valarm starting, target NVR '{}' at {}:{}.",
        master_config.nvr.name, master_config.nvr.host, master_config.nvr.port
    );

    // Dispatch based on subcommand
    if let Some((operation_name, sub_args)) = matches.subcommand() {
        debug!("🎬 Dispatching to subcommand: {}", operation_name);
        let op_start_time = Instant::now();

        let op_result: Result<()> = match operation_name {
            "trigger" => operations::trigger_alarm_op::handle_trigger_alarm_cli(&master_config, sub_args),
            "show-config" => operations::show_config_op::handle_show_config_cli(&master_config, sub_args),
            _ => {
                bail!("Subcommand '{}' not implemented.", operation_name)
            }
        };

        if let Err(e) = op_result {
            error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
            return Err(e);
        } else {
            info!("✅ Operation '{}' completed successfully in {:?}.", operation_name, op_start_time.elapsed());
        }
    } else {
        info!("🤔 No subcommand provided. Use 'trigger' to send the virtual alarm request.");
    }

    info!("🏁 Valarm finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
