use crate::config_loader::MasterConfig;
use crate::errors::AppError;
use crate::nvr::alarm_client::{AlarmClient, VIRTUAL_ALARM_XML};
use crate::nvr::nvr_entity::NvrEntity;
use anyhow::Result;
use clap::ArgMatches;
use log::{debug, error, info};
use std::time::Instant;

/// Runs the `trigger` subcommand: one POST to the NVR, outcome printed to the
/// operator. The outcome never becomes process failure; the tool reports and
/// exits cleanly whether the NVR accepted the alarm or not.
pub fn handle_trigger_alarm_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<()> {
    let op_start_time = Instant::now();

    let mut nvr_config = master_config.nvr.clone();
    if let Some(host) = args.get_one::<String>("host") {
        debug!("  CLI override for host: {}", host);
        nvr_config.host = host.clone();
    }
    if let Some(port) = args.get_one::<u16>("port") {
        debug!("  CLI override for port: {}", port);
        nvr_config.port = *port;
    }
    if let Some(path) = args.get_one::<String>("path") {
        debug!("  CLI override for path: {}", path);
        nvr_config.path = path.clone();
    }
    if let Some(username) = args.get_one::<String>("username") {
        debug!("  CLI override for username: {}", username);
        nvr_config.username = username.clone();
    }

    let entity = NvrEntity::new(nvr_config);
    info!(
        "🚨 Triggering virtual alarm on NVR '{}' at http://{}:{}{}",
        entity.config.name,
        entity.config.host,
        entity.config.port,
        entity.endpoint_path()
    );

    let outcome = match entity.password() {
        Some(password) => {
            let client = AlarmClient::new();
            client.send_api_post(
                &entity.config.host,
                entity.config.port,
                &entity.endpoint_path(),
                &entity.config.username,
                password,
                VIRTUAL_ALARM_XML.as_bytes(),
            )
        }
        None => Err(AppError::Config(format!(
            "Password not available for NVR '{}'. Set the 'password' config field or the '{}' environment variable.",
            entity.config.name,
            NvrEntity::password_env_var(&entity.config.name)
        ))),
    };

    match outcome {
        Ok(response_data) => {
            info!(
                "✅ Virtual alarm triggered on '{}' in {:?}.",
                entity.config.name,
                op_start_time.elapsed()
            );
            println!("Request successful!");
            println!("Response: {}", response_data);
        }
        Err(AppError::HttpStatus { status, body }) => {
            error!(
                "❌ NVR '{}' rejected the virtual alarm with status {} after {:?}.",
                entity.config.name,
                status,
                op_start_time.elapsed()
            );
            println!("Request failed with status code {}", status);
            println!("Response: {}", body);
        }
        Err(AppError::Transport(msg)) => {
            error!(
                "❌ Could not reach NVR '{}' after {:?}: {}",
                entity.config.name,
                op_start_time.elapsed(),
                msg
            );
            println!("HTTP error occurred: {}", msg);
        }
        Err(e) => {
            error!(
                "❌ Virtual alarm trigger for '{}' failed after {:?}: {}",
                entity.config.name,
                op_start_time.elapsed(),
                e
            );
            println!("Error occurred: {}", e);
        }
    }

    Ok(())
}
