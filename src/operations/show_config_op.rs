use crate::config_loader::MasterConfig;
use crate::nvr::nvr_entity::NvrEntity;
use anyhow::Result;
use clap::ArgMatches;
use log::debug;

/// Prints the resolved NVR target. The password itself is never echoed, only
/// whether a source for it was found.
pub fn handle_show_config_cli(master_config: &MasterConfig, _args: &ArgMatches) -> Result<()> {
    debug!("Resolving NVR target for show-config.");
    let entity = NvrEntity::new(master_config.nvr.clone());

    println!("NVR:      {}", entity.config.name);
    println!(
        "Target:   http://{}:{}{}",
        entity.config.host,
        entity.config.port,
        entity.endpoint_path()
    );
    println!("Username: {}", entity.config.username);
    println!(
        "Password: {}",
        if entity.password().is_some() {
            "configured"
        } else {
            "NOT SET"
        }
    );
    Ok(())
}
