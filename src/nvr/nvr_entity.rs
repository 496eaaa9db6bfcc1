use crate::nvr_config::NvrConfig;
use log::warn;
use std::env;

#[derive(Debug, Clone)]
pub struct NvrEntity {
    pub config: NvrConfig,
    password: Option<String>,
}

impl NvrEntity {
    pub fn new(config: NvrConfig) -> Self {
        let mut entity = NvrEntity {
            config,
            password: None,
        };
        entity.load_password();
        entity
    }

    // The config file value wins; the environment variable is the fallback so
    // credentials can be kept out of checked-in config files.
    fn load_password(&mut self) {
        if let Some(pass) = &self.config.password {
            self.password = Some(pass.clone());
            return;
        }
        let env_var_name = Self::password_env_var(&self.config.name);
        match env::var(&env_var_name) {
            Ok(pass) => self.password = Some(pass),
            Err(_) => warn!(
                "Password not set in config and not found in environment variable '{}' for NVR '{}'",
                env_var_name,
                self.config.name
            ),
        }
    }

    pub fn password_env_var(name: &str) -> String {
        format!("{}_PASSWORD", name.to_uppercase().replace('-', "_"))
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn endpoint_path(&self) -> String {
        let path = self.config.path.trim();
        // Ensure path starts with a slash if not empty
        if !path.is_empty() && !path.starts_with('/') {
            format!("/{}", path)
        } else {
            path.to_string()
        }
    }
}
