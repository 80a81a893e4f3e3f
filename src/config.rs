//! Configuration handling
use std::{
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    cli::IssueFilerCli,
    errors::{IssueFilerError, IssueFilerErrorKind},
    github::config::GithubConfig,
    token_store::TokenStoreConfig,
};

/// Configuration data
#[derive(Deserialize, Default, Clone, Debug)]
pub struct IssueFilerConfig {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: IssueFilerCli,
}

/// On-disk configuration sections
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct ConfigData {
    /// Github configuration
    pub github: Option<GithubConfig>,

    /// Token exchange service configuration
    pub token_store: Option<TokenStoreConfig>,
}

impl IssueFilerConfig {
    /// Create a new Config object from the default path
    /// # Errors
    /// Error if the config file can't be opened
    pub fn try_new(cli_args: IssueFilerCli) -> Result<Self, IssueFilerError> {
        let config_path = match cli_args.config.clone() {
            Some(p) => p,
            None => Self::get_config_path()?,
        };
        let contents = read_to_string(config_path.clone()).map_err(|e| {
            IssueFilerError::new_with_source(IssueFilerErrorKind::Config, "Unable to open", e)
        })?;
        let config_data = toml::from_str(&contents)?;
        Ok(IssueFilerConfig {
            config_path,
            cli_args,
            config_data,
        })
    }

    /// Save the config data to the config file
    /// # Errors
    /// Error if the config file can't be created or written to
    pub fn save(&self) -> Result<(), IssueFilerError> {
        let config_str = toml::to_string(&self.config_data).map_err(|e| {
            IssueFilerError::new_with_source(
                IssueFilerErrorKind::Config,
                "Unable to serialize config",
                e,
            )
        })?;
        let mut file = File::create(&self.config_path).map_err(|e| {
            IssueFilerError::new_with_source(
                IssueFilerErrorKind::Config,
                "Unable to create config file",
                e,
            )
        })?;
        file.write_all(config_str.as_bytes()).map_err(|e| {
            IssueFilerError::new_with_source(
                IssueFilerErrorKind::Config,
                "Unable to write to config file",
                e,
            )
        })
    }

    /// Get the path to the config file
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, IssueFilerError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        let config_directory = home_dir.join(".config").join(".issue-filer");
        let config_path = config_directory.join("config.toml");
        create_dir_all(config_directory).map_err(|e| {
            IssueFilerError::new_with_source(
                IssueFilerErrorKind::Config,
                "Unable to create config dir",
                e,
            )
        })?;
        if !config_path.exists() {
            let mut file = File::create(&config_path).map_err(|e| {
                IssueFilerError::new_with_source(
                    IssueFilerErrorKind::Config,
                    "Unable to create config file",
                    e,
                )
            })?;
            file.write_all(b"").map_err(|e| {
                IssueFilerError::new_with_source(
                    IssueFilerErrorKind::Config,
                    "Unable to write to config file",
                    e,
                )
            })?;
        }
        Ok(config_path)
    }

    /// Update the config data and save it to the config file
    /// # Errors
    /// Error if fail to save config
    pub fn update(
        &mut self,
        updater_fn: impl FnOnce(&mut ConfigData),
    ) -> Result<(), IssueFilerError> {
        updater_fn(&mut self.config_data);
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn config_sections_parse() {
        let data: ConfigData = toml::from_str(
            "[github]\nowner = \"acme\"\nrepo = \"helpdesk\"\n\n[token_store]\nurl = \"https://tokens.example.com/exchange\"\n",
        )
        .unwrap();
        let github = data.github.unwrap();
        assert_eq!(github.owner.as_deref(), Some("acme"));
        assert_eq!(github.repo.as_deref(), Some("helpdesk"));
        assert!(github.token.is_none());
        let token_store = data.token_store.unwrap();
        assert_eq!(
            token_store.url.as_deref(),
            Some("https://tokens.example.com/exchange")
        );
    }

    #[test]
    fn empty_config_parses() {
        let data: ConfigData = toml::from_str("").unwrap();
        assert!(data.github.is_none());
        assert!(data.token_store.is_none());
    }
}
