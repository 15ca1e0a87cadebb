use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cfg: &Config, print_config: bool, init: bool) -> AppResult<()> {
    if init {
        Config::default().save()?;
        messages::success(format!("Config file: {:?}", Config::config_file()));
        return Ok(());
    }

    if print_config {
        let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
        print!("{yaml}");
        return Ok(());
    }

    messages::info(format!("Config file: {:?}", Config::config_file()));
    messages::note("use --print to show it, --init to create it");
    Ok(())
}
