use crate::commands::{CmdMessage, CmdResult, ConfigAction};
use crate::config::GistSyncConfig;
use crate::error::Result;
use std::path::Path;

/// Show or change persisted configuration in `<config_dir>/.gistsync.json`.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = GistSyncConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = match key.as_str() {
                "tool" => Some(&config.gist_bin),
                "id-dir" => Some(&config.id_dir),
                _ => None,
            };
            match value {
                Some(value) => {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)))
                }
                None => result
                    .add_message(CmdMessage::warning(format!("Unknown config key: {}", key))),
            }
        }
        ConfigAction::SetTool(value) => {
            config.gist_bin = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "tool set to {}",
                config.gist_bin
            )));
        }
        ConfigAction::SetIdDir(value) => {
            config.id_dir = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "id-dir set to {}",
                config.id_dir
            )));
        }
    }

    Ok(result.with_config(config))
}
