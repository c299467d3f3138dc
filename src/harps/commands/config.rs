use crate::commands::{CmdMessage, CmdResult};
use crate::config::HarpsConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    // Setting a key rewrites the file, which is how a corrupt config gets repaired.
    let mut config = match action {
        ConfigAction::Set(..) => HarpsConfig::load_or_default(config_dir),
        _ => HarpsConfig::load(config_dir)?,
    };
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempdir().unwrap();

        run(
            dir.path(),
            ConfigAction::Set("ask-offset".into(), "true".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("ask-offset".into())).unwrap();
        assert_eq!(result.messages[0].content, "ask-offset = true");
        assert!(result.config.unwrap().ask_offset);
    }

    #[test]
    fn set_overwrites_corrupt_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

        assert!(run(dir.path(), ConfigAction::ShowAll).is_err());

        run(
            dir.path(),
            ConfigAction::Set("infer-offset".into(), "true".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        let config = result.config.unwrap();
        assert!(config.infer_offset);
        assert!(!config.ask_offset);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }

    #[test]
    fn show_all_returns_config() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(HarpsConfig::default()));
    }
}
