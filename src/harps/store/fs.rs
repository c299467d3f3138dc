use super::HarpStore;
use crate::error::{HarpsError, Result};
use crate::model::{Harp, Register, Section};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "harps.json";

type SectionMap = BTreeMap<String, BTreeMap<String, String>>;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HarpsError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<SectionMap> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(SectionMap::new());
        }
        let content = fs::read_to_string(&data_file).map_err(HarpsError::Io)?;
        if content.trim().is_empty() {
            return Ok(SectionMap::new());
        }
        let sections: SectionMap =
            serde_json::from_str(&content).map_err(HarpsError::Serialization)?;
        Ok(sections)
    }

    fn save(&self, sections: &SectionMap) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(sections).map_err(HarpsError::Serialization)?;
        fs::write(self.data_path(), content).map_err(HarpsError::Io)?;
        Ok(())
    }
}

impl HarpStore for FileStore {
    fn get(&self, section: Section, register: Register) -> Result<Option<String>> {
        let sections = self.load()?;
        Ok(sections
            .get(section.name())
            .and_then(|harps| harps.get(&register.to_string()))
            .cloned())
    }

    fn set(&mut self, section: Section, register: Register, value: &str) -> Result<()> {
        let mut sections = self.load()?;
        sections
            .entry(section.name().to_string())
            .or_default()
            .insert(register.to_string(), value.to_string());
        self.save(&sections)?;
        tracing::debug!(section = %section, register = %register, "wrote harp");
        Ok(())
    }

    fn remove(&mut self, section: Section, register: Register) -> Result<bool> {
        let mut sections = self.load()?;
        let removed = sections
            .get_mut(section.name())
            .and_then(|harps| harps.remove(&register.to_string()))
            .is_some();
        if removed {
            self.save(&sections)?;
        }
        Ok(removed)
    }

    fn list(&self, section: Section) -> Result<Vec<Harp>> {
        let sections = self.load()?;
        let Some(harps) = sections.get(section.name()) else {
            return Ok(Vec::new());
        };

        let mut listed = Vec::with_capacity(harps.len());
        for (key, value) in harps {
            match key.parse::<Register>() {
                Ok(register) => listed.push(Harp::new(register, value.clone())),
                Err(_) => {
                    tracing::warn!(section = %section, key = %key, "skipping entry with invalid register");
                }
            }
        }
        listed.sort_by_key(|h| h.register);
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{self, SENTINEL};
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get(Section::Search, Register::new('a')).unwrap(), None);
        assert!(store.list(Section::Search).unwrap().is_empty());
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = tempdir().unwrap();
        let value = codec::encode("/tmp/a.rs", &format!("fn{}e", SENTINEL));

        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .set(Section::GlobalSearch, Register::new('q'), &value)
            .unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(
            reopened
                .get(Section::GlobalSearch, Register::new('q'))
                .unwrap(),
            Some(value)
        );
    }

    #[test]
    fn sentinel_is_written_raw() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .set(Section::Search, Register::new('a'), &format!("x{}e", SENTINEL))
            .unwrap();

        let raw = fs::read_to_string(store.data_path()).unwrap();
        assert!(raw.contains("x\u{7f}e"), "{raw:?}");
    }

    #[test]
    fn remove_rewrites_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set(Section::Search, Register::new('a'), "x").unwrap();
        store.set(Section::Search, Register::new('b'), "y").unwrap();

        assert!(store.remove(Section::Search, Register::new('a')).unwrap());
        assert!(!store.remove(Section::Search, Register::new('a')).unwrap());

        let listed = store.list(Section::Search).unwrap();
        assert_eq!(listed, vec![Harp::new(Register::new('b'), "y")]);
    }

    #[test]
    fn invalid_register_keys_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DATA_FILENAME),
            r#"{"harp_search": {"a": "ok", "too-long": "bad"}}"#,
        )
        .unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        let listed = store.list(Section::Search).unwrap();
        assert_eq!(listed, vec![Harp::new(Register::new('a'), "ok")]);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DATA_FILENAME), "not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.get(Section::Search, Register::new('a')),
            Err(HarpsError::Serialization(_))
        ));
    }
}
