use super::HarpStore;
use crate::error::Result;
use crate::model::{Harp, Register, Section};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    sections: HashMap<Section, BTreeMap<Register, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HarpStore for InMemoryStore {
    fn get(&self, section: Section, register: Register) -> Result<Option<String>> {
        Ok(self
            .sections
            .get(&section)
            .and_then(|harps| harps.get(&register))
            .cloned())
    }

    fn set(&mut self, section: Section, register: Register, value: &str) -> Result<()> {
        self.sections
            .entry(section)
            .or_default()
            .insert(register, value.to_string());
        Ok(())
    }

    fn remove(&mut self, section: Section, register: Register) -> Result<bool> {
        Ok(self
            .sections
            .get_mut(&section)
            .and_then(|harps| harps.remove(&register))
            .is_some())
    }

    fn list(&self, section: Section) -> Result<Vec<Harp>> {
        Ok(self
            .sections
            .get(&section)
            .map(|harps| {
                harps
                    .iter()
                    .map(|(register, value)| Harp::new(*register, value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_harp(mut self, section: Section, register: char, value: &str) -> Self {
            self.store
                .set(section, Register::new(register), value)
                .unwrap();
            self
        }
    }
}
