use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::HighScoreKey;
use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use super::HighScoreStore;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct HighScoreTable {
    pub scores: BTreeMap<String, u32>,
}

/// Best scores in one YAML document, one entry per key.
pub struct FileHighScoreStore<TConfigContentProvider = FileContentConfigProvider>
where
    TConfigContentProvider: ConfigContentProvider,
{
    content_provider: TConfigContentProvider,
    serializer: YamlConfigSerializer,
}

impl FileHighScoreStore<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path))
    }
}

impl<TConfigContentProvider> FileHighScoreStore<TConfigContentProvider>
where
    TConfigContentProvider: ConfigContentProvider,
{
    pub fn new(content_provider: TConfigContentProvider) -> Self {
        Self {
            content_provider,
            serializer: YamlConfigSerializer::new(),
        }
    }

    fn read_table(&self) -> Result<HighScoreTable, String> {
        match self.content_provider.get_config_content()? {
            Some(content) => self.serializer.deserialize(&content),
            None => Ok(HighScoreTable::default()),
        }
    }
}

impl<TConfigContentProvider> HighScoreStore for FileHighScoreStore<TConfigContentProvider>
where
    TConfigContentProvider: ConfigContentProvider + Send + 'static,
{
    fn load_high_score(&self, key: &HighScoreKey) -> Result<u32, String> {
        let table = self.read_table()?;
        Ok(table.scores.get(key.as_str()).copied().unwrap_or(0))
    }

    fn save_high_score(&self, key: &HighScoreKey, value: u32) -> Result<(), String> {
        let mut table = self.read_table()?;
        table.scores.insert(key.to_string(), value);
        let content = self.serializer.serialize(&table)?;
        self.content_provider.set_config_content(&content)
    }
}
