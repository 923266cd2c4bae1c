use crate::domain::model::PolicyRule;
use crate::domain::ports::{Adapter, FileAdapterProvider};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::validate_path;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Policy rules stored one per line in a comma-separated file:
///
/// ```text
/// p, alice, data1, read
/// g, alice, admin
/// ```
#[derive(Debug, Clone)]
pub struct FileAdapter {
    path: String,
}

impl FileAdapter {
    /// Does not touch the disk; a bad path surfaces on load or save.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    fn parse_rules(data: &[u8]) -> Result<Vec<PolicyRule>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(data);

        let mut rules = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut fields = record.iter();
            let Some(ptype) = fields.next().filter(|p| !p.is_empty()) else {
                continue;
            };
            let values: Vec<&str> = fields.collect();
            if values.is_empty() {
                continue;
            }
            rules.push(PolicyRule::new(ptype, values));
        }
        Ok(rules)
    }

    fn render_rules(rules: &[PolicyRule]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(Vec::new());

        for rule in rules {
            writer.write_record(
                std::iter::once(rule.ptype.as_str()).chain(rule.values.iter().map(String::as_str)),
            )?;
        }

        writer.into_inner().map_err(|e| AdapterError::PolicyError {
            message: format!("failed to flush policy rules: {}", e),
        })
    }
}

#[async_trait]
impl Adapter for FileAdapter {
    async fn load_policy(&self) -> Result<Vec<PolicyRule>> {
        validate_path("file_path", &self.path)?;

        let data = tokio::fs::read(&self.path).await?;
        let rules = Self::parse_rules(&data)?;
        tracing::debug!(path = %self.path, rules = rules.len(), "loaded policy file");
        Ok(rules)
    }

    async fn save_policy(&self, rules: &[PolicyRule]) -> Result<()> {
        validate_path("file_path", &self.path)?;

        let data = Self::render_rules(rules)?;
        if let Some(parent) = self.path().parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, data).await?;
        tracing::debug!(path = %self.path, rules = rules.len(), "saved policy file");
        Ok(())
    }
}

/// Opens file adapters relative to an optional base directory.
#[derive(Debug, Clone, Default)]
pub struct LocalFileProvider {
    base_path: Option<PathBuf>,
}

impl LocalFileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }
}

#[async_trait]
impl FileAdapterProvider for LocalFileProvider {
    async fn open(&self, path: &str) -> Result<Box<dyn Adapter>> {
        let full_path = match &self.base_path {
            Some(base) if !path.is_empty() => base.join(path).to_string_lossy().into_owned(),
            _ => path.to_string(),
        };
        Ok(Box::new(FileAdapter::new(full_path)))
    }
}
