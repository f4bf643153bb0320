use {
    super::{
        Record,
        Storage,
    },
    anyhow::Context,
    axum::async_trait,
    serde::Serialize,
    std::{
        io::ErrorKind,
        path::PathBuf,
    },
    uuid::Uuid,
};

/// Store kept as a pretty printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn temporary_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("bids");
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

fn to_pretty_json(records: &[Record]) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> anyhow::Result<Vec<Record>> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read bid store {}", self.path.display())
                })
            }
        };
        serde_json::from_slice(&content)
            .with_context(|| format!("Malformed bid store {}", self.path.display()))
    }

    /// The new content is written next to the store and renamed over it, so readers never see a
    /// partially written store.
    async fn save(&self, records: &[Record]) -> anyhow::Result<()> {
        let content = to_pretty_json(records)?;
        let temporary_path = self.temporary_path();
        tokio::fs::write(&temporary_path, content)
            .await
            .with_context(|| format!("Failed to write {}", temporary_path.display()))?;
        if let Err(e) = tokio::fs::rename(&temporary_path, &self.path).await {
            if let Err(remove_error) = tokio::fs::remove_file(&temporary_path).await {
                tracing::warn!(
                    error = remove_error.to_string(),
                    path = temporary_path.display().to_string(),
                    "Failed to remove temporary bid store"
                );
            }
            return Err(e).with_context(|| {
                format!("Failed to replace bid store {}", self.path.display())
            });
        }
        Ok(())
    }
}
