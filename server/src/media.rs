use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Public URL prefix uploaded files are served under.
pub const PUBLIC_PREFIX: &str = "/uploaded_images";

/// Filesystem store for uploaded recipe images.
///
/// Every upload is written under a freshly generated name that keeps only
/// the original file extension. Replacing a recipe's image does not remove
/// the previous file.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Opens the store, creating the backing directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `data` under a unique name and returns the public reference
    /// path for it.
    pub async fn save(&self, original_filename: &str, data: &[u8]) -> std::io::Result<String> {
        let name = storage_name(original_filename);
        tokio::fs::write(self.root.join(&name), data).await?;
        Ok(format!("{PUBLIC_PREFIX}/{name}"))
    }
}

/// Unique storage name: UUIDv4 hex plus the original extension, if any.
/// `Path::extension` never yields path separators, so the client filename
/// cannot steer the write outside the store directory.
fn storage_name(original_filename: &str) -> String {
    match Path::new(original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{}.{}", Uuid::new_v4().simple(), ext),
        None => Uuid::new_v4().simple().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_preserve_only_the_extension() {
        let name = storage_name("dinner photo.JPG");
        assert!(name.ends_with(".JPG"));
        assert!(!name.contains(' '));
        assert_eq!(name.len(), 32 + 4);
    }

    #[test]
    fn names_are_unique() {
        assert_ne!(storage_name("a.png"), storage_name("a.png"));
    }

    #[test]
    fn extensionless_uploads_get_a_bare_name() {
        let name = storage_name("photo");
        assert_eq!(name.len(), 32);
        assert!(!name.contains('.'));
    }

    #[test]
    fn hostile_filenames_cannot_escape_the_store() {
        let name = storage_name("../../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));

        let name = storage_name("..");
        assert!(!name.contains('.'));
    }
}
