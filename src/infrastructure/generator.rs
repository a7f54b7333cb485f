use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::port::FileGenerator;
use crate::domain::model::ProjectLayout;

/// Writes the project tree relative to a base directory (the current working
/// directory in production, a tempdir in tests).
pub struct FsGenerator {
    base: PathBuf,
}

impl FsGenerator {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

impl FileGenerator for FsGenerator {
    fn generate(&self, layout: &ProjectLayout, files: &[(PathBuf, String)]) -> Result<()> {
        let root = self.base.join(layout.name());
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create directory {}", root.display()))?;

        // Directories first: several of them (data/*, reports/figures) hold
        // no generated files, so file writes alone would not create them.
        for dir in layout.directories() {
            let path = self.base.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory {}", path.display()))?;
        }

        for (relative_path, content) in files {
            let full_path = root.join(relative_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            // Truncating write: an existing file is fully replaced.
            fs::write(&full_path, content)
                .with_context(|| format!("Failed to write file {}", full_path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::templates::render_files;
    use tempfile::TempDir;

    fn generate_standard(base: &Path) -> ProjectLayout {
        let layout = ProjectLayout::standard();
        let files = render_files(&layout);
        FsGenerator::new(base).generate(&layout, &files).unwrap();
        layout
    }

    #[test]
    fn test_generate_creates_every_directory() {
        let tmp = TempDir::new().unwrap();
        let layout = generate_standard(tmp.path());

        for dir in layout.directories() {
            let path = tmp.path().join(dir);
            assert!(path.is_dir(), "missing directory: {}", path.display());
        }
    }

    #[test]
    fn test_generate_creates_empty_data_directories() {
        let tmp = TempDir::new().unwrap();
        generate_standard(tmp.path());

        let root = tmp.path().join("Quantitative-Portfolio-Strategy");
        assert!(root.join("data/raw").is_dir());
        assert!(root.join("data/processed").is_dir());
        assert!(root.join("reports/figures").is_dir());
    }

    #[test]
    fn test_generate_creates_every_file_with_content() {
        let tmp = TempDir::new().unwrap();
        let layout = ProjectLayout::standard();
        let files = render_files(&layout);
        FsGenerator::new(tmp.path()).generate(&layout, &files).unwrap();

        let root = tmp.path().join(layout.name());
        for (relative_path, content) in &files {
            let path = root.join(relative_path);
            assert!(path.is_file(), "missing file: {}", path.display());
            assert_eq!(&fs::read_to_string(&path).unwrap(), content);
        }
    }

    #[test]
    fn test_generate_twice_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        generate_standard(tmp.path());
        // Second run must succeed and leave the identical file set.
        let layout = generate_standard(tmp.path());

        let root = tmp.path().join(layout.name());
        assert!(root.join("README.md").is_file());
        assert!(root.join(".github/workflows/python-ci.yml").is_file());
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Quantitative-Portfolio-Strategy");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("README.md"), "stale local edits").unwrap();

        generate_standard(tmp.path());

        let readme = fs::read_to_string(root.join("README.md")).unwrap();
        assert!(!readme.contains("stale local edits"));
        assert!(readme.starts_with("# Quantitative Portfolio Strategy"));
    }

    #[test]
    fn test_generate_writes_nothing_outside_root() {
        let tmp = TempDir::new().unwrap();
        generate_standard(tmp.path());

        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].as_ref().unwrap().file_name(),
            "Quantitative-Portfolio-Strategy"
        );
    }
}
