// Fri Feb 06 2026 - Alex

use crate::output::error::OutputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one source file per generated type.
///
/// Existing files are never clobbered unless the caller explicitly
/// permits it.
pub struct SourceWriter {
    out_dir: PathBuf,
    overwrite: bool,
}

impl SourceWriter {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            overwrite: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn write(&self, type_name: &str, source: &str) -> Result<PathBuf, OutputError> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{}.java", type_name));
        if path.exists() && !self.overwrite {
            return Err(OutputError::AlreadyExists(path));
        }
        fs::write(&path, source)?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vkgen-writer-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_source_file() {
        let dir = temp_dir("write");
        let writer = SourceWriter::new(&dir);
        let path = writer.write("VkExtent2D", "class VkExtent2D {}").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "class VkExtent2D {}");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = temp_dir("refuse");
        let writer = SourceWriter::new(&dir);
        writer.write("VkFilter", "first").unwrap();
        let err = writer.write("VkFilter", "second").unwrap_err();
        assert!(matches!(err, OutputError::AlreadyExists(_)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_overwrite_when_permitted() {
        let dir = temp_dir("force");
        let first = SourceWriter::new(&dir);
        first.write("VkFilter", "first").unwrap();
        let second = SourceWriter::new(&dir).with_overwrite(true);
        let path = second.write("VkFilter", "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
        fs::remove_dir_all(&dir).unwrap();
    }
}
