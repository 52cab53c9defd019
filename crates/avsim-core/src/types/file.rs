use serde::{Deserialize, Serialize};

/// A file queued for scanning, as described by the host environment.
///
/// The pipeline never touches the filesystem; name and size are the only
/// facts it ever learns about a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name as presented by the host
    pub name: String,

    /// File size in bytes
    pub size_bytes: u64,
}

impl FileDescriptor {
    /// Create a new file descriptor
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Returns true if the file has no content
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }

    /// Size formatted in kilobytes for display, e.g. `"1.50 KB"`
    #[must_use]
    pub fn size_display(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

impl std::fmt::Display for FileDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.size_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = FileDescriptor::new("empty.bin", 0);
        assert!(file.is_empty());
        assert_eq!(file.size_display(), "0.00 KB");
    }

    #[test]
    fn test_size_display() {
        let file = FileDescriptor::new("doc.pdf", 1536);
        assert!(!file.is_empty());
        assert_eq!(file.size_display(), "1.50 KB");
        assert_eq!(file.to_string(), "doc.pdf (1.50 KB)");
    }
}
