use std::path::{Path, PathBuf};

/// State of the previewed document.
///
/// The path is fixed for the lifetime of the preview; `markdown` tracks the
/// most recently observed file content and `revision` counts refreshes so the
/// UI can tell whether a render is current.
#[derive(Debug, Clone)]
pub struct DocumentState {
    path: PathBuf,
    markdown: String,
    revision: u64,
}

impl DocumentState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            markdown: String::new(),
            revision: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records newly observed file content and bumps the revision.
    pub fn update(&mut self, markdown: String) {
        self.markdown = markdown;
        self.revision += 1;
    }
}
