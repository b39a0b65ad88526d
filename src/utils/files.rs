//! Text file capabilities
//!
//! The orchestration reads input text and persists converted text through
//! the [`TextFiles`] trait, so it can run against the real filesystem (CLI)
//! or an in-memory store (tests, WASM).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::error::FileError;

/// Trait for reading and writing whole text files
pub trait TextFiles: Send + Sync {
    /// Read a file's contents
    fn read_text(&self, path: &Path) -> Result<String, FileError>;

    /// Persist `text` at `path`, replacing any previous content
    fn write_text(&self, path: &Path, text: &str) -> Result<(), FileError>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;
}

/// Standard filesystem implementation (for CLI usage)
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTextFiles;

impl StdTextFiles {
    pub fn new() -> Self {
        Self
    }
}

impl TextFiles for StdTextFiles {
    fn read_text(&self, path: &Path) -> Result<String, FileError> {
        debug!(path = %path.display(), "reading text");
        std::fs::read_to_string(path).map_err(|e| FileError::read(path, e))
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<(), FileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FileError::write(path, e))?;
        }
        debug!(path = %path.display(), bytes = text.len(), "writing text");
        std::fs::write(path, text).map_err(|e| FileError::write(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Memory-based implementation (for testing and WASM)
#[derive(Debug, Default)]
pub struct MemoryTextFiles {
    files: Mutex<HashMap<PathBuf, String>>,
    read_only: bool,
}

impl MemoryTextFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, for exercising failure paths
    pub fn read_only() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            read_only: true,
        }
    }

    /// Add a file to the in-memory storage
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.lock().insert(path.into(), content.to_string());
    }

    /// Current content of a stored file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        // A poisoned map is still a valid map
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TextFiles for MemoryTextFiles {
    fn read_text(&self, path: &Path) -> Result<String, FileError> {
        self.lock()
            .get(path)
            .cloned()
            .ok_or_else(|| FileError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<(), FileError> {
        if self.read_only {
            return Err(FileError::write(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store"),
            ));
        }
        self.lock().insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }
}

/// Path of the converted-text companion of an audio file: same stem, `.txt`.
/// An audio path that is itself `.txt` gets `.converted.txt` so the saved
/// text is never the synthesis target.
pub fn text_companion_path(audio_path: &Path) -> PathBuf {
    let is_txt = audio_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if is_txt {
        audio_path.with_extension("converted.txt")
    } else {
        audio_path.with_extension("txt")
    }
}

/// Default audio path under `output_dir`: `<input stem>_tts.wav` when an
/// input file is known, otherwise `math_formula_tts.wav`
pub fn default_audio_path(output_dir: &Path, input_file: Option<&Path>) -> PathBuf {
    let stem = input_file
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .map(|s| format!("{}_tts.wav", s));
    output_dir.join(stem.as_deref().unwrap_or("math_formula_tts.wav"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let files = MemoryTextFiles::new();
        assert!(files.is_empty());
        files.add_file("in.txt", "E = mc²");
        assert_eq!(files.read_text(Path::new("in.txt")).unwrap(), "E = mc²");
        files.write_text(Path::new("out.txt"), "done").unwrap();
        assert_eq!(files.get("out.txt").as_deref(), Some("done"));
        assert!(files.exists(Path::new("out.txt")));
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_memory_missing_file() {
        let files = MemoryTextFiles::new();
        let err = files.read_text(Path::new("nope.txt")).unwrap_err();
        assert!(matches!(err, FileError::NotFound { .. }));
    }

    #[test]
    fn test_read_only_store_rejects_writes() {
        let files = MemoryTextFiles::read_only();
        let err = files.write_text(Path::new("x.txt"), "x").unwrap_err();
        assert!(matches!(err, FileError::Write { .. }));
    }

    #[test]
    fn test_std_files_create_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        let files = StdTextFiles::new();
        files.write_text(&path, "hello").unwrap();
        assert_eq!(files.read_text(&path).unwrap(), "hello");
    }

    #[test]
    fn test_std_files_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = StdTextFiles
            .read_text(&dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, FileError::NotFound { .. }));
    }

    #[test]
    fn test_text_companion_path() {
        assert_eq!(
            text_companion_path(Path::new("output/speech.wav")),
            PathBuf::from("output/speech.txt")
        );
        assert_eq!(
            text_companion_path(Path::new("output/speech.TXT")),
            PathBuf::from("output/speech.converted.txt")
        );
        assert_ne!(
            text_companion_path(Path::new("speech.txt")),
            PathBuf::from("speech.txt")
        );
    }

    #[test]
    fn test_default_audio_path() {
        let dir = Path::new("output");
        assert_eq!(
            default_audio_path(dir, Some(Path::new("notes/lecture.md"))),
            PathBuf::from("output/lecture_tts.wav")
        );
        assert_eq!(
            default_audio_path(dir, None),
            PathBuf::from("output/math_formula_tts.wav")
        );
    }
}
