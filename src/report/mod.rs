//! Rendering and persisting checker results

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::validation::Verdict;

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// One `<path>: <Valid|Invalid> - <message>` line per file
    #[default]
    Normal,
    /// Only the paths of valid files
    Discover,
}

/// Verdicts collected in discovery order
#[derive(Debug, Clone, Default)]
pub struct Report {
    mode: ReportMode,
    entries: Vec<(PathBuf, Verdict)>,
}

impl Report {
    pub fn new(mode: ReportMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, path: PathBuf, verdict: Verdict) {
        self.entries.push((path, verdict));
    }

    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    pub fn entries(&self) -> &[(PathBuf, Verdict)] {
        &self.entries
    }

    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.valid).count()
    }

    /// Render a single entry, or `None` if the mode hides it
    pub fn render_entry(&self, path: &Path, verdict: &Verdict) -> Option<String> {
        match self.mode {
            ReportMode::Normal => Some(format!("{}: {}", path.display(), verdict)),
            ReportMode::Discover if verdict.valid => Some(path.display().to_string()),
            ReportMode::Discover => None,
        }
    }

    /// All rendered lines, in discovery order
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|(path, verdict)| self.render_entry(path, verdict))
            .collect()
    }

    /// `Checked N file(s): V valid, I invalid`
    pub fn summary(&self) -> String {
        let valid = self.valid_count();
        format!(
            "Checked {} file(s): {} valid, {} invalid",
            self.entries.len(),
            valid,
            self.entries.len() - valid
        )
    }

    /// Overwrite `path` with the rendered lines joined by newlines
    pub fn persist(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.lines().join("\n"))
    }
}
