//! # Report
//!
//! The report module runs the analysis over a list of labeled sources and renders the
//! results

mod errors;

pub use errors::{ReportError, ReportResult};

use crate::analysis::{analyze, AnalysisResult};
use crate::bridge::json::JsonBridge;

use std::io::Write;
use std::path::{Path, PathBuf};

/// A labeled source of blocks
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Source {
    label: String,
    path: PathBuf,
}

impl Source {
    /// Instantiates a new `Source`
    pub fn new(label: impl ToString, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.to_string(),
            path: path.into(),
        }
    }

    /// Instantiates the source at position `index`, labeled as `Node {index + 1}`
    pub fn numbered(index: usize, path: impl Into<PathBuf>) -> Self {
        Self::new(format!("Node {}", index + 1), path)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

/// Analysis result associated to the source label
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct ReportEntry {
    label: String,
    #[serde(flatten)]
    result: AnalysisResult,
}

impl ReportEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }
}

/// Report over a list of sources; entries keep the order the sources were provided in
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Load and analyze each source in order.
    ///
    /// The first source which fails to load aborts the entire run
    pub fn run(sources: &[Source]) -> ReportResult<Self> {
        let mut entries = Vec::with_capacity(sources.len());
        for source in sources.iter() {
            let sequence = JsonBridge::load(source.path()).map_err(|e| ReportError::Load {
                label: source.label().to_string(),
                source: e,
            })?;
            let result = analyze(&sequence);
            info!(
                "{}: analyzed {} blocks from {}",
                source.label(),
                sequence.without_genesis().len(),
                source.path().display()
            );
            entries.push(ReportEntry {
                label: source.label().to_string(),
                result,
            });
        }
        Ok(Self { entries })
    }

    /// Get report entries
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Render report as text
    pub fn write_text<W>(&self, w: &mut W) -> ReportResult<()>
    where
        W: Write,
    {
        for entry in self.entries.iter() {
            writeln!(w, "{}:", entry.label)?;
            writeln!(
                w,
                "  Total Transactions: {}",
                entry.result.total_transactions()
            )?;
            writeln!(
                w,
                "  Unique Transactions: {}",
                entry.result.unique_transactions()
            )?;
            writeln!(
                w,
                "  Avg Transactions per Block: {}",
                entry.result.avg_rounded()
            )?;
            writeln!(w)?;
        }
        Ok(())
    }

    /// Render report as a pretty JSON array
    pub fn write_json<W>(&self, w: &mut W) -> ReportResult<()>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut *w, &self.entries)?;
        writeln!(w)?;
        Ok(())
    }
}
