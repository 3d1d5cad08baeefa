//! Marker-delimited region rewriting.
//!
//! A region is the run of lines strictly between a start marker line and the
//! first end marker line that follows it. Markers are compared as whole lines,
//! byte for byte apart from a CRLF `\r`, so leading whitespace is part of a
//! marker's identity.
//!
//! Rewriting reads the whole target into memory, swaps the region's body for
//! the replacement lines and writes the whole file back. Every output line is
//! terminated with `\n`. The write is not atomic: a crash mid-write can leave
//! the file truncated, and the fix is to restore it and re-run.
//!
//! Running the same rewrite twice is a no-op the second time, since the
//! markers still bracket the content inserted by the first run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{Error, Result};

/// Literal start and end lines delimiting a generated region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerPair {
    pub start: String,
    pub end: String,
}

impl MarkerPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Stub bodies in the source file
    pub fn body() -> Self {
        Self::new("/* Autogen Body -- Start */", "/* Autogen Body -- End */")
    }

    /// Function-pointer declarations in the header
    pub fn headers() -> Self {
        Self::new(
            "/* Autogen Headers -- Start */",
            "/* Autogen Headers -- End */",
        )
    }

    /// Symbol loaders in the header, indented one level
    pub fn symbols() -> Self {
        Self::new(
            "  /* Autogen Symbols -- Start */",
            "  /* Autogen Symbols -- End */",
        )
    }
}

/// Behavior when a start marker is present but no end marker follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndMarkerPolicy {
    /// Replace everything from just after the start marker to end of file.
    #[default]
    ThroughEndOfFile,
    /// Fail with [`Error::MissingEndMarker`] and leave the file untouched.
    Strict,
}

/// Whether a rewrite touches the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    #[default]
    Write,
    /// Compute the outcome only; the target is never written.
    Check,
}

/// Result of one region rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The region changed. In [`RewriteMode::Write`] the file was rewritten.
    Replaced,
    /// The region already held the replacement; nothing was written.
    Unchanged,
    /// The start marker does not occur in the file; nothing was written.
    MarkerNotFound,
}

/// Line indices of a located region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Index of the start marker line
    pub start: usize,
    /// Index of the end marker line, `None` if no end marker follows `start`
    pub end: Option<usize>,
}

/// Split file content on `\n`. A `\r` before the `\n` stays on the line so
/// CRLF files are written back unchanged outside the region.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_terminator('\n').map(str::to_owned).collect()
}

/// Join lines back into file content, terminating each with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == marker
}

/// Locate the first start marker and the first end marker after it.
pub fn find_region<S: AsRef<str>>(lines: &[S], markers: &MarkerPair) -> Option<Region> {
    let start = lines
        .iter()
        .position(|line| is_marker(line.as_ref(), &markers.start))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| is_marker(line.as_ref(), &markers.end))
        .map(|offset| start + 1 + offset);
    Some(Region { start, end })
}

/// Replace the body of `region` with `replacement`.
///
/// Without an end marker the body runs to the last line. Replacement lines
/// take the start marker's line ending.
pub fn splice_region(lines: &mut Vec<String>, region: Region, replacement: &[String]) {
    let crlf = lines[region.start].ends_with('\r');
    let body_end = region.end.unwrap_or(lines.len());
    lines.splice(
        region.start + 1..body_end,
        replacement.iter().map(|line| {
            if crlf {
                format!("{}\r", line)
            } else {
                line.clone()
            }
        }),
    );
}

/// A target file held in memory across several region rewrites.
///
/// Rewrites only change the in-memory content; [`TargetFile::save`] writes it
/// back when it differs from what is on disk.
#[derive(Debug, Clone)]
pub struct TargetFile {
    path: PathBuf,
    on_disk: String,
    content: String,
}

impl TargetFile {
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let on_disk = fs::read_to_string(&path)
            .await
            .map_err(|e| Error::target_file(&path, e))?;
        Ok(Self {
            path,
            content: on_disk.clone(),
            on_disk,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory content, including unsaved rewrites
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the region delimited by `markers` in the in-memory content.
    ///
    /// A missing start marker is not an error and leaves the content
    /// untouched.
    pub fn rewrite_region(
        &mut self,
        markers: &MarkerPair,
        replacement: &[String],
        policy: EndMarkerPolicy,
    ) -> Result<RewriteOutcome> {
        let mut lines = split_lines(&self.content);

        let Some(region) = find_region(&lines, markers) else {
            log::debug!(
                "Start marker {:?} not found in {}, skipping",
                markers.start,
                self.path.display()
            );
            return Ok(RewriteOutcome::MarkerNotFound);
        };

        if region.end.is_none() {
            match policy {
                EndMarkerPolicy::Strict => {
                    return Err(Error::MissingEndMarker {
                        path: self.path.clone(),
                        marker: markers.end.clone(),
                    })
                }
                EndMarkerPolicy::ThroughEndOfFile => log::warn!(
                    "End marker {:?} not found in {}, replacing through end of file",
                    markers.end,
                    self.path.display()
                ),
            }
        }

        splice_region(&mut lines, region, replacement);
        let updated = join_lines(&lines);
        if updated == self.content {
            log::debug!(
                "Region {:?} in {} is up to date",
                markers.start,
                self.path.display()
            );
            return Ok(RewriteOutcome::Unchanged);
        }

        self.content = updated;
        Ok(RewriteOutcome::Replaced)
    }

    /// Write the content back if it differs from the disk. Returns whether a
    /// write happened.
    pub async fn save(&mut self) -> Result<bool> {
        if self.content == self.on_disk {
            return Ok(false);
        }
        log::info!("Replacing {}", self.path.display());
        fs::write(&self.path, &self.content)
            .await
            .map_err(|e| Error::target_file(&self.path, e))?;
        self.on_disk = self.content.clone();
        Ok(true)
    }
}

/// Replace the region delimited by `markers` in the file at `path`.
///
/// A missing start marker is not an error and leaves the file byte-for-byte
/// untouched. An unreadable or unwritable target is [`Error::TargetFile`].
pub async fn rewrite_region(
    path: &Path,
    markers: &MarkerPair,
    replacement: &[String],
    policy: EndMarkerPolicy,
    mode: RewriteMode,
) -> Result<RewriteOutcome> {
    let mut target = TargetFile::load(path).await?;
    let outcome = target.rewrite_region(markers, replacement, policy)?;
    if mode == RewriteMode::Write {
        target.save().await?;
    }
    Ok(outcome)
}
