//! Code generation pipeline for Lantern bindings

use std::collections::hash_map::{Entry, HashMap};
use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    error::Result,
    render::{FragmentKind, Fragments, GeneratedFragment},
    rewrite::{MarkerPair, RewriteMode, RewriteOutcome, TargetFile},
    schema::Schema,
};

/// Inputs of one generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Declarations schema (YAML or JSON)
    pub schema_path: PathBuf,
    /// Source file receiving the stub bodies
    pub source_path: PathBuf,
    /// Header receiving declarations and symbol loaders
    pub header_path: PathBuf,
    pub mode: RewriteMode,
}

impl GenerateRequest {
    pub fn new(
        schema_path: impl Into<PathBuf>,
        source_path: impl Into<PathBuf>,
        header_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            source_path: source_path.into(),
            header_path: header_path.into(),
            mode: RewriteMode::Write,
        }
    }
}

/// One region rewrite performed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionReport {
    pub path: PathBuf,
    pub kind: FragmentKind,
    pub outcome: RewriteOutcome,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Number of function entries in the schema
    pub function_count: usize,
    /// Region rewrites, in the order they ran
    pub regions: Vec<RegionReport>,
}

impl GenerateReport {
    /// Regions whose content differs from what was generated
    pub fn stale_regions(&self) -> impl Iterator<Item = &RegionReport> {
        self.regions
            .iter()
            .filter(|region| region.outcome == RewriteOutcome::Replaced)
    }
}

/// Progress notifications emitted while a run advances
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    SchemaLoaded { path: &'a Path, function_count: usize },
    Region(&'a RegionReport),
}

/// Main entry point for code generation
pub async fn generate(request: &GenerateRequest, config: &Config) -> Result<GenerateReport> {
    generate_with_progress(request, config, |_| {}).await
}

/// Run generation, reporting each step to `on_progress` as it completes.
///
/// The schema is loaded and every fragment rendered before any target is
/// read, so a bad schema never touches the disk. The three rewrites then run
/// one after another; a failure leaves earlier rewrites in place.
pub async fn generate_with_progress<F>(
    request: &GenerateRequest,
    config: &Config,
    mut on_progress: F,
) -> Result<GenerateReport>
where
    F: FnMut(Progress<'_>),
{
    // 1. Load declarations schema
    let schema = Schema::from_file(&request.schema_path).await?;
    log::info!(
        "Loaded {} with {} nodes",
        request.schema_path.display(),
        schema.len()
    );
    on_progress(Progress::SchemaLoaded {
        path: &request.schema_path,
        function_count: schema.len(),
    });

    // 2. Render all fragments
    let fragments = Fragments::render(&schema, &config.function_prefix);

    // 3. Rewrite regions
    let steps: [(&Path, &MarkerPair, &GeneratedFragment); 3] = [
        (request.source_path.as_path(), &config.body_markers, &fragments.stubs),
        (request.header_path.as_path(), &config.header_markers, &fragments.declarations),
        (request.header_path.as_path(), &config.symbol_markers, &fragments.symbols),
    ];

    let mut report = GenerateReport {
        function_count: schema.len(),
        regions: Vec::with_capacity(steps.len()),
    };
    // The header is the target of two steps; later steps see earlier edits.
    let mut targets: HashMap<PathBuf, TargetFile> = HashMap::new();
    for (path, markers, fragment) in steps {
        let target = match targets.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(TargetFile::load(path).await?),
        };
        let outcome =
            target.rewrite_region(markers, &fragment.lines, config.end_marker_policy)?;
        if request.mode == RewriteMode::Write {
            target.save().await?;
        }

        let region = RegionReport {
            path: path.to_path_buf(),
            kind: fragment.kind,
            outcome,
        };
        on_progress(Progress::Region(&region));
        report.regions.push(region);
    }

    Ok(report)
}
