//! Test utilities for lanterngen integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use tempfile::TempDir;

pub const HEADER: &str = "\
#pragma once
#define LANTERN_API extern
/* Autogen Headers -- Start */
/* Autogen Headers -- End */

static void lantern_load(void* lib) {
  /* Autogen Symbols -- Start */
  /* Autogen Symbols -- End */
}
";

pub const SOURCE: &str = "\
#include \"lantern.h\"

/* Autogen Body -- Start */
/* Autogen Body -- End */
";

/// Paths of a scratch Lantern project
pub struct Project {
    root: TempDir,
    pub declarations: PathBuf,
    pub source: PathBuf,
    pub header: PathBuf,
}

impl Project {
    pub fn args(&self) -> [&Path; 3] {
        [&self.declarations, &self.source, &self.header]
    }

    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    pub fn header_content(&self) -> String {
        fs::read_to_string(&self.header).unwrap()
    }

    pub fn source_content(&self) -> String {
        fs::read_to_string(&self.source).unwrap()
    }
}

/// Creates a scratch project with the stock header and source and the given schema
pub fn create_project(declarations: &str) -> anyhow::Result<Project> {
    let dir = tempfile::tempdir()?;
    let project = Project {
        declarations: dir.path().join("declarations.yaml"),
        source: dir.path().join("lantern.cpp"),
        header: dir.path().join("lantern.h"),
        root: dir,
    };
    fs::write(&project.declarations, declarations)?;
    fs::write(&project.source, SOURCE)?;
    fs::write(&project.header, HEADER)?;
    Ok(project)
}
