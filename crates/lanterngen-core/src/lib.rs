//! Lanterngen Core Library
//!
//! This library regenerates the marker-delimited regions of the Lantern
//! binding sources from a declarations schema: function-pointer
//! declarations, stub bodies and symbol loaders.

pub mod config;
pub mod error;
pub mod generate;
pub mod render;
pub mod rewrite;
pub mod schema;
pub mod utils;

pub use crate::{
    config::Config,
    error::{Error, Result},
    generate::{
        generate, generate_with_progress, GenerateReport, GenerateRequest, Progress, RegionReport,
    },
    render::{FragmentKind, Fragments, GeneratedFragment},
    rewrite::{rewrite_region, EndMarkerPolicy, MarkerPair, RewriteMode, RewriteOutcome, TargetFile},
    schema::{ArgumentDescriptor, FunctionDescriptor, Schema},
};
