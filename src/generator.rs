//! Batch generation drivers
//!
//! Both pipelines share the same shape: derive or build a context, render
//! templates, push the results through the idempotent writer. A run either
//! regenerates the complete artifact set or aborts on the first error —
//! downstream builds assume all kinds were regenerated together.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::context::derive_context;
use crate::errors::{Result, TexGenError};
use crate::fixtures;
use crate::spec::{SPEC_TABLE, SpecDefaults, TexKindSpec};
use crate::templates;
use crate::writer::write_if_changed;

/// Output directories for one generator run. No process-wide state: every
/// entry point receives its configuration as a plain argument.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Texture class headers and bodies
    pub code_dir: PathBuf,
    /// Per-class test files
    pub test_dir: PathBuf,
    /// std140 fixture test files
    pub fixture_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::under_root(Path::new("generated"))
    }
}

impl GeneratorConfig {
    /// Standard layout beneath a single output root.
    #[must_use]
    pub fn under_root(root: &Path) -> Self {
        Self {
            code_dir: root.join("objects"),
            test_dir: root.join("tests/objects"),
            fixture_dir: root.join("tests/std140"),
        }
    }
}

/// Paths actually rewritten during one run. Empty means the run was a no-op
/// on the filesystem.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
}

impl Report {
    fn record(&mut self, path: PathBuf, wrote: bool) {
        if wrote {
            self.written.push(path);
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.written.is_empty()
    }
}

fn ensure_unique_kinds(table: &[TexKindSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for spec in table {
        if !seen.insert(spec.gl_type) {
            return Err(TexGenError::DuplicateKind {
                kind: spec.gl_type.to_string(),
            });
        }
    }
    Ok(())
}

/// Runs the texture-object pipeline: one header, one body, and one test file
/// per table row, each named after the derived class.
pub fn generate_texture_objects(
    table: &[TexKindSpec],
    defaults: &SpecDefaults,
    config: &GeneratorConfig,
) -> Result<Report> {
    ensure_unique_kinds(table)?;
    fs::create_dir_all(&config.code_dir)?;
    fs::create_dir_all(&config.test_dir)?;

    let mut report = Report::default();
    for spec in table {
        log::info!("Generating {}", spec.gl_type);

        let ctx = derive_context(spec, defaults)?;
        log::debug!("  class name: {}", ctx.class_name);

        // 三份产物先全部渲染成功，再开始落盘
        let header = templates::render("texture.hh", &ctx)?;
        let body = templates::render("texture.cc", &ctx)?;
        let test = templates::render("texture.test.cc", &ctx)?;

        let header_path = config.code_dir.join(format!("{}.hh", ctx.class_name));
        let body_path = config.code_dir.join(format!("{}.cc", ctx.class_name));
        let test_path = config.test_dir.join(format!("{}.cc", ctx.class_name));

        report.record(header_path.clone(), write_if_changed(&header_path, &header)?);
        report.record(body_path.clone(), write_if_changed(&body_path, &body)?);
        report.record(test_path.clone(), write_if_changed(&test_path, &test)?);
    }
    Ok(report)
}

/// Runs the std140 fixture pipeline: one test file per group.
pub fn generate_std140_fixtures(config: &GeneratorConfig) -> Result<Report> {
    fs::create_dir_all(&config.fixture_dir)?;

    let mut report = Report::default();
    for group in 0..fixtures::GROUP_COUNT {
        let ctx = fixtures::fixture_group(group);
        let source = templates::render("std140.test.cc", &ctx)?;
        let path = config.fixture_dir.join(format!("std140gen{group}.cc"));
        report.record(path.clone(), write_if_changed(&path, &source)?);
    }
    Ok(report)
}

/// Runs both pipelines against the built-in table and defaults.
pub fn generate_all(config: &GeneratorConfig) -> Result<Report> {
    let defaults = SpecDefaults::default();
    let mut report = generate_texture_objects(SPEC_TABLE, &defaults, config)?;
    report.written.extend(generate_std140_fixtures(config)?.written);
    Ok(report)
}
