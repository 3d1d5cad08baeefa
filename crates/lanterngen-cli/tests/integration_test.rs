//! End-to-end tests for the lanterngen CLI

mod test_utils;

use assert_cmd::Command;
use predicates::prelude::*;
use test_utils::{create_project, HEADER, SOURCE};

const DECLARATIONS: &str = "\
- name: CreateWindow
  arguments:
    - name: title
    - name: size
- name: Flush
  arguments: []
";

fn lanterngen() -> Command {
    Command::from(std::process::Command::new(env!("CARGO_BIN_EXE_lanterngen")))
}

#[test]
fn test_usage_with_too_few_arguments() -> anyhow::Result<()> {
    let project = create_project(DECLARATIONS)?;

    lanterngen()
        .assert()
        .code(1)
        .stdout("Usage: lanterngen declarations.yaml lantern.cpp lantern.h\n");

    lanterngen()
        .arg(&project.declarations)
        .arg(&project.source)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage: lanterngen"));

    assert_eq!(project.source_content(), SOURCE);
    assert_eq!(project.header_content(), HEADER);
    Ok(())
}

#[test]
fn test_generates_all_regions() -> anyhow::Result<()> {
    let project = create_project(DECLARATIONS)?;

    lanterngen()
        .args(project.args())
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!(
                "Loaded {} with 2 nodes",
                project.declarations.display()
            ))
            .and(predicate::str::contains(format!(
                "Replacing {}",
                project.source.display()
            )))
            .and(predicate::str::contains(format!(
                "Replacing {}",
                project.header.display()
            ))),
        );

    assert_eq!(
        project.header_content(),
        "\
#pragma once
#define LANTERN_API extern
/* Autogen Headers -- Start */
/*
LANTERN_API void (LANTERN_PTR lantern_createwindow)(void* title, const char* titleType, void* size, const char* sizeType);
LANTERN_API void (LANTERN_PTR lantern_flush)();
*/
/* Autogen Headers -- End */

static void lantern_load(void* lib) {
  /* Autogen Symbols -- Start */
  /*
  LOAD_SYMBOL(lantern_createwindow)
  LOAD_SYMBOL(lantern_flush)
  */
  /* Autogen Symbols -- End */
}
"
    );
    assert_eq!(
        project.source_content(),
        "\
#include \"lantern.h\"

/* Autogen Body -- Start */
/*
void lantern_createwindow(void* title, const char* titleType, void* size, const char* sizeType) {}
void lantern_flush() {}
*/
/* Autogen Body -- End */
"
    );
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> anyhow::Result<()> {
    let project = create_project(DECLARATIONS)?;

    lanterngen().args(project.args()).assert().success();
    let header = project.header_content();
    let source = project.source_content();

    lanterngen().args(project.args()).assert().success();
    assert_eq!(project.header_content(), header);
    assert_eq!(project.source_content(), source);
    Ok(())
}

#[test]
fn test_invalid_schema_fails_before_writing() -> anyhow::Result<()> {
    let project = create_project("- name: Foo\n")?;

    lanterngen()
        .args(project.args())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing field \"arguments\""));

    assert_eq!(project.source_content(), SOURCE);
    assert_eq!(project.header_content(), HEADER);
    Ok(())
}

#[test]
fn test_missing_target_fails() -> anyhow::Result<()> {
    let project = create_project(DECLARATIONS)?;
    std::fs::remove_file(&project.source)?;

    lanterngen()
        .args(project.args())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("lantern.cpp"));

    assert_eq!(project.header_content(), HEADER);
    Ok(())
}

#[test]
fn test_check_mode() -> anyhow::Result<()> {
    let project = create_project(DECLARATIONS)?;

    lanterngen()
        .args(project.args())
        .arg("--check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "Stale region stubs in {}",
            project.source.display()
        )));
    assert_eq!(project.source_content(), SOURCE);

    lanterngen().args(project.args()).assert().success();
    lanterngen()
        .args(project.args())
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stale region").not());
    Ok(())
}

#[test]
fn test_config_and_strict_markers() -> anyhow::Result<()> {
    let project = create_project(DECLARATIONS)?;
    let config = project.dir().join("lanterngen.yaml");
    std::fs::write(&config, "function_prefix: glow_\n")?;
    std::fs::write(&project.header, "/* Autogen Headers -- Start */\nstale\n")?;

    lanterngen()
        .args(project.args())
        .arg("--config")
        .arg(&config)
        .arg("--strict-markers")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("End marker"));

    assert!(project.source_content().contains("void glow_flush() {}"));
    assert_eq!(
        project.header_content(),
        "/* Autogen Headers -- Start */\nstale\n"
    );
    Ok(())
}
