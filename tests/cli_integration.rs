//! CLI integration tests for questbind.
//!
//! These tests run the binary against synthetic QuEST layouts, pinning
//! the precision code so no native library is needed.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the questbind binary command, isolated from the user's global config.
fn questbind(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("questbind").unwrap();
    cmd.env("HOME", home);
    cmd
}

/// Minimal header: a plain declaration, a C++ guard, an #ifdef block and
/// the excluded accessor.
const SYNTHETIC_HEADER: &str = "\
qreal calcTotalProb(Qureg qureg);
#ifndef __cplusplus
typedef qreal _Complex qcomp;
#endif
#ifdef QuEST_PREC_DOUBLE
qreal onlyInDoubleBuilds(void);
#endif
void getEnvironmentString(QuESTEnv env, char str[200]);
";

/// Create a project with the default layout and the synthetic header.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let include = tmp.path().join("QuEST/QuEST/include");
    fs::create_dir_all(&include).unwrap();
    fs::create_dir_all(tmp.path().join("pyquest_cffi/questlib")).unwrap();
    fs::write(include.join("QuEST.h"), SYNTHETIC_HEADER).unwrap();
    tmp
}

fn root_arg(tmp: &TempDir) -> String {
    tmp.path().display().to_string()
}

// ============================================================================
// questbind cdef
// ============================================================================

#[test]
fn test_cdef_double_precision() {
    let tmp = project();

    let output = questbind(tmp.path())
        .args(["cdef", "--root", &root_arg(&tmp), "--precision", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        [
            "double calcTotalProb(Qureg qureg);",
            "void statevec_setAmps(Qureg qureg, long long int startInd, double* reals, double* imags, long long int numAmps);",
            "double densmatr_calcProbOfOutcome(Qureg qureg, const int measureQubit, int outcome);",
            "double statevec_calcProbOfOutcome(Qureg qureg, const int measureQubit, int outcome);",
            "int generateMeasurementOutcome(double zeroProb, double *outcomeProb);",
            "int getQuEST_PREC(void);",
        ]
    );
}

#[test]
fn test_cdef_single_and_extended_precision() {
    let tmp = project();

    questbind(tmp.path())
        .args(["cdef", "--root", &root_arg(&tmp), "--precision", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("float calcTotalProb"))
        .stdout(predicate::str::contains("qreal").not());

    questbind(tmp.path())
        .args(["cdef", "--root", &root_arg(&tmp), "--precision", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("long double calcTotalProb"))
        .stdout(predicate::str::contains("qreal").not());
}

#[test]
fn test_cdef_unknown_precision_fails() {
    let tmp = project();

    questbind(tmp.path())
        .args(["cdef", "--root", &root_arg(&tmp), "--precision", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unable to determine precision of qreal"));
}

#[test]
fn test_cdef_header_override() {
    let tmp = project();
    fs::write(tmp.path().join("other.h"), "qreal other;\n#include <x.h>\n").unwrap();

    questbind(tmp.path())
        .args([
            "cdef",
            "--root",
            &root_arg(&tmp),
            "--header",
            "other.h",
            "--precision",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("double other;\n"))
        .stdout(predicate::str::contains("calcTotalProb").not());
}

#[test]
fn test_cdef_missing_header_fails() {
    let tmp = TempDir::new().unwrap();

    questbind(tmp.path())
        .args(["cdef", "--root", &root_arg(&tmp), "--precision", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("QuEST.h"));
}

#[test]
fn test_cdef_without_library_or_precision_fails() {
    let tmp = project();

    questbind(tmp.path())
        .args(["cdef", "--root", &root_arg(&tmp)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load native library"));
}

// ============================================================================
// questbind build --plan
// ============================================================================

#[test]
fn test_build_plan_prints_generator_inputs() {
    let tmp = project();

    let output = questbind(tmp.path())
        .args(["build", "--root", &root_arg(&tmp), "--precision", "2", "--plan"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(plan["module_name"], "_quest");
    assert_eq!(plan["source"], "#include <QuEST.h>\n");
    assert_eq!(plan["link"]["libraries"][0], "QuEST");
    assert_eq!(plan["extra_link_args"][0], "-Wl,-rpath,$ORIGIN");

    let include = plan["link"]["include_dirs"][0].as_str().unwrap();
    assert!(include.ends_with("QuEST/QuEST/include"));
    let lib_dir = plan["link"]["library_dirs"][0].as_str().unwrap();
    assert!(lib_dir.ends_with("pyquest_cffi/questlib"));

    let cdef = plan["cdef"].as_str().unwrap();
    assert!(cdef.starts_with("double calcTotalProb(Qureg qureg);\n"));
    assert!(!cdef.contains("onlyInDoubleBuilds"));

    // No artifacts on a plan
    assert!(!tmp.path().join("pyquest_cffi/questlib/_quest.c").exists());
}

#[test]
fn test_build_plan_uses_project_config() {
    let tmp = TempDir::new().unwrap();
    let include = tmp.path().join("vendor/quest/include");
    fs::create_dir_all(&include).unwrap();
    fs::write(include.join("QuEST.h"), "qreal fromVendor;\n").unwrap();

    let config_dir = tmp.path().join(".questbind");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[layout]\nquest_dir = \"vendor/quest\"\nlib_dir = \"build\"\n\n\
         [generator]\nmodule_name = \"_questlib\"\n",
    )
    .unwrap();

    let output = questbind(tmp.path())
        .args(["build", "--root", &root_arg(&tmp), "--precision", "1", "--plan"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(plan["module_name"], "_questlib");
    assert!(plan["cdef"].as_str().unwrap().starts_with("float fromVendor;\n"));
    assert!(plan["link"]["library_dirs"][0]
        .as_str()
        .unwrap()
        .ends_with("build"));
}

#[test]
fn test_build_cli_module_overrides_config() {
    let tmp = project();
    let config_dir = tmp.path().join(".questbind");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[generator]\nmodule_name = \"_fromconfig\"\n",
    )
    .unwrap();

    questbind(tmp.path())
        .args([
            "build",
            "--root",
            &root_arg(&tmp),
            "--precision",
            "2",
            "--module",
            "_fromcli",
            "--plan",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"module_name\": \"_fromcli\""));
}

/// Configure a compiler that always fails, so `build` stops right after
/// writing the module sources.
#[cfg(unix)]
fn with_failing_compiler(tmp: &TempDir, extra: &str) {
    let config_dir = tmp.path().join(".questbind");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("[generator]\ncc = \"false\"\n{}", extra),
    )
    .unwrap();
}

#[cfg(unix)]
#[test]
fn test_build_cli_out_dir_is_relative_to_current_dir() {
    let tmp = project();
    with_failing_compiler(&tmp, "");
    let work = TempDir::new().unwrap();

    questbind(tmp.path())
        .current_dir(work.path())
        .args([
            "build",
            "--root",
            &root_arg(&tmp),
            "--precision",
            "2",
            "--out-dir",
            "gen",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to compile"));

    assert!(work.path().join("gen/_quest.h").exists());
    assert!(work.path().join("gen/_quest.c").exists());
    assert!(!tmp.path().join("gen").exists());
}

#[cfg(unix)]
#[test]
fn test_build_config_out_dir_is_relative_to_root() {
    let tmp = project();
    with_failing_compiler(&tmp, "out_dir = \"gen\"\n");
    let work = TempDir::new().unwrap();

    questbind(tmp.path())
        .current_dir(work.path())
        .args(["build", "--root", &root_arg(&tmp), "--precision", "2"])
        .assert()
        .failure();

    let declarations = fs::read_to_string(tmp.path().join("gen/_quest.h")).unwrap();
    assert!(declarations.starts_with("double calcTotalProb(Qureg qureg);\n"));
    assert!(!work.path().join("gen").exists());
}

/// Full native build: a real `libQuEST.so` reporting extended precision,
/// and a header the compiler accepts.
#[cfg(target_os = "linux")]
#[test]
fn test_build_against_native_library() {
    let Ok(cc) = which::which("cc") else {
        eprintln!("skipping: no C compiler found");
        return;
    };

    let tmp = TempDir::new().unwrap();
    let include = tmp.path().join("QuEST/QuEST/include");
    let lib_dir = tmp.path().join("pyquest_cffi/questlib");
    fs::create_dir_all(&include).unwrap();
    fs::create_dir_all(&lib_dir).unwrap();
    fs::write(
        include.join("QuEST.h"),
        "#include \"QuEST_precision.h\"\n\
         qreal calcTotalProb(int numQubits);\n\
         int getQuEST_PREC(void);\n",
    )
    .unwrap();
    fs::write(include.join("QuEST_precision.h"), "typedef long double qreal;\n").unwrap();

    let stub = tmp.path().join("quest_stub.c");
    fs::write(&stub, "int getQuEST_PREC(void) { return 4; }\n").unwrap();
    let status = Command::new(cc)
        .args(["-shared", "-fPIC", "-o"])
        .arg(lib_dir.join("libQuEST.so"))
        .arg(&stub)
        .status()
        .unwrap();
    assert!(status.success());

    questbind(tmp.path())
        .args(["build", "--root", &root_arg(&tmp)])
        .assert()
        .success()
        .stderr(predicate::str::contains("Finished `_quest` (quad precision)"));

    assert!(lib_dir.join("_quest.so").exists());
    let declarations = fs::read_to_string(lib_dir.join("_quest.h")).unwrap();
    assert!(declarations.starts_with("long double calcTotalProb(int numQubits);\n"));
    assert!(declarations.ends_with("int getQuEST_PREC(void);\n"));

    questbind(tmp.path())
        .args(["precision", "--root", &root_arg(&tmp)])
        .assert()
        .success()
        .stdout(predicate::str::contains("code 4, qreal = long double"));
}

// ============================================================================
// questbind precision
// ============================================================================

#[test]
fn test_precision_missing_library_fails() {
    let tmp = project();

    questbind(tmp.path())
        .args(["precision", "--root", &root_arg(&tmp)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load native library"))
        .stderr(predicate::str::contains("libQuEST"));
}

// ============================================================================
// General CLI
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let tmp = TempDir::new().unwrap();

    questbind(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("precision"))
        .stdout(predicate::str::contains("cdef"));
}
