use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const LOGGER: &str = r#"package x

import "log"

func logEvent(at string) {
	log.Println(at)
}

func handler() {
	logEvent("[placeholder.go:0]")
}
"#;

#[test]
fn test_rewrites_placeholder() -> Result<()> {
    let test = CliTest::with_file("pkg/x.go", LOGGER)?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    rewrite pkg/x.go:10:11 "[placeholder.go:0]" -> "[pkg/x.go:10]"
    Rewrote 1 placeholder(s) in 1 file(s) (1 file checked).

    ----- stderr -----
    "#);
    assert_eq!(
        test.read_file("pkg/x.go")?,
        LOGGER.replace("[placeholder.go:0]", "[pkg/x.go:10]")
    );

    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let test = CliTest::with_file("pkg/x.go", LOGGER)?;

    run(test.command())?;
    let once = test.read_file("pkg/x.go")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 file - no placeholders to rewrite

    ----- stderr -----
    ");
    assert_eq!(test.read_file("pkg/x.go")?, once);

    Ok(())
}

#[test]
fn test_check_reports_without_writing() -> Result<()> {
    let test = CliTest::with_file("pkg/x.go", LOGGER)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    would rewrite pkg/x.go:10:11 "[placeholder.go:0]" -> "[pkg/x.go:10]"
    Would rewrite 1 placeholder(s) in 1 file(s) (1 file checked).
    Run without --check to apply.

    ----- stderr -----
    "#);
    assert_eq!(test.read_file("pkg/x.go")?, LOGGER);

    Ok(())
}

#[test]
fn test_check_passes_when_up_to_date() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nfunc main() {\n\tlogEvent(\"[main.go:4]\")\n}\n",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 file - no placeholders to rewrite

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_stale_location_is_corrected() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nfunc main() {\n\n\tlogEvent(\"[main.go:4]\")\n}\n",
    )?;

    run(test.command())?;

    assert_eq!(
        test.read_file("main.go")?,
        "package main\n\nfunc main() {\n\n\tlogEvent(\"[main.go:5]\")\n}\n"
    );

    Ok(())
}

#[test]
fn test_exclude_flag_and_hidden_dirs() -> Result<()> {
    let test = CliTest::new()?;
    for path in ["app/x.go", "vendor/x.go", ".cache/x.go"] {
        test.write_file(path, LOGGER)?;
    }

    let result = run({
        let mut cmd = test.command();
        cmd.args(["--exclude", "vendor"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(test.read_file("app/x.go")?.contains("[app/x.go:10]"));
    assert_eq!(test.read_file("vendor/x.go")?, LOGGER);
    assert_eq!(test.read_file(".cache/x.go")?, LOGGER);

    Ok(())
}

#[test]
fn test_single_file_source() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("pkg/x.go", LOGGER)?;
    test.write_file("pkg/y.go", LOGGER)?;

    let result = run({
        let mut cmd = test.command();
        cmd.args(["--src", "pkg/x.go"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(test.read_file("pkg/x.go")?.contains("[pkg/x.go:10]"));
    assert_eq!(test.read_file("pkg/y.go")?, LOGGER);

    Ok(())
}

#[test]
fn test_strip_prefix() -> Result<()> {
    let test = CliTest::with_file("pkg/x.go", LOGGER)?;

    let result = run({
        let mut cmd = test.command();
        cmd.args(["--strip-prefix", "4"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(test.read_file("pkg/x.go")?.contains("logEvent(\"[x.go:10]\")"));

    Ok(())
}

#[test]
fn test_bad_file_does_not_stop_the_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a/x.go", LOGGER)?;
    test.write_file("b/broken.go", "package b\n\nfunc broken( {\n")?;
    test.write_file("c/x.go", LOGGER)?;

    // Error positions come from tree-sitter recovery; keep them out of the snapshot.
    insta::with_settings!({filters => vec![(r"parse failed: .*", "parse failed: [SYNTAX ERROR]")]}, {
        assert_cmd_snapshot!(test.command(), @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        rewrite a/x.go:10:11 "[placeholder.go:0]" -> "[a/x.go:10]"
        rewrite c/x.go:10:11 "[placeholder.go:0]" -> "[c/x.go:10]"
        Rewrote 2 placeholder(s) in 2 file(s) (3 files checked).

        ----- stderr -----
        warning: b/broken.go: parse failed: [SYNTAX ERROR]
        ✘ 1 file skipped, 0 failed, 0 unreadable directories
        "#);
    });

    assert!(test.read_file("a/x.go")?.contains("[a/x.go:10]"));
    assert!(test.read_file("c/x.go")?.contains("[c/x.go:10]"));
    assert_eq!(test.read_file("b/broken.go")?, "package b\n\nfunc broken( {\n");

    Ok(())
}

#[test]
fn test_missing_source_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.args(["--src", "does-not-exist"]);
        cmd
    })?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: "));
    assert_eq!(result.stdout, "");

    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".callsiterc.json",
        r#"{
          "exclude": ["testdata"],
          "marker": { "open": "<", "close": ">" }
      }"#,
    )?;
    test.write_file(
        "main.go",
        "package main\n\nfunc main() {\n\tlogEvent(\"<placeholder.go:0>\", \"[placeholder.go:0]\")\n}\n",
    )?;
    test.write_file("testdata/x.go", LOGGER)?;

    let result = run(test.command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        test.read_file("main.go")?,
        "package main\n\nfunc main() {\n\tlogEvent(\"<main.go:4>\", \"[placeholder.go:0]\")\n}\n"
    );
    assert_eq!(test.read_file("testdata/x.go")?, LOGGER);

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".callsiterc.json", r#"{ "exclude": ["a/b"] }"#)?;
    test.write_file("pkg/x.go", LOGGER)?;

    let result = run(test.command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Invalid config file"));
    assert_eq!(test.read_file("pkg/x.go")?, LOGGER);

    Ok(())
}

#[test]
fn test_absolute_paths() -> Result<()> {
    let test = CliTest::with_file("pkg/x.go", LOGGER)?;

    run({
        let mut cmd = test.command();
        cmd.arg("--absolute");
        cmd
    })?;

    let expected = format!(
        "[{}:10]",
        test.root().join("pkg").join("x.go").to_string_lossy().replace('\\', "/")
    );
    assert!(test.read_file("pkg/x.go")?.contains(&expected));

    Ok(())
}
