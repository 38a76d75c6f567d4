use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn sitepack(project: &Path) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("sitepack")?;
    cmd.arg("--project").arg(project);
    Ok(cmd)
}

/// A site folder and a package with content and one assembly.
fn fixture() -> Result<(TempDir, PathBuf, PathBuf), Box<dyn Error>> {
    let dir = tempdir()?;
    let site = dir.path().join("Shop.Web");
    fs::create_dir_all(site.join("App_Code"))?;

    let package = dir.path().join("Foo.1.0");
    fs::create_dir_all(package.join("content/Scripts"))?;
    fs::create_dir_all(package.join("lib/net40"))?;
    fs::write(package.join("content/Default.aspx"), "<%@ Page %>")?;
    fs::write(package.join("content/Helpers.cs"), "class Helpers {}")?;
    fs::write(package.join("content/Scripts/util.cs"), "class Util {}")?;
    fs::write(package.join("lib/net40/Foo.dll"), [0u8; 4])?;

    Ok((dir, site, package))
}

#[test]
fn install_places_files_and_writes_markers() -> Result<(), Box<dyn Error>> {
    let (_dir, site, package) = fixture()?;

    sitepack(&site)?
        .arg("install")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("Helpers.cs -> App_Code/Helpers.cs"))
        .stdout(predicate::str::contains("Scripts/util.cs -> Scripts/util.cs"));

    assert!(site.join("Default.aspx").is_file());
    assert!(site.join("App_Code/Helpers.cs").is_file());
    assert!(site.join("Scripts/util.cs").is_file());
    assert!(!site.join("Helpers.cs").exists());

    let marker = fs::read_to_string(site.join("bin/Foo.dll.refresh"))?;
    assert!(marker.ends_with("Foo.dll"));
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> Result<(), Box<dyn Error>> {
    let (_dir, site, package) = fixture()?;

    sitepack(&site)?
        .args(["install", "--dry-run"])
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!site.join("Default.aspx").exists());
    assert!(!site.join("bin").exists());
    Ok(())
}

#[test]
fn uninstall_removes_what_install_added() -> Result<(), Box<dyn Error>> {
    let (_dir, site, package) = fixture()?;

    sitepack(&site)?.arg("install").arg(&package).assert().success();
    sitepack(&site)?
        .arg("uninstall")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("bin/Foo.dll.refresh"));

    assert!(!site.join("App_Code/Helpers.cs").exists());
    assert!(!site.join("Scripts/util.cs").exists());
    assert!(!site.join("bin/Foo.dll.refresh").exists());
    assert!(site.join("App_Code").is_dir());
    Ok(())
}

#[test]
fn resolve_treats_arguments_as_one_batch() -> Result<(), Box<dyn Error>> {
    let (_dir, site, _package) = fixture()?;

    sitepack(&site)?
        .args(["resolve", "Scripts", "Scripts/util.cs", "Other/util.cs", "App_Code/a.vb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scripts/util.cs -> Scripts/util.cs"))
        .stdout(predicate::str::contains("Other/util.cs -> App_Code/Other/util.cs"))
        .stdout(predicate::str::contains("App_Code/a.vb -> App_Code/a.vb"));
    Ok(())
}

#[test]
fn references_round_trip() -> Result<(), Box<dyn Error>> {
    let (_dir, site, _package) = fixture()?;

    sitepack(&site)?
        .args(["add-ref", "lib/Bar.dll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bin/Bar.dll.refresh"));
    assert!(site.join("bin/Bar.dll.refresh").is_file());

    sitepack(&site)?
        .args(["remove-ref", "Bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bin/Bar.dll.refresh"));
    assert!(!site.join("bin/Bar.dll.refresh").exists());

    sitepack(&site)?
        .args(["remove-ref", "Missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("through the host"));
    Ok(())
}

#[test]
fn dirs_hides_generated_folder() -> Result<(), Box<dyn Error>> {
    let (_dir, site, _package) = fixture()?;
    fs::create_dir_all(site.join("App_Code/Generated___Files"))?;
    fs::create_dir_all(site.join("App_Code/Models"))?;

    sitepack(&site)?
        .args(["dirs", "App_Code"])
        .assert()
        .success()
        .stdout(predicate::eq("Models\n"));

    sitepack(&site)?
        .arg("dirs")
        .assert()
        .success()
        .stdout(predicate::str::contains("App_Code"));
    Ok(())
}

#[test]
fn property_reports_root_namespace_and_config_values() -> Result<(), Box<dyn Error>> {
    let (_dir, site, _package) = fixture()?;
    fs::write(
        site.join(".sitepack.json"),
        r#"{ "properties": { "RootNamespace": "Shop", "TargetFramework": "net48" } }"#,
    )?;

    sitepack(&site)?
        .args(["property", "rootnamespace"])
        .assert()
        .success()
        .stdout(predicate::eq("ASP\n"));

    sitepack(&site)?
        .args(["property", "TargetFramework"])
        .assert()
        .success()
        .stdout(predicate::eq("net48\n"));

    sitepack(&site)?
        .args(["property", "Missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not set"));
    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<(), Box<dyn Error>> {
    let (_dir, site, _package) = fixture()?;

    sitepack(&site)?.arg("init").assert().success();
    let written = fs::read_to_string(site.join(".sitepack.json"))?;
    assert!(written.contains("\"compile_folder\": \"App_Code\""));

    sitepack(&site)?
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    sitepack(&site)?.args(["init", "--force"]).assert().success();
    Ok(())
}

#[test]
fn settings_commands_edit_the_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("NuGet.Config");
    let settings = |args: &[&str]| -> Result<Command, Box<dyn Error>> {
        let mut cmd = Command::cargo_bin("sitepack")?;
        cmd.arg("settings").arg("--file").arg(&file).args(args);
        Ok(cmd)
    };

    settings(&["set", "packageSources", "local", "/srv/packages"])?
        .assert()
        .success();
    settings(&["get", "packageSources", "local"])?
        .assert()
        .success()
        .stdout(predicate::eq("/srv/packages\n"));
    settings(&["list", "packageSources"])?
        .assert()
        .success()
        .stdout(predicate::str::contains("local = /srv/packages"));
    settings(&["delete", "packageSources", "local"])?
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    settings(&["delete-section", "packageSources"])?
        .assert()
        .success();
    settings(&["list", "packageSources"])?
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn missing_project_folder_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    sitepack(&dir.path().join("nope"))?
        .arg("dirs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project folder not found"));
    Ok(())
}
