use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn quickforms() -> Command {
    Command::cargo_bin("quickforms").unwrap()
}

#[test]
fn resolve_prints_one_path_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("Resources/forms.yml").write_str("f: {}\n")?;
    let root = temp.path().to_string_lossy().into_owned();

    quickforms()
        .args(["resolve", "--root", root.as_str(), "--dir", "Resources"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{root}/Resources\n")));

    quickforms()
        .args(["resolve", "--root", root.as_str(), "--dir", "Resources", "--file", "forms.yml"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{root}/Resources/forms.yml\n")));
    Ok(())
}

#[test]
fn resolve_reports_missing_sub_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let root = temp.path().to_string_lossy().into_owned();

    quickforms()
        .args(["resolve", "--root", root.as_str(), "--dir", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The directory \"Nowhere\" does not exist in any of the root directories.",
        ));
    Ok(())
}

#[test]
fn load_prints_forms_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("defaults.yml").write_str(
        "root_paths: __BUNDLE_DIR__\ndirectory_paths: forms\nfile_names: forms.yml\nform_class_prefix: Core\\Type\n",
    )?;
    temp.child("forms/forms.yml")
        .write_str("contact:\n  id: contact\n  theme: plain\n  fields:\n    name: { type: text }\n")?;
    temp.child("config.yml").write_str("framework: {}\n")?;
    let bundle_dir = temp.path().to_string_lossy().into_owned();

    quickforms()
        .arg("load")
        .arg("--config")
        .arg(temp.child("config.yml").path())
        .args(["--defaults", "__BUNDLE_DIR__/defaults.yml", "--bundle-dir", bundle_dir.as_str()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"name\": \"contact\"")
                .and(predicate::str::contains("\"theme\": \"plain\""))
                .and(predicate::str::contains("Core\\\\Type\\\\TextType")),
        );
    Ok(())
}

#[test]
fn load_fails_when_defaults_are_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("config.yml").write_str("quick_forms: ~\n")?;

    quickforms()
        .arg("load")
        .arg("--config")
        .arg(temp.child("config.yml").path())
        .args(["--defaults", "/definitely/not/here.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Default config file not found"));
    Ok(())
}
