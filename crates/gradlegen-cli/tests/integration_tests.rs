//! Integration tests for the gradlegen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GROOVY_MANIFEST: &str = r#"
name = "demo"
dialect = "groovy"

[settings]
group = "com.example"
version = "0.0.1-SNAPSHOT"
source-compatibility = "1.8"

[[plugins]]
id = "java"

[[repositories]]
id = "maven-central"

[[dependencies]]
group = "org.springframework.boot"
artifact = "spring-boot-starter"
scope = "compile"
"#;

const KOTLIN_APPLY_MANIFEST: &str = r#"
name = "demo"
dialect = "kotlin"

apply = ["io.spring.dependency-management"]
"#;

fn gradlegen() -> Command {
    Command::cargo_bin("gradlegen").unwrap()
}

#[test]
fn help_lists_subcommands() {
    gradlegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("dialects"));
}

#[test]
fn version_matches_cargo() {
    gradlegen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn dialects_lists_both_gradle_dialects() {
    gradlegen()
        .arg("dialects")
        .assert()
        .success()
        .stdout(predicate::str::contains("groovy"))
        .stdout(predicate::str::contains("kotlin"))
        .stdout(predicate::str::contains("build.gradle.kts"));
}

#[test]
fn generate_writes_both_scripts() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("build.toml");
    std::fs::write(&manifest, GROOVY_MANIFEST).unwrap();
    let out_dir = temp.path().join("demo");

    gradlegen()
        .arg("generate")
        .arg(&manifest)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success();

    let build = std::fs::read_to_string(out_dir.join("build.gradle")).unwrap();
    assert!(build.contains("id 'java'"));
    assert!(build.contains("group = 'com.example'"));
    assert!(build.contains("implementation 'org.springframework.boot:spring-boot-starter'"));

    let settings = std::fs::read_to_string(out_dir.join("settings.gradle")).unwrap();
    assert!(settings.contains("rootProject.name = 'demo'"));
}

#[test]
fn generate_stdout_prints_the_build_script() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("build.toml");
    std::fs::write(&manifest, GROOVY_MANIFEST).unwrap();

    gradlegen()
        .arg("generate")
        .arg(&manifest)
        .arg("--stdout")
        .arg("--dialect")
        .arg("kotlin")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "implementation(\"org.springframework.boot:spring-boot-starter\")",
        ));
}

#[test]
fn unsupported_construct_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("build.toml");
    std::fs::write(&manifest, KOTLIN_APPLY_MANIFEST).unwrap();

    gradlegen()
        .arg("generate")
        .arg(&manifest)
        .arg("--stdout")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot express"));
}

#[test]
fn unknown_dialect_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("build.toml");
    std::fs::write(&manifest, GROOVY_MANIFEST).unwrap();

    gradlegen()
        .arg("generate")
        .arg(&manifest)
        .arg("--stdout")
        .arg("--dialect")
        .arg("scala")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("scala"));
}

#[test]
fn missing_manifest_is_a_user_error() {
    gradlegen()
        .arg("generate")
        .arg("does-not-exist.toml")
        .assert()
        .failure()
        .code(2);
}
