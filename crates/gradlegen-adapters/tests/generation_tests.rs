//! Manifest-to-sink generation, wired the way the CLI wires it.

use std::path::Path;

use gradlegen_adapters::{BuildManifest, MemorySink};
use gradlegen_core::application::GenerationService;

const MANIFEST: &str = r#"
name = "demo"
dialect = "groovy"

[settings]
group = "com.example"
version = "0.0.1-SNAPSHOT"

[[plugins]]
id = "java"

[[repositories]]
id = "maven-central"

[[plugin-repositories]]
id = "spring-milestones"
name = "Spring Milestones"
url = "https://repo.spring.io/milestone"

[[dependencies]]
group = "org.springframework.boot"
artifact = "spring-boot-starter"
scope = "compile"
"#;

#[test]
fn manifest_generates_both_scripts_into_the_sink() {
    let manifest = BuildManifest::from_toml(MANIFEST).unwrap();
    let model = manifest.build_model().unwrap();
    let service = GenerationService::with_defaults();
    let sink = MemorySink::new();

    service
        .generate_into(
            manifest.dialect().unwrap(),
            manifest.project_name(),
            &model,
            &sink,
            Path::new("demo"),
        )
        .unwrap();

    assert_eq!(sink.len(), 2);
    let build = sink.content(Path::new("demo/build.gradle")).unwrap();
    assert!(build.contains("id 'java'"));
    assert!(build.contains("implementation 'org.springframework.boot:spring-boot-starter'"));
    // Plugin repositories belong to the settings script, not the build script.
    assert!(!build.contains("spring-milestones"));

    let settings = sink.content(Path::new("demo/settings.gradle")).unwrap();
    assert!(settings.contains("pluginManagement {"));
    assert!(settings.contains("maven { url 'https://repo.spring.io/milestone' }"));
    assert!(settings.contains("rootProject.name = 'demo'"));
}

#[test]
fn kotlin_dialect_names_files_with_kts_extension() {
    let manifest = BuildManifest::from_toml(
        r#"
name = "demo"
dialect = "kotlin"

[settings]
group = "com.example"
"#,
    )
    .unwrap();
    let model = manifest.build_model().unwrap();
    let service = GenerationService::with_defaults();
    let sink = MemorySink::new();

    service
        .generate_into("kotlin", "demo", &model, &sink, Path::new("out"))
        .unwrap();

    assert!(sink.content(Path::new("out/build.gradle.kts")).is_some());
    assert!(sink.content(Path::new("out/settings.gradle.kts")).is_some());
}
