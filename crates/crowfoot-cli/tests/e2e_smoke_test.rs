use std::{fs, path::PathBuf};

use tempfile::tempdir;

use crowfoot_cli::{Args, run};

/// Collects all .erd files from a directory
fn collect_erd_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("erd")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

#[test]
fn e2e_smoke_test_demo_diagrams() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // Demo diagrams are at workspace root, relative to workspace not the crate
    let demos_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos");
    let demo_diagrams = collect_erd_files(demos_path);

    assert!(!demo_diagrams.is_empty(), "No demo diagrams found in demos/");

    for demo_path in &demo_diagrams {
        let output_filename = format!(
            "{}.plan",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        let result = run(&args);
        assert!(
            result.is_ok(),
            "Failed to process {}: {:?}",
            demo_path.display(),
            result.err()
        );

        let plan = fs::read_to_string(&output_path).expect("Plan file should exist");
        assert!(
            plan.starts_with("node "),
            "Plan for {} should start with a node placement, got: {plan:?}",
            demo_path.display()
        );
        assert!(
            plan.lines().any(|line| line.starts_with("edge ")),
            "Plan for {} should contain connectors",
            demo_path.display()
        );
    }
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        input: "does-not-exist.erd".to_string(),
        output: temp_dir
            .path()
            .join("out.plan")
            .to_string_lossy()
            .to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}
