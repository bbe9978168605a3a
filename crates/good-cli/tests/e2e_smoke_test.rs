use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use good_cli::{Args, Format, run};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Network descriptions live at the workspace root, not in the crate
fn networks_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("networks")
}

fn args_for(input: &Path, output: PathBuf, format: Format) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        format,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_networks() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_networks = collect_toml_files(networks_dir());
    assert!(
        !valid_networks.is_empty(),
        "No valid networks found in networks/"
    );

    let mut failed_networks = Vec::new();

    for network_path in &valid_networks {
        let stem = network_path.file_stem().unwrap().to_string_lossy();

        for (format, extension) in [(Format::Svg, "svg"), (Format::Json, "json")] {
            let output_path = temp_dir.path().join(format!("{stem}.{extension}"));
            let args = args_for(network_path, output_path.clone(), format);

            match run(&args) {
                Ok(()) => {
                    let written = fs::read_to_string(&output_path).expect("output written");
                    assert!(!written.is_empty(), "{} is empty", output_path.display());
                }
                Err(e) => failed_networks.push((network_path.clone(), format, e)),
            }
        }
    }

    if !failed_networks.is_empty() {
        eprintln!("\nValid networks that failed:");
        for (path, format, err) in &failed_networks {
            eprintln!("  - {} ({format:?}): {}", path.display(), err);
        }
        panic!(
            "{} valid network(s) failed unexpectedly",
            failed_networks.len()
        );
    }

    println!("✅ All {} valid networks passed", valid_networks.len());
}

#[test]
fn e2e_smoke_test_error_networks() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_networks = collect_toml_files(networks_dir().join("errors"));
    assert!(
        !error_networks.is_empty(),
        "No error networks found in networks/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for network_path in &error_networks {
        let output_filename = format!(
            "error_{}.svg",
            network_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);
        let args = args_for(network_path, output_path, Format::Svg);

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(network_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError networks that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error network(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error networks failed as expected",
        error_networks.len()
    );
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = networks_dir().join("small.toml");

    let mut args = args_for(&input, temp_dir.path().join("out.svg"), Format::Svg);
    args.config = Some(
        temp_dir
            .path()
            .join("missing.toml")
            .to_string_lossy()
            .to_string(),
    );

    assert!(run(&args).is_err());
}
