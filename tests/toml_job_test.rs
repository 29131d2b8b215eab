use image::{Rgba, RgbaImage};
use product_recolor::utils::validation::Validate;
use product_recolor::{BatchRecolorer, ConsoleProgress, LocalStorage, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

fn write_png(path: &Path) {
    let img = RgbaImage::from_fn(16, 16, |x, _| {
        if x < 8 {
            Rgba([30, 30, 30, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    img.save(path).unwrap();
}

#[test]
fn test_toml_job_with_variants() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    write_png(&base.join("biometal.png"));
    write_png(&base.join("mockup-3.png"));

    let toml_content = format!(
        r##"
[job]
name = "productos"
description = "catalog backgrounds"

[source]
path = "{base}/biometal.png"

[[source.variants]]
path = "{base}/mockup-3.png"
suffix = "-3"

[output]
dir = "{base}/Productos"
quality = 90

[[entries]]
identifier = "d13be0da-b7c1-4a50-b720-d27c72da6bb8"
color = "#ffffff"

[[entries]]
identifier = "navy"
color = "#000080"
"##,
        base = base.display()
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    config.validate().unwrap();

    let mut recolorer =
        BatchRecolorer::new(LocalStorage::new(), config, ConsoleProgress::new(Vec::new()));

    let plan = recolorer.plan().unwrap();
    assert_eq!(plan.len(), 4);
    assert!(!base.join("Productos").exists());

    let summary = recolorer.run().unwrap();
    assert_eq!(summary.entries_processed, 2);
    assert_eq!(summary.outputs.len(), 4);

    let planned: Vec<_> = plan.iter().map(|p| p.output.clone()).collect();
    let written: Vec<_> = summary.outputs.iter().map(|o| o.path.clone()).collect();
    assert_eq!(planned, written);

    for name in [
        "d13be0da-b7c1-4a50-b720-d27c72da6bb8.jpg",
        "d13be0da-b7c1-4a50-b720-d27c72da6bb8-3.jpg",
        "navy.jpg",
        "navy-3.jpg",
    ] {
        let path = base.join("Productos").join(name);
        assert!(path.exists(), "missing {}", path.display());
    }

    let printed = String::from_utf8(recolorer.into_progress().into_inner()).unwrap();
    assert_eq!(printed, "0\n1\n");
}

#[test]
fn test_toml_job_missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(
        err,
        product_recolor::RecolorError::ConfigValidationError { .. }
    ));
    assert_eq!(err.exit_code(), 1);
}
