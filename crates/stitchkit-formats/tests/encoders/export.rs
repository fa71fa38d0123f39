use super::two_color_line;
use std::fs;
use stitchkit_core::{EmbroideryDesign, HoopSize, StitchPoint};
use stitchkit_formats::{
    export_to_format, export_to_path, EmbroideryExporter, FileFormat, FormatError, PesExporter,
};
use tempfile::TempDir;

fn bad_color_design() -> EmbroideryDesign {
    EmbroideryDesign::new(
        vec![StitchPoint::normal(0.0, 0.0, 0)],
        vec!["#GGGGGG".to_string()],
        (1.0, 1.0),
        HoopSize::Hoop100x100,
    )
    .unwrap()
}

#[test]
fn test_export_writes_encoded_bytes() {
    let dir = TempDir::new().unwrap();
    let design = two_color_line();

    for format in FileFormat::all() {
        let path = dir.path().join(format!("line.{}", format.extension()));
        assert!(export_to_format(&design, &path, format));
        let written = fs::read(&path).unwrap();
        assert_eq!(written, format.exporter().encode(&design).unwrap());
    }

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn test_failed_export_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pes");

    assert!(!export_to_format(&bad_color_design(), &path, FileFormat::Pes));
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failed_export_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keep.pes");
    fs::write(&path, b"previous").unwrap();

    let err = PesExporter.export(&bad_color_design(), &path).unwrap_err();
    assert!(matches!(err, FormatError::Design(_)));
    assert_eq!(fs::read(&path).unwrap(), b"previous");
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("line.dst");

    assert!(!export_to_format(&two_color_line(), &path, FileFormat::Dst));
    assert!(!path.exists());
}

#[test]
fn test_export_to_path_uses_extension() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("line.JEF");
    assert_eq!(
        export_to_path(&two_color_line(), &path).unwrap(),
        FileFormat::Jef
    );
    assert!(path.exists());

    let path = dir.path().join("line.exp");
    let err = export_to_path(&two_color_line(), &path).unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedFormat(ext) if ext == "exp"));
}

#[test]
fn test_format_registry() {
    assert_eq!(FileFormat::default(), FileFormat::Pes);
    assert_eq!("Dst".parse::<FileFormat>().unwrap(), FileFormat::Dst);
    assert!(".xxx".parse::<FileFormat>().is_err());
    let labels: Vec<String> = FileFormat::all().iter().map(|f| f.dialog_label()).collect();
    assert_eq!(
        labels,
        ["Brother (*.pes)", "Tajima (*.dst)", "Janome (*.jef)"]
    );
}
