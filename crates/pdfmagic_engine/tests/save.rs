use std::fs;

use pdfmagic_engine::{ensure_output_dir, PdfSaver, SaveError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn save_writes_bytes_under_given_name() {
    let temp = TempDir::new().unwrap();
    let saver = PdfSaver::new(temp.path().join("pdfs"));

    let path = saver.save("merge-pdf.pdf", b"%PDF-1.4 one").unwrap();

    assert_eq!(path, temp.path().join("pdfs").join("merge-pdf.pdf"));
    assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4 one");
}

#[test]
fn save_replaces_previous_output() {
    let temp = TempDir::new().unwrap();
    let saver = PdfSaver::new(temp.path());

    let first = saver.save("images-to-pdf.pdf", b"first").unwrap();
    let second = saver.save("images-to-pdf.pdf", b"second").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"second");
}

#[test]
fn no_stray_temp_files_after_save() {
    let temp = TempDir::new().unwrap();
    let saver = PdfSaver::new(temp.path());

    saver.save("merge-files.pdf", b"%PDF").unwrap();

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["merge-files.pdf".to_string()]);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let saver = PdfSaver::new(file_path.clone());
    let result = saver.save("merge-pdf.pdf", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("merge-pdf.pdf").exists());
}

#[test]
fn output_path_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("out");
    fs::write(&file_path, "x").unwrap();

    let err = ensure_output_dir(&file_path).unwrap_err();
    assert!(matches!(err, SaveError::NotADirectory(path) if path == file_path));
}

#[test]
fn failed_save_leaves_existing_output_untouched() {
    let temp = TempDir::new().unwrap();
    // A directory in place of the output file makes the final rename fail.
    let blocked = temp.path().join("merge-pdf.pdf");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep.txt"), "previous").unwrap();
    let saver = PdfSaver::new(temp.path());

    let err = saver.save("merge-pdf.pdf", b"%PDF new").unwrap_err();

    assert!(matches!(err, SaveError::Write { ref path, .. } if path == &blocked));
    assert_eq!(fs::read_to_string(blocked.join("keep.txt")).unwrap(), "previous");
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["merge-pdf.pdf".to_string()]);
}
