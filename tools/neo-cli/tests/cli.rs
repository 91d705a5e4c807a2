//! Integration tests for the neocart binary
//!
//! Builds ROM archives in a temp dir, runs the CLI, and checks the images.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;
use zip::write::SimpleFileOptions;

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(File::create(path).expect("Failed to create zip"));
    for (name, data) in entries {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        zip.write_all(data).expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip");
}

fn neocart(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_neocart"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run neocart")
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

#[test]
fn test_convert_single_archive() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_zip(
        &dir.path().join("test.zip"),
        &[
            ("p1.bin", &[1, 1, 1, 1]),
            ("p2.bin", &[2, 2, 2, 2]),
            ("s1.bin", &[3, 3]),
            ("test.html", b"<html>"),
        ],
    );

    let output = neocart(dir.path(), &["convert", "test.zip", "-o", "out", "--year", "1998"]);
    assert!(output.status.success(), "convert failed: {:?}", output);

    let image = std::fs::read(dir.path().join("out").join("test.neo")).expect("No image");
    assert_eq!(image.len(), 4110);
    assert_eq!(&image[0..4], b"NEO\x01");
    assert_eq!(read_u32(&image, 4), 8);
    assert_eq!(read_u32(&image, 8), 2);
    assert_eq!(read_u32(&image, 28), 1998);
    assert_eq!(&image[44..48], b"test");
    assert_eq!(&image[77..80], b"SNK");
    assert_eq!(&image[4096..], &[1, 1, 1, 1, 2, 2, 2, 2, 3, 3]);
}

#[test]
fn test_batch_continues_past_failures() {
    let dir = tempdir().expect("Failed to create temp dir");
    let roms = dir.path().join("roms");
    std::fs::create_dir(&roms).unwrap();
    write_zip(&roms.join("good.zip"), &[("c1.bin", &[9; 16])]);
    std::fs::write(roms.join("broken.zip"), b"not an archive").unwrap();
    std::fs::write(roms.join("readme.txt"), b"ignored").unwrap();

    let output = neocart(
        dir.path(),
        &["batch", "roms", "-o", "out", "--year", "2000", "--jobs", "2"],
    );
    assert!(!output.status.success(), "batch should report the broken archive");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Converted: 1, skipped: 0, failed: 1"), "{stdout}");

    let out = dir.path().join("out");
    assert_eq!(std::fs::metadata(out.join("good.neo")).unwrap().len(), 4096 + 16);
    assert!(!out.join("broken.neo").exists());
    assert!(!out.join("readme.neo").exists());
}

#[test]
fn test_config_file_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("neocart.toml"),
        "[convert]\noutput_dir = \"images\"\nyear = 1994\nexclude = [\".txt\"]\n",
    )
    .unwrap();
    write_zip(
        &dir.path().join("kof94.zip"),
        &[("p1.bin", &[1; 4]), ("p9.txt", &[0; 100]), ("p2.html", &[2; 2])],
    );

    let output = neocart(dir.path(), &["convert", "kof94.zip"]);
    assert!(output.status.success(), "convert failed: {:?}", output);

    let image = std::fs::read(dir.path().join("images").join("kof94.neo")).expect("No image");
    assert_eq!(read_u32(&image, 28), 1994);
    // .txt excluded by config; .html kept because the config replaced the default list
    assert_eq!(read_u32(&image, 4), 6);
    assert_eq!(&image[4096..], &[1, 1, 1, 1, 2, 2]);
}

#[test]
fn test_skip_existing() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_zip(&dir.path().join("garou.zip"), &[("p1.bin", &[1; 4])]);
    std::fs::write(dir.path().join("garou.neo"), b"previous").unwrap();

    let output = neocart(dir.path(), &["convert", "garou.zip", "--skip-existing"]);
    assert!(output.status.success(), "convert failed: {:?}", output);
    assert_eq!(std::fs::read(dir.path().join("garou.neo")).unwrap(), b"previous");
}

#[test]
fn test_name_too_long_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let archive = "this_archive_name_is_longer_than_32.zip";
    write_zip(&dir.path().join(archive), &[("p1.bin", &[1; 4])]);

    let output = neocart(dir.path(), &["convert", archive]);
    assert!(!output.status.success());
    assert!(!dir.path().join("this_archive_name_is_longer_than_32.neo").exists());
}

#[test]
fn test_info_reports_header() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_zip(
        &dir.path().join("mslug.zip"),
        &[("201-p1.p1", &[0; 32]), ("201-c1.c1", &[0; 64])],
    );
    let output = neocart(dir.path(), &["convert", "mslug.zip", "--year", "1996"]);
    assert!(output.status.success(), "convert failed: {:?}", output);

    let output = neocart(dir.path(), &["info", "mslug.neo"]);
    assert!(output.status.success(), "info failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name:         mslug"), "{stdout}");
    assert!(stdout.contains("Year:         1996"), "{stdout}");
    assert!(stdout.contains("Expected:     4192 bytes"), "{stdout}");
}

#[test]
fn test_info_detects_truncated_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_zip(&dir.path().join("samsho.zip"), &[("p1.bin", &[0; 32])]);
    let output = neocart(dir.path(), &["convert", "samsho.zip"]);
    assert!(output.status.success(), "convert failed: {:?}", output);

    let path = dir.path().join("samsho.neo");
    let mut image = std::fs::read(&path).unwrap();
    image.truncate(4100);
    std::fs::write(&path, image).unwrap();

    let output = neocart(dir.path(), &["info", "samsho.neo"]);
    assert!(!output.status.success());
}
