//! The `generate` binary run end to end on the files under `data/`.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

fn data(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/")).join(name)
}

fn generate(args: &[&OsStr]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .args(args)
        .output()
        .expect("run generate");
    println!("{}", String::from_utf8_lossy(&output.stdout));
    output
}

#[test]
fn no_solution() {
    // Only three five-letter words for six five-letter slots.
    let structure = data("structure1.txt");
    let words = data("words0.txt");
    let output = generate(&[structure.as_os_str(), words.as_os_str()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "No solution.");
}

#[test]
fn prints_grid_and_saves_image() {
    let structure = data("structure0.txt");
    let words = data("words0.txt");
    let image = std::env::temp_dir().join(format!("crossword-{}.png", std::process::id()));

    let output = generate(&[
        structure.as_os_str(),
        words.as_os_str(),
        image.as_os_str(),
        OsStr::new("--stats"),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("guesses: "));
    assert_eq!(lines.filter(|line| line.starts_with('█')).count(), 4);

    let img = image::open(&image).expect("png").to_rgba8();
    std::fs::remove_file(&image).expect("cleanup");
    assert_eq!(
        img.dimensions(),
        (5 * crossword_solver::CELL_SIZE, 4 * crossword_solver::CELL_SIZE)
    );

    // Top-left cell is blocked, the one beside it holds a letter.
    assert_eq!(img.get_pixel(50, 50).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(103, 3).0, [255, 255, 255, 255]);
}

#[test]
fn missing_file_fails() {
    let structure = data("no-such-structure.txt");
    let words = data("words0.txt");
    let output = generate(&[structure.as_os_str(), words.as_os_str()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot access"));
    assert!(stderr.contains("no-such-structure.txt"));
}
