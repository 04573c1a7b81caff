use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `shape` binary with its session log redirected into `temp`.
fn shape_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shape").expect("binary exists");
    cmd.env("XDG_DATA_HOME", temp.path().join("data"))
        .current_dir(temp.path());
    cmd
}

fn decode(path: &std::path::Path) -> image::RgbaImage {
    let bytes = std::fs::read(path).unwrap();
    image::load_from_memory(&bytes).unwrap().into_rgba8()
}

#[test]
fn help_lists_supported_shapes() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported shapes:"))
        .stdout(predicate::str::contains("hexagon"));
}

#[test]
fn creates_file_with_default_name() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["circle", "10", "10", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created circle_10x10.png ("));

    let img = decode(&temp.path().join("circle_10x10.png"));
    assert_eq!(img.dimensions(), (10, 10));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(5, 5).0, [0, 0, 255, 255]);
}

#[test]
fn legacy_form_renders_rectangle_with_warning() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["3", "3", "red", "out.png"])
        .assert()
        .success()
        .stderr(predicate::str::contains("deprecated argument order"));

    let img = decode(&temp.path().join("out.png"));
    assert!(img.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}

#[test]
fn negative_width_exits_64() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["-1", "3", "red", "out.png"])
        .assert()
        .code(64);
    assert!(!temp.path().join("out.png").exists());

    shape_cmd(&temp)
        .args(["circle", "-1", "3", "red"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Width and height must be positive integers"));
}

#[test]
fn unknown_shape_and_colour_exit_64() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["pentagram", "40", "40", "red"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Did you mean 'pentagon'?"));

    shape_cmd(&temp)
        .args(["circle", "40", "40", "notacolourxyz"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Invalid colour"));

    shape_cmd(&temp)
        .args(["circl", "40", "40", "red", "--strict-shape"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Use --help to see supported shapes."));
}

#[test]
fn existing_file_requires_force() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("taken.png");
    std::fs::write(&out, b"placeholder").unwrap();

    shape_cmd(&temp)
        .args(["star", "50", "50", "gold", "-o", "taken.png"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("File exists. Use --force to overwrite."));
    assert_eq!(std::fs::read(&out).unwrap(), b"placeholder");

    shape_cmd(&temp)
        .args(["star", "50", "50", "gold", "-o", "taken.png", "--force"])
        .assert()
        .success();
    assert_eq!(decode(&out).dimensions(), (50, 50));
}

#[test]
fn verbose_reports_request_and_advice() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["hexagon", "80", "40", "#667EEA", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating hexagon 80x40 PNG with color #667eea",
        ))
        .stdout(predicate::str::contains("Output: hexagon_80x40.png"))
        .stderr(predicate::str::contains("looks best with aspect ratio 1:1"));
}

#[test]
fn shape_options_reach_the_renderer() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["donut", "60", "60", "red", "--thickness", "0.4", "-o", "ring.png"])
        .assert()
        .success();
    let img = decode(&temp.path().join("ring.png"));
    assert_eq!(img.get_pixel(30, 30).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(54, 30).0, [255, 0, 0, 255]);

    shape_cmd(&temp)
        .args(["donut", "60", "60", "red", "--thickness", "1.5"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Donut thickness"));
}

#[test]
fn session_log_is_written() {
    let temp = TempDir::new().unwrap();
    shape_cmd(&temp)
        .args(["oval", "30", "20", "teal"])
        .assert()
        .success();

    let log = std::fs::read_to_string(temp.path().join("data/shapegen/shapegen.log")).unwrap();
    assert!(log.contains("session started"));
    assert!(log.contains("created oval_30x20.png"));
}

#[test]
fn gallery_renders_every_shape() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("gallery");
    Command::cargo_bin("shape-gallery")
        .expect("binary exists")
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .arg(&out)
        .assert()
        .success();

    for name in [
        "rectangle", "triangle", "circle", "oval", "star", "heart", "diamond", "pentagon",
        "hexagon", "octagon", "cross", "arrow", "donut",
    ] {
        let img = decode(&out.join(format!("{}.png", name)));
        assert_eq!(img.dimensions(), (60, 60), "{}", name);
    }
    let rect = decode(&out.join("rectangle.png"));
    assert_eq!(rect.get_pixel(0, 0).0, [0x5B, 0x8D, 0xEE, 255]);
}
