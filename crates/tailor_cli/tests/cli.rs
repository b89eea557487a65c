use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tailor-cli-{}-{name}", std::process::id()))
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tailor"))
        .args(args)
        .output()
        .expect("failed to spawn tailor")
}

#[test]
fn missing_positional_argument_fails_with_the_fixed_message() {
    let out = run_cli(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Please provide a theme file path"), "stderr: {stderr}");
}

#[test]
fn generates_css_from_a_toml_theme() {
    let out_file = output_path("custom.css");
    let out = run_cli(&[
        fixture("custom-theme.toml").to_str().unwrap(),
        "-o",
        out_file.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Successfully generated"), "stdout: {stdout}");

    let css = fs::read_to_string(&out_file).unwrap();
    assert!(css.contains("--tailor-color-deep-red-9: #9e0419;"));
    assert!(css.contains("--tailor-breakpoint-md: 768px;"));
    // Defaults survive the merge.
    assert!(css.contains("--tailor-color-blue-6: #228be6;"));
    fs::remove_file(out_file).ok();
}

#[test]
fn generates_css_from_a_wrapped_json_theme() {
    let out_file = output_path("wrapped.css");
    let out = run_cli(&[
        fixture("wrapped-theme.json").to_str().unwrap(),
        "--output",
        out_file.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let css = fs::read_to_string(&out_file).unwrap();
    assert!(css.contains("--tailor-primary-color-6: var(--tailor-color-teal-6);"));
    fs::remove_file(out_file).ok();
}

#[test]
fn base_flag_prepends_the_base_block() {
    let out_file = output_path("base.css");
    let out = run_cli(&[
        fixture("custom-theme.toml").to_str().unwrap(),
        "-o",
        out_file.to_str().unwrap(),
        "--base",
    ]);
    assert_eq!(out.status.code(), Some(0));

    let css = fs::read_to_string(&out_file).unwrap();
    assert!(css.starts_with("*,"));
    assert!(css.contains(":root {"));
    fs::remove_file(out_file).ok();
}

#[test]
fn preset_out_writes_the_config_fragment() {
    let out_file = output_path("preset.css");
    let preset_file = output_path("preset.json");
    let out = run_cli(&[
        fixture("custom-theme.toml").to_str().unwrap(),
        "-o",
        out_file.to_str().unwrap(),
        "--preset-out",
        preset_file.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(0));

    let preset: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&preset_file).unwrap()).unwrap();
    assert_eq!(preset["darkMode"][0], "selector");
    assert!(preset["theme"]["extend"]["colors"]["deep-red"]["900"].is_string());
    fs::remove_file(out_file).ok();
    fs::remove_file(preset_file).ok();
}

#[test]
fn nonexistent_input_fails_with_the_generic_error_line() {
    let out = run_cli(&["does-not-exist.toml"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error generating theme"), "stderr: {stderr}");
}

#[test]
fn unrecognizable_theme_file_fails_with_the_generic_error_line() {
    let out = run_cli(&[fixture("not-a-theme.toml").to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error generating theme"), "stderr: {stderr}");
}

#[test]
fn invalid_scale_fails_with_the_generic_error_line() {
    let theme = output_path("short-scale.toml");
    fs::write(&theme, "[colors]\nbroken = [\"#fff\", \"#000\"]\n").unwrap();
    let out = run_cli(&[theme.to_str().unwrap(), "-o", output_path("never.css").to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error generating theme"), "stderr: {stderr}");
    assert!(stderr.contains("broken"), "stderr: {stderr}");
    fs::remove_file(theme).ok();
}
