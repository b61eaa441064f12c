use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use asr_settings_testkit::{fixture_path as shared_fixture_path, scratch_dir as shared_scratch_dir, target_dir as workspace_target_dir};

static ASR_SETTINGS_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn scratch_dir(label: &str) -> PathBuf {
	shared_scratch_dir(label)
}

pub(crate) fn run_asr_settings(args: &[&str]) -> Output {
	Command::new(asr_settings_bin()).args(args).output().expect("asr_settings command executes")
}

pub(crate) fn run_asr_settings_json(args: &[&str]) -> serde_json::Value {
	let output = run_asr_settings(args);
	assert!(
		output.status.success(),
		"asr_settings command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

pub(crate) fn stdout_text(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

fn asr_settings_bin() -> &'static PathBuf {
	ASR_SETTINGS_BIN.get_or_init(resolve_asr_settings_bin)
}

fn resolve_asr_settings_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_asr_settings") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "asr_settings.exe" } else { "asr_settings" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "asr_settings"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build asr_settings binary at {}", bin.display());

	bin
}
