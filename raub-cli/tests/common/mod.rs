//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common bookings
//! - Helpers for reading the reservation file back

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every test command.
const RAUB_ENV_VARS: [&str; 7] = [
    "RAUB_DATA_DIR",
    "RAUB_DATA_FILE",
    "RAUB_ORIGIN",
    "RAUB_FLIGHT_NUMBER",
    "RAUB_CURRENCY",
    "RAUB_OUTPUT_FORMAT",
    "RAUB_LOG_MODE",
];

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the reservation file and config
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the raub data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; booking commands create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("raub-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    ///
    /// Every `RAUB_*` variable from the outer environment is removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("raub").expect("Failed to find raub binary");
        for var in RAUB_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the default reservation file.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join("reservations.txt")
    }

    /// Read the reservation file, or an empty string if it does not exist.
    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_file()).unwrap_or_default()
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        let path = self.data_dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run `raub book` with JSON output and return the reference number.
    ///
    /// # Panics
    /// Panics if the command fails or prints no reference.
    pub fn book(&self, destination: &str, passengers: &[&str], departure: &str) -> String {
        self.book_with(destination, passengers, departure, &[])
    }

    /// Like [`TestEnv::book`], with extra arguments such as `--coupon`.
    pub fn book_with(
        &self,
        destination: &str,
        passengers: &[&str],
        departure: &str,
        extra: &[&str],
    ) -> String {
        let mut cmd = self.command();
        cmd.arg("book")
            .arg("--destination")
            .arg(destination)
            .arg("--departure")
            .arg(departure)
            .arg("--format")
            .arg("json");
        for passenger in passengers {
            cmd.arg("--passenger").arg(passenger);
        }
        cmd.args(extra);

        run_for_reference(cmd)
    }

    /// Run `raub package` for a family of four and return the reference number.
    pub fn book_package(&self, package: &str, first_seat: u8) -> String {
        let mut cmd = self.command();
        cmd.arg("package")
            .arg("--package")
            .arg(package)
            .arg("--departure")
            .arg("C")
            .arg("--format")
            .arg("json");
        for (i, (name, age)) in [("Mother", 41), ("Father", 44), ("Daughter", 12), ("Son", 7)]
            .iter()
            .enumerate()
        {
            let seat = usize::from(first_seat) + i;
            cmd.arg("--passenger").arg(format!("{name}:{age}:{seat}"));
        }

        run_for_reference(cmd)
    }

    /// Run a command and return stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// List all reservations as JSON.
    pub fn list_json(&self) -> serde_json::Value {
        let stdout = self.stdout_of(&["list", "--format", "json"]);
        serde_json::from_str(&stdout).expect("list output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn run_for_reference(mut cmd: Command) -> String {
    let output = cmd.output().expect("Failed to run booking command");
    assert!(
        output.status.success(),
        "Booking failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    parse_reference(&stdout)
}

/// Extract the reference number from a JSON boarding pass.
#[allow(dead_code)]
pub fn parse_reference(json: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(json).expect("Output is not JSON");
    value["reference"]
        .as_str()
        .expect("Output has no reference")
        .to_string()
}
