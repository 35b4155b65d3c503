//! CLI command implementations
//!
//! Thin presentation layer: load files, call the library, print a JSON
//! response. Verdicts (valid or not, compatible or not) are ordinary
//! responses; only I/O problems and fatal schema errors exit non-zero.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::compat;
use crate::schema::Schema;
use crate::validator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Installs the log subscriber, parses arguments, and dispatches to the
/// appropriate command. This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Validate { schema, value } => validate(&schema, &value),
        Command::Compat { source, target } => compat_check(&source, &target),
        Command::Inspect { schema } => inspect(&schema),
    }
}

/// Validate a JSON value file against a schema file
pub fn validate(schema_path: &Path, value_path: &Path) -> CliResult<()> {
    let schema = load_schema(schema_path)?;
    let value = load_value(value_path)?;

    // Deserialized schemas carry no predicates, so the fatal
    // async-validator path cannot trigger here; `?` still covers it.
    let verdict = validator::validate(&value, &schema)?;

    write_response(json!({
        "isValid": verdict.is_valid(),
        "errors": verdict.errors(),
    }))
}

/// Check directional compatibility of two schema files
pub fn compat_check(source_path: &Path, target_path: &Path) -> CliResult<()> {
    let source = load_schema(source_path)?;
    let target = load_schema(target_path)?;

    let result = compat::check_compatibility(&source, &target);

    write_response(json!({
        "isCompatible": result.is_compatible(),
        "reason": result.reason(),
    }))
}

/// Print a summary of a schema file
pub fn inspect(schema_path: &Path) -> CliResult<()> {
    let schema = load_schema(schema_path)?;

    write_response(json!({
        "kind": schema.kind_name(),
        "summary": schema.describe(),
    }))
}

fn load_schema(path: &Path) -> CliResult<Schema> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::InvalidJson {
        path: path.display().to_string(),
        source: e,
    })
}

fn load_value(path: &Path) -> CliResult<Value> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::InvalidJson {
        path: path.display().to_string(),
        source: e,
    })
}

fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::FileRead {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_json_file(dir: &TempDir, name: &str, value: Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_validate_command_runs_on_valid_and_invalid_values() {
        let dir = TempDir::new().unwrap();
        let schema_path = write_json_file(
            &dir,
            "schema.json",
            json!({
                "kind": "object",
                "properties": {"id": {"kind": "primitive", "type": "number"}},
                "required": ["id"]
            }),
        );

        let good = write_json_file(&dir, "good.json", json!({"id": 7}));
        validate(&schema_path, &good).unwrap();

        // An invalid value is still an ordinary response, not an error.
        let bad = write_json_file(&dir, "bad.json", json!({"id": "seven"}));
        validate(&schema_path, &bad).unwrap();
    }

    #[test]
    fn test_validate_command_missing_file() {
        let dir = TempDir::new().unwrap();
        let schema_path = write_json_file(
            &dir,
            "schema.json",
            json!({"kind": "primitive", "type": "string"}),
        );

        let result = validate(&schema_path, &dir.path().join("absent.json"));
        assert!(matches!(result, Err(CliError::FileRead { .. })));
    }

    #[test]
    fn test_validate_command_malformed_schema() {
        let dir = TempDir::new().unwrap();
        let schema_path = dir.path().join("schema.json");
        fs::write(&schema_path, "{not json").unwrap();
        let value_path = write_json_file(&dir, "value.json", json!(1));

        let result = validate(&schema_path, &value_path);
        assert!(matches!(result, Err(CliError::InvalidJson { .. })));
    }

    #[test]
    fn test_compat_command() {
        let dir = TempDir::new().unwrap();
        let source = write_json_file(
            &dir,
            "source.json",
            json!({"kind": "primitive", "type": "string"}),
        );
        let target = write_json_file(
            &dir,
            "target.json",
            json!({"kind": "primitive", "type": "number"}),
        );

        compat_check(&source, &target).unwrap();
    }

    #[test]
    fn test_inspect_command() {
        let dir = TempDir::new().unwrap();
        let schema_path = write_json_file(
            &dir,
            "schema.json",
            json!({
                "kind": "array",
                "items": [{"kind": "primitive", "type": "number"}],
                "minItems": 1
            }),
        );

        inspect(&schema_path).unwrap();
    }
}
