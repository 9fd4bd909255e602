use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use conform_compare::{ComparisonFailure, CompareConfig, Registry};
use conform_types::Value;

use crate::cli::{Cli, OutputFormat};

/// Result of a completed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Equal,
    Different,
}

pub fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = resolve_config(cli)?;
    let expected = load_document(&cli.expected)?;
    let actual = load_document(&cli.actual)?;

    let failure = compare(&expected, &actual, &config)?;
    match cli.format {
        OutputFormat::Text => print_text(failure.as_ref()),
        OutputFormat::Json => println!("{}", json_report(failure.as_ref())),
    }

    Ok(match failure {
        None => Outcome::Equal,
        Some(_) => Outcome::Different,
    })
}

/// Compare with the built-in comparators, separating "values differ" from
/// errors that stopped the comparison.
fn compare(
    expected: &Value,
    actual: &Value,
    config: &CompareConfig,
) -> anyhow::Result<Option<ComparisonFailure>> {
    match Registry::default().assert_equals(expected, actual, config) {
        Ok(()) => Ok(None),
        Err(err) => Ok(Some(err.into_failure().context("comparison aborted")?)),
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<CompareConfig> {
    let mut config = match &cli.config {
        Some(path) => CompareConfig::load(path)?,
        None => CompareConfig::default(),
    };
    if cli.canonicalize {
        config.canonicalize = true;
    }
    if cli.ignore_case {
        config.ignore_case = true;
    }
    if let Some(delta) = cli.delta {
        config.delta = delta;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    config.validate()?;
    tracing::debug!(?config, "resolved comparison settings");
    Ok(config)
}

/// Read a document, parsing it as TOML when the extension is `.toml` and
/// as JSON otherwise.
fn load_document(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let value = if is_toml {
        let doc: toml::Value =
            toml::from_str(&text).with_context(|| format!("parsing {} as TOML", path.display()))?;
        Value::from_toml(&doc)
    } else {
        let doc: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parsing {} as JSON", path.display()))?;
        Value::from_json(&doc)
    };
    value.with_context(|| format!("converting {}", path.display()))
}

fn print_text(failure: Option<&ComparisonFailure>) {
    let Some(failure) = failure else {
        println!("{} Values are equal.", "✓".green().bold());
        return;
    };

    println!("{} {}", "✗".red().bold(), failure.message());
    for line in failure.diff().lines() {
        if line.starts_with("---") || line.starts_with("+++") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

fn json_report(failure: Option<&ComparisonFailure>) -> serde_json::Value {
    match failure {
        None => serde_json::json!({ "equal": true }),
        Some(failure) => serde_json::json!({
            "equal": false,
            "message": failure.message(),
            "expected": failure.expected_as_string(),
            "actual": failure.actual_as_string(),
            "discrepancies": failure.discrepancies(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn cli(expected: PathBuf, actual: PathBuf) -> Cli {
        Cli {
            expected,
            actual,
            canonicalize: false,
            ignore_case: false,
            delta: None,
            max_depth: None,
            config: None,
            verbose: false,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn equal_documents() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.json", r#"{"a": [1, 2]}"#);
        let b = write(&dir, "b.json", r#"{"a": [1, 2]}"#);
        assert_eq!(run(&cli(a, b)).unwrap(), Outcome::Equal);
    }

    #[test]
    fn json_and_toml_documents_compare() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.json", r#"{"name": "x", "ports": [80, 443]}"#);
        let b = write(&dir, "b.toml", "name = \"x\"\nports = [80, 443]\n");
        assert_eq!(run(&cli(a, b)).unwrap(), Outcome::Equal);
    }

    #[test]
    fn different_documents() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.json", "[2, 1]");
        let b = write(&dir, "b.json", "[1, 2]");
        assert_eq!(run(&cli(a.clone(), b.clone())).unwrap(), Outcome::Different);

        let mut canonical = cli(a, b);
        canonical.canonicalize = true;
        canonical.format = OutputFormat::Json;
        assert_eq!(run(&canonical).unwrap(), Outcome::Equal);
    }

    #[test]
    fn config_file_is_overridden_by_flags() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.json", "[1.0]");
        let b = write(&dir, "b.json", "[1.5]");
        let config = write(&dir, "conform.toml", "delta = 0.1\n");

        let mut args = cli(a, b);
        args.config = Some(config);
        assert_eq!(run(&args).unwrap(), Outcome::Different);

        args.delta = Some(1.0);
        assert_eq!(run(&args).unwrap(), Outcome::Equal);
    }

    #[test]
    fn unreadable_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.json", "{not json");
        let b = write(&dir, "b.json", "{}");
        let err = run(&cli(a, b)).unwrap_err();
        assert!(err.to_string().contains("as JSON"));
    }

    #[test]
    fn depth_limit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.json", "[[[1]]]");
        let mut args = cli(a.clone(), a);
        args.max_depth = Some(1);
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("comparison aborted"));
    }

    #[test]
    fn json_report_lists_discrepancies() {
        let expected = Value::from_json(&serde_json::json!({"a": 1})).unwrap();
        let actual = Value::from_json(&serde_json::json!({"b": 1})).unwrap();
        let failure = compare(&expected, &actual, &CompareConfig::default())
            .unwrap()
            .unwrap();

        let report = json_report(Some(&failure));
        assert_eq!(report["equal"], false);
        assert_eq!(
            report["discrepancies"],
            serde_json::json!([
                {"key": "a", "kind": "missing_key"},
                {"key": "b", "kind": "extra_key"},
            ])
        );
        assert_eq!(json_report(None), serde_json::json!({"equal": true}));
    }
}
