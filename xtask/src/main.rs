//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(botgate_types::ValidationReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(botgate_settings::BotgateConfigV1)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            filename: "botgate.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaTarget {
            filename: "botgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for target in schema_targets() {
        let schema = (target.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(target.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for target in schema_targets() {
        let path = dir.join(target.filename);

        if !path.exists() {
            missing.push(target.filename);
            continue;
        }

        let expected = serde_json::to_value((target.generate)()).context("Failed to encode schema")?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let actual: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Key order depends on serde_json features, so compare parsed values.
        if expected != actual {
            mismatched.push(target.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture golden reports against botgate.report.v1");
    eprintln!("  explain-coverage  Validate all rule IDs and codes have explanations");
}

/// Validate every `tests/fixtures/*/expected.report.json` against the report schema,
/// and check that failure ids are known to the explain registry.
fn conform() -> anyhow::Result<()> {
    let schema_value =
        serde_json::to_value(generate_report_schema()).context("Failed to convert schema")?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))?;

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let dir = fixtures_dir();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let fixture_dir = entry?.path();
        let golden = fixture_dir.join("expected.report.json");
        if !golden.exists() {
            continue;
        }

        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content =
            fs::read_to_string(&golden).with_context(|| format!("Failed to read {name}"))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {name} as JSON"))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }

        if let Some(failure) = value.get("failure") {
            for key in ["rule_id", "code"] {
                let id = failure.get(key).and_then(|v| v.as_str()).unwrap_or_default();
                if botgate_types::lookup_explanation(id).is_none() {
                    errors.push(format!("{name}: failure.{key} '{id}' has no explanation"));
                }
            }
        }

        fixture_count += 1;
        println!("  ✓ {name} validates");
    }

    if fixture_count == 0 {
        bail!("No golden reports found in {}", dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {fixture_count} fixture reports pass conformance checks!");
    Ok(())
}

/// Validate that all rule IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_ids = botgate_types::explain::all_rule_ids();
    let codes = botgate_types::explain::all_codes();

    let mut errors = Vec::new();

    for (label, id) in rule_ids
        .iter()
        .map(|id| ("Rule ID", id))
        .chain(codes.iter().map(|code| ("Code", code)))
    {
        match botgate_types::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{label} '{id}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{label} '{id}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{label} '{id}' has empty remediation"));
                }
            }
            None => errors.push(format!("{label} '{id}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule IDs have explanations", rule_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
