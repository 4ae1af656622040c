use crate::support::{dir, file, module_snapshot, write_snapshot};
use codevis::config::CodevisConfig;
use codevis::tooling::cli::{CliContext, Commands, SummaryFormat};
use codevis::{OutputFormat, RenderNode, TreeError};
use std::fs;
use tempfile::TempDir;

fn context(temp_dir: &TempDir) -> CliContext {
    CliContext::with_config(temp_dir.path().to_path_buf(), CodevisConfig::default()).unwrap()
}

#[test]
fn render_html_emits_one_line_per_entry() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &module_snapshot());

    let output = context(&temp_dir)
        .execute(&Commands::Render {
            snapshot,
            format: OutputFormat::Html,
            color: false,
        })
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|l| l.ends_with("</span><br>")));
    assert!(lines[0].starts_with("<span class=\"root tree-entry\""));
}

#[test]
fn render_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &module_snapshot());

    let output = context(&temp_dir)
        .execute(&Commands::Render {
            snapshot,
            format: OutputFormat::Json,
            color: false,
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = parsed.as_array().expect("render output should be an array");
    assert_eq!(entries.len(), 8);
    for entry in entries {
        assert!(entry.get("id").and_then(|v| v.as_str()).is_some());
        assert!(entry.get("label").and_then(|v| v.as_str()).is_some());
        assert!(entry.get("prefix").and_then(|v| v.as_str()).is_some());
        assert!(entry.get("class").and_then(|v| v.as_str()).is_some());
    }

    let nodes: Vec<RenderNode> = serde_json::from_str(&output).unwrap();
    assert_eq!(nodes[6].id, "pkg");
}

#[test]
fn render_text_draws_tree() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &module_snapshot());

    let output = context(&temp_dir)
        .execute(&Commands::Render {
            snapshot,
            format: OutputFormat::Text,
            color: false,
        })
        .unwrap();

    assert_eq!(
        output,
        "/home/dev/tmp (no source files)\n├─ cmd\n│  └─ app\n├─ internal\n│  ├─ featureflag\n│  └─ worker\n└─ pkg\n   └─ api\n"
    );
}

#[test]
fn entry_reports_directory_of_main_file() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &module_snapshot());

    let output = context(&temp_dir)
        .execute(&Commands::Entry { snapshot })
        .unwrap();
    assert_eq!(output, "cmd/app");
}

#[test]
fn entry_reports_absence() {
    let temp_dir = TempDir::new().unwrap();
    let raw = dir(".", ".", vec![file("lib.go", "lib.go")]);
    let snapshot = write_snapshot(temp_dir.path(), &raw);

    let output = context(&temp_dir)
        .execute(&Commands::Entry { snapshot })
        .unwrap();
    assert!(output.contains("No 'main.go' found"));
}

#[test]
fn summary_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &module_snapshot());

    let output = context(&temp_dir)
        .execute(&Commands::Summary {
            snapshot,
            format: SummaryFormat::Json,
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("root").and_then(|v| v.as_str()), Some("/home/dev/tmp"));
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(8));
    assert_eq!(parsed.get("packages").and_then(|v| v.as_u64()), Some(5));
    assert_eq!(parsed.get("pass_through").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(parsed.get("max_depth").and_then(|v| v.as_u64()), Some(2));
}

#[test]
fn summary_text_lists_class_counts() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &module_snapshot());

    let output = context(&temp_dir)
        .execute(&Commands::Summary {
            snapshot,
            format: SummaryFormat::Text,
        })
        .unwrap();
    assert!(output.contains("/home/dev/tmp"));
    assert!(output.contains("non-package"));
}

#[test]
fn entry_skips_hidden_directories() {
    let temp_dir = TempDir::new().unwrap();
    let raw = dir(
        ".",
        ".",
        vec![dir(".tools", ".tools", vec![file("main.go", ".tools/main.go")])],
    );
    let snapshot = write_snapshot(temp_dir.path(), &raw);

    let output = context(&temp_dir)
        .execute(&Commands::Entry { snapshot })
        .unwrap();
    assert!(output.contains("No 'main.go' found"));
}

#[test]
fn deep_snapshot_renders_through_cli() {
    let temp_dir = TempDir::new().unwrap();
    let leaf = deep_path(80);
    let mut raw = dir("d79", &leaf, vec![file("a.go", &format!("{}/a.go", leaf))]);
    for level in (1..80).rev() {
        raw = dir(&format!("d{}", level - 1), &deep_path(level), vec![raw]);
    }
    let snapshot = write_snapshot(temp_dir.path(), &dir(".", ".", vec![raw]));

    let output = context(&temp_dir)
        .execute(&Commands::Render {
            snapshot,
            format: OutputFormat::Html,
            color: false,
        })
        .unwrap();
    assert_eq!(output.lines().count(), 81);
}

fn deep_path(levels: usize) -> String {
    (0..levels)
        .map(|i| format!("d{}", i))
        .collect::<Vec<_>>()
        .join("/")
}

#[test]
fn null_snapshot_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = temp_dir.path().join("null.json");
    fs::write(&snapshot, "null").unwrap();

    let err = context(&temp_dir)
        .execute(&Commands::Entry { snapshot })
        .unwrap_err();
    assert!(matches!(err, TreeError::InvalidInput(_)));
}

#[test]
fn workspace_config_changes_suffix() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("codevis.toml"),
        "[tree]\nsource_suffix = \".rs\"\nentry_file = \"main.rs\"\n",
    )
    .unwrap();
    let raw = dir(
        ".",
        ".",
        vec![dir(
            "src",
            "src",
            vec![file("main.rs", "src/main.rs"), file("old.go", "src/old.go")],
        )],
    );
    let snapshot = write_snapshot(temp_dir.path(), &raw);

    let cli = CliContext::new(temp_dir.path().to_path_buf(), None).unwrap();
    let output = cli
        .execute(&Commands::Render {
            snapshot: snapshot.clone(),
            format: OutputFormat::Text,
            color: false,
        })
        .unwrap();
    assert_eq!(output, ". (no source files)\n└─ src\n");

    let entry = cli.execute(&Commands::Entry { snapshot }).unwrap();
    assert_eq!(entry, "src");
}
