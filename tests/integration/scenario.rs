use crate::support::{dir, file, module_snapshot};
use codevis::render::render_html;
use codevis::tree::{annotate, flatten, project, sort, ProjectionOptions};
use codevis::{build_render_nodes, NodeClass, PipelineOptions, TreeError};

#[test]
fn module_layout_flattens_in_reading_order() {
    let nodes = build_render_nodes(&module_snapshot(), &PipelineOptions::default()).unwrap();
    let got: Vec<(&str, &str, NodeClass)> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.prefix.as_str(), n.class))
        .collect();

    assert_eq!(
        got,
        vec![
            ("/home/dev/tmp", "", NodeClass::Root),
            ("cmd", "├─ ", NodeClass::NonPackage),
            ("cmd/app", "│  └─ ", NodeClass::Package),
            ("internal", "├─ ", NodeClass::Package),
            ("internal/featureflag", "│  ├─ ", NodeClass::Package),
            ("internal/worker", "│  └─ ", NodeClass::Package),
            ("pkg", "└─ ", NodeClass::NonPackage),
            ("pkg/api", "   └─ ", NodeClass::Package),
        ]
    );
    assert_eq!(nodes[0].label, "/home/dev/tmp (no source files)");
    assert_eq!(nodes[2].label, "app");
}

#[test]
fn module_layout_markup() {
    let nodes = build_render_nodes(&module_snapshot(), &PipelineOptions::default()).unwrap();
    let html = render_html(&nodes);
    let want = concat!(
        "<span class=\"root tree-entry\" id=\"/home/dev/tmp\">/home/dev/tmp (no source files)</span><br>\n",
        "├─ <span class=\"non-package tree-entry\" id=\"cmd\">cmd</span><br>\n",
        "│  └─ <span class=\"package tree-entry\" id=\"cmd/app\">app</span><br>\n",
        "├─ <span class=\"package tree-entry\" id=\"internal\">internal</span><br>\n",
        "│  ├─ <span class=\"package tree-entry\" id=\"internal/featureflag\">featureflag</span><br>\n",
        "│  └─ <span class=\"package tree-entry\" id=\"internal/worker\">worker</span><br>\n",
        "└─ <span class=\"non-package tree-entry\" id=\"pkg\">pkg</span><br>\n",
        "   └─ <span class=\"package tree-entry\" id=\"pkg/api\">api</span><br>\n",
    );
    assert_eq!(html, want);
}

#[test]
fn directory_with_only_other_files_is_excluded() {
    let nodes = build_render_nodes(&module_snapshot(), &PipelineOptions::default()).unwrap();
    assert!(nodes.iter().all(|n| n.id != "api" && n.id != "api/v1"));

    let annotated = annotate(sort(
        project(&module_snapshot(), &ProjectionOptions::default())
            .unwrap()
            .into(),
    ));
    assert!(annotated.root().children.iter().all(|c| c.name != "api"));
}

#[test]
fn root_is_present_without_any_sources() {
    let raw = dir(
        ".",
        ".",
        vec![
            file("README.md", "README.md"),
            dir("docs", "docs", vec![file("index.md", "docs/index.md")]),
        ],
    );
    let nodes = build_render_nodes(&raw, &PipelineOptions::default()).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, ".");
    assert_eq!(nodes[0].label, ". (no source files)");
    assert_eq!(nodes[0].class, NodeClass::Root);
    assert_eq!(nodes[0].prefix, "");
}

#[test]
fn pass_through_with_unrelated_files_is_non_package() {
    let raw = dir(
        ".",
        ".",
        vec![dir(
            "pkg",
            "pkg",
            vec![
                file("README.md", "pkg/README.md"),
                dir("api", "pkg/api", vec![file("api.go", "pkg/api/api.go")]),
            ],
        )],
    );
    let nodes = build_render_nodes(&raw, &PipelineOptions::default()).unwrap();
    assert_eq!(nodes[1].id, "pkg");
    assert_eq!(nodes[1].class, NodeClass::NonPackage);
}

#[test]
fn flatten_length_counts_retained_nodes() {
    let annotated = annotate(sort(
        project(&module_snapshot(), &ProjectionOptions::default())
            .unwrap()
            .into(),
    ));
    let nodes = flatten(&annotated, "no source files");
    assert_eq!(nodes.len(), annotated.root().subtree_len());
    assert_eq!(nodes.len(), 1 + 7);
}

#[test]
fn file_root_is_rejected() {
    let err = build_render_nodes(&file("main.go", "main.go"), &PipelineOptions::default())
        .unwrap_err();
    assert!(matches!(err, TreeError::InvalidInput(_)));
    assert!(err.to_string().starts_with("invalid input tree"));
}
