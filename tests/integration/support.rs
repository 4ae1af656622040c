use codevis::RawNode;
use std::path::{Path, PathBuf};

pub fn dir(name: &str, path: &str, children: Vec<RawNode>) -> RawNode {
    RawNode::dir(name, path, children)
}

pub fn file(name: &str, path: &str) -> RawNode {
    RawNode::file(name, path, 1)
}

/// Module layout with cmd/app, internal (+featureflag, worker), pkg/api and an
/// api/v1 directory holding only a .proto file. Siblings are unsorted.
pub fn module_snapshot() -> RawNode {
    dir(
        ".",
        ".",
        vec![
            file("go.mod", "go.mod"),
            dir(
                "pkg",
                "pkg",
                vec![dir("api", "pkg/api", vec![file("grpc.go", "pkg/api/grpc.go")])],
            ),
            dir(
                "internal",
                "internal",
                vec![
                    dir(
                        "worker",
                        "internal/worker",
                        vec![file("worker.go", "internal/worker/worker.go")],
                    ),
                    file("internal.go", "internal/internal.go"),
                    dir(
                        "featureflag",
                        "internal/featureflag",
                        vec![file("featureflag.go", "internal/featureflag/featureflag.go")],
                    ),
                ],
            ),
            dir(
                "api",
                "api",
                vec![dir(
                    "v1",
                    "api/v1",
                    vec![file("my-type.proto", "api/v1/my-type.proto")],
                )],
            ),
            dir(
                "cmd",
                "cmd",
                vec![dir("app", "cmd/app", vec![file("main.go", "cmd/app/main.go")])],
            ),
            file("README.md", "README.md"),
        ],
    )
    .with_abs_path("/home/dev/tmp")
}

/// Write `root` as a JSON snapshot under `dir`, returning its path.
pub fn write_snapshot(dir: &Path, root: &RawNode) -> PathBuf {
    let path = dir.join("snapshot.json");
    std::fs::write(&path, serde_json::to_string(root).unwrap()).unwrap();
    path
}
