//! Shared snapshot fixtures for unit tests.

use crate::tree::node::RawNode;

/// A small module layout:
///
/// ```text
/// /src/github.com/username/tmp
///   README.md
///   go.mod
///   api/v1/my-type.proto
///   cmd/app/main.go
///   internal/worker/worker.go
///   internal/featureflag/featureflag.go
///   internal/featureflag/featureflag_test.go
///   internal/internal.go
///   pkg/api/grpc.go
///   go.sum
/// ```
///
/// Siblings are deliberately not in name order.
pub(crate) fn sample_module() -> RawNode {
    RawNode::dir(
        ".",
        ".",
        vec![
            RawNode::file("README.md", "README.md", 120),
            RawNode::file("go.mod", "go.mod", 40),
            RawNode::dir(
                "api",
                "api",
                vec![RawNode::dir(
                    "v1",
                    "api/v1",
                    vec![RawNode::file("my-type.proto", "api/v1/my-type.proto", 300)],
                )],
            ),
            RawNode::dir(
                "cmd",
                "cmd",
                vec![RawNode::dir(
                    "app",
                    "cmd/app",
                    vec![RawNode::file("main.go", "cmd/app/main.go", 200)],
                )],
            ),
            RawNode::dir(
                "internal",
                "internal",
                vec![
                    RawNode::dir(
                        "worker",
                        "internal/worker",
                        vec![RawNode::file("worker.go", "internal/worker/worker.go", 512)],
                    ),
                    RawNode::dir(
                        "featureflag",
                        "internal/featureflag",
                        vec![
                            RawNode::file(
                                "featureflag.go",
                                "internal/featureflag/featureflag.go",
                                256,
                            ),
                            RawNode::file(
                                "featureflag_test.go",
                                "internal/featureflag/featureflag_test.go",
                                128,
                            ),
                        ],
                    ),
                    RawNode::file("internal.go", "internal/internal.go", 64),
                ],
            ),
            RawNode::dir(
                "pkg",
                "pkg",
                vec![RawNode::dir(
                    "api",
                    "pkg/api",
                    vec![RawNode::file("grpc.go", "pkg/api/grpc.go", 90)],
                )],
            ),
            RawNode::file("go.sum", "go.sum", 800),
        ],
    )
    .with_abs_path("/src/github.com/username/tmp")
}
