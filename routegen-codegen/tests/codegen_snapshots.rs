//! Snapshot tests for the generated routes file.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use routegen_codegen::{Generator, Outcome};
use routegen_core::GeneratorConfig;
use tempfile::TempDir;

/// Preview the routes file for a set of `(path, source)` pages.
fn render_pages(pages: &[(&str, &str)]) -> String {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = dir.path().join("pages");
    fs::create_dir_all(&root).unwrap();
    for (relative, content) in pages {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    let config = GeneratorConfig::new(&root, dir.path().join("generated"));
    match Generator::new(config).preview().expect("preview failed").outcome {
        Outcome::Preview(content) => content,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_site_routes_file() {
    let rendered = render_pages(&[
        ("index.swift", "struct Index: RequestHandler {}"),
        ("api/index.swift", "struct API: AsyncRequestHandler {}"),
        (
            "api/hello/hello.index.swift",
            "struct PostHello: RequestHandler {}\nstruct GetHello: RequestHandler {}",
        ),
        ("user/[id].swift", "final class UserPage: AsyncRequestHandler {}"),
        ("api/post/[...slug].swift", "struct Post: RequestHandler {}"),
    ]);

    insta::assert_snapshot!("site_routes_file", rendered);
}

#[test]
fn test_empty_routes_file() {
    let rendered = render_pages(&[]);

    insta::assert_snapshot!("empty_routes_file", rendered);
}
