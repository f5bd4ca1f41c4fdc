//! Hygiene — source-level checks on the dock crate.
//!
//! Placement code runs inside pointer handlers; a panic there kills the whole
//! WASM module. Each pattern below has a budget of zero in production files
//! (`*_test.rs` siblings are exempt). Budgets only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    label: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, label: "unwrap" },
    Budget { pattern: ".expect(", max: 0, label: "expect" },
    Budget { pattern: "panic!(", max: 0, label: "panic" },
    Budget { pattern: "unreachable!(", max: 0, label: "unreachable" },
    Budget { pattern: "todo!(", max: 0, label: "todo" },
    Budget { pattern: "unimplemented!(", max: 0, label: "unimplemented" },
    Budget { pattern: "let _ =", max: 0, label: "silent discard" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, label: "allow(dead_code)" },
    // f64::clamp panics on an inverted range, which a small viewport produces.
    Budget { pattern: ".clamp(", max: 0, label: "f64 clamp" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("snap.rs")), "run from the dock crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = hits_for(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {} budget exceeded: found {count}, max {}\n{detail}", budget.label, budget.max));
        }
    }
    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}
