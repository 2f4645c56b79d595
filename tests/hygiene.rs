//! Hygiene: source-level rules for the trail engine, checked at test time.
//!
//! Each rule is a pattern with a budget over the production files in `src/`
//! (`*_test.rs` excluded, comment lines ignored). Budgets only go down.

use std::fs;
use std::path::Path;

enum Pattern {
    /// Plain substring.
    Text(&'static str),
    /// Macro call; `println!(` must not match `eprintln!(`.
    Macro(&'static str),
    /// `.replace(` on a line that talks about a color: colors are built as
    /// `Hsla` values and formatted once, never patched as strings.
    ColorSurgery,
}

struct Budget {
    name: &'static str,
    pattern: Pattern,
    max: usize,
    hint: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { name: ".unwrap()", pattern: Pattern::Text(".unwrap()"), max: 0, hint: "propagate with `?`" },
    Budget { name: ".expect()", pattern: Pattern::Text(".expect("), max: 0, hint: "propagate with `?`" },
    Budget { name: "panic!", pattern: Pattern::Macro("panic!("), max: 0, hint: "return a TrailError" },
    Budget { name: "unreachable!", pattern: Pattern::Macro("unreachable!("), max: 0, hint: "make the state unrepresentable" },
    Budget { name: "todo!", pattern: Pattern::Macro("todo!("), max: 0, hint: "finish it" },
    Budget { name: "unimplemented!", pattern: Pattern::Macro("unimplemented!("), max: 0, hint: "finish it" },
    // Silent loss.
    Budget { name: "let _ =", pattern: Pattern::Text("let _ ="), max: 0, hint: "log or propagate the result" },
    Budget { name: ".ok()", pattern: Pattern::Text(".ok()"), max: 0, hint: "match the error and log it" },
    Budget { name: "#[allow(dead_code)]", pattern: Pattern::Text("#[allow(dead_code)]"), max: 0, hint: "delete it" },
    // Leaked callbacks: every listener and frame callback is released on teardown.
    Budget { name: "Closure::forget", pattern: Pattern::Text(".forget()"), max: 0, hint: "keep the Closure in an owner that drops it" },
    Budget { name: "mem::forget", pattern: Pattern::Text("mem::forget("), max: 0, hint: "keep the value in an owner that drops it" },
    Budget { name: "into_js_value", pattern: Pattern::Text(".into_js_value()"), max: 0, hint: "keep the Closure in an owner that drops it" },
    // Colors.
    Budget { name: "color string surgery", pattern: Pattern::ColorSurgery, max: 0, hint: "use Hsla::with_alpha" },
    // Output goes through `log`.
    Budget { name: "println!", pattern: Pattern::Macro("println!("), max: 0, hint: "use log::debug!/warn!" },
    Budget { name: "eprintln!", pattern: Pattern::Macro("eprintln!("), max: 0, hint: "use log::warn!" },
    Budget { name: "dbg!", pattern: Pattern::Macro("dbg!("), max: 0, hint: "use log::debug!" },
];

impl Pattern {
    fn matches(&self, line: &str) -> bool {
        match self {
            Self::Text(needle) => line.contains(needle),
            Self::Macro(name) => line.match_indices(name).any(|(at, _)| {
                !line[..at]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
            }),
            Self::ColorSurgery => {
                let lower = line.to_ascii_lowercase();
                lower.contains(".replace(")
                    && ["hsl", "rgb", "color", "alpha"].iter().any(|word| lower.contains(word))
            }
        }
    }
}

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path = path.to_string_lossy().to_string();
            if path.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// `path:line` of every code line matching `pattern`.
fn hits(files: &[SourceFile], pattern: &Pattern) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(move |(_, line)| !is_comment(line) && pattern.matches(line))
                .map(move |(i, _)| format!("{}:{}", file.path, i + 1))
        })
        .collect()
}

#[test]
fn source_stays_within_budgets() {
    let files = source_files();
    let over: Vec<String> = BUDGETS
        .iter()
        .filter_map(|budget| {
            let found = hits(&files, &budget.pattern);
            (found.len() > budget.max).then(|| {
                format!(
                    "{}: found {}, max {} ({})\n  {}",
                    budget.name,
                    found.len(),
                    budget.max,
                    budget.hint,
                    found.join("\n  ")
                )
            })
        })
        .collect();
    assert!(over.is_empty(), "hygiene budgets exceeded:\n{}", over.join("\n"));
}

#[test]
fn scan_covers_the_engine_sources() {
    let files = source_files();
    for expected in ["lib.rs", "engine.rs", "listener.rs", "frame_loop.rs", "color.rs"] {
        assert!(
            files.iter().any(|f| Path::new(&f.path).ends_with(expected)),
            "src/{expected} missing from the scan"
        );
    }
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn macro_pattern_needs_a_boundary() {
    let println = Pattern::Macro("println!(");
    assert!(println.matches(r#"    println!("x");"#));
    assert!(!println.matches(r#"    eprintln!("x");"#));
    assert!(Pattern::Macro("eprintln!(").matches(r#"eprintln!("x");"#));
}

#[test]
fn color_surgery_pattern() {
    assert!(Pattern::ColorSurgery.matches(r#"let c = color.replace("hsl", "hsla");"#));
    assert!(Pattern::ColorSurgery.matches(r#"css.replace(")", &format!(", {alpha})"))"#));
    assert!(!Pattern::ColorSurgery.matches(r#"let name = raw.replace('-', "_");"#));
    assert!(!Pattern::ColorSurgery.matches("let was = std::mem::replace(&mut self.attached, false);"));
}

#[test]
fn comments_are_not_counted() {
    let files = [SourceFile {
        path: "src/sample.rs".to_owned(),
        content: "// never call .unwrap() here\nlet x = y.unwrap();\n".to_owned(),
    }];
    assert_eq!(hits(&files, &Pattern::Text(".unwrap()")), vec!["src/sample.rs:2".to_owned()]);
}
