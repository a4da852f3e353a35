use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use unpackall::scan::{classify, discover};
use unpackall::{
    Config, ExtractCommand, FailureCause, Orchestrator, ProcessOutput, ProcessRunner, RunSummary,
    ScanError, Tool, ToolTable,
};

/// What the fake tool does for a given archive file name.
#[derive(Clone, Copy)]
enum Behavior {
    Extract,
    Corrupt,
    Missing,
}

/// Records every command and simulates tools without touching real binaries.
///
/// On success it writes `extracted.txt` into the directory the archive
/// would extract to.
struct FakeRunner {
    rules: Vec<(&'static str, Behavior)>,
    calls: Mutex<Vec<ExtractCommand>>,
}

impl FakeRunner {
    fn new(rules: Vec<(&'static str, Behavior)>) -> Arc<Self> {
        Arc::new(Self {
            rules,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<ExtractCommand> {
        self.calls.lock().unwrap().clone()
    }

    fn archive_arg(command: &ExtractCommand) -> PathBuf {
        command
            .args
            .iter()
            .map(PathBuf::from)
            .find(|p| {
                let name = p.to_string_lossy().to_ascii_lowercase();
                name.ends_with(".zip") || name.ends_with(".rar") || name.ends_with(".7z")
            })
            .expect("command has no archive argument")
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, command: &ExtractCommand) -> io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push(command.clone());

        let archive = Self::archive_arg(command);
        let name = archive.file_name().unwrap().to_string_lossy().into_owned();
        let behavior = self
            .rules
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, b)| *b)
            .unwrap_or(Behavior::Extract);

        match behavior {
            Behavior::Extract => {
                let out = archive.with_extension("");
                fs::write(out.join("extracted.txt"), name.as_bytes())?;
                Ok(ProcessOutput {
                    success: true,
                    code: Some(0),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            }
            Behavior::Corrupt => Ok(ProcessOutput {
                success: false,
                code: Some(2),
                stdout: String::new(),
                stderr: "ERROR: Headers Error".into(),
            }),
            Behavior::Missing => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"archive bytes").unwrap();
}

fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}

#[tokio::test]
async fn flat_run_extracts_archives_and_ignores_other_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("a.zip"));
    touch(&root.join("b.rar"));
    touch(&root.join("notes.txt"));

    let runner = FakeRunner::new(vec![]);
    let summary = Orchestrator::new(Config::new(root, false), runner.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(
        sorted(summary.extracted.clone()),
        [root.join("a.zip"), root.join("b.rar")]
    );
    assert!(!summary.has_failures());
    assert!(root.join("a/extracted.txt").is_file());
    assert!(root.join("b/extracted.txt").is_file());
    assert!(!root.join("a.zip").exists());
    assert!(!root.join("b.rar").exists());
    assert!(root.join("notes.txt").exists());
    assert_eq!(runner.calls().len(), 2);
}

#[tokio::test]
async fn corrupt_archive_is_kept_and_counted_as_failed() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("c.7z"));

    let runner = FakeRunner::new(vec![("c.7z", Behavior::Corrupt)]);
    let summary = Orchestrator::new(Config::new(root, false), runner)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(
        summary.failed,
        [(root.join("c.7z"), FailureCause::ExtractionFailed)]
    );
    assert_eq!(fs::read(root.join("c.7z")).unwrap(), b"archive bytes");
    // partial output directory stays for inspection
    assert!(root.join("c").is_dir());
}

#[tokio::test]
async fn recursive_run_extracts_next_to_each_archive() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("top.zip"));
    touch(&root.join("sub/d.zip"));
    touch(&root.join("sub/deeper/e.7z"));

    let runner = FakeRunner::new(vec![]);
    let summary = Orchestrator::new(Config::new(root, true), runner)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 3);
    assert!(root.join("top/extracted.txt").is_file());
    assert!(root.join("sub/d/extracted.txt").is_file());
    assert!(root.join("sub/deeper/e/extracted.txt").is_file());
    assert!(!root.join("d").exists());
    assert!(!root.join("e").exists());
    assert!(!root.join("sub/d.zip").exists());
    assert!(!root.join("sub/deeper/e.7z").exists());
}

#[tokio::test]
async fn flat_run_does_not_descend_into_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("sub/d.zip"));

    let runner = FakeRunner::new(vec![]);
    let summary = Orchestrator::new(Config::new(root, false), runner.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 0);
    assert!(runner.calls().is_empty());
    assert!(root.join("sub/d.zip").exists());
}

#[tokio::test]
async fn no_archives_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("readme.md"));

    let runner = FakeRunner::new(vec![]);
    let summary = Orchestrator::new(Config::new(dir.path(), true), runner.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(summary, RunSummary::default());
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn one_failure_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("first.zip"));
    touch(&root.join("second.rar"));
    touch(&root.join("third.7z"));

    let runner = FakeRunner::new(vec![
        ("first.zip", Behavior::Missing),
        ("third.7z", Behavior::Corrupt),
    ]);
    let summary = Orchestrator::new(Config::new(root, false), runner.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(runner.calls().len(), 3);
    assert_eq!(summary.extracted, [root.join("second.rar")]);

    let mut failed = summary.failed.clone();
    failed.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        failed,
        [
            (root.join("first.zip"), FailureCause::ToolNotFound),
            (root.join("third.7z"), FailureCause::ExtractionFailed),
        ]
    );
    assert!(root.join("first.zip").exists());
    assert!(root.join("third.7z").exists());
    assert!(!root.join("second.rar").exists());
}

#[tokio::test]
async fn archives_are_extracted_in_discovery_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for name in ["m.zip", "b.rar", "z.7z", "a.zip", "sub/k.zip", "sub/c.rar"] {
        touch(&root.join(name));
    }

    let discovered = discover(root, true).await.unwrap();
    let expected: Vec<PathBuf> = classify(discovered.paths)
        .await
        .iter()
        .map(|a| a.path().to_path_buf())
        .collect();
    assert_eq!(expected.len(), 6);

    let runner = FakeRunner::new(vec![("z.7z", Behavior::Corrupt)]);
    let summary = Orchestrator::new(Config::new(root, true), runner.clone())
        .run()
        .await
        .unwrap();

    let invoked: Vec<PathBuf> = runner.calls().iter().map(FakeRunner::archive_arg).collect();
    assert_eq!(invoked, expected);
    assert_eq!(summary.processed, expected.len());
}

#[tokio::test]
async fn blocked_output_directory_skips_the_archive() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("f.zip"));
    // a regular file where the output directory should go
    fs::write(root.join("f"), b"in the way").unwrap();

    let runner = FakeRunner::new(vec![]);
    let summary = Orchestrator::new(Config::new(root, false), runner.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped, [root.join("f.zip")]);
    assert!(runner.calls().is_empty());
    assert!(root.join("f.zip").exists());
}

#[tokio::test]
async fn archive_without_a_tool_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("g.rar"));
    touch(&root.join("h.zip"));

    let tools = ToolTable::empty().with_tool("zip", Tool::unzip());
    let runner = FakeRunner::new(vec![]);
    let summary = Orchestrator::new(Config::new(root, false), runner.clone())
        .with_tools(tools)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, [root.join("g.rar")]);
    assert_eq!(summary.extracted, [root.join("h.zip")]);
    assert!(root.join("g.rar").exists());
    assert!(!root.join("g").exists());
}

#[tokio::test]
async fn paths_with_spaces_reach_the_tool_as_one_argument() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let archive = root.join("holiday photos; 2024.ZIP");
    touch(&archive);

    let runner = FakeRunner::new(vec![]);
    Orchestrator::new(Config::new(root, false), runner.clone())
        .run()
        .await
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "unzip");
    assert!(calls[0].args.iter().any(|a| Path::new(a) == archive));
    assert!(root.join("holiday photos; 2024/extracted.txt").is_file());
}

#[tokio::test]
async fn unreadable_root_is_fatal_in_flat_mode() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let runner = FakeRunner::new(vec![]);
    let result = Orchestrator::new(Config::new(&missing, false), runner)
        .run()
        .await;

    assert!(matches!(result, Err(ScanError::RootRead { .. })));
}
