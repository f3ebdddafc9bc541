// File selection tests: filters, hidden files, nesting and symlinks

use crate::common::TestRepo;
use coderank::core::indexer::{CorpusBuilder, FileFilter, FileWalker};
use std::path::Path;

fn ids(builder: &CorpusBuilder, root: &Path) -> Vec<String> {
    let mut ids: Vec<String> = builder
        .build(root)
        .documents
        .into_iter()
        .map(|d| d.id)
        .collect();
    ids.sort();
    ids
}

fn rel(parts: &[&str]) -> String {
    parts
        .iter()
        .collect::<std::path::PathBuf>()
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_selection_small_repo_all_files() {
    let repo = TestRepo::small();

    let builder = CorpusBuilder::new(vec![], vec![], true);

    assert_eq!(ids(&builder, repo.path()).len(), repo.files.len());
}

#[test]
fn test_selection_include_by_name() {
    let repo = TestRepo::small();

    let builder = CorpusBuilder::new(vec!["*.md".to_string()], vec![], false);

    assert_eq!(
        ids(&builder, repo.path()),
        vec!["README.md".to_string(), rel(&["docs", "api.md"])]
    );
}

#[test]
fn test_selection_exact_name_patterns() {
    let repo = TestRepo::small();

    let builder = CorpusBuilder::new(
        vec!["LICENSE".to_string(), "Cargo.*".to_string()],
        vec![],
        false,
    );

    assert_eq!(
        ids(&builder, repo.path()),
        vec!["Cargo.toml".to_string(), "LICENSE".to_string()]
    );
}

#[test]
fn test_selection_exclude_wins_over_include() {
    let repo = TestRepo::small();

    let builder = CorpusBuilder::new(
        vec!["*.rs".to_string()],
        vec!["test_*".to_string(), "db.rs".to_string()],
        false,
    );

    let selected = ids(&builder, repo.path());
    assert_eq!(selected.len(), 4);
    assert!(!selected.iter().any(|id| id.ends_with("db.rs")));
    assert!(!selected.iter().any(|id| id.ends_with("test_main.rs")));
}

#[test]
fn test_selection_hidden_files_included() {
    let repo = TestRepo::with_files(&[
        (".github/workflows/ci.yml", "on: push"),
        (".gitignore", "target"),
        ("src/main.rs", "fn main() {}"),
    ]);

    let builder = CorpusBuilder::new(vec![], vec![], false);

    assert_eq!(ids(&builder, repo.path()).len(), 3);
}

#[test]
fn test_walker_yields_only_regular_files() {
    let repo = TestRepo::with_files(&[("a/b/c/deep.txt", "x")]);
    std::fs::create_dir_all(repo.path().join("empty/dir")).unwrap();

    let files = FileWalker::new(FileFilter::allow_all()).collect_files(repo.path());

    assert_eq!(files, vec![repo.path().join("a/b/c/deep.txt")]);
}

#[cfg(unix)]
#[test]
fn test_selection_skips_symlinks() {
    let repo = TestRepo::with_files(&[("real.txt", "x"), ("dir/inner.txt", "y")]);
    let outside = TestRepo::with_files(&[("outside.txt", "z")]);
    std::os::unix::fs::symlink(repo.path().join("real.txt"), repo.path().join("alias.txt"))
        .unwrap();
    std::os::unix::fs::symlink(outside.path(), repo.path().join("external")).unwrap();

    let builder = CorpusBuilder::new(vec![], vec![], true);

    assert_eq!(
        ids(&builder, repo.path()),
        vec![rel(&["dir", "inner.txt"]), "real.txt".to_string()]
    );
}

#[cfg(unix)]
#[test]
fn test_selection_unreadable_directory_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let repo = TestRepo::with_files(&[("open/a.txt", "a"), ("locked/b.txt", "b")]);
    let locked = repo.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory
    if std::fs::read_dir(&locked).is_err() {
        let builder = CorpusBuilder::new(vec![], vec![], false);
        assert_eq!(ids(&builder, repo.path()), vec![rel(&["open", "a.txt"])]);
    }

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
}
