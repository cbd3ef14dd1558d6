#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Initializes an empty git repository the adapters can query.
pub fn init_repo() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");

    let mut config = repo.config().expect("open config");
    config.set_str("user.name", "Test").expect("set user.name");
    config
        .set_str("user.email", "test@example.com")
        .expect("set user.email");

    dir
}

/// Lays out a Python package: a pyproject.toml and one module under src/.
pub fn write_package(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(dir.join("src")).expect("create package dirs");
    fs::write(dir.join("pyproject.toml"), "[project]\nname = \"fixture\"\n")
        .expect("write manifest");
    fs::write(dir.join("src").join("mod.py"), "x = 1\n").expect("write module");
    dir
}

pub fn stage(root: &Path, rel: &str) {
    let repo = git2::Repository::open(root).expect("open repo");
    let mut index = repo.index().expect("open index");
    index.add_path(Path::new(rel)).expect("stage file");
    index.write().expect("write index");
}

pub fn fake_bin() -> TempDir {
    TempDir::new().expect("create bin dir")
}

#[cfg(unix)]
pub fn install_tool(bin: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = bin.join(name);
    fs::write(&path, script).expect("write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("make executable");
}

/// Fake tool that records its name and arguments in $HOOKSCOPE_TEST_LOG.
pub fn logging_tool(name: &str) -> String {
    format!("#!/bin/sh\necho \"{name} $@\" >> \"$HOOKSCOPE_TEST_LOG\"\nexit 0\n")
}

/// Like [`logging_tool`], but exits non-zero when its arguments contain
/// `marker`.
pub fn logging_tool_failing_on(name: &str, marker: &str) -> String {
    format!(
        "#!/bin/sh\necho \"{name} $@\" >> \"$HOOKSCOPE_TEST_LOG\"\ncase \"$*\" in *{marker}*) exit 1;; esac\nexit 0\n"
    )
}

pub fn read_log(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_owned)
        .collect()
}
