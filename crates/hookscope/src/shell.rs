use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use regex::bytes::Regex;

const SHELL_EXTENSIONS: &[&str] = &["bash", "dash", "zsh", "sh"];
const SUPPORTED_SHELLS: &[&str] = &["bash", "dash", "ksh", "sh"];

/// Shebang lines longer than this cannot name a supported shell anyway.
const MAX_SHEBANG_LEN: u64 = 256;

static SHEBANG_SHELL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^#!\s*(?:/bin/env\s+|/usr/bin/env\s+|/bin/|/usr/bin/)?([^\s/]+)")
        .expect("shebang pattern compiles")
});

/// Whether `path` looks like a shell script, by extension first and shebang
/// second.
///
/// Unreadable files, non-UTF-8 interpreter names and missing shebang lines
/// all classify as "not a shell script"; this never fails.
pub(crate) fn is_shell_script(path: &Path) -> bool {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        if SHELL_EXTENSIONS
            .iter()
            .any(|known| extension.eq_ignore_ascii_case(known))
        {
            return true;
        }
    }

    shell_interpreter(path)
        .is_some_and(|interpreter| SUPPORTED_SHELLS.contains(&interpreter.as_str()))
}

fn shell_interpreter(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;

    let mut line = Vec::new();
    BufReader::new(file.take(MAX_SHEBANG_LEN))
        .read_until(b'\n', &mut line)
        .ok()?;

    let captures = SHEBANG_SHELL_PATTERN.captures(&line)?;
    let interpreter = captures.get(1)?;
    std::str::from_utf8(interpreter.as_bytes())
        .ok()
        .map(str::to_owned)
}
