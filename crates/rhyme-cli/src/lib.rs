// rhyme-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use rhyme_en::handle::RhymeHandle;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Dictionary file name looked up inside search directories.
const DICT_FILE: &str = "cmudict.dict";

/// Environment variable naming a dictionary file or directory.
const DICT_PATH_ENV: &str = "RHYME_DICT_PATH";

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "RHYME_LOG";

/// Search for a dictionary file and create a RhymeHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `RHYME_DICT_PATH` environment variable
/// 3. `~/.rhyme/cmudict.dict`
/// 4. System share directories
/// 5. Current working directory
pub fn load_handle(dict_path: Option<&str>) -> Result<RhymeHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            return load_from_file(path);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn load_from_file(path: &Path) -> Result<RhymeHandle, String> {
    debug!(path = %path.display(), "reading dictionary");
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let handle = RhymeHandle::from_text(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    if handle.dictionary().is_empty() {
        return Err(format!("dictionary {} has no entries", path.display()));
    }
    info!(
        path = %path.display(),
        words = handle.dictionary().len(),
        "dictionary ready"
    );
    Ok(handle)
}

/// Build the list of candidate dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument (file or directory)
    if let Some(p) = dict_path {
        push_file_or_dir(&mut paths, PathBuf::from(p));
    }

    // 2. RHYME_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        push_file_or_dir(&mut paths, PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".rhyme").join(DICT_FILE));
    }

    // 4. System paths
    paths.push(PathBuf::from("/usr/share/rhyme").join(DICT_FILE));
    paths.push(PathBuf::from("/usr/local/share/rhyme").join(DICT_FILE));

    // 5. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

fn push_file_or_dir(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if path.is_dir() {
        paths.push(path.join(DICT_FILE));
    } else {
        paths.push(path);
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match iter.next() {
                Some(val) => dict_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `RHYME_LOG` (default `warn`); `verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--verbose` or `-v` is in the args.
pub fn wants_verbose(args: &[String]) -> bool {
    args.iter().any(|a| a == "--verbose" || a == "-v")
}

/// Rhyme results for one query word, as printed by `rhyme --json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RhymeReport {
    pub word: String,
    pub known: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhymes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identical: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfect: Option<Vec<String>>,
}
