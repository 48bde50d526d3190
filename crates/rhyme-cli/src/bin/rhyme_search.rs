// rhyme-search: Find words whose pronunciation matches a pattern.
//
// Usage:
//   rhyme-search [-d DICT_PATH] [--stress] PATTERN
//
// PATTERN is a regular expression over the space-joined phonemes
// (e.g. "AE1 T$"), or over the stress digits with --stress (e.g. "^10$").

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = rhyme_cli::parse_dict_path(&args);

    if rhyme_cli::wants_help(&args) {
        println!("rhyme-search: Find words whose pronunciation matches a pattern.");
        println!();
        println!("Usage: rhyme-search [-d DICT_PATH] [--stress] [-v] PATTERN");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file or directory");
        println!("  --stress               Match PATTERN against stress digits");
        println!("  -v, --verbose          Debug logging to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    rhyme_cli::init_logging(rhyme_cli::wants_verbose(&args));

    let stress = args.iter().any(|a| a == "--stress");
    let patterns: Vec<&String> = args
        .iter()
        .filter(|a| !matches!(a.as_str(), "--stress" | "-v" | "--verbose"))
        .collect();
    let [pattern] = patterns.as_slice() else {
        rhyme_cli::fatal("expected exactly one PATTERN argument");
    };

    let handle = rhyme_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| rhyme_cli::fatal(&e));

    let result = if stress {
        handle.search_stresses(pattern)
    } else {
        handle.search(pattern)
    };
    match result {
        Ok(words) => {
            for w in words {
                println!("{w}");
            }
        }
        Err(e) => rhyme_cli::fatal(&e.to_string()),
    }
}
