// rhyme-phones: Show pronunciations of words from stdin.
//
// For each pronunciation variant prints one tab-separated line:
//   word <TAB> phonemes <TAB> rhyme tail <TAB> stresses <TAB> syllables
// Unknown words print `N: word`.
//
// Usage:
//   rhyme-phones [-d DICT_PATH] [-v]

use std::io::{self, BufRead, Write};

use rhyme_en::rhyme::tail::rhyme_tail_key;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = rhyme_cli::parse_dict_path(&args);

    if rhyme_cli::wants_help(&args) {
        println!("rhyme-phones: Show pronunciations of words from stdin.");
        println!();
        println!("Usage: rhyme-phones [-d DICT_PATH] [-v]");
        println!();
        println!("Prints one line per pronunciation:");
        println!("  word  phonemes  rhyme-tail  stresses  syllables");
        return;
    }

    rhyme_cli::init_logging(rhyme_cli::wants_verbose(&args));

    let handle = rhyme_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| rhyme_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let variants = handle.phones_for_word(word);
        if variants.is_empty() {
            let _ = writeln!(out, "N: {word}");
            continue;
        }
        for p in variants {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                word.to_lowercase(),
                p,
                rhyme_tail_key(p),
                p.stresses(),
                p.syllable_count()
            );
        }
    }
}
