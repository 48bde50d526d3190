// rhyme: Find rhymes for words from stdin.
//
// Reads words from stdin (one per line) and prints their rhymes:
//   R: word    (rhyme: shares the rhyme tail)
//   I: word    (identical rhyme: same onset)
//   P: word    (perfect rhyme: different onset)
//   N: word    (query word not in the dictionary)
//
// A line may carry an explicit pronunciation after the word, separated by a
// tab: `read<TAB>R IY1 D`.
//
// Usage:
//   rhyme [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing cmudict.dict
//   --identical            Print identical rhymes
//   --perfect              Print perfect rhymes
//   --all                  Print rhymes, identical and perfect rhymes
//   --json                 Print one JSON object per word
//   --include-self         Keep the query word in rhyme results
//   -v, --verbose          Debug logging to stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use rhyme_cli::RhymeReport;
use rhyme_en::handle::RhymeHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = rhyme_cli::parse_dict_path(&args);

    if rhyme_cli::wants_help(&args) {
        println!("rhyme: Find rhymes for words from stdin.");
        println!();
        println!("Usage: rhyme [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  R: word    (rhyme)");
        println!("  I: word    (identical rhyme)");
        println!("  P: word    (perfect rhyme)");
        println!("  N: word    (unknown word)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file or directory");
        println!("  --identical            Print identical rhymes");
        println!("  --perfect              Print perfect rhymes");
        println!("  --all                  Print all three kinds");
        println!("  --json                 Print one JSON object per word");
        println!("  --include-self         Keep the query word in rhyme results");
        println!("  -v, --verbose          Debug logging to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    rhyme_cli::init_logging(rhyme_cli::wants_verbose(&args));

    let all = args.iter().any(|a| a == "--all");
    let identical = all || args.iter().any(|a| a == "--identical");
    let perfect = all || args.iter().any(|a| a == "--perfect");
    let plain = all || (!identical && !perfect);
    let json = args.iter().any(|a| a == "--json");

    let mut handle = rhyme_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| rhyme_cli::fatal(&e));
    if args.iter().any(|a| a == "--include-self") {
        handle.set_exclude_query_word(false);
    }

    let sections = Sections {
        plain,
        identical,
        perfect,
    };

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
        let (word, pronunciation) = match line.split_once('\t') {
            Some((w, p)) => (w.trim(), Some(p.trim())),
            None => (line.trim(), None),
        };
        if word.is_empty() {
            continue;
        }

        let report = match build_report(&handle, word, pronunciation, sections) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {word}: {e}");
                continue;
            }
        };

        if json {
            match serde_json::to_string(&report) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => eprintln!("error: {word}: {e}"),
            }
        } else {
            write_report(&mut out, &report);
        }
    }
}

#[derive(Clone, Copy)]
struct Sections {
    plain: bool,
    identical: bool,
    perfect: bool,
}

fn build_report(
    handle: &RhymeHandle,
    word: &str,
    pronunciation: Option<&str>,
    sections: Sections,
) -> Result<RhymeReport, rhyme_en::RhymeError> {
    let mut report = RhymeReport {
        word: word.to_string(),
        known: !handle.phones_for_word(word).is_empty(),
        ..RhymeReport::default()
    };
    if sections.plain {
        report.rhymes = Some(handle.rhymes(word));
    }
    if sections.identical {
        report.identical = Some(handle.identical_rhymes(word, pronunciation)?);
    }
    if sections.perfect {
        report.perfect = Some(handle.perfect_rhymes(word, pronunciation)?);
    }
    Ok(report)
}

fn write_report(out: &mut impl Write, report: &RhymeReport) {
    if !report.known {
        let _ = writeln!(out, "N: {}", report.word);
        return;
    }
    let sections = [
        ("R", &report.rhymes),
        ("I", &report.identical),
        ("P", &report.perfect),
    ];
    for (tag, words) in sections {
        for w in words.iter().flatten() {
            let _ = writeln!(out, "{tag}: {w}");
        }
    }
}
