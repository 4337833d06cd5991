//! CLI tool to lint Harlowe macros in Twee story files.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use harlowe_lint::{Vocabulary, format_report, lint_str};

fn print_usage() {
    println!("Harlowe Linter - validate Harlowe code in Twee files");
    println!();
    println!("Usage:");
    println!("  harlowe-lint [--docs <file>] <file.twee>");
    println!("  harlowe-lint [--docs <file>] <directory>");
    println!();
    println!("Options:");
    println!("  --docs <file>  Scrape the vocabulary from a Harlowe docs file");
    println!("  -h, --help     Show this help message");
    println!("  -v, --version  Show version information");
    println!();
    println!("Examples:");
    println!("  harlowe-lint story.twee");
    println!("  harlowe-lint ./stories");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|a| a == "-v" || a == "--version") {
        println!("Harlowe Linter v{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let mut docs_path: Option<String> = None;
    let mut target: Option<String> = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--docs" {
            match args.next() {
                Some(path) => docs_path = Some(path),
                None => {
                    eprintln!("Error: --docs requires a path");
                    return ExitCode::from(2);
                }
            }
        } else if target.is_none() {
            target = Some(arg);
        }
    }
    let Some(target) = target else {
        eprintln!("Error: no file or directory specified");
        return ExitCode::from(2);
    };

    let vocabulary = match load_vocabulary(docs_path.as_deref()) {
        Ok(vocabulary) => vocabulary,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let target = Path::new(&target);
    if !target.exists() {
        eprintln!("Error: file or directory not found: {}", target.display());
        return ExitCode::FAILURE;
    }

    let files = if target.is_dir() {
        let mut files = Vec::new();
        if let Err(e) = collect_twee_files(target, &mut files) {
            eprintln!("{}: {e}", target.display());
            return ExitCode::FAILURE;
        }
        if files.is_empty() {
            println!("No .twee files found in {}", target.display());
            return ExitCode::SUCCESS;
        }
        files
    } else if has_twee_extension(target) {
        vec![target.to_path_buf()]
    } else {
        eprintln!("Error: file must have a .twee or .tw extension");
        return ExitCode::FAILURE;
    };

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
                continue;
            }
        };

        let report = lint_str(&content, &path.display().to_string(), &vocabulary);
        print!("{}", format_report(&report));
        println!();

        if !report.is_valid {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_vocabulary(docs_path: Option<&str>) -> Result<Vocabulary, String> {
    let Some(path) = docs_path else {
        return Ok(Vocabulary::builtin());
    };
    let markdown = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    Vocabulary::from_docs(&markdown).map_err(|e| format!("{path}: {e}"))
}

fn has_twee_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("twee" | "tw")
    )
}

/// Recursively collect `.twee`/`.tw` files, sorted by name at each
/// level so batch output order is stable.
fn collect_twee_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_twee_files(&path, files)?;
        } else if has_twee_extension(&path) {
            files.push(path);
        }
    }

    Ok(())
}
