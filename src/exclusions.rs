// src/exclusions.rs
// =============================================================================
// This module loads caller-supplied exclusion words and applies them to
// crawler output.
//
// The crawler core has a small built-in noise list it always applies.
// On top of that, users can keep their own keyword files (one word per
// line) and pass them with --exclusions; any email containing one of
// those words is dropped from the final report.
//
// File layout:
// - A folder: every *.txt file inside is read (other files ignored)
// - A single file: read directly, whatever its name
//
// A missing path is not an error - it just contributes no words. The
// CLI should still produce a report when someone mistypes the path,
// so we warn and carry on.
//
// Rust concepts:
// - Path/PathBuf: Filesystem paths, checked with is_dir()/is_file()
// - HashSet<String>: Deduplicates words across files
// =============================================================================

use std::collections::HashSet;
use std::fs;
use std::path::Path;

// Loads exclusion words from a folder of .txt files or a single file
//
// Parameters:
//   path: folder or file to read
//
// Returns: lowercase, deduplicated words; empty when nothing was found
pub fn load_exclusions(path: &Path) -> HashSet<String> {
    let mut words = HashSet::new();

    if path.is_dir() {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "  Warning: Cannot read exclusions folder {}: {}",
                    path.display(),
                    e
                );
                return words;
            }
        };
        for entry in entries.flatten() {
            let file_path = entry.path();
            if file_path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
                load_words_from_file(&file_path, &mut words);
            }
        }
    } else if path.is_file() {
        load_words_from_file(path, &mut words);
    } else {
        eprintln!(
            "  Warning: Exclusions path {} does not exist",
            path.display()
        );
    }

    words
}

// Reads one word per line, trimmed and lowercased
fn load_words_from_file(path: &Path, words: &mut HashSet<String>) {
    match fs::read_to_string(path) {
        Ok(content) => {
            for line in content.lines() {
                let word = line.trim().to_lowercase();
                if !word.is_empty() {
                    words.insert(word);
                }
            }
        }
        Err(e) => eprintln!("  Warning: Cannot read {}: {}", path.display(), e),
    }
}

// Drops emails containing any excluded word
//
// Parameters:
//   emails: the crawler's email list (already sorted)
//   excluded: lowercase words from load_exclusions
//
// Returns: surviving emails in their original order
//
// The check is a case-insensitive substring match, the same rule the
// crawler's built-in list uses.
pub fn filter_emails(emails: &[String], excluded: &HashSet<String>) -> Vec<String> {
    emails
        .iter()
        .filter(|email| {
            let lowered = email.to_lowercase();
            !excluded.iter().any(|word| lowered.contains(word.as_str()))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_loads_txt_files_from_folder() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "spam.txt", "Noreply\nwebmaster\n");
        write_file(dir.path(), "more.txt", "  postmaster  \n\nnoreply\n");
        write_file(dir.path(), "ignored.md", "readme");

        let words = load_exclusions(dir.path());

        assert_eq!(words.len(), 3);
        assert!(words.contains("noreply"));
        assert!(words.contains("webmaster"));
        assert!(words.contains("postmaster"));
    }

    #[test]
    fn test_loads_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(dir.path(), "words.txt", "alpha\nBETA\n");

        let words = load_exclusions(&file);

        assert!(words.contains("alpha"));
        assert!(words.contains("beta"));
    }

    #[test]
    fn test_missing_path_yields_empty_set() {
        let words = load_exclusions(Path::new("/no/such/folder/anywhere"));
        assert!(words.is_empty());
    }

    #[test]
    fn test_empty_folder_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_exclusions(dir.path()).is_empty());
    }

    #[test]
    fn test_filter_drops_matches_keeps_order() {
        let emails = vec![
            "alpha@acme.es".to_string(),
            "noreply@acme.es".to_string(),
            "zeta@acme.es".to_string(),
        ];
        let excluded: HashSet<String> = ["noreply".to_string()].into_iter().collect();

        let kept = filter_emails(&emails, &excluded);

        assert_eq!(kept, vec!["alpha@acme.es", "zeta@acme.es"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let emails = vec!["NOREPLY@acme.es".to_string()];
        let excluded: HashSet<String> = ["noreply".to_string()].into_iter().collect();

        assert!(filter_emails(&emails, &excluded).is_empty());
    }

    #[test]
    fn test_filter_with_no_words_keeps_everything() {
        let emails = vec!["a@b.com".to_string()];
        let kept = filter_emails(&emails, &HashSet::new());
        assert_eq!(kept, emails);
    }
}
