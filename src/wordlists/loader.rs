//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{ANSWERS, WordList};
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and invalid entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(entry = trimmed, error = %e, "Skipping word list entry");
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Resolve the `--wordlist` setting: `answers` for the embedded list, or a file path
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid words.
pub fn load_word_list(setting: &str) -> Result<WordList> {
    if setting == "answers" {
        return Ok(WordList::answers());
    }

    let words = load_from_file(setting)?;
    WordList::new(words).with_context(|| format!("word list {setting}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordProvider;
    use std::io::Write;

    fn temp_list(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_{name}_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_file_skips_comments_and_invalid() {
        let path = temp_list("mixed", "# header\nCRANE\n\n  slate \nab1de\ntoolong\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_word_list_embedded() {
        let list = load_word_list("answers").unwrap();
        assert_eq!(list.len(), ANSWERS.len());
    }

    #[test]
    fn load_word_list_rejects_empty_file() {
        let path = temp_list("empty", "# nothing\n12345\n");
        let result = load_word_list(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn load_word_list_from_file() {
        let path = temp_list("custom", "mount\n");
        let list = load_word_list(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(list.words()[0].text(), "mount");
    }
}
