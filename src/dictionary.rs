use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use log::debug;

use crate::errors::{NomnemonicError, Result};

pub const MAX_WORDS_DICT: usize = 2048;

const ENGLISH: &str = include_str!("english.txt");

/// Bidirectional mapping between the 2048 words of a BIP39 list and their
/// indices. Immutable once built.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    indices: BTreeMap<String, u16>,
}

impl Dictionary {
    /// Builds a dictionary from an ordered list; a word's index is its
    /// position. The list must hold exactly 2048 distinct words.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != MAX_WORDS_DICT {
            return Err(NomnemonicError::WordlistSize(words.len()));
        }

        let indices = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i as u16))
            .collect();
        debug!("loaded dictionary of {} words", words.len());

        Ok(Self { words, indices })
    }

    /// Parses a newline separated list, one word per line. A trailing newline
    /// and `\r\n` endings are accepted.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string),
        )
    }

    /// The BIP39 English word list.
    pub fn english() -> Result<Self> {
        Self::from_text(ENGLISH)
    }

    #[inline]
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.indices.get(word).copied()
    }

    #[inline]
    pub fn word_at(&self, index: u16) -> &str {
        &self.words[usize::from(index)]
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.indices.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests_dictionary {
    use super::*;
    use alloc::{format, vec};

    #[test]
    fn test_english() {
        let dict = Dictionary::english().unwrap();
        assert_eq!(dict.len(), MAX_WORDS_DICT);
        assert_eq!(dict.word_at(0), "abandon");
        assert_eq!(dict.word_at(2047), "zoo");
        assert_eq!(dict.index_of("abandon"), Some(0));
        assert_eq!(dict.index_of("zoo"), Some(2047));
        assert_eq!(dict.index_of("tester"), None);
        assert!(dict.contains("occur"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_bijection() {
        let dict = Dictionary::english().unwrap();
        for (i, word) in dict.words().enumerate() {
            assert_eq!(dict.index_of(word), Some(i as u16));
        }
    }

    #[test]
    fn test_wrong_size() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Dictionary::new(empty),
            Err(NomnemonicError::WordlistSize(0))
        );

        let short = vec!["word"; 2047];
        assert_eq!(
            Dictionary::new(short),
            Err(NomnemonicError::WordlistSize(2047))
        );

        let text: String = (0..2049).map(|i| format!("w{i}\n")).collect();
        assert_eq!(
            Dictionary::from_text(&text),
            Err(NomnemonicError::WordlistSize(2049))
        );
    }

    #[test]
    fn test_from_text_line_endings() {
        let unix: String = (0..2048).map(|i| format!("w{i}\n")).collect();
        let windows: String = (0..2048).map(|i| format!("w{i}\r\n")).collect();
        let bare = unix.trim_end();

        let dict = Dictionary::from_text(&unix).unwrap();
        assert_eq!(dict.word_at(2047), "w2047");
        assert_eq!(Dictionary::from_text(&windows).unwrap(), dict);
        assert_eq!(Dictionary::from_text(bare).unwrap(), dict);
    }
}
