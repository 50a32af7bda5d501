use anyhow::{Result, anyhow};
use rand::seq::IteratorRandom;
use regex::Regex;
use reqwest::blocking;
use std::collections::{HashMap, HashSet};

/// Embedded dictionary, bucketed by word length. Doubles as the target
/// source (random draw) and the validity oracle (set lookup) when playing
/// offline.
pub struct WordBank {
    by_len: HashMap<usize, HashSet<String>>,
}

impl WordBank {
    pub fn load() -> Self {
        const WORDS: &str = include_str!("../../words.txt");

        let mut by_len: HashMap<usize, HashSet<String>> = HashMap::new();
        WORDS.lines().for_each(|word| {
            let word = word.trim();
            if !word.is_empty() {
                by_len
                    .entry(word.len())
                    .or_default()
                    .insert(word.to_ascii_uppercase());
            }
        });
        WordBank { by_len }
    }

    pub fn draw(&self, len: usize) -> Option<String> {
        let words = self.by_len.get(&len)?;
        let mut rng = rand::rng();
        words.iter().choose(&mut rng).cloned()
    }

    pub fn is_word(&self, text: &str) -> bool {
        self.by_len
            .get(&text.len())
            .is_some_and(|words| words.contains(&text.to_ascii_uppercase()))
    }

    /// Admit a word fetched from elsewhere, so a remote target always
    /// passes the local validity check.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_ascii_uppercase();
        if !word.is_empty() {
            self.by_len.entry(word.len()).or_default().insert(word);
        }
    }

    pub fn count(&self, len: usize) -> usize {
        self.by_len.get(&len).map_or(0, HashSet::len)
    }
}

/// Ask a public word API for a random word of the given length. Any
/// network or parse hiccup falls back to the local bank via `None`.
pub fn fetch_remote_word(len: usize) -> Option<String> {
    let url = format!("https://random-word-api.herokuapp.com/word?length={len}");
    let content = blocking::get(url).ok()?.text().ok()?;

    let re = Regex::new(r#""([A-Za-z]+)""#).ok()?;
    let word = re.captures(&content)?.get(1)?.as_str().to_ascii_uppercase();
    (word.len() == len && word.chars().all(|ch| ch.is_ascii_uppercase())).then_some(word)
}

/// Remote spell check against the free dictionary API: 200 means the word
/// exists, 404 means it does not. Transport failures are real errors so
/// the caller can leave the attempt editable instead of mis-judging it.
pub fn lookup_remote(word: &str) -> Result<bool> {
    let url = format!(
        "https://api.dictionaryapi.dev/api/v2/entries/en/{}",
        word.to_ascii_lowercase()
    );
    let response =
        blocking::get(url).map_err(|e| anyhow!("dictionary lookup for '{word}' failed: {e}"))?;
    Ok(response.status().is_success())
}
