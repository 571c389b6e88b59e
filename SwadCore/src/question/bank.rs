//! Question storage
//!
//! Questions are kept in insertion order under increasing codes. The bank is
//! persisted as a single JSON file, replaced atomically on save.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::Question;
use crate::error::{Error, Result};

/// A question together with its code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuestion {
    pub code: u64,
    #[serde(flatten)]
    pub question: Question,
}

/// In-memory question store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    next_code: u64,
    #[serde(default)]
    questions: Vec<StoredQuestion>,
}

impl QuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a bank file. A missing file is an empty bank.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no question bank at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)?;
        let mut bank: Self = serde_json::from_str(&data)?;
        // Never hand out a code already in the file
        let highest = bank.questions.iter().map(|stored| stored.code).max();
        if let Some(highest) = highest {
            bank.next_code = bank.next_code.max(highest + 1);
        }
        tracing::debug!("loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Write the bank to `path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        file.write_all(b"\n")?;
        file.persist(path).map_err(|e| Error::Io(e.error))?;
        tracing::debug!("saved {} questions to {}", self.len(), path.display());
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Code of a stored question that duplicates `question`.
    #[must_use]
    pub fn find_duplicate(&self, question: &Question) -> Option<u64> {
        self.questions
            .iter()
            .find(|stored| stored.question.is_duplicate_of(question))
            .map(|stored| stored.code)
    }

    #[must_use]
    pub fn contains(&self, question: &Question) -> bool {
        self.find_duplicate(question).is_some()
    }

    /// Store `question` and return its new code. Duplicates are not checked.
    pub fn insert(&mut self, question: Question) -> u64 {
        let code = self.next_code;
        self.next_code += 1;
        self.questions.push(StoredQuestion { code, question });
        code
    }

    #[must_use]
    pub fn get(&self, code: u64) -> Option<&Question> {
        self.questions
            .iter()
            .find(|stored| stored.code == code)
            .map(|stored| &stored.question)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoredQuestion> {
        self.questions.iter()
    }

    /// Stored questions carrying `tag`.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a StoredQuestion> + 'a {
        self.questions
            .iter()
            .filter(move |stored| stored.question.tags.iter().any(|t| t == tag))
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a StoredQuestion;
    type IntoIter = std::slice::Iter<'a, StoredQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::types::Answer;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn question(stem: &str, value: i64) -> Question {
        Question {
            tags: vec!["math".to_string()],
            stem: stem.to_string(),
            feedback: None,
            answer: Answer::Int { value },
        }
    }

    #[test]
    fn test_codes_increase() {
        let mut bank = QuestionBank::new();
        assert_eq!(bank.insert(question("a", 1)), 0);
        assert_eq!(bank.insert(question("b", 2)), 1);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1), Some(&question("b", 2)));
        assert_eq!(bank.get(7), None);
    }

    #[test]
    fn test_contains_uses_duplicate_rule() {
        let mut bank = QuestionBank::new();
        bank.insert(question("2+2", 4));
        let mut retagged = question("2+2", 4);
        retagged.tags = vec!["arithmetic".to_string()];
        assert!(bank.contains(&retagged));
        assert!(!bank.contains(&question("2+2", 5)));
        assert_eq!(bank.find_duplicate(&retagged), Some(0));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("bank.json");

        let mut bank = QuestionBank::new();
        bank.insert(question("a", 1));
        bank.insert(question("b", 2));
        bank.save(&path).unwrap();

        let mut loaded = QuestionBank::load(&path).unwrap();
        assert_eq!(loaded, bank);
        assert_eq!(loaded.insert(question("c", 3)), 2);
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let bank = QuestionBank::load(dir.path().join("none.json")).unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn test_with_tag() {
        let mut bank = QuestionBank::new();
        bank.insert(question("a", 1));
        let mut other = question("b", 2);
        other.tags = vec!["geo".to_string()];
        bank.insert(other);
        let codes: Vec<u64> = bank.with_tag("geo").map(|stored| stored.code).collect();
        assert_eq!(codes, vec![1]);
    }
}
