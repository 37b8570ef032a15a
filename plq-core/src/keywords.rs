use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Relative date words understood by the date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Today,
    Yesterday,
    Tomorrow,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

pub struct Keywords;

impl Keywords {
    /// Returns the **global keyword registry** (input → canonical).
    ///
    /// The registry is:
    /// - **Initialized once** on first access (via [`once_cell::sync::Lazy`]).
    /// - **Thread-safe** (wrapped in [`RwLock`]): many readers or one writer.
    /// - **Lowercased**: all keys are stored lowercased for case-insensitive lookups.
    ///
    /// It is seeded with every canonical [`Keyword`] mapped to itself. Use
    /// [`extend`](Self::extend) to add synonyms and [`lookup`](Self::lookup) to resolve words.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let m = Keyword::iter()
                .map(|keyword| (keyword.as_ref().to_string(), keyword))
                .collect();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined **synonyms**.
    ///
    /// Each pair is `(alias, target)`. The `target` must be a **known** word already
    /// in the registry (a canonical keyword or an existing synonym). Unknown targets
    /// are skipped. Keys are lowercased.
    ///
    /// Typical call site: during `Config::load()`, after reading `[synonyms]`
    /// from `config.toml`:
    ///
    /// ```toml
    /// [synonyms]
    /// hoy  = "today"
    /// ayer = "yesterday"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = match Self::registry().write() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (alias, target) in synonyms {
            match reg.get(&target.to_ascii_lowercase()) {
                Some(&canonical) => {
                    reg.insert(alias.to_ascii_lowercase(), canonical);
                }
                None => tracing::warn!("ignoring synonym '{alias}': unknown target '{target}'"),
            }
        }
    }

    /// Returns `true` if `word` is a canonical word (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        Keyword::iter().any(|key| key.as_ref() == word)
    }

    /// Resolves `input` (case-insensitively) to the keyword it names, if any.
    pub fn lookup(input: &str) -> Option<Keyword> {
        let reg = match Self::registry().read() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        };
        reg.get(&input.trim().to_ascii_lowercase()).copied()
    }

    /// Returns `true` if `input` equals the given keyword or any of its synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        Self::lookup(input) == Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert!(Keywords::matches(Keyword::Today, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "YESTERDAY"));
        assert!(Keywords::matches(Keyword::Friday, " friday "));
    }

    #[test]
    fn synonyms_extend() {
        Keywords::extend(&[
            ("hoy".into(), "today".into()),
            ("ayer".into(), "yesterday".into()),
            ("tmrw".into(), "tomorrow".into()),
        ]);
        assert!(Keywords::matches(Keyword::Today, "hoy"));
        assert!(Keywords::matches(Keyword::Yesterday, "Ayer"));
        assert!(Keywords::matches(Keyword::Tomorrow, "tmrw"));
    }

    #[test]
    fn synonym_with_unknown_target_is_skipped() {
        Keywords::extend(&[("someday".into(), "never".into())]);
        assert_eq!(Keywords::lookup("someday"), None);
    }

    #[test]
    fn canonical_words_are_recognised() {
        assert!(Keywords::is_canonical("today"));
        assert!(Keywords::is_canonical("Sunday"));
        assert!(!Keywords::is_canonical("ytd"));
    }

    #[test]
    fn unknown_word_does_not_match() {
        assert!(!Keywords::matches(Keyword::Tomorrow, "not in registry"));
    }
}
