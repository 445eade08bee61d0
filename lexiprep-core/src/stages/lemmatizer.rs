use super::traits::TokenTransform;
use crate::resources::Lexicon;
use crate::types::PosTag;

// Suffix detachment rules (suffix, replacement) in the WordNet morphy style
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("ied", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
    ("ier", "y"),
    ("iest", "y"),
];

// Suffixes after which a doubled final consonant is undone (running -> run)
const UNDOUBLE_SUFFIXES: &[&str] = &["ing", "ed", "er", "est"];

fn rules_for(pos: PosTag) -> &'static [(&'static str, &'static str)] {
    match pos {
        PosTag::Noun => NOUN_RULES,
        PosTag::Verb => VERB_RULES,
        PosTag::Adjective => ADJECTIVE_RULES,
        PosTag::Adverb => &[],
    }
}

/// Dictionary lemmatizer over a [`Lexicon`]
///
/// For one part of speech a token resolves to, in order:
/// 1. its entry in the exception table (`mice` -> `mouse`)
/// 2. itself, if it is a known base form
/// 3. the shortest suffix-rule candidate that is a known base form, except
///    that `hope` beats `hop` for `hoped`: a short-vowel stem would have
///    doubled its final consonant (`hopped`)
///
/// Untagged tokens try each POS in [`PosTag::AUTO_ORDER`] unless a default
/// POS is set. Tokens no rule can resolve are returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Lemmatizer<'a> {
    lexicon: &'a Lexicon,
    default_pos: Option<PosTag>,
    enabled: bool,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            default_pos: None,
            enabled: true,
        }
    }

    pub fn with_default_pos(mut self, pos: Option<PosTag>) -> Self {
        self.default_pos = pos;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Lemma of `token`, using `pos` when the caller knows it
    pub fn lemmatize(&self, token: &str, pos: Option<PosTag>) -> String {
        if !self.enabled {
            return token.to_string();
        }

        let key = token.to_lowercase();
        let explicit = pos.or(self.default_pos);
        let candidates: &[PosTag] = match &explicit {
            Some(pos) => std::slice::from_ref(pos),
            None => &PosTag::AUTO_ORDER,
        };

        candidates
            .iter()
            .find_map(|pos| self.morph(&key, *pos))
            .unwrap_or_else(|| token.to_string())
    }

    fn morph(&self, word: &str, pos: PosTag) -> Option<String> {
        if let Some(lemma) = self.lexicon.exception(word, pos) {
            return Some(lemma.to_string());
        }
        if self.lexicon.is_base_form(word, pos) {
            return Some(word.to_string());
        }

        let mut candidates: Vec<String> = Vec::new();
        for (suffix, replacement) in rules_for(pos) {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }

            let mut forms = vec![format!("{stem}{replacement}")];
            if replacement.is_empty() && UNDOUBLE_SUFFIXES.contains(suffix) {
                if let Some(single) = undouble(stem) {
                    forms.push(single.to_string());
                }
            }

            for form in forms {
                if self.lexicon.is_base_form(&form, pos) && !candidates.contains(&form) {
                    candidates.push(form);
                }
            }
        }
        pick_candidate(candidates)
    }
}

/// Shortest candidate, unless its silent-e twin was also found after a
/// short-vowel stem (`hop` + `hope` for `hoped` resolves to `hope`)
fn pick_candidate(mut candidates: Vec<String>) -> Option<String> {
    candidates.sort_by_key(|c| c.len());
    let shortest = candidates.first()?;
    let with_e = format!("{shortest}e");
    if ends_cvc(shortest) && candidates.contains(&with_e) {
        return Some(with_e);
    }
    candidates.into_iter().next()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Consonant, vowel, consonant at the end, last one not w, x or y
fn ends_cvc(word: &str) -> bool {
    let tail: Vec<char> = word.chars().rev().take(3).collect();
    match tail.as_slice() {
        [last, mid, first] => {
            !is_vowel(*last)
                && !matches!(last, 'w' | 'x' | 'y')
                && is_vowel(*mid)
                && !is_vowel(*first)
        }
        _ => false,
    }
}

impl TokenTransform for Lemmatizer<'_> {
    fn transform(&self, token: &str) -> String {
        self.lemmatize(token, None)
    }

    fn name(&self) -> &str {
        "Lemmatizer"
    }
}

/// Drop one letter of a trailing doubled consonant (`runn` -> `run`)
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && last.is_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn english() -> Lexicon {
        Lexicon::builtin(Language::English).unwrap().unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reference_lemmas() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        let lemmas = lemmatizer.apply(&tokens(&["cats", "running", "quickly", "see"]));
        assert_eq!(lemmas, vec!["cat", "run", "quickly", "see"]);
    }

    #[test]
    fn test_irregular_forms() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        assert_eq!(lemmatizer.transform("mice"), "mouse");
        assert_eq!(lemmatizer.transform("children"), "child");
        assert_eq!(lemmatizer.transform("went"), "go");
        assert_eq!(lemmatizer.lemmatize("better", Some(PosTag::Adjective)), "good");
        assert_eq!(lemmatizer.lemmatize("better", Some(PosTag::Adverb)), "well");
    }

    #[test]
    fn test_suffix_rules() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        assert_eq!(lemmatizer.transform("boxes"), "box");
        assert_eq!(lemmatizer.transform("churches"), "church");
        assert_eq!(lemmatizer.transform("studies"), "study");
        assert_eq!(lemmatizer.transform("women"), "woman");
        assert_eq!(lemmatizer.transform("hoped"), "hope");
        assert_eq!(lemmatizer.transform("stopped"), "stop");
        assert_eq!(lemmatizer.transform("bigger"), "big");
        assert_eq!(lemmatizer.transform("happiest"), "happy");
    }

    #[test]
    fn test_pos_changes_result() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        // `thought` is a noun base form but also the past tense of `think`
        assert_eq!(lemmatizer.lemmatize("thought", None), "thought");
        assert_eq!(lemmatizer.lemmatize("thought", Some(PosTag::Verb)), "think");

        let nouns_only = lemmatizer.with_default_pos(Some(PosTag::Noun));
        assert_eq!(nouns_only.transform("running"), "running");
        assert_eq!(nouns_only.transform("cats"), "cat");
    }

    #[test]
    fn test_unknown_words_fall_back_to_token() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        assert_eq!(lemmatizer.transform("blorptastic"), "blorptastic");
        assert_eq!(lemmatizer.transform("glass"), "glass");
        assert_eq!(lemmatizer.transform("s"), "s");
    }

    #[test]
    fn test_per_token_tags() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        let tagged = [
            ("ran", Some(PosTag::Verb)),
            ("geese", None),
            ("xyz", Some(PosTag::Adverb)),
        ];
        let lemmas: Vec<String> = tagged
            .iter()
            .map(|(token, pos)| lemmatizer.lemmatize(token, *pos))
            .collect();
        assert_eq!(lemmas, vec!["run", "goose", "xyz"]);
    }

    #[test]
    fn test_regular_plurals_and_past_tenses() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        let words = tokens(&["elephants", "bottles", "flowers", "cities", "walked", "jumped", "dogs"]);
        assert_eq!(
            lemmatizer.apply(&words),
            vec!["elephant", "bottle", "flower", "city", "walk", "jump", "dog"]
        );
        assert_eq!(lemmatizer.transform("studied"), "study");
        assert_eq!(lemmatizer.transform("carried"), "carry");
    }

    #[test]
    fn test_silent_e_beats_short_vowel_stem() {
        let lexicon = english();
        let lemmatizer = Lemmatizer::new(&lexicon);
        assert_eq!(lemmatizer.transform("hoping"), "hope");
        assert_eq!(lemmatizer.transform("hopping"), "hop");
        assert_eq!(lemmatizer.transform("hopped"), "hop");
        assert_eq!(lemmatizer.transform("writing"), "write");
        assert_eq!(lemmatizer.transform("singing"), "sing");
    }

    #[test]
    fn test_ends_cvc() {
        assert!(ends_cvc("hop"));
        assert!(ends_cvc("tap"));
        assert!(!ends_cvc("sing"));
        assert!(!ends_cvc("show"));
        assert!(!ends_cvc("at"));
    }

    #[test]
    fn test_empty_lexicon_and_disabled_are_identity() {
        let empty = Lexicon::default();
        assert_eq!(Lemmatizer::new(&empty).transform("cats"), "cats");

        let lexicon = english();
        let off = Lemmatizer::new(&lexicon).with_enabled(false);
        assert_eq!(off.transform("cats"), "cats");
    }

    #[test]
    fn test_undouble() {
        assert_eq!(undouble("runn"), Some("run"));
        assert_eq!(undouble("bigg"), Some("big"));
        assert_eq!(undouble("see"), None);
        assert_eq!(undouble("walk"), None);
        assert_eq!(undouble("a"), None);
    }
}
