//! Porter (1980) suffix-stripping stemmer, English only.
//!
//! Follows the NLTK flavour of the algorithm: a handful of irregular words
//! are mapped directly, `-ied` and 4-letter `-ies` keep their `e`, and
//! `-alli` is reduced before the step 2 table runs. Everything is done on
//! lowercase ASCII; other words are returned lowercased and unstemmed.

/// Words mapped directly, bypassing the suffix rules
const SPECIAL_WORDS: &[(&str, &str)] = &[
    ("skies", "sky"),
    ("sky", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
    ("lessli", "less"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
    "ou", "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemmer. Stateless; one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    pub fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if let Some((_, stem)) = SPECIAL_WORDS.iter().find(|(w, _)| *w == word) {
            return stem.to_string();
        }
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let steps: [fn(String) -> String; 8] = [
            step1a, step1b, step1c, step2, step3, step4, step5a, step5b,
        ];
        steps.into_iter().fold(word, |word, step| step(word))
    }
}

// ===== LETTER CLASSES =====

/// `y` is a consonant at the start of a word and after a vowel
fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` in `[C](VC)^m[V]`
fn measure(stem: &str) -> usize {
    let bytes = stem.as_bytes();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..bytes.len() {
        let consonant = is_consonant(bytes, i);
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

fn contains_vowel(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    (0..bytes.len()).any(|i| !is_consonant(bytes, i))
}

fn ends_double_consonant(word: &str) -> bool {
    let bytes = word.as_bytes();
    let n = bytes.len();
    n >= 2 && bytes[n - 1] == bytes[n - 2] && is_consonant(bytes, n - 1)
}

/// Consonant, vowel, consonant with the last one not w, x or y.
/// Two-letter words count when they are vowel then consonant.
fn ends_cvc(word: &str) -> bool {
    let bytes = word.as_bytes();
    let n = bytes.len();
    if n >= 3 {
        is_consonant(bytes, n - 3)
            && !is_consonant(bytes, n - 2)
            && is_consonant(bytes, n - 1)
            && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
    } else {
        n == 2 && !is_consonant(bytes, 0) && is_consonant(bytes, 1)
    }
}

/// The first rule whose suffix matches decides. It rewrites the word only
/// when the remaining stem has a measure above `min_measure`.
fn apply_rules(word: String, rules: &[(&str, &str)], min_measure: usize) -> String {
    for (suffix, replacement) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            if measure(stem) > min_measure {
                return format!("{stem}{replacement}");
            }
            return word;
        }
    }
    word
}

// ===== STEPS =====

/// Plurals: `caresses` -> `caress`, `ponies` -> `poni`, `cats` -> `cat`
fn step1a(word: String) -> String {
    if word.ends_with("sses") {
        return word[..word.len() - 2].to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return if word.len() == 4 {
            format!("{stem}ie")
        } else {
            format!("{stem}i")
        };
    }
    if word.ends_with("ss") {
        return word;
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word,
    }
}

/// Past tenses and gerunds: `agreed` -> `agree`, `hopping` -> `hop`
fn step1b(word: String) -> String {
    if let Some(stem) = word.strip_suffix("ied") {
        return if word.len() == 4 {
            format!("{stem}ie")
        } else {
            format!("{stem}i")
        };
    }
    if let Some(stem) = word.strip_suffix("eed") {
        if measure(stem) > 0 {
            return format!("{stem}ee");
        }
        return word;
    }

    let stem = ["ed", "ing"]
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .filter(|stem| contains_vowel(stem));
    let Some(stem) = stem else {
        return word;
    };

    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        format!("{stem}e")
    } else if ends_double_consonant(stem) && !matches!(stem.as_bytes()[stem.len() - 1], b'l' | b's' | b'z') {
        stem[..stem.len() - 1].to_string()
    } else if measure(stem) == 1 && ends_cvc(stem) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

/// Terminal `y` after a consonant: `happy` -> `happi`
fn step1c(word: String) -> String {
    match word.strip_suffix('y') {
        Some(stem) if stem.len() > 1 && is_consonant(stem.as_bytes(), stem.len() - 1) => {
            format!("{stem}i")
        }
        _ => word,
    }
}

fn step2(word: String) -> String {
    if let Some(stem) = word.strip_suffix("alli") {
        if measure(stem) > 0 {
            return step2(format!("{stem}al"));
        }
    }
    apply_rules(word, STEP2_RULES, 0)
}

fn step3(word: String) -> String {
    apply_rules(word, STEP3_RULES, 0)
}

fn step4(word: String) -> String {
    for suffix in STEP4_SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            let allowed = measure(stem) > 1
                && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'));
            return if allowed { stem.to_string() } else { word };
        }
    }
    word
}

fn step5a(word: String) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return stem.to_string();
        }
    }
    word
}

fn step5b(mut word: String) -> String {
    if word.ends_with("ll") && measure(&word[..word.len() - 1]) > 1 {
        word.pop();
    }
    word
}
