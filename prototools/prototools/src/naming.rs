//! Conversions between the spellings a protobuf identifier can take.
//!
//! * proto form: `lower_separated_with_underscores`
//! * JSON form: `lowerCamelCase`
//! * readable form: `Space Separated Title Case`
//!
//! All conversions assume identifiers follow the usual protobuf style guide.
//! Names that do not may convert in surprising ways.

/// Convert the proto name of a field to its JSON equivalent.
///
/// `this_is_my_field_name32` becomes `thisIsMyFieldName32`.
pub fn to_json_name(proto_name: &str) -> String {
    proto_name
        .split('_')
        .enumerate()
        .map(|(i, word)| {
            let word = word.to_lowercase();
            if i == 0 { word } else { capitalize(&word) }
        })
        .collect()
}

/// Convert a JSON field name back to the name seen in the `.proto` file.
///
/// `thisIsMyFieldName32` becomes `this_is_my_field_name32`. Digits stay
/// attached to the word before them.
pub fn to_proto_name(json_name: &str) -> String {
    split_words(json_name, false)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Split a JSON name at case and digit boundaries and title each word.
///
/// `thisIsMyFieldName32` becomes `This Is My Field Name 32`.
pub fn to_readable_from_json(s: &str) -> String {
    split_words(s, true)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a proto name at `_` and title each word.
///
/// With `remove_prefix`, the first word is dropped when there is more than
/// one: `rcategory_Unknown` becomes `Unknown`.
pub fn to_readable_from_proto(s: &str, remove_prefix: bool) -> String {
    let words: Vec<&str> = s.split('_').collect();
    let words = if remove_prefix && words.len() > 1 {
        &words[1..]
    } else {
        &words[..]
    };
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human readable form of an enum value name.
///
/// The leading uniqueness word is removed and the remaining words are
/// lower-cased and titled: `TYPE_UNKNOWN_DEVICE` becomes `Unknown Device`.
/// A single-word name is titled as a whole.
pub fn to_readable_enum(name: &str) -> String {
    let words: Vec<&str> = name.split('_').collect();
    let words = if words.len() > 1 { &words[1..] } else { &words[..] };
    words
        .iter()
        .map(|w| capitalize(&w.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char, split_digits: bool) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            if split_digits {
                CharClass::Digit
            } else {
                CharClass::Lower
            }
        } else {
            CharClass::Other
        }
    }
}

/// Split `src` into words at character class changes.
///
/// Runs of lower-case letters, upper-case letters and other characters each
/// form one word. Digits count as lower-case unless `split_digits` is set,
/// in which case they form their own runs. An upper-case run followed by a
/// lower-case run hands its last letter over, so `PDFLoader` splits into
/// `PDF` and `Loader`.
pub fn split_words(src: &str, split_digits: bool) -> Vec<String> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    let mut last = None;
    for c in src.chars() {
        let class = CharClass::of(c, split_digits);
        if last != Some(class) {
            runs.push(Vec::new());
        }
        if let Some(run) = runs.last_mut() {
            run.push(c);
        }
        last = Some(class);
    }

    for i in 1..runs.len() {
        let (head, tail) = runs.split_at_mut(i);
        let prev = &mut head[i - 1];
        let next = &mut tail[0];
        let starts_upper = prev.first().is_some_and(|c| c.is_uppercase());
        let next_lower = next.first().is_some_and(|c| c.is_lowercase());
        if starts_upper && next_lower {
            if let Some(moved) = prev.pop() {
                next.insert(0, moved);
            }
        }
    }

    runs.into_iter()
        .filter(|run| !run.is_empty())
        .map(|run| run.into_iter().collect())
        .collect()
}
