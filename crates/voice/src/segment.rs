//! Splitting an utterance into verb-headed clauses.

const VERBS: [&str; 3] = ["add", "remove", "set"];

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Byte offsets of every standalone `add` / `remove` / `set` (any case).
fn verb_offsets(text: &str) -> Vec<usize> {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut offsets = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let starts_word = i == 0 || !is_word_byte(bytes[i - 1]);
        let verb = starts_word
            .then(|| {
                VERBS.iter().find(|verb| {
                    bytes[i..].starts_with(verb.as_bytes())
                        && bytes.get(i + verb.len()).is_none_or(|b| !is_word_byte(*b))
                })
            })
            .flatten();

        match verb {
            Some(verb) => {
                offsets.push(i);
                i += verb.len();
            }
            None => i += 1,
        }
    }
    offsets
}

/// Trim whitespace, clause separators and a dangling conjunction.
fn trim_segment(segment: &str) -> &str {
    let trim = |s: &str| -> usize {
        s.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .len()
    };

    let mut end = trim(segment);
    let lower = segment[..end].to_ascii_lowercase();
    if lower.ends_with(" and") {
        end = trim(&segment[..end - 4]);
    }
    segment[..end].trim_start()
}

/// Split `text` into independent clauses, each starting at a verb.
///
/// Each segment runs up to the next verb or the end of input. Text before the
/// first verb is dropped. Without any verb the whole trimmed input is one
/// segment, so it still surfaces downstream as unparsable.
pub fn extract_segments(text: &str) -> Vec<String> {
    let offsets = verb_offsets(text);
    if offsets.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    offsets
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = offsets.get(n + 1).copied().unwrap_or(text.len());
            trim_segment(&text[start..end])
        })
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
