//! Per-segment grammar: `set <item> to <amount>[ <unit>]` and
//! `(add|remove) [<amount>[ <unit>]] <item>`.

use pantry_inventory::{ActionKind, CanonicalUnit, Warning, to_canonical_unit};

/// Measure words that are clearly units but have no canonical counterpart.
const MEASURE_WORDS: &[&str] = &[
    "cup", "cups", "tbsp", "tsp", "tablespoon", "tablespoons", "teaspoon", "teaspoons", "oz",
    "ounce", "ounces", "lb", "lbs", "pound", "pounds", "dozen", "dozens", "pack", "packs",
    "packet", "packets", "can", "cans", "box", "boxes", "bag", "bags", "jar", "jars", "gallon",
    "gallons",
];

const NUMBER_WORDS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
];

/// One segment after grammar extraction, before item resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub kind: ActionKind,
    pub item_raw: String,
    pub amount: f64,
    pub unit: Option<CanonicalUnit>,
    /// The unit token as spoken, when present but not canonicalizable.
    pub invalid_unit: Option<String>,
}

/// An amount plus the unit token that followed it (or was glued to it).
struct Quantity<'a> {
    amount: f64,
    unit_token: Option<&'a str>,
}

/// Parse `500`, `1.5`, `-2`, `three` or a glued `500g` / `1.5kg`.
///
/// Returns the numeric value and any glued unit suffix. `None` means the
/// token is not a quantity at all. A token that starts like a number but is
/// malformed (`1.2.3`, `2-3`) yields NaN so it is reported as an invalid
/// quantity rather than read as part of the item name.
fn split_quantity(token: &str) -> Option<(f64, Option<&str>)> {
    let token = token.trim_end_matches('.');
    if let Some((_, value)) = NUMBER_WORDS.iter().find(|(word, _)| *word == token) {
        return Some((*value, None));
    }

    let number_len = token
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-'))
        .count();
    let (number, suffix) = token.split_at(number_len);

    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if number.matches('.').count() > 1 || !suffix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some((f64::NAN, None));
    }

    let value = number.parse::<f64>().unwrap_or(f64::NAN);
    let glued = (!suffix.is_empty()).then_some(suffix);
    Some((value, glued))
}

fn is_unit_token(token: &str) -> bool {
    to_canonical_unit(token).is_some() || MEASURE_WORDS.contains(&token.trim_end_matches('.'))
}

/// Lowercased whitespace tokens with clause punctuation removed.
fn tokenize(segment: &str) -> Vec<String> {
    segment
        .to_lowercase()
        .replace([',', ';', '!', '?'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// `<amount>[ <unit>]` filling the whole of `tail`.
fn parse_set_tail(tail: &[String]) -> Option<Quantity<'_>> {
    let (amount, glued) = split_quantity(tail.first()?)?;
    let unit_token = match (glued, tail.len()) {
        (Some(glued), 1) => Some(glued),
        (None, 1) => None,
        (None, 2) => Some(tail[1].as_str()),
        _ => return None,
    };
    Some(Quantity { amount, unit_token })
}

fn parse_set<'a>(rest: &'a [String]) -> Option<(String, Quantity<'a>)> {
    // The item phrase may itself contain "to"; prefer the last one that works.
    (1..rest.len()).rev().filter(|&i| rest[i] == "to").find_map(|i| {
        let quantity = parse_set_tail(&rest[i + 1..])?;
        Some((rest[..i].join(" "), quantity))
    })
}

fn parse_add_remove(rest: &[String]) -> Option<(String, Quantity<'_>)> {
    let first = rest.first()?;
    let Some((amount, glued)) = split_quantity(first) else {
        // "add eggs" means one of them.
        return Some((
            rest.join(" "),
            Quantity {
                amount: 1.0,
                unit_token: None,
            },
        ));
    };

    let after = &rest[1..];
    let (unit_token, item) = match glued {
        Some(glued) => (Some(glued), after),
        None if after.len() >= 2 && is_unit_token(&after[0]) => {
            (Some(after[0].as_str()), &after[1..])
        }
        None => (None, after),
    };
    if item.is_empty() {
        return None;
    }

    Some((item.join(" "), Quantity { amount, unit_token }))
}

/// Extract verb, amount, unit and item phrase from one segment.
///
/// Fails with the warning to report for the segment: unparsable when neither
/// grammar matches, invalid quantity when the amount is negative or not finite.
pub fn parse_segment(segment: &str) -> Result<ParsedCommand, Warning> {
    let unparsable = || Warning::UnparsableSegment {
        segment: segment.to_string(),
    };

    let tokens = tokenize(segment);
    let (verb, rest) = tokens.split_first().ok_or_else(unparsable)?;
    let kind = ActionKind::from_verb(verb).ok_or_else(unparsable)?;

    let (item_raw, quantity) = match kind {
        ActionKind::Set => parse_set(rest),
        ActionKind::Add | ActionKind::Remove => parse_add_remove(rest),
    }
    .ok_or_else(unparsable)?;

    if !(quantity.amount.is_finite() && quantity.amount >= 0.0) {
        return Err(Warning::InvalidQuantity {
            context: segment.to_string(),
        });
    }

    let unit = quantity.unit_token.and_then(to_canonical_unit);
    let invalid_unit = match (quantity.unit_token, unit) {
        (Some(token), None) => Some(token.to_string()),
        _ => None,
    };

    Ok(ParsedCommand {
        kind,
        item_raw,
        amount: quantity.amount,
        unit,
        invalid_unit,
    })
}
