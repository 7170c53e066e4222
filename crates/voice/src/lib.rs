//! `pantry-voice`
//!
//! Free-text inventory command interpreter: "add 3 tomatoes and remove 2
//! onions" in, validated [`Action`](pantry_inventory::Action)s plus warnings
//! out.
//!
//! Pipeline: segmenter → grammar → (fuzzy resolver, unit canonicalizer) →
//! action builder. Everything is synchronous and pure; the inventory
//! snapshot is supplied by the caller and never fetched or written here.

pub mod config;
pub mod grammar;
pub mod interpreter;
pub mod normalize;
pub mod phrases;
pub mod resolve;
pub mod segment;

pub use config::{DEFAULT_FILLER_WORDS, InterpreterConfig};
pub use grammar::{ParsedCommand, parse_segment};
pub use interpreter::{CommandInterpreter, ParseResult, parse_voice_command};
pub use normalize::{normalize, normalize_name, singularize, title_case};
pub use phrases::{SAMPLE_PHRASES, random_sample_phrase};
pub use resolve::{
    ItemMatch, MATCH_THRESHOLD, resolve_item_match, resolve_item_match_with, token_score,
};
pub use segment::extract_segments;

pub use pantry_inventory::{
    Action, ActionKind, ApplyResult, CanonicalUnit, InventoryItem, Warning, apply_actions,
    to_canonical_unit,
};
