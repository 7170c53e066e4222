//! Turning an utterance into validated, warning-annotated actions.

use serde::Serialize;

use pantry_inventory::{Action, InventoryItem, Warning};

use crate::config::InterpreterConfig;
use crate::grammar::{ParsedCommand, parse_segment};
use crate::normalize::{normalize_name, title_case};
use crate::resolve::resolve_item_match_with;
use crate::segment::extract_segments;

/// Actions interpreted from one utterance plus every warning raised on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub actions: Vec<Action>,
    pub warnings: Vec<Warning>,
}

impl ParseResult {
    pub fn messages(&self) -> Vec<String> {
        pantry_inventory::warning::messages(&self.warnings)
    }
}

/// Interprets free-text inventory commands against a snapshot.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    config: InterpreterConfig,
}

impl CommandInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Parse every clause of `text`. A bad clause yields a warning and never
    /// stops the remaining clauses from being parsed.
    pub fn parse(&self, text: &str, inventory: &[InventoryItem]) -> ParseResult {
        let segments = extract_segments(text);
        tracing::debug!(segments = segments.len(), "segmented command text");

        let mut actions = Vec::new();
        let mut warnings = Vec::new();

        for segment in &segments {
            let built = parse_segment(segment)
                .and_then(|cmd| self.build_action(segment, cmd, inventory));
            match built {
                Ok(action) => {
                    warnings.extend(action.warnings.iter().cloned());
                    actions.push(action);
                }
                Err(warning) => warnings.push(warning),
            }
        }

        ParseResult { actions, warnings }
    }

    fn strip_fillers(&self, phrase: &str) -> String {
        phrase
            .split_whitespace()
            .filter(|word| !self.config.is_filler(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn build_action(
        &self,
        segment: &str,
        cmd: ParsedCommand,
        inventory: &[InventoryItem],
    ) -> Result<Action, Warning> {
        let candidate = self.strip_fillers(&cmd.item_raw);
        if normalize_name(&candidate).is_empty() {
            return Err(Warning::UnparsableSegment {
                segment: segment.to_string(),
            });
        }

        let mut warnings = Vec::new();
        let matched = resolve_item_match_with(&candidate, inventory, self.config.match_threshold);

        let mut action = match matched {
            Some(m) => Action {
                kind: cmd.kind,
                amount: cmd.amount,
                input_unit: cmd.unit,
                item_id: Some(m.item.id),
                item_name: m.item.name.clone(),
                item_category: m.item.category.clone(),
                item_unit_type: m.item.unit_type,
                is_new_item: false,
                raw_item_name: cmd.item_raw,
                warnings: Vec::new(),
            },
            None => {
                let name = title_case(&normalize_name(&candidate));
                warnings.push(Warning::UnmatchedItem { name: name.clone() });
                Action {
                    kind: cmd.kind,
                    amount: cmd.amount,
                    input_unit: cmd.unit,
                    item_id: None,
                    item_name: name,
                    item_category: self.config.new_item.category.clone(),
                    item_unit_type: cmd.unit.unwrap_or(self.config.new_item.unit),
                    is_new_item: true,
                    raw_item_name: cmd.item_raw,
                    warnings: Vec::new(),
                }
            }
        };

        if let Some(token) = cmd.invalid_unit {
            warnings.push(Warning::UnrecognizedUnit { token });
        }
        action.warnings = warnings;
        Ok(action)
    }
}

/// Parse `text` against `inventory` with the default configuration.
pub fn parse_voice_command(text: &str, inventory: &[InventoryItem]) -> ParseResult {
    CommandInterpreter::default().parse(text, inventory)
}
