//! Relationship extraction from diagram source text.
//!
//! Candidate lines (those containing `--`) are matched against the two
//! crow's-foot fragment shapes and split at the first fragment occurrence.
//! The side of the split each entity name lands on depends on which fragment
//! matched:
//!
//! - `||--` + (`o` | `|`) + (`|` | `{`): the left part is the **target**, the
//!   right part (up to an optional `:` label) is the **source**.
//! - (`|` | `}`) + (`o` | `|`) + `--||`: the left part is the **source**, the
//!   right part (up to an optional `:` label) is the **target**.

use log::debug;
use winnow::{
    ModalResult,
    Parser,
    error::{ContextError, ErrMode},
    token::one_of,
};

use crowfoot_core::{
    identifier::EntityName,
    relation::{Relation, RelationSet},
};

/// Separates an entity name from its trailing relationship label.
const LABEL_SEPARATOR: char = ':';

/// Recognizes the fragment placing the target entity on the left.
///
/// Matches `||--` followed by one of `o` or `|`, followed by one of `|` or
/// `{` (for example `||--o{` or `||--||`).
fn right_to_left_fragment(input: &mut &str) -> ModalResult<()> {
    ("||--", one_of(['o', '|']), one_of(['|', '{']))
        .void()
        .parse_next(input)
}

/// Recognizes the mirror fragment placing the source entity on the left.
///
/// Matches one of `|` or `}`, followed by one of `o` or `|`, followed by
/// `--||` (for example `}o--||` or `||--||` read from its tail).
fn left_to_right_fragment(input: &mut &str) -> ModalResult<()> {
    (one_of(['|', '}']), one_of(['o', '|']), "--||")
        .void()
        .parse_next(input)
}

/// Splits `line` at the first offset where `fragment` parses.
///
/// Returns the text before the match and the text after the consumed
/// fragment. Later fragment occurrences stay inside the right part.
fn split_on_fragment<'s>(
    line: &'s str,
    fragment: impl Parser<&'s str, (), ErrMode<ContextError>> + Copy,
) -> Option<(&'s str, &'s str)> {
    for (offset, _) in line.char_indices() {
        let mut rest = &line[offset..];
        let mut fragment = fragment;
        if fragment.parse_next(&mut rest).is_ok() {
            return Some((&line[..offset], rest));
        }
    }
    None
}

/// Drops an optional `: label` suffix, keeping the text before the first `:`.
fn strip_label(part: &str) -> &str {
    part.split_once(LABEL_SEPARATOR)
        .map_or(part, |(name, _)| name)
}

/// Builds an entity name from raw line text, skipping blank names.
fn entity(raw: &str, line: &str) -> Option<EntityName> {
    match EntityName::parse(raw) {
        Ok(name) => Some(name),
        Err(err) => {
            debug!(line, err:%; "Skipping relation with blank entity name");
            None
        }
    }
}

/// Extracts the relation described by a single candidate line, if any.
///
/// The right-to-left fragment is tried first; the two patterns are mutually
/// exclusive per line.
fn relation_on_line(line: &str) -> Option<Relation> {
    if let Some((left, right)) = split_on_fragment(line, right_to_left_fragment) {
        let to = entity(left, line)?;
        let from = entity(strip_label(right), line)?;
        return Some(Relation::new(from, to));
    }

    if let Some((left, right)) = split_on_fragment(line, left_to_right_fragment) {
        let from = entity(left, line)?;
        let to = entity(strip_label(right), line)?;
        return Some(Relation::new(from, to));
    }

    debug!(line; "Candidate line matched no relationship pattern");
    None
}

/// Parses diagram source text into a deduplicated relation set.
///
/// This function is total: lines that are not relationship lines, or that
/// match neither fragment shape, are skipped silently. Extracted entity names
/// are whitespace-trimmed and case-sensitive. Output order is first-occurrence
/// order across the matched lines; structural duplicates keep their first
/// slot.
///
/// # Examples
///
/// ```
/// let relations = crowfoot_parser::parse("CUSTOMER ||--o{ ORDER : places");
/// let relation = relations.iter().next().expect("one relation");
/// assert_eq!(relation.from(), "ORDER");
/// assert_eq!(relation.to(), "CUSTOMER");
/// ```
pub fn parse(text: &str) -> RelationSet {
    let mut relations = RelationSet::new();

    for line in text.split('\n').filter(|line| line.contains("--")) {
        if let Some(relation) = relation_on_line(line) {
            if !relations.insert(relation) {
                debug!(line; "Dropping duplicate relation");
            }
        }
    }

    debug!(count = relations.len(); "Extracted relations");
    relations
}
