//! # Canonical Order Model
//!
//! Pure data structures for the kitchen board. Every order shown on the board
//! is an [`OrderRecord`] materialized from a raw server row by the
//! [`normalize`](crate::normalize) module; nothing here talks to the network.
//!
//! # Architecture Note
//! The board's pipeline is a fixed, forward-only sequence of four [`Stage`]s.
//! Encoding the stage as an enum (rather than the wire string) means the
//! bucketing and rendering layers cannot observe an out-of-range stage: rows
//! whose status does not parse are rejected at the normalization boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline position an order occupies on the board.
///
/// The wire representation matches the Order Service's status strings
/// (`"NEW"`, `"IN_PROGRESS"`, `"READY"`, `"SERVED"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    New,
    InProgress,
    Ready,
    Served,
}

impl Stage {
    /// All stages in pipeline order. Column layout follows this order.
    pub const ALL: [Stage; 4] = [Stage::New, Stage::InProgress, Stage::Ready, Stage::Served];

    /// The wire string sent to and received from the Order Service.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::New => "NEW",
            Stage::InProgress => "IN_PROGRESS",
            Stage::Ready => "READY",
            Stage::Served => "SERVED",
        }
    }

    /// Parses a server status string. Returns `None` for anything outside the
    /// four canonical values; never panics on unrecognized input.
    pub fn parse(s: &str) -> Option<Stage> {
        match s.trim() {
            "NEW" => Some(Stage::New),
            "IN_PROGRESS" => Some(Stage::InProgress),
            "READY" => Some(Stage::Ready),
            "SERVED" => Some(Stage::Served),
            _ => None,
        }
    }

    /// The next stage in the forward-only sequence, or `None` from `Served`.
    ///
    /// Callers advancing an order compute the target from the column the
    /// order currently sits in; the board itself does not re-validate the
    /// transition.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::New => Some(Stage::InProgress),
            Stage::InProgress => Some(Stage::Ready),
            Stage::Ready => Some(Stage::Served),
            Stage::Served => None,
        }
    }

    /// Human-readable column heading.
    pub fn label(self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::InProgress => "In progress",
            Stage::Ready => "Ready",
            Stage::Served => "Served",
        }
    }

    /// Column index in [`Stage::ALL`] order.
    pub(crate) fn index(self) -> usize {
        match self {
            Stage::New => 0,
            Stage::InProgress => 1,
            Stage::Ready => 2,
            Stage::Served => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the order is eaten in-house or picked up.
///
/// Only `"DINE_IN"` maps to [`OrderKind::DineIn`]; every other wire value is
/// treated as takeaway for label derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    DineIn,
    TakeAway,
}

impl OrderKind {
    pub fn from_wire(s: &str) -> OrderKind {
        if s.trim() == "DINE_IN" {
            OrderKind::DineIn
        } else {
            OrderKind::TakeAway
        }
    }
}

/// A single dish on an order ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Always at least 1; unparseable quantities are coerced during
    /// normalization.
    pub quantity: u32,
    /// Absolute image URL, when the server supplied a relative path.
    pub image_ref: Option<String>,
}

/// Canonical, post-normalization order as shown on the board.
///
/// Records are rebuilt from scratch on every successful refresh; the board
/// never merges across polls, so a record is only ever as stale as the last
/// snapshot it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Opaque server identifier, stable across refreshes.
    pub id: String,
    /// Table name for dine-in, `"Takeaway"` otherwise; never empty.
    pub table_label: String,
    /// Resolved via the name -> phone -> account-name -> `"Guest"` fallback
    /// chain; never empty.
    pub customer_label: String,
    pub kind: OrderKind,
    /// Never null: absent or malformed server items normalize to empty.
    pub line_items: Vec<LineItem>,
    pub stage: Stage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_forward_sequence_terminates_at_served() {
        assert_eq!(Stage::New.next(), Some(Stage::InProgress));
        assert_eq!(Stage::InProgress.next(), Some(Stage::Ready));
        assert_eq!(Stage::Ready.next(), Some(Stage::Served));
        assert_eq!(Stage::Served.next(), None);
    }

    #[test]
    fn stage_parse_accepts_only_canonical_strings() {
        for stage in Stage::ALL {
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
        assert_eq!(Stage::parse("COOKING"), None);
        assert_eq!(Stage::parse(""), None);
        assert_eq!(Stage::parse("new"), None);
    }

    #[test]
    fn order_kind_treats_anything_but_dine_in_as_takeaway() {
        assert_eq!(OrderKind::from_wire("DINE_IN"), OrderKind::DineIn);
        assert_eq!(OrderKind::from_wire("TAKE_AWAY"), OrderKind::TakeAway);
        assert_eq!(OrderKind::from_wire("DELIVERY"), OrderKind::TakeAway);
        assert_eq!(OrderKind::from_wire(""), OrderKind::TakeAway);
    }
}
