//! # Text Rendering
//!
//! Renders a [`BoardSnapshot`] as four labeled columns for a terminal
//! kitchen display. A pure function of the snapshot: no state, no I/O.

use crate::board::BoardSnapshot;

/// Placeholder shown in a column with nothing in it.
const EMPTY_COLUMN_PLACEHOLDER: &str = "No orders";

/// Renders the whole board, one column after another in pipeline order.
pub fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();
    for (stage, records) in snapshot.columns.iter() {
        out.push_str(&format!("== {} ({}) ==\n", stage.label(), records.len()));
        if records.is_empty() {
            out.push_str("  ");
            out.push_str(EMPTY_COLUMN_PLACEHOLDER);
            out.push('\n');
            continue;
        }
        for record in records {
            out.push_str(&format!(
                "  [{}] {} - {}\n",
                record.id, record.table_label, record.customer_label
            ));
            for item in &record.line_items {
                out.push_str(&format!("      {}x {}\n", item.quantity, item.name));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bucket;
    use crate::model::{LineItem, OrderKind, OrderRecord, Stage};

    #[test]
    fn empty_board_shows_a_placeholder_in_each_column() {
        let rendered = render(&BoardSnapshot::default());
        assert_eq!(rendered.matches(EMPTY_COLUMN_PLACEHOLDER).count(), 4);
        for stage in Stage::ALL {
            assert!(rendered.contains(&format!("== {} (0) ==", stage.label())));
        }
    }

    #[test]
    fn records_render_under_their_stage_heading() {
        let record = OrderRecord {
            id: "7".to_string(),
            table_label: "T3".to_string(),
            customer_label: "Ada".to_string(),
            kind: OrderKind::DineIn,
            line_items: vec![LineItem {
                name: "Tea".to_string(),
                quantity: 2,
                image_ref: None,
            }],
            stage: Stage::Ready,
        };
        let snapshot = BoardSnapshot {
            columns: bucket(vec![record]),
            generation: 1,
        };
        let rendered = render(&snapshot);
        assert!(rendered.contains("== Ready (1) =="));
        assert!(rendered.contains("[7] T3 - Ada"));
        assert!(rendered.contains("2x Tea"));
        // Other columns stay empty.
        assert_eq!(rendered.matches(EMPTY_COLUMN_PLACEHOLDER).count(), 3);
    }
}
