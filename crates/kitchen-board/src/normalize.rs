//! # Row Normalization
//!
//! Pure mapping from the Order Service's raw rows to canonical
//! [`OrderRecord`]s. The service's payload shapes are inconsistent (numeric or
//! string ids, string-typed quantities, sometimes-missing fields), so every
//! field here is deserialized defensively with `#[serde(default)]` and the
//! loose spots held as [`serde_json::Value`] until coercion.
//!
//! Normalization is applied independently per row; one malformed row never
//! poisons the rest of the snapshot.

use crate::model::{LineItem, OrderKind, OrderRecord, Stage};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Table label used when a dine-in row arrives with a blank table name.
const FALLBACK_TABLE_LABEL: &str = "Table";
/// Table label for every non-dine-in order.
const TAKEAWAY_LABEL: &str = "Takeaway";
/// Terminal step of the customer label fallback chain.
const GUEST_LABEL: &str = "Guest";

/// One order row exactly as the Order Service returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrder {
    /// Arrives as a number or a string depending on the endpoint revision.
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub order_type: String,
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub user: Option<RawUser>,
    /// Usually an array of [`RawItem`]-shaped objects, but observed as null
    /// and as a bare object on some rows.
    #[serde(default)]
    pub items: Value,
    #[serde(default)]
    pub status: String,
}

/// The account associated with an order, when one exists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawItem {
    #[serde(default)]
    product_name: String,
    #[serde(default)]
    quantity: Value,
    #[serde(default)]
    image: String,
}

/// Normalizes a batch of raw rows, dropping any row whose status is not one
/// of the four canonical stages.
///
/// Dropped rows vanish from every column. That mirrors the Order Service's
/// own contract for retired statuses, but it is logged so a misbehaving
/// server is at least observable.
pub fn normalize_rows(rows: Vec<RawOrder>, image_base_url: &str) -> Vec<OrderRecord> {
    rows.into_iter()
        .filter_map(|row| normalize_row(row, image_base_url))
        .collect()
}

/// Normalizes a single row. Returns `None` when the status is unrecognized.
pub fn normalize_row(row: RawOrder, image_base_url: &str) -> Option<OrderRecord> {
    let id = id_string(&row.id);
    let stage = match Stage::parse(&row.status) {
        Some(stage) => stage,
        None => {
            warn!(order_id = %id, status = %row.status, "Dropping row with unknown status");
            return None;
        }
    };

    let kind = OrderKind::from_wire(&row.order_type);
    let table_label = match kind {
        OrderKind::DineIn => non_blank(&row.table_name)
            .unwrap_or(FALLBACK_TABLE_LABEL)
            .to_string(),
        OrderKind::TakeAway => TAKEAWAY_LABEL.to_string(),
    };

    // First non-blank wins: explicit name, phone, account name, placeholder.
    let customer_label = non_blank(&row.customer_name)
        .or_else(|| non_blank(&row.customer_phone))
        .or_else(|| row.user.as_ref().and_then(|u| non_blank(&u.name)))
        .unwrap_or(GUEST_LABEL)
        .to_string();

    Some(OrderRecord {
        id,
        table_label,
        customer_label,
        kind,
        line_items: normalize_items(row.items, image_base_url),
        stage,
    })
}

fn normalize_items(items: Value, image_base_url: &str) -> Vec<LineItem> {
    let Value::Array(entries) = items else {
        return Vec::new();
    };
    entries
        .into_iter()
        .map(|entry| {
            let item: RawItem = serde_json::from_value(entry).unwrap_or_default();
            LineItem {
                name: item.product_name,
                quantity: coerce_quantity(&item.quantity),
                image_ref: non_blank(&item.image).map(|path| join_url(image_base_url, path)),
            }
        })
        .collect()
}

/// Quantities arrive as numbers or numeric strings; anything unparseable or
/// below one coerces to 1 so a ticket line is never ordered zero times.
fn coerce_quantity(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .map(|q| q.min(u32::MAX as u64) as u32)
        .filter(|&q| q >= 1)
        .unwrap_or(1)
}

fn id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: serde_json::Value) -> RawOrder {
        serde_json::from_value(v).expect("raw order fixture")
    }

    #[test]
    fn dine_in_row_with_phone_fallback_maps_exactly() {
        let row = raw(json!({
            "order_type": "DINE_IN",
            "table_name": "",
            "customer_name": "",
            "customer_phone": "9999",
            "items": [{"product_name": "Tea", "quantity": "2"}],
            "status": "NEW"
        }));

        let record = normalize_row(row, "").expect("row should normalize");
        assert_eq!(record.table_label, "Table");
        assert_eq!(record.customer_label, "9999");
        assert_eq!(record.kind, OrderKind::DineIn);
        assert_eq!(
            record.line_items,
            vec![LineItem {
                name: "Tea".to_string(),
                quantity: 2,
                image_ref: None,
            }]
        );
        assert_eq!(record.stage, Stage::New);
    }

    #[test]
    fn non_array_items_normalize_to_empty() {
        for items in [json!(null), json!({"product_name": "Tea"}), json!("Tea")] {
            let row = raw(json!({"status": "NEW", "items": items}));
            let record = normalize_row(row, "").unwrap();
            assert!(record.line_items.is_empty());
        }
        // Missing entirely.
        let record = normalize_row(raw(json!({"status": "NEW"})), "").unwrap();
        assert!(record.line_items.is_empty());
    }

    #[test]
    fn customer_label_fallback_chain() {
        let named = raw(json!({
            "status": "NEW",
            "customer_name": "  Ada  ",
            "customer_phone": "123",
            "user": {"name": "ada@acct"}
        }));
        assert_eq!(normalize_row(named, "").unwrap().customer_label, "Ada");

        let phone_only = raw(json!({
            "status": "NEW",
            "customer_name": "   ",
            "customer_phone": "123",
            "user": {"name": "ada@acct"}
        }));
        assert_eq!(normalize_row(phone_only, "").unwrap().customer_label, "123");

        let account_only = raw(json!({
            "status": "NEW",
            "user": {"name": "ada@acct"}
        }));
        assert_eq!(
            normalize_row(account_only, "").unwrap().customer_label,
            "ada@acct"
        );

        let anonymous = raw(json!({"status": "NEW"}));
        assert_eq!(normalize_row(anonymous, "").unwrap().customer_label, "Guest");
    }

    #[test]
    fn table_label_derivation() {
        let dine_in = raw(json!({"status": "NEW", "order_type": "DINE_IN", "table_name": "T7"}));
        assert_eq!(normalize_row(dine_in, "").unwrap().table_label, "T7");

        let blank_table = raw(json!({"status": "NEW", "order_type": "DINE_IN", "table_name": " "}));
        assert_eq!(normalize_row(blank_table, "").unwrap().table_label, "Table");

        let takeaway = raw(json!({"status": "NEW", "order_type": "TAKE_AWAY", "table_name": "T7"}));
        assert_eq!(normalize_row(takeaway, "").unwrap().table_label, "Takeaway");
    }

    #[test]
    fn unknown_status_drops_the_row() {
        let row = raw(json!({"status": "CANCELLED", "customer_name": "Ada"}));
        assert!(normalize_row(row, "").is_none());

        let rows: Vec<RawOrder> = serde_json::from_value(json!([
            {"status": "NEW"},
            {"status": "VOID"},
            {"status": "READY"}
        ]))
        .unwrap();
        let records = normalize_rows(rows, "");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stage, Stage::New);
        assert_eq!(records[1].stage, Stage::Ready);
    }

    #[test]
    fn quantity_coercion() {
        for (input, expected) in [
            (json!(3), 3),
            (json!("4"), 4),
            (json!(" 5 "), 5),
            (json!(0), 1),
            (json!(-2), 1),
            (json!("lots"), 1),
            (json!(null), 1),
        ] {
            let row = raw(json!({
                "status": "NEW",
                "items": [{"product_name": "Tea", "quantity": input}]
            }));
            let record = normalize_row(row, "").unwrap();
            assert_eq!(record.line_items[0].quantity, expected, "quantity coercion");
        }
    }

    #[test]
    fn image_paths_are_prefixed_with_the_base_url() {
        let row = raw(json!({
            "status": "NEW",
            "items": [
                {"product_name": "Tea", "quantity": 1, "image": "/img/tea.png"},
                {"product_name": "Pie", "quantity": 1}
            ]
        }));
        let record = normalize_row(row, "https://cdn.example.com/").unwrap();
        assert_eq!(
            record.line_items[0].image_ref.as_deref(),
            Some("https://cdn.example.com/img/tea.png")
        );
        assert_eq!(record.line_items[1].image_ref, None);
    }

    #[test]
    fn numeric_ids_become_strings() {
        let row = raw(json!({"id": 42, "status": "NEW"}));
        assert_eq!(normalize_row(row, "").unwrap().id, "42");

        let row = raw(json!({"id": "ord_9", "status": "NEW"}));
        assert_eq!(normalize_row(row, "").unwrap().id, "ord_9");
    }
}
