// Content hydration.
// Collects pending resource slots from live subtrees (marking them fetched at
// issuance) and renders fetched bodies by declared kind.

use serde_json::Value;

use crate::deck::ResourceKind;
use crate::error::{DeckError, Result};
use crate::state::content::{LiveBlock, LoadingState, MetricRow, Rendered};
use crate::state::tabs::TabGroup;

/// A fetch to issue for one resource slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub slot: u64,
    pub src: String,
    pub kind: ResourceKind,
}

/// Completion of one slot's fetch, delivered back to the event loop.
#[derive(Debug)]
pub struct HydrationEvent {
    pub slot: u64,
    pub src: String,
    pub result: std::result::Result<Rendered, String>,
}

/// Scan a tab group for resource slots not yet fetched and return requests
/// for them in document order.
///
/// Each collected slot is marked `Loading` synchronously, so calling this
/// again on the same scope (or on a scope with nothing pending) is a no-op:
/// at most one fetch is ever issued per slot.
pub fn collect_requests(tabs: &mut TabGroup) -> Vec<FetchRequest> {
    let mut requests = Vec::new();

    for panel in &mut tabs.panels {
        for block in &mut panel.blocks {
            if let LiveBlock::Resource(slot) = block {
                if !slot.is_fetched() {
                    slot.state = LoadingState::Loading;
                    requests.push(FetchRequest {
                        slot: slot.slot,
                        src: slot.src.clone(),
                        kind: slot.kind,
                    });
                }
            }
        }
    }
    requests
}

/// Render a fetched body according to its declared kind.
pub fn render(kind: ResourceKind, body: &str) -> Result<Rendered> {
    match kind {
        ResourceKind::Html => Ok(Rendered::Markup(body.to_string())),
        ResourceKind::Text => Ok(Rendered::Text(body.to_string())),
        ResourceKind::Json => Ok(Rendered::Metrics(metric_rows(body)?)),
    }
}

/// Build comparison table rows from a JSON metric payload.
///
/// The payload is an object keyed by model name; each value's first entry is
/// the primary metric and its fourth the secondary, both shown with four
/// decimals.
fn metric_rows(body: &str) -> Result<Vec<MetricRow>> {
    let value: Value = serde_json::from_str(body)?;
    let object = value
        .as_object()
        .ok_or_else(|| DeckError::Other("metric payload is not a JSON object".to_string()))?;

    let rows = object
        .iter()
        .map(|(model, metrics)| {
            let entries: Vec<&Value> = match metrics.as_object() {
                Some(fields) => fields.values().collect(),
                None => Vec::new(),
            };
            MetricRow {
                model: model.clone(),
                primary: format_metric(entries.first().copied()),
                secondary: format_metric(entries.get(3).copied()),
            }
        })
        .collect();
    Ok(rows)
}

fn format_metric(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => format!("{f:.4}"),
            None => n.to_string(),
        },
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Block, TabDef};

    fn tabs_with_resources() -> TabGroup {
        let defs = vec![
            TabDef {
                id: "output".to_string(),
                label: "Output".to_string(),
                blocks: vec![
                    Block::Resource {
                        src: "metrics.json".to_string(),
                        kind: ResourceKind::Json,
                    },
                    Block::Text {
                        body: "caption".to_string(),
                    },
                ],
            },
            TabDef {
                id: "analysis".to_string(),
                label: "Analysis".to_string(),
                blocks: vec![Block::Resource {
                    src: "notes.txt".to_string(),
                    kind: ResourceKind::Text,
                }],
            },
        ];
        let mut next_slot = 0;
        TabGroup::bind(&defs, &mut next_slot)
    }

    #[test]
    fn test_collect_marks_and_orders() {
        let mut tabs = tabs_with_resources();

        let requests = collect_requests(&mut tabs);
        // Document order across panels, text blocks skipped.
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].src, "metrics.json");
        assert_eq!(requests[1].src, "notes.txt");

        // Second pass finds nothing: slots were marked at issuance.
        assert!(collect_requests(&mut tabs).is_empty());
    }

    #[test]
    fn test_collect_empty_scope() {
        let mut next_slot = 0;
        let mut tabs = TabGroup::bind(&[], &mut next_slot);
        assert!(collect_requests(&mut tabs).is_empty());
    }

    #[test]
    fn test_render_text_and_markup() {
        assert_eq!(
            render(ResourceKind::Text, "raw output").unwrap(),
            Rendered::Text("raw output".to_string())
        );
        assert_eq!(
            render(ResourceKind::Html, "<b>hi</b>").unwrap(),
            Rendered::Markup("<b>hi</b>".to_string())
        );
    }

    #[test]
    fn test_render_metric_table() {
        let body = r#"{"A":{"r2":0.9,"x":0,"y":0,"mse":0.1}}"#;
        let rendered = render(ResourceKind::Json, body).unwrap();

        match rendered {
            Rendered::Metrics(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].model, "A");
                assert_eq!(rows[0].primary, "0.9000");
                assert_eq!(rows[0].secondary, "0.1000");
            }
            other => panic!("expected metrics, got {other:?}"),
        }
    }

    #[test]
    fn test_render_metric_table_short_entries() {
        let body = r#"{"KMeans":{"inertia":12.5}}"#;
        match render(ResourceKind::Json, body).unwrap() {
            Rendered::Metrics(rows) => {
                assert_eq!(rows[0].primary, "12.5000");
                assert_eq!(rows[0].secondary, "-");
            }
            other => panic!("expected metrics, got {other:?}"),
        }
    }

    #[test]
    fn test_render_invalid_json() {
        assert!(render(ResourceKind::Json, "not json").is_err());
        assert!(render(ResourceKind::Json, "[1,2]").is_err());
    }
}
