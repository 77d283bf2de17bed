//! JSON rendering for command results

use crate::app::Navigation;
use crate::routing::{GuardOutcome, NavItem};
use serde::Serialize;
use serde_json::{Value, json};

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn navigation_json(nav: &Navigation) -> Value {
    let outcome = match &nav.outcome {
        GuardOutcome::Render(route) => json!({"render": route.path()}),
        GuardOutcome::Redirect(route) => json!({"redirect": route.path()}),
        GuardOutcome::Loading => json!("loading"),
        GuardOutcome::NotFound => json!("not_found"),
    };
    json!({
        "requested": nav.requested,
        "redirects": nav.redirects.iter().map(|r| r.path()).collect::<Vec<_>>(),
        "outcome": outcome,
    })
}

pub(crate) fn menu_json(items: &[NavItem]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| json!({"label": item.label, "path": item.path}))
            .collect(),
    )
}
