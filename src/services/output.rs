use crate::domain::models::{JsonOut, PayrollReport};
use crate::services::registry::PayrollRegistry;

/// Report body for menu option 4: text by default, a JSON envelope under `--json`.
pub fn render_report(json: bool, registry: &PayrollRegistry) -> anyhow::Result<String> {
    if json {
        let data = PayrollReport {
            count: registry.len(),
            employees: registry.employees(),
        };
        let mut body = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
        body.push('\n');
        Ok(body)
    } else {
        Ok(registry.render_report())
    }
}
