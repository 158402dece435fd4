//! Landing page.

use super::layout;
use inventory_core::InventoryOverview;

pub fn overview(overview: &InventoryOverview) -> String {
    let content = format!(
        r#"        <section>
            <h2>Overview</h2>
            <ul>
                <li>Total items: <span id="total-items">{items}</span></li>
                <li>Total categories: <span id="total-categories">{categories}</span></li>
                <li>Total units: <span id="total-units">{units}</span></li>
                <li>Total value: <span id="total-value">{value}</span></li>
            </ul>
        </section>
        <section>
            <h2>Toolkit</h2>
            <ul>
                <li><a href="/inventory/all">View all items</a></li>
                <li><a href="/inventory/cat">View categories</a></li>
                <li><a href="/inventory/create/item">Create item</a></li>
                <li><a href="/inventory/create/cat">Create category</a></li>
            </ul>
        </section>
"#,
        items = overview.total_items,
        categories = overview.total_categories,
        units = overview.valuation.total_units,
        value = overview.valuation.total_value,
    );
    layout(super::APP_TITLE, &content)
}
