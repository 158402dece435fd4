//! Item pages: listing, detail, create/update form, delete confirmation.

use super::{error_list, escape, layout};
use inventory_core::{Category, Item, ItemDetail, ItemForm, ItemId, ItemListing};
use std::fmt::Write;

/// Which submission an item form posts to.
#[derive(Debug, Clone, Copy)]
pub enum ItemFormTarget {
    Create,
    Update(ItemId),
}

impl ItemFormTarget {
    fn title(self) -> &'static str {
        match self {
            Self::Create => "Create New Item",
            Self::Update(_) => "Update Item",
        }
    }

    fn action(self) -> String {
        match self {
            Self::Create => "/inventory/create/item".to_string(),
            Self::Update(id) => format!("/inventory/item/{id}/update"),
        }
    }
}

/// Form values showing what is currently stored.
pub fn prefill(item: &Item) -> ItemForm {
    ItemForm {
        name: item.name.clone(),
        description: item.description.clone(),
        category: item.category_id.to_string(),
        price: item.price.to_string(),
        stock: item.stock.to_string(),
    }
}

pub fn list(listing: &ItemListing) -> String {
    let mut content = format!(
        r#"        <p>Items: {count} | Units: {units} | Value: {value}</p>
"#,
        count = listing.total_items,
        units = listing.valuation.total_units,
        value = listing.valuation.total_value,
    );

    if listing.entries.is_empty() {
        content.push_str("        <p>There are no items yet.</p>\n");
        return layout("All Items", &content);
    }

    content.push_str(
        "        <table>\n            <tr><th>Name</th><th>Category</th><th>Price</th><th>Stock</th><th>Value</th></tr>\n",
    );
    for entry in &listing.entries {
        let _ = writeln!(
            content,
            r#"            <tr><td><a href="{url}">{name}</a></td><td><a href="{cat_url}">{cat}</a></td><td>{price}</td><td>{stock}</td><td>{value}</td></tr>"#,
            url = entry.item.url(),
            name = escape(&entry.item.name),
            cat_url = entry.category.url(),
            cat = escape(&entry.category.name),
            price = entry.item.price,
            stock = entry.item.stock,
            value = entry.item.total_value(),
        );
    }
    content.push_str("        </table>\n");
    layout("All Items", &content)
}

pub fn detail(detail: &ItemDetail) -> String {
    let item = &detail.item;
    let content = format!(
        r#"        <h2>{name}</h2>
        <p>{description}</p>
        <dl>
            <dt>Category</dt><dd><a href="{cat_url}">{cat}</a></dd>
            <dt>Price</dt><dd>{price}</dd>
            <dt>Stock</dt><dd>{stock}</dd>
            <dt>Total value</dt><dd id="total-value">{value}</dd>
        </dl>
        <p>
            <a href="{url}/update">Update item</a>
            <a href="{url}/delete">Delete item</a>
        </p>
"#,
        name = escape(&item.name),
        description = escape(&item.description),
        cat_url = detail.category.url(),
        cat = escape(&detail.category.name),
        price = item.price,
        stock = item.stock,
        value = detail.valuation.total_value,
        url = item.url(),
    );
    layout("Item Details", &content)
}

pub fn form_page(
    target: ItemFormTarget,
    categories: &[Category],
    values: &ItemForm,
    errors: &[String],
) -> String {
    let mut options = String::new();
    for category in categories {
        let id = category.id.to_string();
        let selected = values.category == id || values.category == category.name;
        let _ = writeln!(
            options,
            r#"                <option value="{id}"{selected}>{name}</option>"#,
            selected = if selected { " selected" } else { "" },
            name = escape(&category.name),
        );
    }

    let content = format!(
        r#"{errors}        <form method="post" action="{action}">
            <label>Name <input type="text" name="name" value="{name}" required></label>
            <label>Description <textarea name="description" required>{description}</textarea></label>
            <label>Category
                <select name="category" required>
                <option value="">Select a category</option>
{options}                </select>
            </label>
            <label>Price <input type="number" name="price" min="1" value="{price}" required></label>
            <label>Stock <input type="number" name="stock" min="1" max="999" value="{stock}" required></label>
            <button type="submit">Save</button>
        </form>
"#,
        errors = error_list(errors),
        action = target.action(),
        name = escape(&values.name),
        description = escape(&values.description),
        options = options,
        price = escape(&values.price),
        stock = escape(&values.stock),
    );
    layout(target.title(), &content)
}

pub fn delete_confirm(item: &Item) -> String {
    let content = format!(
        r#"        <p>Delete <a href="{url}">{name}</a> ({stock} unit(s))?</p>
        <form method="post" action="{url}/delete">
            <button type="submit">Delete</button>
        </form>
        <p><a href="{url}">Cancel</a></p>
"#,
        url = item.url(),
        name = escape(&item.name),
        stock = item.stock,
    );
    layout("Delete Item", &content)
}

#[cfg(test)]
mod tests {
    use super::{form_page, prefill, ItemFormTarget};
    use inventory_core::{Category, CategoryDraft, Item, ItemDraft};

    fn tools() -> Category {
        Category::new(CategoryDraft {
            name: "Tools".to_string(),
            description: "Hand tools".to_string(),
        })
    }

    #[test]
    fn update_form_is_prefilled_and_selects_category() {
        let category = tools();
        let item = Item::new(
            ItemDraft {
                name: "Hammer".to_string(),
                description: "Claw".to_string(),
                category: category.id.to_string(),
                price: 10,
                stock: 5,
            },
            category.id,
        );

        let html = form_page(
            ItemFormTarget::Update(item.id),
            &[category.clone()],
            &prefill(&item),
            &[],
        );
        assert!(html.contains(&format!("action=\"/inventory/item/{}/update\"", item.id)));
        assert!(html.contains(r#"value="Hammer""#));
        assert!(html.contains(&format!(r#"<option value="{}" selected>Tools</option>"#, category.id)));
    }

    #[test]
    fn create_form_shows_errors_and_escapes_values() {
        let values = inventory_core::ItemForm {
            name: "\"><script>".to_string(),
            ..Default::default()
        };
        let html = form_page(
            ItemFormTarget::Create,
            &[tools()],
            &values,
            &["Name is required.".to_string()],
        );
        assert!(html.contains("<li>Name is required.</li>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("\"><script>"));
    }
}
