//! Category pages: listing, detail, create/update form, delete confirmation.

use super::{error_list, escape, layout};
use inventory_core::{Category, CategoryDetail, CategoryForm, CategoryId, CategoryListing, Item};
use std::fmt::Write;

/// Which submission a category form posts to.
#[derive(Debug, Clone, Copy)]
pub enum CategoryFormTarget {
    Create,
    Update(CategoryId),
}

impl CategoryFormTarget {
    fn title(self) -> &'static str {
        match self {
            Self::Create => "Create New Category",
            Self::Update(_) => "Update Category",
        }
    }

    fn action(self) -> String {
        match self {
            Self::Create => "/inventory/create/cat".to_string(),
            Self::Update(id) => format!("/inventory/cat/{id}/update"),
        }
    }
}

pub fn prefill(category: &Category) -> CategoryForm {
    CategoryForm {
        name: category.name.clone(),
        description: category.description.clone(),
    }
}

pub fn list(listing: &CategoryListing) -> String {
    let mut content = format!(
        "        <p>Categories: <span id=\"total-categories\">{}</span></p>\n",
        listing.total
    );
    if listing.categories.is_empty() {
        content.push_str("        <p>There are no categories yet.</p>\n");
        return layout("Categories", &content);
    }

    content.push_str("        <ul>\n");
    for category in &listing.categories {
        let _ = writeln!(
            content,
            r#"            <li><a href="{url}">{name}</a> - {description}</li>"#,
            url = category.url(),
            name = escape(&category.name),
            description = escape(&category.description),
        );
    }
    content.push_str("        </ul>\n");
    layout("Categories", &content)
}

pub fn detail(detail: &CategoryDetail) -> String {
    let category = &detail.category;
    let mut content = format!(
        r#"        <h2>{name}</h2>
        <p>{description}</p>
        <p>Items: <span id="item-count">{count}</span> | Units: {units} | Value: {value}</p>
"#,
        name = escape(&category.name),
        description = escape(&category.description),
        count = detail.items.len(),
        units = detail.valuation.total_units,
        value = detail.valuation.total_value,
    );
    content.push_str(&item_list(&detail.items));
    let _ = write!(
        content,
        r#"        <p>
            <a href="{url}/update">Update category</a>
            <a href="{url}/delete">Delete category</a>
        </p>
"#,
        url = category.url(),
    );
    layout("Category Details", &content)
}

pub fn form_page(target: CategoryFormTarget, values: &CategoryForm, errors: &[String]) -> String {
    let content = format!(
        r#"{errors}        <form method="post" action="{action}">
            <label>Name <input type="text" name="name" value="{name}" required></label>
            <label>Description <textarea name="description" required>{description}</textarea></label>
            <button type="submit">Save</button>
        </form>
"#,
        errors = error_list(errors),
        action = target.action(),
        name = escape(&values.name),
        description = escape(&values.description),
    );
    layout(target.title(), &content)
}

/// Delete confirmation; lists blocking items and any rejection message.
pub fn delete_confirm(detail: &CategoryDetail, errors: &[String]) -> String {
    let category = &detail.category;
    let mut content = error_list(errors);
    let _ = writeln!(
        content,
        r#"        <p>Delete <a href="{url}">{name}</a>?</p>"#,
        url = category.url(),
        name = escape(&category.name),
    );

    if detail.items.is_empty() {
        let _ = write!(
            content,
            r#"        <form method="post" action="{url}/delete">
            <button type="submit">Delete</button>
        </form>
"#,
            url = category.url(),
        );
    } else {
        content.push_str(
            "        <p>Remove or re-categorize these items before deleting this category:</p>\n",
        );
        content.push_str(&item_list(&detail.items));
    }
    let _ = writeln!(content, r#"        <p><a href="{}">Cancel</a></p>"#, category.url());
    layout("Delete Category", &content)
}

fn item_list(items: &[Item]) -> String {
    if items.is_empty() {
        return "        <p>This category has no items.</p>\n".to_string();
    }
    let mut html = String::from("        <ul>\n");
    for item in items {
        let _ = writeln!(
            html,
            r#"            <li><a href="{url}">{name}</a> ({stock} x {price})</li>"#,
            url = item.url(),
            name = escape(&item.name),
            stock = item.stock,
            price = item.price,
        );
    }
    html.push_str("        </ul>\n");
    html
}
