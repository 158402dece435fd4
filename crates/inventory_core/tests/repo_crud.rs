use inventory_core::db::open_db_in_memory;
use inventory_core::{
    Category, CategoryDraft, CategoryRepository, Item, ItemDraft, ItemRepository, RepoError,
    SqliteCategoryRepository, SqliteItemRepository,
};
use uuid::Uuid;

fn category(name: &str) -> Category {
    Category::new(CategoryDraft {
        name: name.to_string(),
        description: format!("{name} description"),
    })
}

fn item(name: &str, category_id: Uuid, price: i64, stock: u32) -> Item {
    Item::new(
        ItemDraft {
            name: name.to_string(),
            description: format!("{name} description"),
            category: category_id.to_string(),
            price,
            stock,
        },
        category_id,
    )
}

#[test]
fn category_create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let tools = category("Tools");
    let id = repo.create_category(&tools).unwrap();

    let loaded = repo.get_category(id).unwrap().unwrap();
    assert_eq!(loaded, tools);
    assert_eq!(
        repo.find_category_by_name("Tools").unwrap().map(|c| c.id),
        Some(id)
    );
    assert!(repo.find_category_by_name("tools").unwrap().is_none());
}

#[test]
fn category_list_is_sorted_by_name_and_counted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    repo.create_category(&category("Paint")).unwrap();
    repo.create_category(&category("Garden")).unwrap();
    repo.create_category(&category("Tools")).unwrap();

    let names: Vec<_> = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Garden", "Paint", "Tools"]);
    assert_eq!(repo.count_categories().unwrap(), 3);
}

#[test]
fn duplicate_category_name_is_a_unique_violation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    repo.create_category(&category("Tools")).unwrap();
    let err = repo.create_category(&category("Tools")).unwrap_err();
    assert!(matches!(err, RepoError::UniqueViolation("categories")));
}

#[test]
fn update_missing_category_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let ghost = category("Ghost");
    let err = repo.update_category(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == ghost.id));
}

#[test]
fn invalid_category_is_rejected_before_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let mut blank = category("Blank");
    blank.name = "  ".to_string();
    let err = repo.create_category(&blank).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count_categories().unwrap(), 0);
}

#[test]
fn item_create_update_and_delete() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let tools = category("Tools");
    categories.create_category(&tools).unwrap();

    let mut hammer = item("Hammer", tools.id, 10, 5);
    items.create_item(&hammer).unwrap();
    assert_eq!(items.get_item(hammer.id).unwrap().unwrap(), hammer);

    hammer.price = 12;
    hammer.stock = 999;
    items.update_item(&hammer).unwrap();
    let loaded = items.get_item(hammer.id).unwrap().unwrap();
    assert_eq!(loaded.price, 12);
    assert_eq!(loaded.stock, 999);

    items.delete_item(hammer.id).unwrap();
    assert!(items.get_item(hammer.id).unwrap().is_none());
    let err = items.delete_item(hammer.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn item_requires_existing_category() {
    let conn = open_db_in_memory().unwrap();
    let items = SqliteItemRepository::new(&conn);

    let orphan = item("Orphan", Uuid::new_v4(), 1, 1);
    let err = items.create_item(&orphan).unwrap_err();
    assert!(matches!(err, RepoError::ForeignKeyViolation("items")));
}

#[test]
fn duplicate_item_name_is_a_unique_violation() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let tools = category("Tools");
    categories.create_category(&tools).unwrap();
    items.create_item(&item("Hammer", tools.id, 10, 5)).unwrap();

    let err = items
        .create_item(&item("Hammer", tools.id, 99, 1))
        .unwrap_err();
    assert!(matches!(err, RepoError::UniqueViolation("items")));
}

#[test]
fn items_are_filtered_and_counted_by_category() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let tools = category("Tools");
    let paint = category("Paint");
    categories.create_category(&tools).unwrap();
    categories.create_category(&paint).unwrap();
    items.create_item(&item("Saw", tools.id, 20, 2)).unwrap();
    items.create_item(&item("Hammer", tools.id, 10, 5)).unwrap();
    items.create_item(&item("Primer", paint.id, 8, 3)).unwrap();

    let tool_names: Vec<_> = items
        .list_items_by_category(tools.id)
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(tool_names, vec!["Hammer", "Saw"]);
    assert_eq!(items.count_items_by_category(tools.id).unwrap(), 2);
    assert_eq!(items.count_items_by_category(paint.id).unwrap(), 1);
    assert_eq!(items.count_items().unwrap(), 3);
    assert_eq!(items.list_items().unwrap().len(), 3);
}

#[test]
fn referenced_category_cannot_be_deleted_at_storage_level() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let tools = category("Tools");
    categories.create_category(&tools).unwrap();
    items.create_item(&item("Hammer", tools.id, 10, 5)).unwrap();

    let err = categories.delete_category(tools.id).unwrap_err();
    assert!(matches!(err, RepoError::ForeignKeyViolation("categories")));
    assert!(categories.get_category(tools.id).unwrap().is_some());
}

#[test]
fn storage_rejects_out_of_range_rows_written_directly() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);
    let tools = category("Tools");
    categories.create_category(&tools).unwrap();

    let result = conn.execute(
        "INSERT INTO items (id, name, description, category_id, price, stock)
         VALUES (?1, 'Bad', 'bad', ?2, 0, 1000);",
        [Uuid::new_v4().to_string(), tools.id.to_string()],
    );
    assert!(result.is_err());
}

#[test]
fn corrupt_persisted_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO categories (id, name, description) VALUES ('not-a-uuid', 'Broken', 'x');",
        [],
    )
    .unwrap();

    let repo = SqliteCategoryRepository::new(&conn);
    let err = repo.list_categories().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
