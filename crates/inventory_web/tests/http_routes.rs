use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use inventory_core::db::open_db_in_memory;
use inventory_web::{configure, AppState};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(
                    open_db_in_memory().expect("open in-memory db"),
                )))
                .configure(configure),
        )
        .await
    };
}

macro_rules! post_form {
    ($app:expr, $uri:expr, $form:expr) => {
        test::call_service(
            &$app,
            test::TestRequest::post()
                .uri($uri)
                .set_form($form)
                .to_request(),
        )
        .await
    };
}

macro_rules! get {
    ($app:expr, $uri:expr) => {
        test::call_service(&$app, test::TestRequest::get().uri($uri).to_request()).await
    };
}

fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
        .to_string()
}

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn root_redirects_to_overview() {
    let app = init_app!();
    let resp = get!(app, "/");
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/inventory");
}

#[actix_web::test]
async fn empty_overview_reports_zero_totals() {
    let app = init_app!();
    let resp = get!(app, "/inventory");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(r#"<span id="total-items">0</span>"#));
    assert!(body.contains(r#"<span id="total-categories">0</span>"#));
    assert!(body.contains(r#"<span id="total-value">0</span>"#));
}

#[actix_web::test]
async fn category_with_items_cannot_be_deleted_until_emptied() {
    let app = init_app!();

    let resp = post_form!(
        app,
        "/inventory/create/cat",
        &[("name", "Tools"), ("description", "Hand tools")]
    );
    assert_eq!(resp.status(), StatusCode::FOUND);
    let category_url = location(&resp);
    assert!(category_url.starts_with("/inventory/cat/"));

    let body = body_text(get!(app, &category_url)).await;
    assert!(body.contains(r#"<span id="item-count">0</span>"#));

    let resp = post_form!(
        app,
        "/inventory/create/item",
        &[
            ("name", "Hammer"),
            ("description", "Claw hammer"),
            ("category", "Tools"),
            ("price", "10"),
            ("stock", "5"),
        ]
    );
    assert_eq!(resp.status(), StatusCode::FOUND);
    let item_url = location(&resp);
    assert!(item_url.starts_with("/inventory/item/"));

    let body = body_text(get!(app, &item_url)).await;
    assert!(body.contains("Hammer"));
    assert!(body.contains(r#"<dd id="total-value">50</dd>"#));

    let resp = post_form!(app, &format!("{category_url}/delete"), &[("confirm", "yes")]);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_text(resp).await;
    assert!(body.contains("This category contains 1 item(s)"));

    let resp = post_form!(app, &format!("{item_url}/delete"), &[("confirm", "yes")]);
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/inventory");
    assert_eq!(get!(app, &item_url).status(), StatusCode::NOT_FOUND);

    let resp = post_form!(app, &format!("{category_url}/delete"), &[("confirm", "yes")]);
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(get!(app, &category_url).status(), StatusCode::NOT_FOUND);

    let body = body_text(get!(app, "/inventory")).await;
    assert!(body.contains(r#"<span id="total-categories">0</span>"#));
}

#[actix_web::test]
async fn invalid_item_is_rejected_with_form_errors() {
    let app = init_app!();
    post_form!(
        app,
        "/inventory/create/cat",
        &[("name", "Tools"), ("description", "Hand tools")]
    );

    let resp = post_form!(
        app,
        "/inventory/create/item",
        &[
            ("name", "Hammer"),
            ("description", "Claw hammer"),
            ("category", "Tools"),
            ("price", "10"),
            ("stock", "1000"),
        ]
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_text(resp).await;
    assert!(body.contains("Stock must be a positive integer between 1 and 999."));
    assert!(body.contains(r#"value="Hammer""#));

    let body = body_text(get!(app, "/inventory")).await;
    assert!(body.contains(r#"<span id="total-items">0</span>"#));
}

#[actix_web::test]
async fn unknown_category_is_rejected() {
    let app = init_app!();
    let resp = post_form!(
        app,
        "/inventory/create/item",
        &[
            ("name", "Hammer"),
            ("description", "Claw hammer"),
            ("category", "Garden"),
            ("price", "10"),
            ("stock", "5"),
        ]
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Category does not exist."));
}

#[actix_web::test]
async fn duplicate_category_name_is_rejected() {
    let app = init_app!();
    let form = [("name", "Tools"), ("description", "Hand tools")];
    assert_eq!(
        post_form!(app, "/inventory/create/cat", &form).status(),
        StatusCode::FOUND
    );

    let resp = post_form!(app, "/inventory/create/cat", &form);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("Category name already exists. Please choose a different name."));

    let body = body_text(get!(app, "/inventory/cat")).await;
    assert!(body.contains(r#"<span id="total-categories">1</span>"#));
}

#[actix_web::test]
async fn category_update_redirects_to_detail() {
    let app = init_app!();
    let resp = post_form!(
        app,
        "/inventory/create/cat",
        &[("name", "Tools"), ("description", "Hand tools")]
    );
    let category_url = location(&resp);

    let resp = get!(app, &format!("{category_url}/update"));
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(r#"value="Tools""#));

    let resp = post_form!(
        app,
        &format!("{category_url}/update"),
        &[("name", "Power Tools"), ("description", "Corded and cordless")]
    );
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), category_url);
    assert!(body_text(get!(app, &category_url))
        .await
        .contains("Power Tools"));
}

#[actix_web::test]
async fn missing_and_malformed_ids_are_not_found() {
    let app = init_app!();
    let random = uuid::Uuid::new_v4();

    let resp = get!(app, &format!("/inventory/item/{random}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Item not found");

    let resp = get!(app, "/inventory/item/not-a-uuid");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get!(app, &format!("/inventory/cat/{random}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Category not found");

    let resp = post_form!(
        app,
        &format!("/inventory/cat/{random}/delete"),
        &[("confirm", "yes")]
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn user_text_is_escaped_in_pages() {
    let app = init_app!();
    let resp = post_form!(
        app,
        "/inventory/create/cat",
        &[("name", "<script>x</script>"), ("description", "a & b")]
    );
    let category_url = location(&resp);

    let body = body_text(get!(app, &category_url)).await;
    assert!(!body.contains("<script>x</script>"));
    assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(body.contains("a &amp; b"));
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = init_app!();
    let resp = get!(app, "/health");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

const HAMMER: [(&str, &str); 5] = [
    ("name", "Hammer"),
    ("description", "Claw hammer"),
    ("category", "Tools"),
    ("price", "10"),
    ("stock", "5"),
];

const SAW: [(&str, &str); 5] = [
    ("name", "Saw"),
    ("description", "Panel saw"),
    ("category", "Tools"),
    ("price", "3"),
    ("stock", "7"),
];

const TOOLS: [(&str, &str); 2] = [("name", "Tools"), ("description", "Hand tools")];

#[actix_web::test]
async fn item_listing_and_create_form_render() {
    let app = init_app!();
    let category_url = location(&post_form!(app, "/inventory/create/cat", &TOOLS));
    let category_id = category_url.trim_start_matches("/inventory/cat/").to_string();
    post_form!(app, "/inventory/create/item", &HAMMER);
    post_form!(app, "/inventory/create/item", &SAW);

    let resp = get!(app, "/inventory/all");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Items: 2 | Units: 12 | Value: 71"));
    assert!(body.find("Hammer").unwrap() < body.find("Saw").unwrap());

    let resp = get!(app, "/inventory/create/item");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(&format!(r#"<option value="{category_id}">Tools</option>"#)));
    assert!(body.contains(r#"action="/inventory/create/item""#));
}

#[actix_web::test]
async fn duplicate_item_name_is_rejected() {
    let app = init_app!();
    post_form!(app, "/inventory/create/cat", &TOOLS);
    assert_eq!(
        post_form!(app, "/inventory/create/item", &HAMMER).status(),
        StatusCode::FOUND
    );

    let resp = post_form!(app, "/inventory/create/item", &HAMMER);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("Item name already exists. Please choose a different name."));

    let body = body_text(get!(app, "/inventory")).await;
    assert!(body.contains(r#"<span id="total-items">1</span>"#));
}

#[actix_web::test]
async fn item_update_redirects_or_rerenders_with_errors() {
    let app = init_app!();
    let category_url = location(&post_form!(app, "/inventory/create/cat", &TOOLS));
    let category_id = category_url.trim_start_matches("/inventory/cat/").to_string();
    let item_url = location(&post_form!(app, "/inventory/create/item", &HAMMER));
    post_form!(app, "/inventory/create/item", &SAW);
    let update_url = format!("{item_url}/update");

    let resp = get!(app, &update_url);
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(r#"value="Hammer""#));
    assert!(body.contains(&format!(r#"<option value="{category_id}" selected>Tools</option>"#)));

    let resp = post_form!(
        app,
        &update_url,
        &[
            ("name", "Saw"),
            ("description", "Claw hammer"),
            ("category", category_id.as_str()),
            ("price", "10"),
            ("stock", "5"),
        ]
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("Item name already exists. Please choose a different name."));

    let resp = post_form!(
        app,
        &update_url,
        &[
            ("name", "Hammer"),
            ("description", "Claw hammer"),
            ("category", category_id.as_str()),
            ("price", "0"),
            ("stock", "1000"),
        ]
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_text(resp).await;
    assert!(body.contains("Price must be at least 1."));
    assert!(body.contains("Stock must be a positive integer between 1 and 999."));

    let resp = post_form!(
        app,
        &update_url,
        &[
            ("name", "Claw Hammer"),
            ("description", "Steel claw hammer"),
            ("category", category_id.as_str()),
            ("price", "12"),
            ("stock", "5"),
        ]
    );
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), item_url);

    let body = body_text(get!(app, &item_url)).await;
    assert!(body.contains("Claw Hammer"));
    assert!(body.contains(r#"<dd id="total-value">60</dd>"#));
}

#[actix_web::test]
async fn delete_confirmation_pages() {
    let app = init_app!();
    let category_url = location(&post_form!(app, "/inventory/create/cat", &TOOLS));
    let item_url = location(&post_form!(app, "/inventory/create/item", &HAMMER));
    post_form!(app, "/inventory/create/item", &SAW);

    let resp = get!(app, &format!("{item_url}/delete"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Hammer"));
    assert!(body.contains(&format!(r#"action="{item_url}/delete""#)));

    let resp = get!(app, &format!("{category_url}/delete"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Remove or re-categorize these items before deleting this category"));
    assert!(!body.contains(&format!(r#"action="{category_url}/delete""#)));

    let resp = post_form!(app, &format!("{category_url}/delete"), &[("confirm", "yes")]);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("This category contains 2 item(s)"));

    let missing = uuid::Uuid::new_v4();
    let resp = post_form!(
        app,
        &format!("/inventory/item/{missing}/delete"),
        &[("confirm", "yes")]
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Item not found");
}
