//! Category handlers.

use actix_web::{web, HttpResponse};
use inventory_core::{category_service, CategoryForm, Entity};

use super::{html, parse_id, Reply};
use crate::error::Result;
use crate::state::AppState;
use crate::views::categories::{self as pages, CategoryFormTarget};

/// `GET /inventory/cat`
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let listing = state
        .run(|conn| Ok(category_service(conn).list_categories()?))
        .await?;
    Ok(html(pages::list(&listing)))
}

/// `GET /inventory/cat/{id}`
pub async fn category_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Category)?;
    let detail = state
        .run(move |conn| Ok(category_service(conn).category_detail(id)?))
        .await?;
    Ok(html(pages::detail(&detail)))
}

/// `GET /inventory/create/cat`
pub async fn create_form() -> HttpResponse {
    html(pages::form_page(
        CategoryFormTarget::Create,
        &CategoryForm::default(),
        &[],
    ))
}

/// `POST /inventory/create/cat`
pub async fn create_category(
    state: web::Data<AppState>,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    state
        .run(move |conn| match category_service(conn).create_category(&form) {
            Ok(category) => Ok(Reply::Redirect(category.url())),
            Err(err) if err.is_rejection() => Ok(Reply::Rejected(pages::form_page(
                CategoryFormTarget::Create,
                &form,
                &err.user_messages(),
            ))),
            Err(err) => Err(err.into()),
        })
        .await
        .map(Reply::into_response)
}

/// `GET /inventory/cat/{id}/update`
pub async fn update_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Category)?;
    let category = state
        .run(move |conn| Ok(category_service(conn).get_category(id)?))
        .await?;
    Ok(html(pages::form_page(
        CategoryFormTarget::Update(id),
        &pages::prefill(&category),
        &[],
    )))
}

/// `POST /inventory/cat/{id}/update`
pub async fn update_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Category)?;
    let form = form.into_inner();
    state
        .run(
            move |conn| match category_service(conn).update_category(id, &form) {
                Ok(category) => Ok(Reply::Redirect(category.url())),
                Err(err) if err.is_rejection() => Ok(Reply::Rejected(pages::form_page(
                    CategoryFormTarget::Update(id),
                    &form,
                    &err.user_messages(),
                ))),
                Err(err) => Err(err.into()),
            },
        )
        .await
        .map(Reply::into_response)
}

/// `GET /inventory/cat/{id}/delete`
pub async fn delete_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Category)?;
    let detail = state
        .run(move |conn| Ok(category_service(conn).category_detail(id)?))
        .await?;
    Ok(html(pages::delete_confirm(&detail, &[])))
}

/// `POST /inventory/cat/{id}/delete`
pub async fn delete_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Category)?;
    state
        .run(move |conn| {
            let service = category_service(conn);
            match service.delete_category(id) {
                Ok(()) => Ok(Reply::Redirect("/inventory/cat".to_string())),
                Err(err) if err.is_rejection() => {
                    let detail = service.category_detail(id)?;
                    Ok(Reply::Rejected(pages::delete_confirm(
                        &detail,
                        &err.user_messages(),
                    )))
                }
                Err(err) => Err(err.into()),
            }
        })
        .await
        .map(Reply::into_response)
}
