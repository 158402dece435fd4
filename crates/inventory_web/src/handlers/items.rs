//! Item handlers.

use actix_web::{web, HttpResponse};
use inventory_core::{item_service, Entity, ItemForm};

use super::{html, parse_id, redirect, Reply};
use crate::error::Result;
use crate::state::AppState;
use crate::views::items::{self as pages, ItemFormTarget};

/// `GET /inventory/all`
pub async fn list_items(state: web::Data<AppState>) -> Result<HttpResponse> {
    let listing = state
        .run(|conn| Ok(item_service(conn).list_items()?))
        .await?;
    Ok(html(pages::list(&listing)))
}

/// `GET /inventory/item/{id}`
pub async fn item_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Item)?;
    let detail = state
        .run(move |conn| Ok(item_service(conn).item_detail(id)?))
        .await?;
    Ok(html(pages::detail(&detail)))
}

/// `GET /inventory/create/item`
pub async fn create_form(state: web::Data<AppState>) -> Result<HttpResponse> {
    let categories = state
        .run(|conn| Ok(item_service(conn).category_choices()?))
        .await?;
    Ok(html(pages::form_page(
        ItemFormTarget::Create,
        &categories,
        &ItemForm::default(),
        &[],
    )))
}

/// `POST /inventory/create/item`
pub async fn create_item(
    state: web::Data<AppState>,
    form: web::Form<ItemForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    state
        .run(move |conn| {
            let service = item_service(conn);
            match service.create_item(&form) {
                Ok(item) => Ok(Reply::Redirect(item.url())),
                Err(err) if err.is_rejection() => {
                    let categories = service.category_choices()?;
                    Ok(Reply::Rejected(pages::form_page(
                        ItemFormTarget::Create,
                        &categories,
                        &form,
                        &err.user_messages(),
                    )))
                }
                Err(err) => Err(err.into()),
            }
        })
        .await
        .map(Reply::into_response)
}

/// `GET /inventory/item/{id}/update`
pub async fn update_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Item)?;
    let (item, categories) = state
        .run(move |conn| {
            let service = item_service(conn);
            let item = service.get_item(id)?;
            Ok((item, service.category_choices()?))
        })
        .await?;
    Ok(html(pages::form_page(
        ItemFormTarget::Update(id),
        &categories,
        &pages::prefill(&item),
        &[],
    )))
}

/// `POST /inventory/item/{id}/update`
pub async fn update_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ItemForm>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Item)?;
    let form = form.into_inner();
    state
        .run(move |conn| {
            let service = item_service(conn);
            match service.update_item(id, &form) {
                Ok(item) => Ok(Reply::Redirect(item.url())),
                Err(err) if err.is_rejection() => {
                    let categories = service.category_choices()?;
                    Ok(Reply::Rejected(pages::form_page(
                        ItemFormTarget::Update(id),
                        &categories,
                        &form,
                        &err.user_messages(),
                    )))
                }
                Err(err) => Err(err.into()),
            }
        })
        .await
        .map(Reply::into_response)
}

/// `GET /inventory/item/{id}/delete`
pub async fn delete_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Item)?;
    let item = state
        .run(move |conn| Ok(item_service(conn).get_item(id)?))
        .await?;
    Ok(html(pages::delete_confirm(&item)))
}

/// `POST /inventory/item/{id}/delete`
pub async fn delete_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path, Entity::Item)?;
    state
        .run(move |conn| Ok(item_service(conn).delete_item(id)?))
        .await?;
    Ok(redirect("/inventory"))
}
