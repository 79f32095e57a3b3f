use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};

use crate::config::AppConfig;
use crate::models::{ListParams, ResizeParams};
use crate::view::SchoolListView;
use crate::view::render::PageRenderer;

/// GET / — the schools table as HTML.
/// Query params: ?page=1&count=10&q=
pub async fn index(
    view: web::Data<SchoolListView>,
    renderer: web::Data<PageRenderer>,
    config: web::Data<AppConfig>,
    params: web::Query<ListParams>,
) -> impl Responder {
    let query = params.into_inner().into_state(config.default_page_size);
    let list = view.load(&query).await;

    match renderer.render(&list) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!("Failed to render schools page: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /resize — change the page size while keeping the first visible
/// record on screen, then redirect to the resulting list page.
/// Query params: ?page=3&count=10&q=&new_count=25
pub async fn resize(
    config: web::Data<AppConfig>,
    params: web::Query<ResizeParams>,
) -> impl Responder {
    let (current, next) = params.into_inner().resolve(config.default_page_size);

    let target = match next {
        Some(next) => {
            tracing::debug!(
                from_page = current.page,
                from_count = current.page_size,
                to_page = next.page,
                to_count = next.page_size,
                "Page size changed"
            );
            next
        }
        None => current,
    };

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target.href()))
        .finish()
}

/// GET /api/schools — the same page as `index`, as JSON.
pub async fn list_schools(
    view: web::Data<SchoolListView>,
    config: web::Data<AppConfig>,
    params: web::Query<ListParams>,
) -> impl Responder {
    let query = params.into_inner().into_state(config.default_page_size);
    HttpResponse::Ok().json(view.load(&query).await)
}
