use actix_web::HttpResponse;

pub mod dashboard;
pub mod user_handlers;

/// Fallback for paths outside the route table.
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
