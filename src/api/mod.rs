pub mod attendance;
pub mod employee;
pub mod report;

use actix_web::{HttpResponse, http::header::ContentType};

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}
