use actix_web::{HttpResponse, web};

use super::html;
use crate::{error::ApiError, report::department_headcount, store::HrStore, views::ReportPage};

/// Department headcount report page
#[utoipa::path(
    get,
    path = "/report",
    responses(
        (status = 200, description = "Department report page", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn report(store: web::Data<dyn HrStore>) -> Result<HttpResponse, ApiError> {
    let report_data = department_headcount(store.get_ref())
        .await
        .map_err(ApiError::store("department headcount", None))?;
    Ok(html(
        ReportPage {
            report_data: &report_data,
        }
        .to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    use crate::routes::test_support::test_app;
    use crate::store::MemoryStore;

    #[actix_web::test]
    async fn report_page_counts_each_department() {
        let app = test_app!(Arc::new(MemoryStore::new()));

        for (name, department) in [("Ann", Some("R&D")), ("Bob", Some("Ops")), ("Cid", Some("R&D")), ("Dee", None)] {
            let req = test::TestRequest::post()
                .uri("/employees")
                .set_json(json!({
                    "name": name,
                    "department": department,
                    "date_joined": "2024-01-10"
                }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/report").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("<td>R&amp;D</td><td>2</td>"));
        assert!(page.contains("<td>Ops</td><td>1</td>"));
        assert!(page.contains("<td>(none)</td><td>1</td>"));
    }
}
