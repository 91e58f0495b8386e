use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::state::DashboardState;

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub dashboard_users_total: u64,
    pub dashboard_subscribers: u64,
}

fn render_metrics(metrics: &MetricsResponse) -> String {
    format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP errors\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n\
         \n\
         # HELP dashboard_users_total Users currently in the list\n\
         # TYPE dashboard_users_total gauge\n\
         dashboard_users_total {}\n\
         \n\
         # HELP dashboard_subscribers Open state event streams\n\
         # TYPE dashboard_subscribers gauge\n\
         dashboard_subscribers {}\n",
        metrics.http_requests_total,
        metrics.http_errors_total,
        metrics.dashboard_users_total,
        metrics.dashboard_subscribers,
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "System metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics(state: web::Data<DashboardState>) -> HttpResponse {
    let metrics = MetricsResponse {
        http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
        http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
        dashboard_users_total: state.user_count().await as u64,
        dashboard_subscribers: state.subscriber_count() as u64,
    };

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render_metrics(&metrics))
}
