use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer Data App API",
        version = "1.0.0",
        description = "A simple app to manage customer data.\n\n**Features:**\n- Append-only user list\n- Users counted by gender for the dashboard chart\n- Server-sent state events at `/api/v1/events`\n- Health monitoring and metrics"
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::users::get_graph,
        crate::api::users::recompute_graph,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Users
            crate::models::User,
            crate::models::NewUser,
            crate::models::GenderBucket,
            crate::models::DashboardSnapshot,
            crate::models::StateEvent,
            crate::services::user_service::AddUserResponse,
            crate::services::user_service::GraphResponse,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "User list and the gender aggregate shown in the chart."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/users"));
        assert!(doc.paths.paths.contains_key("/api/v1/users/graph/recompute"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
