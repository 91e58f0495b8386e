use actix_web::{web, HttpResponse};
use crate::{
    models::{DashboardSnapshot, NewUser},
    services::user_service::{self, AddUserResponse, GraphResponse},
    state::DashboardState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "Users and gender aggregate", body = DashboardSnapshot)
    )
)]
pub async fn list_users(state: web::Data<DashboardState>) -> HttpResponse {
    let snapshot = user_service::get_dashboard(&state).await;
    log::info!("📋 GET /users - {} users (revision {})", snapshot.users.len(), snapshot.revision);
    HttpResponse::Ok().json(snapshot)
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User appended and aggregate recomputed", body = AddUserResponse),
        (status = 400, description = "Malformed body or missing name")
    )
)]
pub async fn create_user(
    state: web::Data<DashboardState>,
    request: web::Json<NewUser>,
) -> HttpResponse {
    log::info!("➕ POST /users - name: {}", request.name);

    let response = user_service::add_user(&state, request.into_inner()).await;
    log::info!("✅ User added, total: {}", response.total_users);
    HttpResponse::Created().json(response)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/graph",
    tag = "Users",
    responses(
        (status = 200, description = "Users counted by gender", body = GraphResponse)
    )
)]
pub async fn get_graph(state: web::Data<DashboardState>) -> HttpResponse {
    HttpResponse::Ok().json(user_service::get_graph(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/v1/users/graph/recompute",
    tag = "Users",
    responses(
        (status = 200, description = "Aggregate rebuilt from the full user list", body = GraphResponse)
    )
)]
pub async fn recompute_graph(state: web::Data<DashboardState>) -> HttpResponse {
    log::info!("🔄 POST /users/graph/recompute");
    let response = user_service::recompute_graph(&state).await;
    log::info!("✅ Aggregate rebuilt: {} buckets (revision {})", response.users_for_graph.len(), response.revision);
    HttpResponse::Ok().json(response)
}
