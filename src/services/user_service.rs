use crate::{
    models::{DashboardSnapshot, GenderBucket, NewUser, User},
    state::DashboardState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddUserResponse {
    pub success: bool,
    pub user: User,
    pub total_users: usize,
    pub users_for_graph: Vec<GenderBucket>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GraphResponse {
    pub success: bool,
    pub revision: u64,
    pub users_for_graph: Vec<GenderBucket>,
}

// POST /api/v1/users e POST /users (form)
pub async fn add_user(state: &DashboardState, form: NewUser) -> AddUserResponse {
    let added = state.add_user(User::from(form)).await;

    AddUserResponse {
        success: true,
        user: added.user,
        total_users: added.total_users,
        users_for_graph: added.users_for_graph,
    }
}

// GET /api/v1/users
pub async fn get_dashboard(state: &DashboardState) -> DashboardSnapshot {
    state.snapshot().await
}

// GET /api/v1/users/graph
pub async fn get_graph(state: &DashboardState) -> GraphResponse {
    let snapshot = state.snapshot().await;
    GraphResponse {
        success: true,
        revision: snapshot.revision,
        users_for_graph: snapshot.users_for_graph,
    }
}

/// Page-load hook: rebuilds the aggregate and returns the fresh snapshot.
pub async fn load_dashboard(state: &DashboardState) -> DashboardSnapshot {
    state.recompute_aggregate().await;
    state.snapshot().await
}

// POST /api/v1/users/graph/recompute
pub async fn recompute_graph(state: &DashboardState) -> GraphResponse {
    let (revision, users_for_graph) = state.recompute_aggregate().await;
    GraphResponse {
        success: true,
        revision,
        users_for_graph,
    }
}
