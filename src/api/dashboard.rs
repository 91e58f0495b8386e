use actix_web::{web, HttpResponse};
use crate::{
    config::AppConfig,
    models::NewUser,
    services::{render_service, user_service},
    state::DashboardState,
    utils::AppError,
};

// GET /  (on-load: recalcula o agregado antes de renderizar)
pub async fn index(
    state: web::Data<DashboardState>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    let snapshot = user_service::load_dashboard(&state).await;
    log::info!("📄 GET / - rendering {} users, {} gender groups", snapshot.users.len(), snapshot.users_for_graph.len());

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_service::render_dashboard(&snapshot, &config))
}

// POST /users  (form urlencoded do diálogo "Add User")
pub async fn submit_user_form(
    state: web::Data<DashboardState>,
    form: web::Form<NewUser>,
) -> HttpResponse {
    log::info!("📝 POST /users (form) - name: {}", form.name);

    let response = user_service::add_user(&state, form.into_inner()).await;
    log::info!("✅ User added via form, total: {}", response.total_users);

    HttpResponse::SeeOther()
        .append_header(("Location", "/"))
        .finish()
}

// GET /sitemap.xml
pub async fn sitemap(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    if !config.enable_sitemap {
        return Err(AppError::NotFound("sitemap is disabled".to_string()));
    }

    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .body(render_service::render_sitemap(&config.api_url)))
}

#[cfg(test)]
mod tests {
    use crate::{api, config::AppConfig, seeds::users_seed::seed_dashboard};
    use actix_web::{http::{header, StatusCode}, test, web, App};

    #[actix_web::test]
    async fn test_page_load_recomputes_aggregate() {
        let state = seed_dashboard(8);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(AppConfig::default()))
                .configure(api::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("Kwame Osei"));
        assert!(html.contains("data-name=\"Male\" data-value=\"3\""));
        assert_eq!(state.snapshot().await.revision, 1);
    }

    #[actix_web::test]
    async fn test_form_submit_redirects_home() {
        let state = seed_dashboard(8);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(AppConfig::default()))
                .configure(api::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_form([("name", "Adjoa Asante"), ("email", "adjoa@example.com")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let users = state.users().await;
        assert_eq!(users.len(), 7);
        assert_eq!(users[6].gender, "");
        assert_eq!(
            state.users_for_graph().await.last().map(|b| (b.name.as_str(), b.value)),
            Some(("", 1))
        );
    }

    #[actix_web::test]
    async fn test_form_without_name_is_rejected() {
        let state = seed_dashboard(8);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(AppConfig::default()))
                .configure(api::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_form([("email", "ghost@example.com")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.user_count().await, 6);
    }

    #[actix_web::test]
    async fn test_sitemap_flag() {
        let disabled = AppConfig {
            enable_sitemap: false,
            ..AppConfig::default()
        };

        for (config, expected) in [
            (AppConfig::default(), StatusCode::OK),
            (disabled, StatusCode::NOT_FOUND),
        ] {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(seed_dashboard(8)))
                    .app_data(web::Data::new(config))
                    .configure(api::configure_routes),
            )
            .await;

            let req = test::TestRequest::get().uri("/sitemap.xml").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }
}
