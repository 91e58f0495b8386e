use crate::models::User;
use crate::state::DashboardState;

/// Builds the dashboard state pre-populated with the default customers.
/// The gender aggregate stays empty until the first page load recomputes it.
pub fn seed_dashboard(event_capacity: usize) -> DashboardState {
    let users = default_users();
    log::info!("🌱 Seeding dashboard with {} default users", users.len());
    DashboardState::with_users(users, event_capacity)
}

/// Os 6 clientes iniciais, na ordem em que aparecem na tabela
pub fn default_users() -> Vec<User> {
    vec![
        User::new("Kwame Osei", "k.osei88@gmail.com", "Male"),
        User::new("Abena Boateng", "abby_b@gmail.com", "Female"),
        User::new("Ekow Addison", "ekow.vibes@gmail.com", "Male"),
        User::new("Serwaa Akoto", "queen.serwaa@gmail.com", "Female"),
        User::new("Desmond Tutu", "des.mond@gmail.com", "Male"),
        User::new("Akosua Manu", "akos.manu@gmail.com", "Female"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_dashboard_has_six_users() {
        let state = seed_dashboard(8);
        let users = state.users().await;

        assert_eq!(users.len(), 6);
        assert_eq!(users[0].name, "Kwame Osei");
        assert_eq!(users[5].email, "akos.manu@gmail.com");
        assert!(state.users_for_graph().await.is_empty());
    }
}
