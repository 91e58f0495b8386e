use crate::models::{GenderBucket, User};
use serde::{Deserialize, Serialize};

/// Read model of the whole dashboard at one revision.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct DashboardSnapshot {
    /// Incremented on every aggregate recompute.
    pub revision: u64,
    pub users: Vec<User>,
    pub users_for_graph: Vec<GenderBucket>,
}

/// Notification pushed to subscribers after a state change.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateEvent {
    UserAdded {
        /// Position of the new user in the list.
        index: usize,
        user: User,
    },
    AggregateRecomputed {
        revision: u64,
        users_for_graph: Vec<GenderBucket>,
    },
}

impl StateEvent {
    /// Name used as the SSE `event:` field.
    pub fn name(&self) -> &'static str {
        match self {
            StateEvent::UserAdded { .. } => "user_added",
            StateEvent::AggregateRecomputed { .. } => "aggregate_recomputed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = StateEvent::UserAdded {
            index: 6,
            user: User::new("Yaw Mensah", "yaw@example.com", "Male"),
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], event.name());
        assert_eq!(json["index"], 6);
        assert_eq!(json["user"]["name"], "Yaw Mensah");
    }
}
