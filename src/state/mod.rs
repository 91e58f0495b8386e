use crate::models::{tally_by_gender, DashboardSnapshot, GenderBucket, StateEvent, User};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    users_for_graph: Vec<GenderBucket>,
    revision: u64,
}

impl Inner {
    fn recompute(&mut self) -> StateEvent {
        self.users_for_graph = tally_by_gender(&self.users);
        self.revision += 1;
        StateEvent::AggregateRecomputed {
            revision: self.revision,
            users_for_graph: self.users_for_graph.clone(),
        }
    }
}

/// Result of [`DashboardState::add_user`], consistent with one revision.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedUser {
    pub user: User,
    pub total_users: usize,
    pub revision: u64,
    pub users_for_graph: Vec<GenderBucket>,
}

/// Process-wide dashboard state.
///
/// Owned by `main` and shared with handlers through `web::Data`. The user
/// list is append-only and the gender aggregate is rebuilt from scratch on
/// every recompute. Observers learn about changes through [`subscribe`].
///
/// [`subscribe`]: DashboardState::subscribe
#[derive(Clone)]
pub struct DashboardState {
    inner: Arc<RwLock<Inner>>,
    events: broadcast::Sender<StateEvent>,
}

impl DashboardState {
    /// Starts from `users` with an empty aggregate; the first recompute fills it.
    pub fn with_users(users: Vec<User>, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));
        Self {
            inner: Arc::new(RwLock::new(Inner {
                users,
                ..Inner::default()
            })),
            events,
        }
    }

    /// Appends `user` and rebuilds the aggregate under the same write lock.
    /// Everything returned was read from that one guard.
    pub async fn add_user(&self, user: User) -> AddedUser {
        let (index, revision, users_for_graph, recomputed) = {
            let mut inner = self.inner.write().await;
            inner.users.push(user.clone());
            let index = inner.users.len() - 1;
            let recomputed = inner.recompute();
            (index, inner.revision, inner.users_for_graph.clone(), recomputed)
        };

        log::debug!("👤 User #{} added ({:?})", index, user.gender);

        self.publish(StateEvent::UserAdded {
            index,
            user: user.clone(),
        });
        self.publish(recomputed);

        AddedUser {
            user,
            total_users: index + 1,
            revision,
            users_for_graph,
        }
    }

    /// Rebuilds the gender aggregate from the full user list.
    /// Returns the new revision with the buckets built for it.
    pub async fn recompute_aggregate(&self) -> (u64, Vec<GenderBucket>) {
        let (event, revision, buckets) = {
            let mut inner = self.inner.write().await;
            let event = inner.recompute();
            (event, inner.revision, inner.users_for_graph.clone())
        };
        self.publish(event);
        (revision, buckets)
    }

    pub async fn users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// The last computed aggregate.
    pub async fn users_for_graph(&self) -> Vec<GenderBucket> {
        self.inner.read().await.users_for_graph.clone()
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let inner = self.inner.read().await;
        DashboardSnapshot {
            revision: inner.revision,
            users: inner.users.clone(),
            users_for_graph: inner.users_for_graph.clone(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.events.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn publish(&self, event: StateEvent) {
        // Err only means nobody is listening.
        if let Ok(receivers) = self.events.send(event) {
            log::debug!("📣 State event delivered to {} subscriber(s)", receivers);
        }
    }
}
