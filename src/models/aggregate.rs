use crate::models::User;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One bar of the gender chart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct GenderBucket {
    /// Gender label, exactly as stored on the users.
    pub name: String,
    pub value: u64,
}

/// Count users per distinct gender.
///
/// Labels are compared byte for byte (no case folding, no trimming). Buckets
/// come out in the order each label is first seen.
pub fn tally_by_gender(users: &[User]) -> Vec<GenderBucket> {
    let mut buckets: Vec<GenderBucket> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for user in users {
        match positions.get(user.gender.as_str()) {
            Some(&pos) => buckets[pos].value += 1,
            None => {
                positions.insert(user.gender.as_str(), buckets.len());
                buckets.push(GenderBucket {
                    name: user.gender.clone(),
                    value: 1,
                });
            }
        }
    }

    buckets
}
