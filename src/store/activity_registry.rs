use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

/// Registry handle shared across handlers. Reads take the read lock; signup
/// and unregister take the write lock so the no-duplicate-participant
/// invariant holds when requests race on the same activity.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

/// In-memory catalog of activities, keyed by activity name.
///
/// Names are exact-match, case-sensitive keys and may contain spaces and
/// punctuation. The map keeps insertion order, which is the order the catalog
/// is listed in.
pub struct ActivityRegistry {
    activities: IndexMap<String, Activity>,
}

impl ActivityRegistry {
    /// Build a registry pre-populated with the school's fixed catalog.
    pub fn seeded() -> Self {
        Self {
            activities: seed_catalog(),
        }
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Add `email` to the participant list of `activity_name`.
    ///
    /// `max_participants` is advisory only: signups past the stated capacity
    /// are accepted.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the participant list of `activity_name`.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(SignupError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(())
    }

    /// Insert a record directly, bypassing the HTTP surface. Used by test
    /// harnesses to stage catalog entries; nothing routes here in production.
    pub fn insert(&mut self, activity_name: &str, activity: Activity) {
        self.activities.insert(activity_name.to_string(), activity);
    }

    /// Restore the registry to its seeded state, for test isolation.
    pub fn reset(&mut self) {
        self.activities = seed_catalog();
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_catalog() -> IndexMap<String, Activity> {
    IndexMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_string(),
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}
