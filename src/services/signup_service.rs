use indexmap::IndexMap;
use tracing::info;

use crate::models::Activity;
use crate::store::{SharedRegistry, SignupError};

/// Snapshot of the full catalog, in registry order.
pub async fn list_activities(registry: &SharedRegistry) -> IndexMap<String, Activity> {
    registry.read().await.activities().clone()
}

pub async fn signup(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    registry.write().await.signup(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    registry.write().await.unregister(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ActivityRegistry;

    #[tokio::test]
    async fn signup_message_mentions_email_and_activity() {
        let registry = ActivityRegistry::seeded().into_shared();
        let message = signup(&registry, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();

        assert!(message.contains("newstudent@mergington.edu"));
        assert!(message.contains("Chess Club"));
    }

    #[tokio::test]
    async fn unregister_message_mentions_email_and_activity() {
        let registry = ActivityRegistry::seeded().into_shared();
        let message = unregister(&registry, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        assert!(message.contains("michael@mergington.edu"));
        assert!(message.contains("Chess Club"));
    }

    #[tokio::test]
    async fn list_reflects_mutations() {
        let registry = ActivityRegistry::seeded().into_shared();
        signup(&registry, "Art Club", "painter@mergington.edu")
            .await
            .unwrap();

        let catalog = list_activities(&registry).await;
        assert!(catalog["Art Club"]
            .participants
            .contains(&"painter@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn domain_errors_pass_through() {
        let registry = ActivityRegistry::seeded().into_shared();

        let err = signup(&registry, "Nonexistent Activity", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::NotFound);

        let err = unregister(&registry, "Chess Club", "ghost@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::NotRegistered);
    }
}
