use tracing::error;

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{Profile, ProfileUpdate};

/// Reads and overwrites the four personal fields of the session's account.
/// Authorization (a non-anonymous session) is enforced at the presentation
/// layer before this service is reached.
pub(crate) struct ProfileService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> ProfileService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn get_profile(&self, username: &str) -> Result<Profile, DomainError> {
        self.repo
            .get_profile(username)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user: {username}")))
    }

    /// Full overwrite of all four fields, no partial update.
    pub(crate) async fn save_profile(
        &self,
        username: &str,
        update: ProfileUpdate,
    ) -> Result<(), DomainError> {
        self.repo
            .update_profile(username, update)
            .await
            .map_err(|err| {
                error!("profile save for {username} failed: {err}");
                DomainError::ProfileNotSaved(err.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::ProfileService;
    use crate::data::user_repository::{LoginCandidate, NewUser, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::user::{Profile, ProfileUpdate, User};

    #[derive(Clone, Default)]
    struct FakeUserRepo {
        profile: Arc<Mutex<Option<Profile>>>,
        update_fails: Arc<Mutex<bool>>,
        update_seen: Arc<Mutex<Option<(String, ProfileUpdate)>>>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_unconfirmed(&self, _input: NewUser) -> Result<(), DomainError> {
            Ok(())
        }

        async fn consume_confirm_token(&self, _token: &str) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_credentials(
            &self,
            _email: &str,
            _password_hash: &str,
        ) -> Result<Option<LoginCandidate>, DomainError> {
            Ok(None)
        }

        async fn get_profile(&self, _username: &str) -> Result<Option<Profile>, DomainError> {
            Ok(self.profile.lock().expect("profile mutex poisoned").clone())
        }

        async fn update_profile(
            &self,
            username: &str,
            update: ProfileUpdate,
        ) -> Result<(), DomainError> {
            if *self.update_fails.lock().expect("update_fails mutex poisoned") {
                return Err(DomainError::Unexpected("connection reset".to_string()));
            }
            let stored = Profile {
                name: Some(update.name.clone()),
                surname: Some(update.surname.clone()),
                class: Some(update.class.clone()),
                telegram: Some(update.telegram.clone()),
            };
            *self.profile.lock().expect("profile mutex poisoned") = Some(stored);
            *self.update_seen.lock().expect("update_seen mutex poisoned") =
                Some((username.to_string(), update));
            Ok(())
        }
    }

    fn sample_update() -> ProfileUpdate {
        ProfileUpdate {
            name: "Алиса".to_string(),
            surname: "Иванова".to_string(),
            class: "10Б".to_string(),
            telegram: "@alice".to_string(),
        }
    }

    #[tokio::test]
    async fn get_profile_returns_not_found_for_missing_row() {
        let service = ProfileService::new(FakeUserRepo::default());

        let err = service
            .get_profile("alice")
            .await
            .expect_err("profile must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn save_then_get_returns_exactly_the_written_values() {
        let repo = FakeUserRepo::default();
        let service = ProfileService::new(repo.clone());

        service
            .save_profile("alice", sample_update())
            .await
            .expect("save must succeed");

        let profile = service
            .get_profile("alice")
            .await
            .expect("profile must exist");
        assert_eq!(profile.name.as_deref(), Some("Алиса"));
        assert_eq!(profile.surname.as_deref(), Some("Иванова"));
        assert_eq!(profile.class.as_deref(), Some("10Б"));
        assert_eq!(profile.telegram.as_deref(), Some("@alice"));

        let (username, _) = repo
            .update_seen
            .lock()
            .expect("update_seen mutex poisoned")
            .clone()
            .expect("update must be captured");
        assert_eq!(username, "alice");
    }

    #[tokio::test]
    async fn save_overwrites_previous_values_unconditionally() {
        let repo = FakeUserRepo::default();
        let service = ProfileService::new(repo);

        service
            .save_profile("alice", sample_update())
            .await
            .expect("first save must succeed");
        service
            .save_profile(
                "alice",
                ProfileUpdate {
                    name: String::new(),
                    surname: String::new(),
                    class: String::new(),
                    telegram: String::new(),
                },
            )
            .await
            .expect("second save must succeed");

        let profile = service
            .get_profile("alice")
            .await
            .expect("profile must exist");
        assert_eq!(profile.name.as_deref(), Some(""));
        assert_eq!(profile.telegram.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn save_failure_maps_to_profile_not_saved() {
        let repo = FakeUserRepo::default();
        *repo
            .update_fails
            .lock()
            .expect("update_fails mutex poisoned") = true;
        let service = ProfileService::new(repo);

        let err = service
            .save_profile("alice", sample_update())
            .await
            .expect_err("save must fail");
        assert!(matches!(err, DomainError::ProfileNotSaved(_)));
    }
}
