use crate::models::{TrainingDay, UserProfile};
use crate::services::demo_training_days;

use super::{KeyValueStore, StorageError, TRAINING_DAYS_KEY, USER_PROFILE_KEY};

/// Where a loaded tree came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the stored record
    Stored,
    /// Nothing stored yet, demo tree used
    Seeded,
    /// Nothing stored yet, started empty
    Empty,
    /// The stored record could not be read or parsed
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDays {
    pub days: Vec<TrainingDay>,
    pub source: LoadSource,
}

/// Reads and writes the training tree and the user profile as whole JSON
/// documents under fixed keys.
#[derive(Debug, Clone)]
pub struct TrainingRepository<S> {
    store: S,
    seed_demo_data: bool,
}

impl<S: KeyValueStore> TrainingRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            seed_demo_data: false,
        }
    }

    /// Use the demo split instead of an empty list when nothing is stored.
    pub fn with_seed(mut self, seed_demo_data: bool) -> Self {
        self.seed_demo_data = seed_demo_data;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored tree. `Ok(None)` when nothing was saved yet.
    pub async fn try_load(&self) -> Result<Option<Vec<TrainingDay>>, StorageError> {
        let Some(json) = self.store.get(TRAINING_DAYS_KEY).await? else {
            return Ok(None);
        };

        let days = serde_json::from_str(&json).map_err(|source| StorageError::Parse {
            key: TRAINING_DAYS_KEY.to_string(),
            source,
        })?;
        Ok(Some(days))
    }

    /// Load the tree, never failing: read or parse errors are logged and an
    /// empty tree is returned.
    pub async fn load_detailed(&self) -> LoadedDays {
        match self.try_load().await {
            Ok(Some(days)) => {
                tracing::info!("Loaded {} training days", days.len());
                LoadedDays {
                    days,
                    source: LoadSource::Stored,
                }
            }
            Ok(None) if self.seed_demo_data => {
                tracing::info!("No training data stored, seeding demo split");
                LoadedDays {
                    days: demo_training_days(),
                    source: LoadSource::Seeded,
                }
            }
            Ok(None) => {
                tracing::info!("No training data stored, starting empty");
                LoadedDays {
                    days: Vec::new(),
                    source: LoadSource::Empty,
                }
            }
            Err(e) => {
                tracing::error!("Error loading training days: {}", e);
                LoadedDays {
                    days: Vec::new(),
                    source: LoadSource::Fallback,
                }
            }
        }
    }

    pub async fn load(&self) -> Vec<TrainingDay> {
        self.load_detailed().await.days
    }

    /// Serialize the whole tree and overwrite the stored record.
    pub async fn save(&self, days: &[TrainingDay]) -> Result<(), StorageError> {
        let json = serde_json::to_string(days).map_err(|source| StorageError::Serialize {
            key: TRAINING_DAYS_KEY.to_string(),
            source,
        })?;
        self.store.set(TRAINING_DAYS_KEY, json).await?;

        tracing::debug!("Saved {} training days", days.len());
        Ok(())
    }

    /// Load the profile; missing or unreadable data gives the empty profile.
    pub async fn load_profile(&self) -> UserProfile {
        match self.try_load_profile().await {
            Ok(profile) => profile.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Error loading user profile: {}", e);
                UserProfile::default()
            }
        }
    }

    pub async fn try_load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        let Some(json) = self.store.get(USER_PROFILE_KEY).await? else {
            return Ok(None);
        };

        let profile = serde_json::from_str(&json).map_err(|source| StorageError::Parse {
            key: USER_PROFILE_KEY.to_string(),
            source,
        })?;
        Ok(Some(profile))
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let json = serde_json::to_string(profile).map_err(|source| StorageError::Serialize {
            key: USER_PROFILE_KEY.to_string(),
            source,
        })?;
        self.store.set(USER_PROFILE_KEY, json).await
    }
}
