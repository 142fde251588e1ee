use serde::{Deserialize, Serialize};

/// Free-form profile fields as typed on the profile screen.
///
/// Missing fields in stored data read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.gender.is_empty()
            && self.weight.is_empty()
            && self.height.is_empty()
    }
}
