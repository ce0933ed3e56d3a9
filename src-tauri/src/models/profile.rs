use serde::{Deserialize, Serialize};

/// The single saved customer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// `data:` URI of the avatar image, empty when none was chosen.
    pub avatar: String,
}
