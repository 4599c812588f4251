//! Post owner as seen from a media payload

use serde::{Deserialize, Serialize};

/// Owner of a post.
///
/// Only the media-page payload carries the full set of fields. The listing
/// payloads populate a subset and leave the rest at their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Numeric account id rendered as a decimal string
    pub id: String,
    pub username: String,
    pub full_name: String,
    /// Absolute URL of the profile picture
    pub profile_pic_url: String,
    /// Whether the account is private
    pub private: bool,
}

impl Account {
    /// Whether no field of the account was populated
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
