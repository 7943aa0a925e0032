use serde::{Deserialize, Serialize};

/// One recommended faculty entry as returned by the recommendation backend.
///
/// The backend's `/recommend` endpoint has shipped both with and without the
/// `bio` column, and newer builds attach the row `id` and the similarity
/// `score`. Missing optional fields deserialize to their defaults and unknown
/// fields are ignored so a schema bump on the server does not break the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub bio: String,
    pub profile_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl FacultyRecord {
    pub fn new(
        name: impl Into<String>,
        specialization: impl Into<String>,
        bio: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
            bio: bio.into(),
            profile_url: profile_url.into(),
            id: None,
            score: None,
        }
    }
}
