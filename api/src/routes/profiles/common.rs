use db::models::profile::Model as ProfileModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be between 1 and 100 characters"))]
    pub full_name: String,

    #[serde(default)]
    pub subjects: Vec<String>,

    pub learning_style: Option<String>,
    pub study_time: Option<String>,
    pub bio: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Full name must be between 1 and 100 characters"))]
    pub full_name: Option<String>,

    pub subjects: Option<Vec<String>>,
    pub learning_style: Option<String>,
    pub study_time: Option<String>,
    pub bio: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub bio: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub subjects: Vec<String>,
    pub learning_style: Option<String>,
    pub study_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProfileModel> for ProfileResponse {
    fn from(profile: ProfileModel) -> Self {
        Self {
            subjects: profile.subject_list(),
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            bio: profile.bio,
            university: profile.university,
            major: profile.major,
            learning_style: profile.learning_style,
            study_time: profile.study_time,
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}
