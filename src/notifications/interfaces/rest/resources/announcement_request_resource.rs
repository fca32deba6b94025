use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct AnnouncementRequestResource {
    #[validate(regex(path = *CHANNEL_NAME_REGEX))]
    pub channel: String,
    pub addresses: Vec<String>,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

lazy_static::lazy_static! {
    pub static ref CHANNEL_NAME_REGEX: regex::Regex =
        regex::Regex::new("^(email|push)$").expect("valid regex");
}
