//! DTOs for the submission endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::points::PointDto;

/// A new pin submission.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// Submitter or place name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Google Maps link in any supported shape (shortlinks included).
    #[validate(length(min = 1, max = 2000, message = "Link must be 1-2000 characters"))]
    pub link: String,

    /// Role string; must be one of the fixed enumeration.
    pub role: String,
}

/// Response carrying the created point.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub point: PointDto,
}
