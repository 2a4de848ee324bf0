use serde::{Deserialize, Serialize};

/// A billable medical offering with a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price_start: f64,
    pub duration_minutes: u32,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub title: String,
    pub institution: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
    pub title: String,
    pub specialty: String,
    pub sub_specialty: Option<String>,
    pub bio: String,
    pub years_experience: u32,
    pub patients_served: u32,
    pub success_rate: f64,
    pub image_url: String,
    pub credentials: Vec<Credential>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub patient_name: String,
    pub patient_image: Option<String>,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub treatment: String,
}

/// Opening hours, one free-text entry per weekday. A closed day carries
/// its marker ("Nghỉ") as the entry text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub hours: WeeklyHours,
    pub map_url: Option<String>,
}

// Error types specific to catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    ServiceNotFound,
    DuplicateServiceId(String),
    RatingOutOfRange { testimonial_id: String, rating: u8 },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ServiceNotFound => write!(f, "Service not found"),
            CatalogError::DuplicateServiceId(id) => {
                write!(f, "Duplicate service id in catalog: {}", id)
            }
            CatalogError::RatingOutOfRange {
                testimonial_id,
                rating,
            } => write!(
                f,
                "Testimonial {} has rating {} outside 1..=5",
                testimonial_id, rating
            ),
        }
    }
}

impl std::error::Error for CatalogError {}
