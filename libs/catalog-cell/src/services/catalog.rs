use std::collections::HashSet;

use crate::models::{CatalogError, ClinicInfo, DoctorProfile, Service, Testimonial};

/// The fixed set of read-only reference data served by the public endpoints.
/// Seeded once at startup and shared behind an `Arc`; no mutation operations
/// are exposed, so reads need no locking.
pub struct Catalog {
    doctor: DoctorProfile,
    services: Vec<Service>,
    testimonials: Vec<Testimonial>,
    clinic: ClinicInfo,
}

impl Catalog {
    pub fn new(
        doctor: DoctorProfile,
        services: Vec<Service>,
        testimonials: Vec<Testimonial>,
        clinic: ClinicInfo,
    ) -> Self {
        Self {
            doctor,
            services,
            testimonials,
            clinic,
        }
    }

    /// Catalog seeded with the clinic's production data.
    pub fn seeded() -> Self {
        crate::data::clinic_catalog()
    }

    pub fn profile(&self) -> &DoctorProfile {
        &self.doctor
    }

    /// All services in catalog-definition order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service(&self, id: &str) -> Result<&Service, CatalogError> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or(CatalogError::ServiceNotFound)
    }

    /// All testimonials in catalog-definition order (most recent first in the
    /// seed data; this component does not sort).
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn clinic(&self) -> &ClinicInfo {
        &self.clinic
    }

    /// Checks the seed-data invariants: service ids unique, testimonial
    /// ratings within 1..=5. Run once at startup.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateServiceId(service.id.clone()));
            }
        }

        for testimonial in &self.testimonials {
            if !(1..=5).contains(&testimonial.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    testimonial_id: testimonial.id.clone(),
                    rating: testimonial.rating,
                });
            }
        }

        Ok(())
    }
}
