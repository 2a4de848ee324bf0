use assert_matches::assert_matches;

use catalog_cell::models::CatalogError;
use catalog_cell::Catalog;

#[test]
fn seeded_catalog_passes_validation() {
    let catalog = Catalog::seeded();
    assert!(catalog.validate().is_ok());
}

#[test]
fn every_catalog_id_resolves_to_a_service_with_that_id() {
    let catalog = Catalog::seeded();

    for service in catalog.services() {
        let found = catalog
            .service(&service.id)
            .expect("listed service must resolve by id");
        assert_eq!(found.id, service.id);
        assert_eq!(found.title, service.title);
    }
}

#[test]
fn unknown_service_id_is_not_found() {
    let catalog = Catalog::seeded();

    let result = catalog.service("srv_does_not_exist");
    assert_matches!(result, Err(CatalogError::ServiceNotFound));
}

#[test]
fn service_ids_are_unique() {
    let catalog = Catalog::seeded();

    let mut ids: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn sleep_disorder_service_carries_its_catalog_title() {
    let catalog = Catalog::seeded();

    let service = catalog.service("srv_sleep").unwrap();
    assert_eq!(service.title, "Điều Trị Rối Loạn Giấc Ngủ");
    assert_eq!(service.duration_minutes, 45);
}

#[test]
fn all_testimonial_ratings_are_between_one_and_five() {
    let catalog = Catalog::seeded();

    assert!(!catalog.testimonials().is_empty());
    for testimonial in catalog.testimonials() {
        assert!(
            (1..=5).contains(&testimonial.rating),
            "testimonial {} has rating {}",
            testimonial.id,
            testimonial.rating
        );
    }
}

#[test]
fn repeated_listing_yields_identical_sequences() {
    let catalog = Catalog::seeded();

    let first: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
    let second: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(first, second);

    let first: Vec<&str> = catalog
        .testimonials()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    let second: Vec<&str> = catalog
        .testimonials()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn services_keep_catalog_definition_order() {
    let catalog = Catalog::seeded();

    let ids: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "srv_consult",
            "srv_depression",
            "srv_anxiety",
            "srv_sleep",
            "srv_therapy",
            "srv_child"
        ]
    );
}

#[test]
fn profile_and_clinic_are_always_served() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.profile().name, "BS. Lê Quang Vy");
    assert_eq!(catalog.profile().credentials.len(), 4);
    assert_eq!(catalog.clinic().hours.sunday, "Nghỉ");
}

#[test]
fn validation_rejects_duplicate_service_ids() {
    let seeded = Catalog::seeded();
    let mut services: Vec<_> = seeded.services().to_vec();
    services.push(services[0].clone());

    let catalog = Catalog::new(
        seeded.profile().clone(),
        services,
        seeded.testimonials().to_vec(),
        seeded.clinic().clone(),
    );

    assert_matches!(
        catalog.validate(),
        Err(CatalogError::DuplicateServiceId(id)) if id == "srv_consult"
    );
}

#[test]
fn validation_rejects_out_of_range_ratings() {
    let seeded = Catalog::seeded();
    let mut testimonials: Vec<_> = seeded.testimonials().to_vec();
    testimonials[0].rating = 6;

    let catalog = Catalog::new(
        seeded.profile().clone(),
        seeded.services().to_vec(),
        testimonials,
        seeded.clinic().clone(),
    );

    assert_matches!(
        catalog.validate(),
        Err(CatalogError::RatingOutOfRange { rating: 6, .. })
    );
}
