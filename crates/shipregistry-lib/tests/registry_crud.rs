use chrono::{TimeZone, Utc};

use shipregistry_lib::{
    compute_rating, Error, InMemoryStore, Ship, ShipFilter, ShipInput, ShipRegistry, ShipType,
};

fn registry() -> ShipRegistry<InMemoryStore> {
    ShipRegistry::new(InMemoryStore::new())
}

fn full_input() -> ShipInput {
    ShipInput {
        name: Some("Aurora".to_string()),
        planet: Some("Vega".to_string()),
        ship_type: Some(ShipType::Military),
        prod_date: Some(Utc.with_ymd_and_hms(3019, 1, 1, 0, 0, 0).unwrap()),
        is_used: Some(false),
        speed: Some(0.5),
        crew_size: Some(25),
    }
}

#[test]
fn created_ship_round_trips_through_find() {
    let mut registry = registry();

    let created = registry.create(full_input()).expect("valid ship");
    assert_eq!(created.id, 1);
    assert_eq!(created.rating, 40.0);

    let found = registry.find(created.id).expect("ship present");
    assert_eq!(found, created);
}

#[test]
fn rating_matches_independent_recomputation() {
    let mut registry = registry();

    let mut input = full_input();
    input.is_used = Some(true);
    input.speed = Some(0.73);
    input.prod_date = Some(Utc.with_ymd_and_hms(2985, 7, 4, 12, 30, 0).unwrap());

    let ship = registry.create(input).expect("valid ship");
    assert!(ship.rating >= 0.0);
    assert_eq!(
        ship.rating,
        compute_rating(ship.speed, ship.prod_date, ship.is_used)
    );
}

#[test]
fn out_of_bounds_creates_are_rejected_without_persisting() {
    let mut registry = registry();

    let cases: Vec<ShipInput> = vec![
        ShipInput {
            crew_size: Some(0),
            ..full_input()
        },
        ShipInput {
            crew_size: Some(10000),
            ..full_input()
        },
        ShipInput {
            name: Some("x".repeat(51)),
            ..full_input()
        },
        ShipInput {
            prod_date: Some(Utc.with_ymd_and_hms(2799, 12, 31, 23, 59, 59).unwrap()),
            ..full_input()
        },
        ShipInput {
            prod_date: Some(Utc.with_ymd_and_hms(3020, 1, 1, 0, 0, 0).unwrap()),
            ..full_input()
        },
        ShipInput {
            speed: Some(0.0),
            ..full_input()
        },
    ];

    for input in cases {
        let err = registry.create(input).expect_err("should be rejected");
        assert!(matches!(err, Error::Validation { .. }));
    }
    assert_eq!(registry.count(&ShipFilter::default()), 0);
}

#[test]
fn create_with_missing_field_is_rejected() {
    let mut registry = registry();

    let mut input = full_input();
    input.planet = None;
    assert!(matches!(
        registry.create(input),
        Err(Error::Validation { .. })
    ));
    assert_eq!(registry.count(&ShipFilter::default()), 0);
}

#[test]
fn partial_update_touches_only_supplied_fields() {
    let mut registry = registry();
    let created = registry.create(full_input()).expect("valid ship");

    let patch = ShipInput {
        crew_size: Some(9999),
        ..ShipInput::default()
    };
    let updated = registry.update(created.id, patch).expect("valid patch");

    assert_eq!(updated.crew_size, 9999);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.planet, created.planet);
    assert_eq!(updated.ship_type, created.ship_type);
    assert_eq!(updated.prod_date, created.prod_date);
    assert_eq!(updated.speed, created.speed);
    assert_eq!(updated.is_used, created.is_used);
    // rating recomputed from unchanged inputs is unchanged
    assert_eq!(updated.rating, created.rating);
}

#[test]
fn update_recomputes_rating_from_final_fields() {
    let mut registry = registry();
    let created = registry.create(full_input()).expect("valid ship");

    let patch = ShipInput {
        is_used: Some(true),
        ..ShipInput::default()
    };
    let updated = registry.update(created.id, patch).expect("valid patch");
    assert_eq!(updated.rating, 20.0);

    let patch = ShipInput {
        speed: Some(0.8),
        ..ShipInput::default()
    };
    let updated = registry.update(created.id, patch).expect("valid patch");
    assert_eq!(
        updated.rating,
        compute_rating(0.8, created.prod_date, true)
    );
}

#[test]
fn update_never_changes_the_id() {
    let mut registry = registry();
    let created = registry.create(full_input()).expect("valid ship");

    let patch = ShipInput {
        name: Some("Renamed".to_string()),
        ..ShipInput::default()
    };
    let updated = registry.update(created.id, patch).expect("valid patch");
    assert_eq!(updated.id, created.id);
}

#[test]
fn operations_on_missing_ids_are_not_found() {
    let mut registry = registry();

    assert_eq!(registry.find(5).unwrap_err(), Error::NotFound { id: 5 });
    assert_eq!(registry.delete(5).unwrap_err(), Error::NotFound { id: 5 });
    assert_eq!(
        registry.update(5, ShipInput::default()).unwrap_err(),
        Error::NotFound { id: 5 }
    );
}

#[test]
fn deleted_ships_stop_appearing_anywhere() {
    let mut registry = registry();
    let first = registry.create(full_input()).expect("valid ship");
    let second = {
        let mut input = full_input();
        input.name = Some("Borealis".to_string());
        registry.create(input).expect("valid ship")
    };

    registry.delete(first.id).expect("ship exists");

    assert!(matches!(
        registry.find(first.id),
        Err(Error::NotFound { .. })
    ));
    assert_eq!(registry.count(&ShipFilter::default()), 1);

    let remaining: Vec<Ship> = registry.list(
        &ShipFilter::default(),
        Default::default(),
        Default::default(),
    );
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}
