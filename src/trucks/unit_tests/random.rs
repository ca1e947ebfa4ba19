use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::trucks::{random::random_license_plate, truck::Truck, validator::TruckValidator};

const DRAWS: usize = 10_000;

#[test]
fn fields_stay_inside_documented_ranges() {
    for _ in 0..DRAWS {
        let truck = Truck::random();
        assert!(
            (Truck::CARRYING_CAPACITY_MIN..Truck::CARRYING_CAPACITY_MAX)
                .contains(&truck.carrying_capacity()),
            "capacity out of range: {}",
            truck
        );
        assert!(
            (Truck::HORSEPOWER_MIN..Truck::HORSEPOWER_MAX).contains(&truck.horse_power()),
            "horse power out of range: {}",
            truck
        );
        assert!(
            (Truck::WHEEL_BASE_MIN..Truck::WHEEL_BASE_MAX).contains(&truck.wheel_base()),
            "wheel base out of range: {}",
            truck
        );
        assert!(
            (Truck::WHEEL_CUT_MIN..Truck::WHEEL_CUT_MAX).contains(&truck.wheel_cut()),
            "wheel cut out of range: {}",
            truck
        );
        assert!(
            Truck::TRANSMISSION_VALUES.contains(&truck.transmission()),
            "unknown transmission: {}",
            truck
        );
    }
}

#[test]
fn license_plate_shape() {
    for _ in 0..DRAWS {
        let truck = Truck::random();
        assert!(
            TruckValidator::is_standard_license_plate(truck.license_plate()),
            "unexpected plate: {:?}",
            truck.license_plate()
        );
    }
}

#[test]
fn random_trucks_pass_validation() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..1_000 {
        let truck = Truck::random_with(&mut rng);
        assert!(truck.validate().is_ok(), "rejected: {}", truck);
    }
}

#[test]
fn same_seed_same_truck() {
    let a = Truck::random_with(&mut ChaCha8Rng::seed_from_u64(7));
    let b = Truck::random_with(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
}

#[test]
fn seeded_sequence_is_reproducible() {
    let mut first = ChaCha8Rng::seed_from_u64(2024);
    let mut second = ChaCha8Rng::seed_from_u64(2024);
    let a: Vec<Truck> = (0..16).map(|_| Truck::random_with(&mut first)).collect();
    let b: Vec<Truck> = (0..16).map(|_| Truck::random_with(&mut second)).collect();
    assert_eq!(a, b);
}

#[test]
fn both_transmissions_are_drawn() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let trucks: Vec<Truck> = (0..200).map(|_| Truck::random_with(&mut rng)).collect();
    for value in Truck::TRANSMISSION_VALUES {
        assert!(
            trucks.iter().any(|t| t.transmission() == value),
            "never drew {}",
            value
        );
    }
}

#[test]
fn plate_uses_both_letter_cases() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let plates: String = (0..200).map(|_| random_license_plate(&mut rng)).collect();
    assert!(plates.chars().any(|c| c.is_ascii_uppercase()));
    assert!(plates.chars().any(|c| c.is_ascii_lowercase()));
}

#[test]
fn accepts_trait_object_rng() {
    let mut seeded = ChaCha8Rng::seed_from_u64(5);
    let rng: &mut dyn RngCore = &mut seeded;
    let truck = Truck::random_with(&mut *rng);
    assert!(truck.validate().is_ok());
    assert!(TruckValidator::is_standard_license_plate(
        &random_license_plate(rng)
    ));
}
