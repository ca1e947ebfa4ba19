use rand::Rng;

use crate::trucks::{builder::TruckBuilder, truck::Truck};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

impl Truck {
    /// Generate a truck with uniformly sampled fields
    ///
    /// Uses the thread-local RNG, so results are not reproducible.
    /// See [`Truck::random_with`] for an injectable source.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generate a truck from the given random source
    ///
    /// Every integer field is drawn from `[MIN, MAX)`, the transmission is
    /// one of [`Truck::TRANSMISSION_VALUES`] with equal probability and the
    /// plate is three ASCII letters, a space and three digits.
    ///
    /// # Examples
    /// ```rust
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use trucks::trucks::truck::Truck;
    ///
    /// let a = Truck::random_with(&mut StdRng::seed_from_u64(7));
    /// let b = Truck::random_with(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert!(a.validate().is_ok());
    /// ```
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let license_plate = random_license_plate(rng);
        let carrying_capacity = Truck::CARRYING_CAPACITY_MIN
            + rng.gen_range(0..Truck::CARRYING_CAPACITY_MAX - Truck::CARRYING_CAPACITY_MIN);
        let horse_power =
            Truck::HORSEPOWER_MIN + rng.gen_range(0..Truck::HORSEPOWER_MAX - Truck::HORSEPOWER_MIN);
        let transmission =
            Truck::TRANSMISSION_VALUES[rng.gen_range(0..Truck::TRANSMISSION_VALUES.len())];
        let wheel_base =
            Truck::WHEEL_BASE_MIN + rng.gen_range(0..Truck::WHEEL_BASE_MAX - Truck::WHEEL_BASE_MIN);
        let wheel_cut =
            Truck::WHEEL_CUT_MIN + rng.gen_range(0..Truck::WHEEL_CUT_MAX - Truck::WHEEL_CUT_MIN);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            license_plate = %license_plate,
            carrying_capacity,
            horse_power,
            transmission,
            "generated random truck"
        );

        TruckBuilder::new()
            .carrying_capacity(carrying_capacity)
            .horse_power(horse_power)
            .license_plate(license_plate)
            .wheel_base(wheel_base)
            .wheel_cut(wheel_cut)
            .transmission(transmission)
            .build()
    }
}

/// Three ASCII letters, a space, three ASCII digits (e.g. `"kQz 042"`)
pub fn random_license_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut plate = String::with_capacity(7);
    plate.extend((0..3).map(|_| pick(rng, LETTERS)));
    plate.push(' ');
    plate.extend((0..3).map(|_| pick(rng, DIGITS)));
    plate
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}
