use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::trucks::{builder::TruckBuilder, error::TruckError, validator::TruckValidator};

/// An immutable truck record
///
/// Trucks are assembled with a [`TruckBuilder`] and never change afterwards.
/// The `*_MIN`/`*_MAX` constants document the intended domain of each field
/// (upper bounds exclusive); they are not enforced when building. Call
/// [`Truck::validate`] to check a truck against them.
///
/// # Examples
///
/// ```rust
/// use trucks::trucks::truck::Truck;
///
/// let truck = Truck::builder()
///     .license_plate("ABC 123")
///     .horse_power(400)
///     .build();
///
/// assert_eq!(truck.license_plate(), "ABC 123");
/// assert_eq!(truck.horse_power(), 400);
/// // Unset fields keep their zero value
/// assert_eq!(truck.transmission(), "");
/// assert_eq!(truck.wheel_cut(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TruckBuilder"))]
pub struct Truck {
    pub(crate) license_plate: String,
    pub(crate) carrying_capacity: i32,
    pub(crate) horse_power: i32,
    pub(crate) transmission: String,
    pub(crate) wheel_base: i32,
    pub(crate) wheel_cut: i32,
}

impl Truck {
    pub const HORSEPOWER_MIN: i32 = 320;
    pub const HORSEPOWER_MAX: i32 = 600;
    pub const CARRYING_CAPACITY_MIN: i32 = 44000;
    pub const CARRYING_CAPACITY_MAX: i32 = 48000;
    pub const TRANSMISSION_VALUES: [&'static str; 2] = ["Manual", "Automatic"];
    pub const WHEEL_BASE_MIN: i32 = 230;
    pub const WHEEL_BASE_MAX: i32 = 280;
    pub const WHEEL_CUT_MIN: i32 = 40;
    pub const WHEEL_CUT_MAX: i32 = 50;

    /// Start an empty builder
    pub fn builder() -> TruckBuilder {
        TruckBuilder::new()
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// Carrying capacity in kilograms
    pub fn carrying_capacity(&self) -> i32 {
        self.carrying_capacity
    }

    pub fn horse_power(&self) -> i32 {
        self.horse_power
    }

    pub fn transmission(&self) -> &str {
        &self.transmission
    }

    pub fn wheel_base(&self) -> i32 {
        self.wheel_base
    }

    pub fn wheel_cut(&self) -> i32 {
        self.wheel_cut
    }

    /// Check every field against its documented domain
    ///
    /// # Errors
    ///
    /// Returns the first [`TruckError`] found, checking fields in
    /// declaration order.
    pub fn validate(&self) -> Result<(), TruckError> {
        TruckValidator::validate_truck(self)
    }

    /// Multi-line report of all fields, as written by [`Truck::print`]
    pub fn report(&self) -> TruckReport<'_> {
        TruckReport(self)
    }

    /// Print the report of this truck to stdout
    pub fn print(&self) {
        print!("{}", self.report());
    }

    /// Stable 32-bit hash over all six fields
    ///
    /// Unlike [`std::hash::Hash`], the value is identical across processes and
    /// platforms: each field is folded in with the multiplier 31, starting from 1.
    ///
    /// ```rust
    /// use trucks::trucks::truck::Truck;
    ///
    /// let a = Truck::builder().license_plate("ABC 123").build();
    /// let b = Truck::builder().license_plate("ABC 123").build();
    /// assert_eq!(a.hash_code(), b.hash_code());
    /// ```
    pub fn hash_code(&self) -> i32 {
        const PRIME: i32 = 31;
        let mut result: i32 = 1;
        result = PRIME.wrapping_mul(result).wrapping_add(self.carrying_capacity);
        result = PRIME.wrapping_mul(result).wrapping_add(self.horse_power);
        result = PRIME
            .wrapping_mul(result)
            .wrapping_add(string_hash(&self.license_plate));
        result = PRIME
            .wrapping_mul(result)
            .wrapping_add(string_hash(&self.transmission));
        result = PRIME.wrapping_mul(result).wrapping_add(self.wheel_base);
        result = PRIME.wrapping_mul(result).wrapping_add(self.wheel_cut);
        result
    }
}

// Polynomial hash over UTF-16 code units; empty text hashes to 0.
fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

impl From<TruckBuilder> for Truck {
    fn from(builder: TruckBuilder) -> Self {
        builder.build()
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Truck {}, capacity = {}, horsePower = {}, transmission = {}, wheelBase = {}, wheelCut = {}",
            self.license_plate,
            self.carrying_capacity,
            self.horse_power,
            self.transmission,
            self.wheel_base,
            self.wheel_cut
        )
    }
}

const SEPARATOR: &str = "----------------------------------------";

/// Display adapter producing the framed multi-line truck report
#[derive(Debug, Clone, Copy)]
pub struct TruckReport<'a>(&'a Truck);

impl fmt::Display for TruckReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let truck = self.0;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Licence Plate: {}", truck.license_plate)?;
        writeln!(f, "Carrying Capacity: {}", truck.carrying_capacity)?;
        writeln!(f, "Horse Power: {}", truck.horse_power)?;
        writeln!(f, "Transmission: {}", truck.transmission)?;
        writeln!(f, "Wheel Base: {}", truck.wheel_base)?;
        writeln!(f, "Wheel Cut: {}", truck.wheel_cut)?;
        writeln!(f, "{SEPARATOR}")
    }
}
