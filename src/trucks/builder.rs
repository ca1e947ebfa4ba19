#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::trucks::{error::TruckError, truck::Truck};

/// Accumulates field values for a [`Truck`]
///
/// Every setter consumes and returns the builder so calls can be chained.
/// Fields that are never set keep their zero value (empty string or `0`).
/// With the `serde` feature the builder doubles as a configuration record:
/// missing keys fall back to the same zero values.
///
/// # Examples
///
/// ```rust
/// use trucks::trucks::builder::TruckBuilder;
///
/// let builder = TruckBuilder::new()
///     .license_plate("XYZ 987")
///     .carrying_capacity(46000)
///     .transmission("Automatic");
///
/// let first = builder.build();
/// let second = builder.build();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TruckBuilder {
    pub license_plate: String,
    pub carrying_capacity: i32,
    pub horse_power: i32,
    pub transmission: String,
    pub wheel_base: i32,
    pub wheel_cut: i32,
}

impl TruckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    pub fn carrying_capacity(mut self, carrying_capacity: i32) -> Self {
        self.carrying_capacity = carrying_capacity;
        self
    }

    pub fn horse_power(mut self, horse_power: i32) -> Self {
        self.horse_power = horse_power;
        self
    }

    pub fn transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn wheel_base(mut self, wheel_base: i32) -> Self {
        self.wheel_base = wheel_base;
        self
    }

    pub fn wheel_cut(mut self, wheel_cut: i32) -> Self {
        self.wheel_cut = wheel_cut;
        self
    }

    /// Snapshot the current values into a [`Truck`]
    ///
    /// No validation is performed; out-of-range values are kept as given.
    pub fn build(&self) -> Truck {
        #[cfg(feature = "tracing")]
        tracing::trace!(license_plate = %self.license_plate, "building truck");

        Truck {
            license_plate: self.license_plate.clone(),
            carrying_capacity: self.carrying_capacity,
            horse_power: self.horse_power,
            transmission: self.transmission.clone(),
            wheel_base: self.wheel_base,
            wheel_cut: self.wheel_cut,
        }
    }

    /// Build and validate in one step
    ///
    /// # Errors
    ///
    /// Returns a [`TruckError`] if any field falls outside its documented domain.
    ///
    /// # Examples
    /// ```rust
    /// use trucks::trucks::builder::TruckBuilder;
    ///
    /// assert!(TruckBuilder::new().horse_power(400).try_build().is_err());
    /// ```
    pub fn try_build(&self) -> Result<Truck, TruckError> {
        let truck = self.build();
        truck.validate()?;
        Ok(truck)
    }
}
