use crate::trucks::{error::TruckError, truck::Truck};

/// Opt-in domain checks for truck fields
///
/// Building a truck never validates; these helpers are for callers that want
/// to reject values outside the documented ranges.
pub struct TruckValidator;

impl TruckValidator {
    /// Validates every field of a truck in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`TruckError`].
    ///
    /// # Examples
    /// ```rust
    /// use trucks::trucks::{truck::Truck, validator::TruckValidator};
    ///
    /// let truck = Truck::builder()
    ///     .license_plate("ABC 123")
    ///     .carrying_capacity(45000)
    ///     .horse_power(400)
    ///     .transmission("Manual")
    ///     .wheel_base(250)
    ///     .wheel_cut(45)
    ///     .build();
    /// assert!(TruckValidator::validate_truck(&truck).is_ok());
    /// ```
    pub fn validate_truck(truck: &Truck) -> Result<(), TruckError> {
        let result = Self::validate_license_plate(truck.license_plate())
            .and_then(|()| {
                Self::validate_range(
                    "carrying capacity",
                    truck.carrying_capacity(),
                    Truck::CARRYING_CAPACITY_MIN,
                    Truck::CARRYING_CAPACITY_MAX,
                )
            })
            .and_then(|()| {
                Self::validate_range(
                    "horse power",
                    truck.horse_power(),
                    Truck::HORSEPOWER_MIN,
                    Truck::HORSEPOWER_MAX,
                )
            })
            .and_then(|()| Self::validate_transmission(truck.transmission()))
            .and_then(|()| {
                Self::validate_range(
                    "wheel base",
                    truck.wheel_base(),
                    Truck::WHEEL_BASE_MIN,
                    Truck::WHEEL_BASE_MAX,
                )
            })
            .and_then(|()| {
                Self::validate_range(
                    "wheel cut",
                    truck.wheel_cut(),
                    Truck::WHEEL_CUT_MIN,
                    Truck::WHEEL_CUT_MAX,
                )
            });

        #[cfg(feature = "tracing")]
        if let Err(e) = &result {
            tracing::debug!(error = %e, license_plate = %truck.license_plate(), "truck failed validation");
        }

        result
    }

    /// Validates a licence plate.
    ///
    /// Plates are free text; only blank plates and plates with
    /// leading or trailing whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TruckError::InvalidLicensePlate`] if:
    /// - the plate is empty or whitespace only
    /// - the plate has leading or trailing whitespace
    pub fn validate_license_plate(plate: &str) -> Result<(), TruckError> {
        if plate.trim().is_empty() || plate.trim() != plate {
            return Err(TruckError::InvalidLicensePlate(plate.to_string()));
        }
        Ok(())
    }

    /// Validates that `value` lies in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`TruckError::OutOfRange`] naming `field` otherwise.
    pub fn validate_range(
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    ) -> Result<(), TruckError> {
        if !(min..max).contains(&value) {
            return Err(TruckError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Validates a transmission against [`Truck::TRANSMISSION_VALUES`].
    ///
    /// Matching is exact and case sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`TruckError::UnknownTransmission`] for any other value.
    pub fn validate_transmission(transmission: &str) -> Result<(), TruckError> {
        if !Truck::TRANSMISSION_VALUES.contains(&transmission) {
            return Err(TruckError::UnknownTransmission(transmission.to_string()));
        }
        Ok(())
    }

    /// Whether a plate has the generated shape: three ASCII letters,
    /// a space, three ASCII digits.
    ///
    /// ```rust
    /// use trucks::trucks::validator::TruckValidator;
    ///
    /// assert!(TruckValidator::is_standard_license_plate("abC 042"));
    /// assert!(!TruckValidator::is_standard_license_plate("AB 1234"));
    /// ```
    pub fn is_standard_license_plate(plate: &str) -> bool {
        let bytes = plate.as_bytes();
        bytes.len() == 7
            && bytes[..3].iter().all(u8::is_ascii_alphabetic)
            && bytes[3] == b' '
            && bytes[4..].iter().all(u8::is_ascii_digit)
    }
}
