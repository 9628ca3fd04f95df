//! Coordinate validation shared by all geographic services

use crate::error::Error;

/// Validate a latitude/longitude pair before any request is built
///
/// NaN fails both range checks, so it is rejected like any other
/// out-of-range value.
pub(crate) fn validate(latitude: f64, longitude: f64) -> Result<(), Error> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::validation(format!(
            "Invalid latitude {latitude}: must be between -90 and 90"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::validation(format!(
            "Invalid longitude {longitude}: must be between -180 and 180"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(validate(0.0, 0.0).is_ok());
        assert!(validate(90.0, 180.0).is_ok());
        assert!(validate(-90.0, -180.0).is_ok());
        assert!(validate(52.52, 13.41).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        let err = validate(91.0, 0.0).expect_err("should fail");
        assert!(err.to_string().contains("latitude 91"));

        assert!(validate(-90.1, 0.0).is_err());
        assert!(validate(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        let err = validate(0.0, -181.0).expect_err("should fail");
        assert!(err.to_string().contains("longitude -181"));

        assert!(validate(0.0, 180.5).is_err());
        assert!(validate(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_latitude_checked_first() {
        // Both out of range: the latitude message wins
        let err = validate(100.0, 200.0).expect_err("should fail");
        assert!(err.to_string().contains("latitude"));
    }
}
