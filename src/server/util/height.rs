//! Height unit conversion.

const CM_PER_INCH: f64 = 2.54;
const INCHES_PER_FOOT: f64 = 12.0;

/// Converts a height in centimeters into whole feet and the remaining inches.
///
/// The feet component is returned as a string of whole feet (`"5"`), the inches component is
/// the unrounded remainder. A height of `0` yields `("0", 0.0)`.
///
/// # Example
/// ```
/// use movie_api::server::util::height::feet_inches;
///
/// let (feet, inches) = feet_inches(183);
/// assert_eq!(feet, "6");
/// assert!((inches - 0.0472).abs() < 0.001);
/// ```
pub fn feet_inches(height_cm: i64) -> (String, f64) {
    if height_cm == 0 {
        return ("0".to_string(), 0.0);
    }

    let total_inches = height_cm as f64 / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).trunc();
    let inches = total_inches - feet * INCHES_PER_FOOT;

    (format!("{}", feet as i64), inches)
}
