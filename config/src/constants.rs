//! # Configuration Constants
//!
//! Centralized constants for the rounded-cube mesh pipeline. All geometry
//! tolerances and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Validation**: Thresholds for mesh sanity checks

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// VALIDATION CONSTANTS
// =============================================================================

/// Minimum triangle area accepted by mesh validation.
///
/// Triangles whose cross-product area falls below this threshold are treated
/// as degenerate. The threshold sits below any area a unit-grid tessellation
/// can legitimately produce, so it only catches true slivers.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// fn is_degenerate(cross_length: f64) -> bool {
///     cross_length < DEGENERATE_AREA_EPSILON
/// }
///
/// assert!(is_degenerate(0.0));
/// assert!(!is_degenerate(0.5));
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;
