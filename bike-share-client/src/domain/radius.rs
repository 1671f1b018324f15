//! Search radius with the "unlimited" slider sentinel.

/// Radius sent to the backend when the slider sits at its maximum.
pub const UNLIMITED_RADIUS_MILES: f64 = 999_999.0;

/// A nearby-search radius in miles, as chosen on a 0-10 slider.
///
/// The top of the slider means "no limit"; [`SearchRadius::wire_miles`]
/// turns that into [`UNLIMITED_RADIUS_MILES`] so the backend never sees the
/// literal slider value.
///
/// # Examples
///
/// ```
/// use bike_share_client::domain::{SearchRadius, UNLIMITED_RADIUS_MILES};
///
/// assert_eq!(SearchRadius::new(2.5).wire_miles(), 2.5);
/// assert_eq!(SearchRadius::new(10.0).wire_miles(), UNLIMITED_RADIUS_MILES);
/// assert_eq!(SearchRadius::default().formatted(), "5.0 mi.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRadius(f64);

impl SearchRadius {
    /// Smallest selectable radius.
    pub const MIN_MILES: f64 = 0.0;

    /// Largest selectable radius; selecting it means "unlimited".
    pub const MAX_MILES: f64 = 10.0;

    const DEFAULT_MILES: f64 = 5.0;

    /// Create a radius, clamping into `MIN_MILES..=MAX_MILES`.
    ///
    /// NaN clamps to the default.
    pub fn new(miles: f64) -> Self {
        if miles.is_nan() {
            return Self::default();
        }
        Self(miles.clamp(Self::MIN_MILES, Self::MAX_MILES))
    }

    /// The radius as selected.
    pub fn miles(&self) -> f64 {
        self.0
    }

    /// Whether the slider is at its "no limit" end.
    pub fn is_unlimited(&self) -> bool {
        self.0 >= Self::MAX_MILES
    }

    /// The radius to transmit.
    pub fn wire_miles(&self) -> f64 {
        if self.is_unlimited() {
            UNLIMITED_RADIUS_MILES
        } else {
            self.0
        }
    }

    /// Label shown next to the slider, e.g. `"2.5 mi."`.
    pub fn formatted(&self) -> String {
        format!("{:.1} mi.", self.0)
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self(Self::DEFAULT_MILES)
    }
}
