//! The location seam used by the retrieval controller.

use crate::domain::Coordinate;

/// Platform authorization state for location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Authorization {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// Access is blocked by policy (parental controls, MDM...).
    Restricted,
    /// The user said no.
    Denied,
    AuthorizedWhenInUse,
    AuthorizedAlways,
}

impl Authorization {
    pub fn is_authorized(&self) -> bool {
        matches!(
            self,
            Authorization::AuthorizedWhenInUse | Authorization::AuthorizedAlways
        )
    }

    /// Denied or restricted: no fix will arrive without user action.
    pub fn is_refused(&self) -> bool {
        matches!(self, Authorization::Denied | Authorization::Restricted)
    }
}

/// Something that can report where the user is.
pub trait LocationSource: Send + Sync {
    /// The most recent fix, if one has arrived.
    fn current_coordinate(&self) -> Option<Coordinate>;

    /// Ask for permission, or start updates if already permitted.
    fn request_if_needed(&self);

    fn authorization(&self) -> Authorization;
}

/// A source pinned to one coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationSource for FixedLocation {
    fn current_coordinate(&self) -> Option<Coordinate> {
        Some(self.0)
    }

    fn request_if_needed(&self) {}

    fn authorization(&self) -> Authorization {
        Authorization::AuthorizedWhenInUse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_classes() {
        assert!(Authorization::AuthorizedAlways.is_authorized());
        assert!(Authorization::AuthorizedWhenInUse.is_authorized());
        assert!(!Authorization::NotDetermined.is_authorized());

        assert!(Authorization::Denied.is_refused());
        assert!(Authorization::Restricted.is_refused());
        assert!(!Authorization::NotDetermined.is_refused());
        assert!(!Authorization::AuthorizedAlways.is_refused());
    }

    #[test]
    fn fixed_location_is_always_available() {
        let here = Coordinate::new(45.52, -122.68).unwrap();
        let source = FixedLocation(here);

        source.request_if_needed();
        assert_eq!(source.current_coordinate(), Some(here));
        assert!(source.authorization().is_authorized());
    }
}
