//! Where the user is.
//!
//! [`LocationSource`] is the seam the retrieval controller depends on.
//! [`SingleShotLocator`] adapts a platform location service to it with
//! one-fix-then-stop semantics; [`wait_for_coordinate`] turns polling into a
//! deadline-bounded, cancellable wait.

mod locator;
mod source;
mod wait;

pub use locator::{LocationPlatform, SingleShotLocator};
pub use source::{Authorization, FixedLocation, LocationSource};
pub use wait::{LocationError, LocationWait, wait_for_coordinate};
