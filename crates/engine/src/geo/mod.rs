// Geographic collaborators. Neither one does real geography: the distance
// is a fixed sentinel and the user lookup never yields a real position.

pub mod directions;
pub mod location;

pub use directions::{Directions, STUB_DISTANCE};
pub use location::LocationClient;
