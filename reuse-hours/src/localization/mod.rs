pub(crate) mod coordinates;
pub(crate) mod localize;

pub use crate::localization::coordinates::{distance_miles, DistanceText, GeoPoint};
pub use crate::localization::localize::{Localize, NoLocation, TzLocation};
