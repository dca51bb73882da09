use crate::explanation::types::{Insight, InsightKind};
use crate::utils::Location;

/// Generate the location note (Rural is slower, Urban faster, Suburban neutral)
pub fn generate_location_fragment(location: Option<Location>) -> Option<Insight> {
    match location? {
        Location::Rural => Some(Insight::new(
            InsightKind::Location,
            "🏞️",
            "Rural delivery may take longer due to remote location",
        )),
        Location::Urban => Some(Insight::new(
            InsightKind::Location,
            "🏙️",
            "Urban delivery benefits from faster logistics networks",
        )),
        Location::Suburban => None,
    }
}
