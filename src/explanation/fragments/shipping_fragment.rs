use crate::explanation::types::{Insight, InsightKind};
use crate::utils::ShippingMethod;

/// Generate the shipping-method note
///
/// Only the two extremes get a note: Overnight (fastest) and Economy
/// (cheapest). Standard and Express are unremarkable.
pub fn generate_shipping_fragment(shipping: Option<ShippingMethod>) -> Option<Insight> {
    match shipping? {
        ShippingMethod::Overnight => Some(Insight::new(
            InsightKind::Shipping,
            "🚀",
            "Overnight shipping selected - fastest delivery option!",
        )),
        ShippingMethod::Economy => Some(Insight::new(
            InsightKind::Shipping,
            "💰",
            "Economy shipping selected - budget-friendly option with longer delivery time",
        )),
        ShippingMethod::Standard | ShippingMethod::Express => None,
    }
}
