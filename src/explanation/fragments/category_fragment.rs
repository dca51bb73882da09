use crate::explanation::types::{Insight, InsightKind};
use crate::utils::Category;

/// Generate the product category note
///
/// Home & Garden items are bulky; books are light. Other categories have no
/// handling remark.
pub fn generate_category_fragment(category: Option<Category>) -> Option<Insight> {
    match category? {
        Category::HomeAndGarden => Some(Insight::new(
            InsightKind::Category,
            "🏡",
            "Large items may require special handling and longer processing time",
        )),
        Category::Books => Some(Insight::new(
            InsightKind::Category,
            "📚",
            "Books are typically lightweight and process quickly",
        )),
        _ => None,
    }
}
