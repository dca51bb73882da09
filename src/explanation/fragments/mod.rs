pub mod shipping_fragment;
pub mod location_fragment;
pub mod category_fragment;
pub mod duration_fragment;

pub use shipping_fragment::generate_shipping_fragment;
pub use location_fragment::generate_location_fragment;
pub use category_fragment::generate_category_fragment;
pub use duration_fragment::generate_duration_fragment;
