pub mod page;

pub use page::{BoundingBox, BoundingBoxError, PageViews, WikiPage};
