pub mod generate_id;
pub mod title;

pub use generate_id::generate_id;
pub use title::{make_slug, make_sort_title};
