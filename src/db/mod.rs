mod pool;
pub mod schema;

pub use pool::{create_lazy_pool, create_pool};
