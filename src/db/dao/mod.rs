pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod recipe_dao;
pub mod video_dao;

pub use base::DaoBase;
pub use base_traits::TableRecord;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use recipe_dao::RecipeDao;
pub use video_dao::VideoDao;
