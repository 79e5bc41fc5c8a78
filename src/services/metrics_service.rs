use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::dao::{RecipeDao, VideoDao},
    error::AppError,
};

/// Counter values after an increment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub id: Uuid,
    pub table: &'static str,
    pub column: &'static str,
    pub value: i32,
}

#[derive(Clone)]
pub struct MetricsService {
    video_dao: VideoDao,
    recipe_dao: RecipeDao,
}

impl MetricsService {
    pub fn new(video_dao: VideoDao, recipe_dao: RecipeDao) -> Self {
        Self {
            video_dao,
            recipe_dao,
        }
    }

    pub async fn increment_video_views(&self, id: &Uuid) -> Result<CounterSnapshot, AppError> {
        let video = self.video_dao.increment_views(id).await?;
        tracing::debug!(video_id = %id, views = video.views, "video views incremented");
        Ok(CounterSnapshot {
            id: video.id,
            table: "videos",
            column: "views",
            value: video.views,
        })
    }

    pub async fn increment_video_likes(&self, id: &Uuid) -> Result<CounterSnapshot, AppError> {
        let video = self.video_dao.increment_likes(id).await?;
        tracing::debug!(video_id = %id, likes = video.likes, "video likes incremented");
        Ok(CounterSnapshot {
            id: video.id,
            table: "videos",
            column: "likes",
            value: video.likes,
        })
    }

    pub async fn increment_recipe_views(&self, id: &Uuid) -> Result<CounterSnapshot, AppError> {
        let recipe = self.recipe_dao.increment_views(id).await?;
        tracing::debug!(recipe_id = %id, views = recipe.view_count, "recipe views incremented");
        Ok(CounterSnapshot {
            id: recipe.id,
            table: "recipes",
            column: "view_count",
            value: recipe.view_count,
        })
    }
}
