pub mod achievements;
pub mod auto_achievements;
pub mod cadet_achievements;
pub mod cadets;
pub mod news;
pub mod news_comments;
pub mod news_likes;
pub mod score_history;
pub mod scores;
pub mod sea_orm_active_enums;
pub mod sessions;
pub mod task_submissions;
pub mod tasks;
pub mod users;
