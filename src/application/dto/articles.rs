use crate::domain::article::{Article, Comment, ViewSample};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: String,
    pub author: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author,
            body: comment.body,
            posted_at: comment.posted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSampleDto {
    pub date: NaiveDate,
    pub count: u64,
}

impl From<ViewSample> for ViewSampleDto {
    fn from(sample: ViewSample) -> Self {
        Self {
            date: sample.date,
            count: sample.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub views: u64,
    pub comments: Vec<CommentDto>,
    pub view_history: Vec<ViewSampleDto>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            slug: article.slug.into(),
            title: article.title.into(),
            author: article.author.into(),
            category: article.category,
            content: article.content,
            image: article.image,
            published_at: article.published_at,
            views: article.views,
            comments: article.comments.into_iter().map(Into::into).collect(),
            view_history: article.view_history.into_iter().map(Into::into).collect(),
        }
    }
}
