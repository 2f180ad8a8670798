// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleSlug, AuthorName, Title};
use chrono::{DateTime, NaiveDate, Utc};

/// A single reader comment. The comment log is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

/// One day's worth of recorded views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSample {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: Title,
    pub author: AuthorName,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub views: u64,
    pub comments: Vec<Comment>,
    pub view_history: Vec<ViewSample>,
}

/// Content fields overwritten by a republish. History fields are not here:
/// views, comments, and view history always survive a republish untouched.
#[derive(Debug, Clone)]
pub struct ArticleContentUpdate {
    pub title: Title,
    pub author: AuthorName,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
}

impl Article {
    /// Build the full replacement document for a republish: every content
    /// field is overwritten, every history field is carried forward verbatim.
    /// The result replaces the stored document wholesale; a partial field
    /// merge could leave stale leftovers from an unrelated prior revision.
    pub fn republish(self, update: ArticleContentUpdate, now: DateTime<Utc>) -> Article {
        Article {
            slug: self.slug,
            title: update.title,
            author: update.author,
            category: update.category,
            content: update.content,
            image: update.image,
            published_at: now,
            views: self.views,
            comments: self.comments,
            view_history: self.view_history,
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Article {
        self.comments.push(comment);
        self
    }

    /// Count one view: bump the total and the current day's sample.
    pub fn with_view(mut self, now: DateTime<Utc>) -> Article {
        self.views += 1;
        let today = now.date_naive();
        match self.view_history.last_mut() {
            Some(sample) if sample.date == today => sample.count += 1,
            _ => self.view_history.push(ViewSample {
                date: today,
                count: 1,
            }),
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: Title,
    pub author: AuthorName,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_article() -> Article {
        Article {
            slug: ArticleSlug::new("launch-notes").unwrap(),
            title: Title::new("Launch Notes").unwrap(),
            author: AuthorName::new("ada").unwrap(),
            category: "news".into(),
            content: "first revision".into(),
            image: None,
            published_at: Utc::now(),
            views: 0,
            comments: Vec::new(),
            view_history: Vec::new(),
        }
    }

    #[test]
    fn republish_replaces_content_and_keeps_history() {
        let mut article = sample_article();
        article.views = 42;
        article.comments = vec![
            Comment {
                id: "c1".into(),
                author: "reader".into(),
                body: "nice".into(),
                posted_at: Utc::now(),
            },
            Comment {
                id: "c2".into(),
                author: "other".into(),
                body: "agreed".into(),
                posted_at: Utc::now(),
            },
        ];

        let now = Utc::now() + Duration::hours(1);
        let update = ArticleContentUpdate {
            title: Title::new("Launch Notes, revised").unwrap(),
            author: AuthorName::new("ada").unwrap(),
            category: "news".into(),
            content: "second revision".into(),
            image: Some("cover.png".into()),
        };
        let republished = article.republish(update, now);

        assert_eq!(republished.content, "second revision");
        assert_eq!(republished.published_at, now);
        assert_eq!(republished.views, 42);
        assert_eq!(republished.comments.len(), 2);
        assert_eq!(republished.comments[0].id, "c1");
        assert_eq!(republished.slug.as_str(), "launch-notes");
    }

    #[test]
    fn with_view_bumps_total_and_daily_sample() {
        let now = Utc::now();
        let article = sample_article().with_view(now).with_view(now);
        assert_eq!(article.views, 2);
        assert_eq!(article.view_history.len(), 1);
        assert_eq!(article.view_history[0].count, 2);

        let tomorrow = now + Duration::days(1);
        let article = article.with_view(tomorrow);
        assert_eq!(article.views, 3);
        assert_eq!(article.view_history.len(), 2);
        assert_eq!(article.view_history[1].count, 1);
    }

    #[test]
    fn with_comment_appends() {
        let article = sample_article().with_comment(Comment {
            id: "c9".into(),
            author: "reader".into(),
            body: "hello".into(),
            posted_at: Utc::now(),
        });
        assert_eq!(article.comments.len(), 1);
    }
}
