pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleContentUpdate, Comment, NewArticle, ViewSample};
pub use repository::{ArticleMutation, ArticleRepository};
pub use value_objects::{ArticleSlug, AuthorName, Title};
