//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tally_core::entities::{Author, Category, PostDetails, Transaction};

use super::responses::{
    AuthorSummary, CategoryResponse, CategorySummary, PostResponse, TransactionResponse,
};

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            username: author.username.clone(),
            email: author.email.clone(),
        }
    }
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<PostDetails> for PostResponse {
    fn from(details: PostDetails) -> Self {
        let PostDetails {
            post,
            author,
            category,
        } = details;

        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            image: post.image,
            likes: post.likes,
            dislikes: post.dislikes,
            claps: post.claps,
            post_views: post.post_views,
            author: author.as_ref().map(AuthorSummary::from),
            category: category.as_ref().map(CategorySummary::from),
            scheduled_publish: post.scheduled_publish,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            author: category.author_id,
            created_at: category.created_at,
        }
    }
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            description: tx.description,
            amount: tx.amount,
            category: tx.category,
            kind: tx.kind,
            date: tx.date,
        }
    }
}
