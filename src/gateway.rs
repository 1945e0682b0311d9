//! Fail-soft reads over the posts service.
//!
//! Every operation resolves to an empty (or absent) value on failure. The
//! failure is logged here and never reaches the caller, so a refresh cycle
//! always runs to completion.

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::posts_client::{ClientError, PostsApi};
use crate::types::{Comment, Employee, EmployeeId, Post, PostId};

pub struct Gateway<A> {
    api: A,
}

impl<A: PostsApi> Gateway<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn list_employees(&self) -> Vec<Employee> {
        self.fetch("/users".to_string()).await.unwrap_or_default()
    }

    pub async fn list_posts_for(&self, employee_id: Option<EmployeeId>) -> Vec<Post> {
        let Some(employee_id) = present(employee_id) else {
            return Vec::new();
        };
        self.fetch(format!("/posts?userId={employee_id}"))
            .await
            .unwrap_or_default()
    }

    pub async fn get_employee(&self, employee_id: Option<EmployeeId>) -> Option<Employee> {
        let employee_id = present(employee_id)?;
        self.fetch(format!("/users/{employee_id}")).await
    }

    pub async fn list_comments_for(&self, post_id: Option<PostId>) -> Vec<Comment> {
        let Some(post_id) = present(post_id) else {
            return Vec::new();
        };
        self.fetch(format!("/comments?postId={post_id}"))
            .await
            .unwrap_or_default()
    }

    async fn fetch<T: DeserializeOwned>(&self, path: String) -> Option<T> {
        match self.try_fetch(&path).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!(%path, error = %e, "posts service read failed");
                None
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(%path, "GET");
        let body = self.api.get(path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Zero is never a valid remote id and is treated like a missing one.
fn present(id: Option<u32>) -> Option<u32> {
    id.filter(|id| *id != 0)
}
