#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use employee_posts::posts_client::{ClientError, PostsApi};
use employee_posts::types::Post;

/// Canned responses keyed by request path. Unknown paths answer 404.
#[derive(Default)]
pub struct FixtureApi {
    responses: HashMap<String, Result<String, u16>>,
    requests: RefCell<Vec<String>>,
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, body: impl Into<String>) -> Self {
        self.responses.insert(path.to_string(), Ok(body.into()));
        self
    }

    pub fn fail(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(path.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PostsApi for FixtureApi {
    async fn get(&self, path: &str) -> Result<String, ClientError> {
        self.requests.borrow_mut().push(path.to_string());
        match self.responses.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ClientError::Status {
                status: *status,
                url: path.to_string(),
            }),
            None => Err(ClientError::Status {
                status: 404,
                url: path.to_string(),
            }),
        }
    }
}

pub fn employee_json(id: u32, name: &str, company: &str) -> String {
    format!(
        r#"{{"id": {id}, "name": "{name}", "username": "user{id}", "email": "user{id}@example.com",
            "company": {{"name": "{company}", "catchPhrase": "{company} delivers", "bs": "synergy"}}}}"#
    )
}

pub fn comments_json(post_id: u32, count: u32) -> String {
    let items: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"postId": {post_id}, "id": {}, "name": "comment {i} on {post_id}", "email": "c{i}@example.com", "body": "body {i}"}}"#,
                post_id * 100 + i
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub fn post(id: u32, employee_id: u32) -> Post {
    Post {
        id,
        employee_id,
        title: format!("post {id}"),
        body: format!("body of post {id}"),
    }
}

pub fn posts_json(posts: &[Post]) -> String {
    let items: Vec<String> = posts
        .iter()
        .map(|p| {
            format!(
                r#"{{"userId": {}, "id": {}, "title": "{}", "body": "{}"}}"#,
                p.employee_id, p.id, p.title, p.body
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

/// Two employees; employee 1 wrote posts 1 and 2, employee 2 wrote post 3.
pub fn directory() -> FixtureApi {
    FixtureApi::new()
        .respond(
            "/users",
            format!(
                "[{}, {}]",
                employee_json(1, "Leanne Graham", "Romaguera-Crona"),
                employee_json(2, "Ervin Howell", "Deckow-Crist")
            ),
        )
        .respond("/users/1", employee_json(1, "Leanne Graham", "Romaguera-Crona"))
        .respond("/users/2", employee_json(2, "Ervin Howell", "Deckow-Crist"))
        .respond("/posts?userId=1", posts_json(&[post(1, 1), post(2, 1)]))
        .respond("/posts?userId=2", posts_json(&[post(3, 2)]))
        .respond("/comments?postId=1", comments_json(1, 2))
        .respond("/comments?postId=2", comments_json(2, 1))
        .respond("/comments?postId=3", comments_json(3, 3))
}
