//! Employee posts browser: pick an employee, read their posts and toggle
//! each post's comments.

pub mod comments;
pub mod components;
pub mod config;
pub mod dom;
pub mod gateway;
pub mod hooks;
pub mod markup;
pub mod page;
pub mod posts_client;
pub mod refresh;
pub mod types;
