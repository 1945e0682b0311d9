//! Builds page markup from records through a render surface.

use crate::comments::{button_label, HIDDEN_CLASS, POST_ID_ATTR};
use crate::dom::RenderSurface;
use crate::types::{Comment, Employee, Post, PostId};

pub const PLACEHOLDER_TEXT: &str = "Select an Employee to display their posts.";
pub const PLACEHOLDER_CLASS: &str = "default-text";

/// The nodes of one rendered post that the refresher needs to keep track of.
#[derive(Clone, Debug, PartialEq)]
pub struct PostBlock<N> {
    pub post_id: PostId,
    pub article: N,
    pub button: N,
    pub panel: N,
}

pub fn element_with_text<S: RenderSurface>(
    surface: &mut S,
    tag: &str,
    text: &str,
    class: Option<&str>,
) -> S::Node {
    let element = surface.create_element(tag);
    surface.set_text(&element, text);
    if let Some(class) = class.filter(|c| !c.is_empty()) {
        surface.add_class(&element, class);
    }
    element
}

pub fn select_options<S: RenderSurface>(surface: &mut S, employees: &[Employee]) -> Vec<S::Node> {
    employees
        .iter()
        .map(|employee| {
            let option = element_with_text(surface, "option", &employee.name, None);
            surface.set_attribute(&option, "value", &employee.id.to_string());
            option
        })
        .collect()
}

/// One `article` per comment: author heading, body, sender line.
pub fn comment_articles<S: RenderSurface>(surface: &mut S, comments: &[Comment]) -> Vec<S::Node> {
    comments
        .iter()
        .map(|comment| {
            let article = surface.create_element("article");
            let heading = element_with_text(surface, "h3", &comment.name, None);
            let body = element_with_text(surface, "p", &comment.body, None);
            let from = element_with_text(surface, "p", &format!("From: {}", comment.email), None);
            for child in [heading, body, from] {
                surface.append_child(&article, &child);
            }
            article
        })
        .collect()
}

/// Comment section for a post, built hidden.
pub fn comment_panel<S: RenderSurface>(
    surface: &mut S,
    post_id: PostId,
    comments: &[Comment],
) -> S::Node {
    let section = surface.create_element("section");
    surface.set_attribute(&section, POST_ID_ATTR, &post_id.to_string());
    surface.add_class(&section, "comments");
    surface.add_class(&section, HIDDEN_CLASS);

    for article in comment_articles(surface, comments) {
        surface.append_child(&section, &article);
    }
    section
}

pub fn post_block<S: RenderSurface>(
    surface: &mut S,
    post: &Post,
    author: Option<&Employee>,
    comments: &[Comment],
) -> PostBlock<S::Node> {
    let article = surface.create_element("article");

    let mut children = vec![
        element_with_text(surface, "h2", &post.title, None),
        element_with_text(surface, "p", &post.body, None),
        element_with_text(surface, "p", &format!("Post ID: {}", post.id), None),
    ];
    match author {
        Some(author) => {
            let byline = format!("Author: {} with {}", author.name, author.company.name);
            children.push(element_with_text(surface, "p", &byline, None));
            children.push(element_with_text(surface, "p", &author.company.catch_phrase, None));
        }
        None => children.push(element_with_text(surface, "p", "Author: unknown", None)),
    }

    let button = element_with_text(surface, "button", button_label(true), None);
    surface.set_attribute(&button, POST_ID_ATTR, &post.id.to_string());
    let panel = comment_panel(surface, post.id, comments);
    children.push(button.clone());
    children.push(panel.clone());

    for child in &children {
        surface.append_child(&article, child);
    }

    PostBlock {
        post_id: post.id,
        article,
        button,
        panel,
    }
}

pub fn placeholder<S: RenderSurface>(surface: &mut S) -> S::Node {
    element_with_text(surface, "p", PLACEHOLDER_TEXT, Some(PLACEHOLDER_CLASS))
}
