//! Wires the employee selector to the post list.

use tracing::info;

use crate::config::{FALLBACK_EMPLOYEE_ID, POST_CONTAINER_TAG, SELECT_MENU_ID};
use crate::dom::RenderSurface;
use crate::gateway::Gateway;
use crate::markup;
use crate::posts_client::PostsApi;
use crate::refresh::{PostListRefresher, RefreshOutcome};
use crate::types::{Employee, EmployeeId, Post};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page element '{0}' not found")]
    MissingElement(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionOutcome<N> {
    pub employee_id: EmployeeId,
    pub posts: Vec<Post>,
    pub refresh: Option<RefreshOutcome<N>>,
}

pub struct PageController<A, S: RenderSurface> {
    gateway: Gateway<A>,
    surface: S,
    selector: S::Node,
    refresher: PostListRefresher<S>,
}

impl<A: PostsApi, S: RenderSurface> PageController<A, S> {
    pub fn new(gateway: Gateway<A>, surface: S) -> Result<Self, PageError> {
        let selector = surface
            .find_by_id(SELECT_MENU_ID)
            .ok_or(PageError::MissingElement(SELECT_MENU_ID))?;
        let container = surface
            .find_by_tag(POST_CONTAINER_TAG)
            .ok_or(PageError::MissingElement(POST_CONTAINER_TAG))?;

        Ok(Self {
            gateway,
            surface,
            selector,
            refresher: PostListRefresher::new(container),
        })
    }

    pub fn gateway(&self) -> &Gateway<A> {
        &self.gateway
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn selector(&self) -> &S::Node {
        &self.selector
    }

    pub fn refresher(&self) -> &PostListRefresher<S> {
        &self.refresher
    }

    /// Fills the selector with one option per employee.
    pub async fn init(&mut self) -> Vec<Employee> {
        let employees = self.gateway.list_employees().await;
        for option in markup::select_options(&mut self.surface, &employees) {
            self.surface.append_child(&self.selector, &option);
        }
        info!(employees = employees.len(), "employee selector populated");
        employees
    }

    /// Handles a change of the selector's value.
    ///
    /// The selector stays disabled for the whole refresh so a second change
    /// can't start while this one is still fetching.
    pub async fn on_selection_change(&mut self, value: &str) -> SelectionOutcome<S::Node> {
        self.surface.set_disabled(&self.selector, true);

        let employee_id = parse_employee_id(value);
        let posts = self.gateway.list_posts_for(Some(employee_id)).await;
        let refresh = self
            .refresher
            .refresh(&mut self.surface, &self.gateway, Some(posts.as_slice()))
            .await;

        self.surface.set_disabled(&self.selector, false);

        SelectionOutcome {
            employee_id,
            posts,
            refresh,
        }
    }
}

pub fn parse_employee_id(value: &str) -> EmployeeId {
    value
        .trim()
        .parse::<EmployeeId>()
        .ok()
        .filter(|id| *id != 0)
        .unwrap_or(FALLBACK_EMPLOYEE_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_parsing() {
        assert_eq!(parse_employee_id("4"), 4);
        assert_eq!(parse_employee_id(" 10 "), 10);
        assert_eq!(parse_employee_id(""), FALLBACK_EMPLOYEE_ID);
        assert_eq!(parse_employee_id("0"), FALLBACK_EMPLOYEE_ID);
        assert_eq!(parse_employee_id("-3"), FALLBACK_EMPLOYEE_ID);
        assert_eq!(parse_employee_id("abc"), FALLBACK_EMPLOYEE_ID);
    }
}
