use dioxus::prelude::*;

use crate::config::SELECT_MENU_ID;
use crate::hooks::use_post_board;

/// Static page skeleton. The option list and everything inside `main` are
/// filled in by the page controller, not by this component.
#[component]
pub fn PostBoard() -> Element {
    let board = use_post_board();

    rsx! {
        header { class: "page-header",
            h1 { "Employee Posts" }
        }
        section { class: "employee-picker",
            label { r#for: SELECT_MENU_ID, "Select an Employee: " }
            select {
                id: SELECT_MENU_ID,
                onchange: move |evt: FormEvent| board.select(evt.value()),
                option { value: "", "Employees" }
            }
        }
        main {}
    }
}
