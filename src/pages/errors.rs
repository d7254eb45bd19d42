use crate::pages::layout::page;
use maud::html;
use maud::Markup;

pub fn not_found_page() -> Markup {
    page(
        Some("Not Found"),
        html! {
            div.empty-state {
                h1 { "Lost in Space" }
                p { "The page you are looking for drifted out of orbit." }
                a.cosmic-button href="/" { "Return Home" }
            }
        },
    )
}

pub fn failure_page() -> Markup {
    page(
        Some("Something Went Wrong"),
        html! {
            div.empty-state {
                h1 { "Houston, we have a problem" }
                p { "We could not reach mission control. Please try again later." }
                a.cosmic-button href="/" { "Return Home" }
            }
        },
    )
}
