//! Fixed navigation bar with smooth scrolling to sections.

use dioxus::prelude::*;

use crate::content::{SectionId, PROFILE};

/// Script that smoothly scrolls the section with `section`'s anchor into view.
pub fn scroll_script(section: SectionId) -> String {
    // The anchor is embedded as a JSON string literal so quoting stays valid JS.
    let anchor = serde_json::to_string(section.anchor()).unwrap_or_default();
    format!("document.getElementById({anchor})?.scrollIntoView({{behavior:'smooth'}})")
}

/// Scroll the page to `section`.
pub fn scroll_to_section(section: SectionId) {
    tracing::debug!(section = section.anchor(), "Scrolling to section");
    document::eval(&scroll_script(section));
}

/// Navigation bar component.
#[component]
pub fn NavBar() -> Element {
    let name = PROFILE.name;

    rsx! {
        nav { class: "nav",
            div { class: "nav-inner",
                h1 { class: "nav-brand", "{name}" }
                div { class: "nav-links",
                    for section in SectionId::ALL {
                        {
                            let anchor = section.anchor();
                            let label = section.nav_label();
                            rsx! {
                                button {
                                    key: "{anchor}",
                                    class: "nav-link",
                                    onclick: move |_| scroll_to_section(section),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
