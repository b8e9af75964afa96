//! Static page sections: hero, about, education, experience, skills, contact, footer.
//!
//! Entrance motion is CSS-only (`reveal` and `badge-pop` keyframes in site.css).

use dioxus::prelude::*;

use crate::content::{
    contact_form, SectionId, ABOUT, CONTACT, CONTACT_INFO_TITLE, EDUCATION, EXPERIENCE,
    FOOTER, PROFILE, SKILLS,
};

/// Common section wrapper: anchor id, heading, and reveal animation.
#[component]
fn SectionFrame(
    section: SectionId,
    #[props(default = false)]
    shaded: bool,
    children: Element,
) -> Element {
    let anchor = section.anchor();
    let heading = section.heading();
    let class = if shaded { "section shaded" } else { "section" };

    rsx! {
        section { id: "{anchor}", class: "{class}",
            div { class: "section-inner reveal",
                h2 { class: "section-heading", "{heading}" }
                {children}
            }
        }
    }
}

/// Hero banner with avatar, name, and tagline.
#[component]
pub fn Hero() -> Element {
    let initials = PROFILE.initials();
    let name = PROFILE.name;
    let title = PROFILE.title;
    let tagline = PROFILE.tagline;

    rsx! {
        section { class: "hero",
            div { class: "hero-inner reveal",
                div { class: "hero-avatar", title: "{name}", "{initials}" }
                h1 { class: "hero-name", "{name}" }
                p { class: "hero-title", "{title}" }
                p { class: "hero-tagline", "{tagline}" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        SectionFrame { section: SectionId::About,
            div { class: "card",
                p { class: "about-text", {ABOUT} }
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    rsx! {
        SectionFrame { section: SectionId::Education, shaded: true,
            for entry in EDUCATION.iter() {
                div { key: "{entry.school}", class: "card",
                    div { class: "card-title", "{entry.school}" }
                    div { class: "card-subtitle", "{entry.degree}" }
                    p { class: "card-meta", "{entry.period}" }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        SectionFrame { section: SectionId::Experience,
            div { class: "card-stack",
                for entry in EXPERIENCE.iter() {
                    div { key: "{entry.title}", class: "card",
                        div { class: "card-title", "{entry.title}" }
                        div { class: "card-subtitle", "{entry.period}" }
                        ul { class: "highlights",
                            for line in entry.highlights.iter() {
                                li { "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Skill badges, popping in one after another.
#[component]
pub fn Skills() -> Element {
    rsx! {
        SectionFrame { section: SectionId::Skills, shaded: true,
            div { class: "skills",
                for (i, skill) in SKILLS.iter().enumerate() {
                    {
                        let delay = format!("animation-delay: {:.1}s", i as f32 * 0.1);
                        rsx! {
                            span { key: "{skill}", class: "badge badge-pop", style: "{delay}", "{skill}" }
                        }
                    }
                }
            }
        }
    }
}

/// Contact details plus the message form card.
#[component]
pub fn Contact() -> Element {
    rsx! {
        SectionFrame { section: SectionId::Contact,
            div { class: "contact-grid",
                div { class: "card",
                    div { class: "card-title plain", {CONTACT_INFO_TITLE} }
                    for line in CONTACT.iter() {
                        {
                            let icon = line.kind.icon();
                            let value = line.value;
                            rsx! {
                                div { key: "{value}", class: "contact-line",
                                    span { class: "contact-icon", "{icon}" }
                                    span { "{value}" }
                                }
                            }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-title plain", {contact_form::TITLE} }
                    div { class: "contact-form",
                        input { class: "field", r#type: "text", placeholder: contact_form::NAME_PLACEHOLDER }
                        input { class: "field", r#type: "email", placeholder: contact_form::EMAIL_PLACEHOLDER }
                        textarea { class: "field field-multiline", placeholder: contact_form::MESSAGE_PLACEHOLDER }
                        button { class: "primary-button", r#type: "button", {contact_form::SUBMIT_LABEL} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { {FOOTER} }
        }
    }
}
