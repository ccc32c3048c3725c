use leptos::prelude::*;
use leptos_icons::Icon;
use pagekit_core::{RenderError, RenderProps};

use super::css;
use crate::components::icons as ic;
use crate::utils::validate_link;

/// Heading, optional text, and one validated button link.
pub fn render(props: &RenderProps<'_>) -> Result<AnyView, RenderError> {
    let section = props.section;
    let href = section
        .setting_str("href")
        .ok_or(RenderError::MissingSetting("href"))?;
    let link = validate_link(href).map_err(|e| RenderError::InvalidSetting {
        key: "href",
        reason: e.to_string(),
    })?;

    let heading = section
        .setting_str("heading")
        .or(section.title.as_deref())
        .map(str::to_string);
    let text = section.setting_str("text").map(str::to_string);
    let label = section.setting_str("label").unwrap_or("Learn more").to_string();
    let external = link.is_external();

    Ok(view! {
        <section id=props.element_id() class=css::callToAction>
            {heading.map(|h| view! { <h2 class=css::heading>{h}</h2> })}
            {text.map(|t| view! { <p class=css::text>{t}</p> })}
            <a
                class=css::button
                href=link.href().to_string()
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
            >
                {label}
                {external.then(|| view! { <Icon icon=ic::EXTERNAL_LINK /> })}
            </a>
        </section>
    }
    .into_any())
}
