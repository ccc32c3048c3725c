use leptos::prelude::*;
use pagekit_core::{RenderError, RenderProps};

use super::css;
use crate::utils::markdown_to_html;

pub fn render(props: &RenderProps<'_>) -> Result<AnyView, RenderError> {
    let content = props
        .section
        .setting_str("content")
        .ok_or(RenderError::MissingSetting("content"))?;
    let html = markdown_to_html(content);

    Ok(view! {
        <article id=props.element_id() class=css::markdown inner_html=html />
    }
    .into_any())
}
