use leptos::prelude::*;
use pagekit_core::{GatedRegion, RenderError, RenderProps};

use crate::components::gate::GatedRegionView;

/// A protected sub-list inside an otherwise public page.
pub fn render(props: &RenderProps<'_>) -> Result<AnyView, RenderError> {
    let region = GatedRegion::from_settings(props.settings())?;
    let page_key = props.hints.page_key.clone().unwrap_or_default();
    let scope = props.element_id();

    Ok(view! { <GatedRegionView region=region page_key=page_key scope=Some(scope) /> }.into_any())
}
