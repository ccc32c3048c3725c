use leptos::prelude::*;
use pagekit_core::section_types::WIDGET_ID_KEY;
use pagekit_core::{EmbedTrail, RenderError, RenderProps, WidgetConfig, WidgetResolver};

use super::css;
use crate::components::layout::Composition;
use crate::core::HttpWidgetResolver;

pub fn render(props: &RenderProps<'_>) -> Result<AnyView, RenderError> {
    let widget_id = props
        .section
        .setting_id(WIDGET_ID_KEY)
        .ok_or(RenderError::MissingSetting(WIDGET_ID_KEY))?;
    let page_key = props.hints.page_key.clone().unwrap_or_default();
    let scope = props.element_id();

    Ok(view! { <WidgetEmbed widget_id=widget_id page_key=page_key scope=scope /> }.into_any())
}

/// Resolves a widget and renders its sections in place.
///
/// Embedding a widget that is already on the current embed chain (or past
/// the depth cap) renders nothing. An unresolved widget keeps its spinner.
#[component]
fn WidgetEmbed(widget_id: String, page_key: String, scope: String) -> impl IntoView {
    let trail = use_context::<EmbedTrail>().unwrap_or_default();
    let trail = match trail.enter(&widget_id) {
        Ok(trail) => trail,
        Err(refusal) => {
            log::warn!("not embedding widget '{}': {}", widget_id, refusal);
            return ().into_any();
        }
    };

    let widget = LocalResource::new(move || {
        let id = widget_id.clone();
        async move { HttpWidgetResolver::default().resolve(&id).await }
    });
    let trail = StoredValue::new(trail);
    let page_key = StoredValue::new(page_key);
    let scope = StoredValue::new(scope);

    view! {
        <div class=css::widget>
            {move || match widget.get() {
                Some(Some(config)) => view! {
                    <EmbeddedWidget
                        config=config
                        trail=trail.get_value()
                        page_key=page_key.get_value()
                        scope=scope.get_value()
                    />
                }
                .into_any(),
                _ => view! { <div class=css::spinner aria-busy="true" /> }.into_any(),
            }}
        </div>
    }
    .into_any()
}

#[component]
fn EmbeddedWidget(
    config: WidgetConfig,
    trail: EmbedTrail,
    page_key: String,
    scope: String,
) -> impl IntoView {
    provide_context(trail);
    view! {
        <Composition
            sections=config.sections
            layout=config.layout
            page_key=page_key
            scope=Some(scope)
        />
    }
}
