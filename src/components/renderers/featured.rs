use leptos::prelude::*;
use pagekit_core::{RenderError, RenderProps};
use serde::Deserialize;

use super::css;
use crate::utils::{Link, validate_link};

/// One card of a featured grid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
struct FeaturedItem {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    href: Option<String>,
}

impl FeaturedItem {
    /// The card link, dropped (not failed) when it doesn't validate.
    fn link(&self) -> Option<Link> {
        let href = self.href.as_deref()?;
        validate_link(href)
            .inspect_err(|e| log::warn!("featured item '{}': {}", self.title, e))
            .ok()
    }
}

fn parse_items(props: &RenderProps<'_>) -> Result<Vec<FeaturedItem>, RenderError> {
    let items = props
        .settings()
        .get("items")
        .ok_or(RenderError::MissingSetting("items"))?;
    serde_json::from_value(items.clone()).map_err(|e| RenderError::InvalidSetting {
        key: "items",
        reason: e.to_string(),
    })
}

fn card(item: FeaturedItem) -> impl IntoView {
    let link = item.link();
    let body = view! {
        {item.image.map(|src| view! { <img class=css::cardImage src=src alt="" loading="lazy" /> })}
        <h3 class=css::cardTitle>{item.title}</h3>
        {item.description.map(|d| view! { <p class=css::cardText>{d}</p> })}
    };

    match link {
        Some(link) => {
            let external = link.is_external();
            view! {
                <a
                    class=css::card
                    href=link.href().to_string()
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {body}
                </a>
            }
            .into_any()
        }
        None => view! { <div class=css::card>{body}</div> }.into_any(),
    }
}

pub fn render(props: &RenderProps<'_>) -> Result<AnyView, RenderError> {
    let items = parse_items(props)?;
    let heading = props
        .section
        .setting_str("heading")
        .or(props.section.title.as_deref())
        .map(str::to_string);

    Ok(view! {
        <section id=props.element_id() class=css::featured>
            {heading.map(|h| view! { <h2 class=css::heading>{h}</h2> })}
            <div class=css::grid>{items.into_iter().map(card).collect_view()}</div>
        </section>
    }
    .into_any())
}

#[cfg(test)]
mod tests {
    use pagekit_core::{LayoutHints, Section};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_items_parse() {
        let section = Section::new("featured").with_setting(
            "items",
            json!([
                { "title": "Docs", "href": "#/docs" },
                { "title": "Repo", "description": "Source", "href": "https://github.com/x/y" },
                { "title": "Elsewhere", "href": "https://evil.example.com" }
            ]),
        );
        let hints = LayoutHints::at(0);
        let props = RenderProps {
            section: &section,
            hints: &hints,
        };
        let items = parse_items(&props).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].link(), Some(Link::Internal("#/docs".to_string())));
        assert!(items[1].link().is_some_and(|l| l.is_external()));
        assert_eq!(items[2].link(), None);
    }

    #[test]
    fn test_bad_items_fail_the_section() {
        let hints = LayoutHints::at(0);

        let missing = Section::new("featured");
        let props = RenderProps {
            section: &missing,
            hints: &hints,
        };
        assert_eq!(
            parse_items(&props).unwrap_err(),
            RenderError::MissingSetting("items")
        );

        let malformed = Section::new("featured").with_setting("items", json!([{ "href": "#/" }]));
        let props = RenderProps {
            section: &malformed,
            hints: &hints,
        };
        assert!(matches!(
            parse_items(&props),
            Err(RenderError::InvalidSetting { key: "items", .. })
        ));
    }
}
