use leptos::prelude::*;
use pagekit_core::{RenderError, RenderProps};

use super::css;

/// Player URL for hosted video links, `None` for direct media files.
fn embed_url(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let rest = rest.strip_prefix("m.").unwrap_or(rest);

    let youtube_id = if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
    } else if let Some(path) = rest.strip_prefix("youtu.be/") {
        path.split(['?', '&']).next()
    } else {
        rest.strip_prefix("youtube.com/embed/")
            .and_then(|path| path.split(['?', '&']).next())
    };
    if let Some(id) = youtube_id.filter(|id| is_video_id(id)) {
        return Some(format!("https://www.youtube.com/embed/{}", id));
    }

    rest.strip_prefix("vimeo.com/")
        .and_then(|path| path.split(['?', '/']).next())
        .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
        .map(|id| format!("https://player.vimeo.com/video/{}", id))
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn render(props: &RenderProps<'_>) -> Result<AnyView, RenderError> {
    let url = props
        .section
        .setting_str("url")
        .ok_or(RenderError::MissingSetting("url"))?;
    if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
        return Err(RenderError::InvalidSetting {
            key: "url",
            reason: "must be an http(s) or site-relative URL".to_string(),
        });
    }
    let caption = props.section.setting_str("caption").map(str::to_string);
    let title = props
        .section
        .title
        .clone()
        .unwrap_or_else(|| "Video".to_string());

    let player = match embed_url(url) {
        Some(src) => view! {
            <iframe
                class=css::videoFrame
                src=src
                title=title
                allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=true
            />
        }
        .into_any(),
        None => view! {
            <video class=css::videoFrame src=url.to_string() controls=true preload="metadata" />
        }
        .into_any(),
    };

    Ok(view! {
        <figure id=props.element_id() class=css::video>
            {player}
            {caption.map(|c| view! { <figcaption class=css::caption>{c}</figcaption> })}
        </figure>
    }
    .into_any())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_links() {
        let expected = Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string());
        assert_eq!(embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(embed_url("https://youtube.com/watch?t=10&v=dQw4w9WgXcQ"), expected);
        assert_eq!(embed_url("https://youtu.be/dQw4w9WgXcQ?t=3"), expected);
        assert_eq!(embed_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(embed_url("https://www.youtube.com/embed/dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn test_vimeo_links() {
        assert_eq!(
            embed_url("https://vimeo.com/76979871"),
            Some("https://player.vimeo.com/video/76979871".to_string())
        );
        assert_eq!(embed_url("https://vimeo.com/channels/staffpicks"), None);
    }

    #[test]
    fn test_direct_media_is_not_embedded() {
        assert_eq!(embed_url("https://cdn.example.com/intro.mp4"), None);
        assert_eq!(embed_url("/media/intro.mp4"), None);
        assert_eq!(embed_url("https://www.youtube.com/watch?v=<script>"), None);
    }
}
