//! `[gallery images="1,2,3" layout="grid" columns="3"]`

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;

/// Self-closing gallery tag.
static GALLERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[gallery(?:\s+([^\]]*))?\]").unwrap());

const NO_IMAGES: &str = "Gallery shortcode: No images specified";

/// Expands galleries by resolving each image ID through the image lookup.
///
/// Unknown IDs and failed lookups are left out; a gallery with no resolvable
/// image renders as an empty container.
pub(crate) struct Gallery;

impl Shortcode for Gallery {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::Gallery
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &GALLERY_RE, text, |m| render_gallery(&m, ctx))
    }
}

fn render_gallery(m: &ShortcodeMatch<'_>, ctx: &mut ExpandContext<'_>) -> String {
    let images = m.attrs.get_or("images", "");
    let layout = m.attrs.get_or("layout", "grid");
    let columns = m.attrs.get_or("columns", "3");
    let class = m.attrs.get_or("class", "");

    if images.is_empty() {
        return ctx.warn(ShortcodeKind::Gallery, NO_IMAGES);
    }

    let gallery_id = ctx.next_id("gallery");
    let classes = ClassList::new(&format!(
        "content-shortcodes-gallery gallery-{}",
        ctx.escape(layout)
    ))
    .with(&ctx.escape(class))
    .build();

    let mut html = String::with_capacity(256);
    let _ = write!(
        html,
        r#"<div id="{gallery_id}" class="{classes}" data-columns="{}">"#,
        ctx.escape(columns)
    );

    let ids = images.split(',').map(str::trim).filter(|id| !id.is_empty());
    for image in ids.filter_map(|id| ctx.lookup_image(id)) {
        html.push_str(r#"<div class="gallery-item">"#);
        let _ = write!(
            html,
            r#"<img src="{}" alt="{}" class="img-fluid">"#,
            ctx.escape(&image.url),
            ctx.escape(&image.alt_text)
        );
        if !image.caption.is_empty() {
            let _ = write!(
                html,
                r#"<div class="gallery-caption">{}</div>"#,
                ctx.escape(&image.caption)
            );
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}
