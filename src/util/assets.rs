//! Stylesheet and favicon compiled into the binary.

use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// `assets/favicon.svg` as a `data:` URI. SVG is text, so URL escaping is enough.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let svg = load_text("favicon.svg");
            if svg.is_empty() {
                String::new()
            } else {
                format!("data:image/svg+xml,{}", escape_svg(&svg))
            }
        })
        .as_str()
}

// A missing asset leaves the window unstyled instead of failing startup.
fn load_text(name: &str) -> String {
    match EmbeddedAssets::get(name) {
        Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
        None => {
            tracing::warn!(asset = name, "embedded asset missing");
            String::new()
        }
    }
}

fn escape_svg(svg: &str) -> String {
    let mut escaped = String::with_capacity(svg.len());
    for ch in svg.chars() {
        match ch {
            '%' => escaped.push_str("%25"),
            '#' => escaped.push_str("%23"),
            '<' => escaped.push_str("%3C"),
            '>' => escaped.push_str("%3E"),
            '"' => escaped.push('\''),
            '\n' | '\r' => escaped.push(' '),
            other => escaped.push(other),
        }
    }
    escaped
}
