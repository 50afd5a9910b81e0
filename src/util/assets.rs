use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Stylesheet and icon, embedded so the desktop binary ships standalone.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// `assets/favicon.svg` as an inline `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

fn load_text(name: &str) -> String {
    let Some(file) = EmbeddedAssets::get(name) else {
        tracing::error!(asset = name, "embedded asset missing");
        return String::new();
    };
    String::from_utf8(file.data.into_owned()).unwrap_or_else(|_| {
        tracing::error!(asset = name, "embedded asset is not valid UTF-8");
        String::new()
    })
}

fn svg_data_uri(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len() + 32);
    for ch in svg.trim().chars() {
        match ch {
            '#' => encoded.push_str("%23"),
            '%' => encoded.push_str("%25"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '"' => encoded.push('\''),
            '\n' | '\r' => {}
            other => encoded.push(other),
        }
    }
    format!("data:image/svg+xml,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        assert!(main_css().contains(".app-shell"));
    }

    #[test]
    fn favicon_is_url_safe() {
        let uri = favicon_data_uri();
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(!uri.contains('#'));
        assert!(!uri.contains('"'));
    }
}
