//! Image references for generated SVGs and the fallback placeholder.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::config::ImageConfig;

/// `<base><model>_prompt<N>.svg`; `N` is zero-padded for allow-listed models.
pub fn image_url(config: &ImageConfig, model: &str, prompt: u32) -> String {
    let token = if config.zero_padded_models.iter().any(|m| m == model) {
        format!("prompt{prompt:02}")
    } else {
        format!("prompt{prompt}")
    };
    format!("{}{model}_{token}.svg", config.base_url)
}

/// Inline SVG shown when an image fails to load.
pub fn placeholder_data_uri(size: u32, label: &str) -> String {
    let font_size = if size >= 160 { 14 } else { 12 };
    let svg = format!(
        concat!(
            r##"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">"##,
            r##"<rect width="{size}" height="{size}" fill="#f8f9fa"/>"##,
            r##"<text x="50%" y="50%" font-family="Arial" font-size="{font}" fill="#6c757d" "##,
            r##"text-anchor="middle" dy=".3em">{label}</text></svg>"##
        ),
        size = size,
        font = font_size,
        label = escape_xml(label),
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_follows_allow_list() {
        let config = ImageConfig {
            base_url: "https://img.test/svgs/".into(),
            zero_padded_models: vec!["openai-gpt-5.1".into()],
        };
        assert_eq!(
            image_url(&config, "openai-gpt-5.1", 3),
            "https://img.test/svgs/openai-gpt-5.1_prompt03.svg"
        );
        assert_eq!(
            image_url(&config, "mistral-large", 3),
            "https://img.test/svgs/mistral-large_prompt3.svg"
        );
        assert_eq!(
            image_url(&config, "openai-gpt-5.1", 12),
            "https://img.test/svgs/openai-gpt-5.1_prompt12.svg"
        );
    }

    #[test]
    fn placeholder_is_a_base64_svg() {
        let uri = placeholder_data_uri(120, "Not available");
        let encoded = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(svg.contains(r#"width="120""#));
        assert!(svg.contains(">Not available<"));
    }
}
