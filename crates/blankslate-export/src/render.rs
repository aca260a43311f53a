use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, warn};

use blankslate_core::TemplateConfig;

use crate::error::ExportError;
use crate::layout;
use crate::styles::DocumentStyles;

const DOCUMENT_NAME: &str = "document.html";
const DOCUMENT_TEMPLATE: &str = include_str!("../templates/document.html");

/// Everything the document template interpolates, already resolved to CSS.
#[derive(Debug, Serialize)]
struct DocumentContext<'a> {
    name: &'a str,
    header_text: &'a str,
    text_color: &'a str,
    background_color: &'a str,
    font_size: u8,
    font_weight: &'static str,
    font_family: &'a str,
    justify_content: &'static str,
    align_items: &'static str,
    text_align: &'static str,
    fallback_family: &'a str,
    body_height: &'a str,
    padding_px: u16,
}

/// Compile `config` into a standalone HTML5 document with the default
/// document styles.
///
/// Deterministic: identical configs produce byte-identical output. The
/// embedded template always parses and every variable it references is
/// supplied, so an error here means the template itself was broken.
pub fn compile(config: &TemplateConfig) -> Result<String, ExportError> {
    compile_with_styles(config, &DocumentStyles::default())
}

/// String fields are interpolated verbatim, without HTML escaping. Markup in
/// `header_text` therefore becomes live markup in the output; this is logged
/// but left as-is.
pub fn compile_with_styles(
    config: &TemplateConfig,
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    let alignment = layout::resolve(config.position);

    if contains_markup(&config.header_text) {
        warn!(
            header_text = %config.header_text,
            "header text contains markup characters; emitting unescaped"
        );
    }

    let document = DocumentContext {
        name: &config.name,
        header_text: &config.header_text,
        text_color: &config.text_color,
        background_color: &config.background_color,
        font_size: config.font_size.px(),
        font_weight: config.font_weight.as_css(),
        font_family: &config.font_family,
        justify_content: alignment.justify_content.as_css(),
        align_items: alignment.align_items.as_css(),
        text_align: alignment.text_align.as_css(),
        fallback_family: &styles.fallback_family,
        body_height: &styles.body_height,
        padding_px: styles.padding_px,
    };

    let mut tera = Tera::default();
    // The document is emitted verbatim; see the note on `compile_with_styles`.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(DOCUMENT_NAME, DOCUMENT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(&document)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(DOCUMENT_NAME, &context)?;
    debug!(
        name = %config.name,
        position = %config.position,
        bytes = rendered.len(),
        "compiled template document"
    );
    Ok(rendered)
}

fn contains_markup(text: &str) -> bool {
    text.contains(['<', '>', '&'])
}
