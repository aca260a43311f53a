use blankslate_core::{
    FontSize, FontWeight, HorizontalPosition, Position, TemplateConfig, VerticalPosition,
};
use blankslate_export::layout::{FlexAlign, TextAlign};
use blankslate_export::{compile, project_preview};

#[test]
fn default_preview() {
    let preview = project_preview(&TemplateConfig::default());

    assert_eq!(preview.container.justify_content, FlexAlign::Start);
    assert_eq!(preview.container.align_items, FlexAlign::Start);
    assert_eq!(preview.container.text_align, TextAlign::Left);
    assert_eq!(preview.container.background_color, "#ffffff");

    assert_eq!(preview.text.color, "#ef4444");
    assert_eq!(preview.text.font_size, "24px");
    assert_eq!(preview.text.font_weight, "600");
    assert_eq!(preview.text.font_family, "Inter");
    assert_eq!(preview.text.fallback_family, "sans-serif");
}

#[test]
fn preview_follows_edits() {
    let config = TemplateConfig {
        font_size: FontSize::new(72).unwrap(),
        font_weight: FontWeight::Normal,
        position: Position::new(HorizontalPosition::Right, VerticalPosition::Center),
        ..TemplateConfig::default()
    };

    let preview = project_preview(&config);
    assert_eq!(preview.container.justify_content, FlexAlign::End);
    assert_eq!(preview.container.align_items, FlexAlign::Center);
    assert_eq!(preview.text.font_size, "72px");
    assert_eq!(preview.text.font_weight, "400");
}

#[test]
fn inline_css() {
    let config = TemplateConfig {
        position: Position::new(HorizontalPosition::Center, VerticalPosition::Bottom),
        ..TemplateConfig::default()
    };
    let preview = project_preview(&config);

    assert_eq!(
        preview.container.to_css(),
        "display: flex; justify-content: center; align-items: flex-end; text-align: center; background-color: #ffffff;"
    );
    assert_eq!(
        preview.text.to_css(),
        "color: #ef4444; font-size: 24px; font-weight: 600; font-family: 'Inter', sans-serif;"
    );
}

#[test]
fn key_changes_with_text_and_position_only() {
    let base = TemplateConfig::default();
    let key = project_preview(&base).key;

    let recolored = TemplateConfig {
        text_color: "black".to_string(),
        ..base.clone()
    };
    assert_eq!(project_preview(&recolored).key, key);

    let retitled = TemplateConfig {
        header_text: "Other".to_string(),
        ..base.clone()
    };
    assert_ne!(project_preview(&retitled).key, key);

    let moved = base.with_position(Position::new(
        HorizontalPosition::Right,
        VerticalPosition::Top,
    ));
    assert_ne!(project_preview(&moved).key, key);
}

#[test]
fn serializes_camel_case_css_keywords() {
    let json = serde_json::to_value(project_preview(&TemplateConfig::default())).unwrap();
    assert_eq!(json["container"]["justifyContent"], "flex-start");
    assert_eq!(json["container"]["alignItems"], "flex-start");
    assert_eq!(json["container"]["textAlign"], "left");
    assert_eq!(json["text"]["fontSize"], "24px");
}

#[test]
fn preview_font_stack_matches_document() {
    let config = TemplateConfig {
        font_family: "Font 3".to_string(),
        ..TemplateConfig::default()
    };
    let preview = project_preview(&config);
    let html = compile(&config).unwrap();

    assert_eq!(preview.text.font_stack(), "'Font 3', sans-serif");
    assert!(html.contains(&format!("font-family: {};", preview.text.font_stack())));
}

#[test]
fn stats_count_characters_and_badge_position() {
    let config = TemplateConfig {
        header_text: "Ünïcode ✓".to_string(),
        font_size: FontSize::new(40).unwrap(),
        position: Position::new(HorizontalPosition::Center, VerticalPosition::Bottom),
        ..TemplateConfig::default()
    };
    let stats = project_preview(&config).stats;

    assert_eq!(stats.characters, 9);
    assert_eq!(stats.font_size_px, 40);
    assert_eq!(stats.badge, "center-bottom");

    let empty = TemplateConfig {
        header_text: String::new(),
        ..TemplateConfig::default()
    };
    assert_eq!(project_preview(&empty).stats.characters, 0);
    assert_eq!(project_preview(&empty).stats.badge, "left-top");
}
