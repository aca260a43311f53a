use blankslate_core::{AxisValue, FontWeight, HorizontalPosition, TemplateField, VerticalPosition};
use blankslate_studio::StudioError;
use blankslate_studio::input::{Edit, font_size_input, parse_assignment, parse_edit};

fn font_size(edit: Edit) -> u8 {
    match edit {
        Edit::Field(TemplateField::FontSize(size)) => size.px(),
        other => panic!("expected a font size edit, got {other:?}"),
    }
}

#[test]
fn font_size_is_clamped_before_reaching_the_model() {
    assert_eq!(font_size_input(100).px(), 72);
    assert_eq!(font_size_input(0).px(), 12);
    assert_eq!(font_size_input(36).px(), 36);

    assert_eq!(font_size(parse_edit("fontSize", "100").unwrap()), 72);
    assert_eq!(font_size(parse_edit("font-size", "8px").unwrap()), 12);
}

#[test]
fn non_numeric_font_size_is_rejected() {
    assert!(matches!(
        parse_edit("fontSize", "big"),
        Err(StudioError::Input { field, .. }) if field == "fontSize"
    ));
}

#[test]
fn keys_accept_camel_snake_and_kebab_case() {
    let expected = Edit::Field(TemplateField::HeaderText("Hi".to_string()));
    assert_eq!(parse_edit("headerText", "Hi").unwrap(), expected);
    assert_eq!(parse_edit("header_text", "Hi").unwrap(), expected);
    assert_eq!(parse_edit("header-text", "Hi").unwrap(), expected);
}

#[test]
fn assignments_split_on_first_equals() {
    assert_eq!(
        parse_assignment("headerText=a=b").unwrap(),
        Edit::Field(TemplateField::HeaderText("a=b".to_string()))
    );
    assert_eq!(
        parse_assignment("fontWeight=bold").unwrap(),
        Edit::Field(TemplateField::FontWeight(FontWeight::Bold))
    );
    assert!(parse_assignment("headerText").is_err());
}

#[test]
fn positions_parse_per_axis() {
    assert_eq!(
        parse_edit("x", "right").unwrap(),
        Edit::Axis(AxisValue::X(HorizontalPosition::Right))
    );
    assert_eq!(
        parse_edit("y", "center").unwrap(),
        Edit::Axis(AxisValue::Y(VerticalPosition::Center))
    );
    assert!(parse_edit("x", "top").is_err());
}

#[test]
fn blank_name_and_colors_are_rejected() {
    assert!(parse_edit("name", "  ").is_err());
    assert!(parse_edit("textColor", "").is_err());
    assert_eq!(
        parse_edit("backgroundColor", " #000 ").unwrap(),
        Edit::Field(TemplateField::BackgroundColor("#000".to_string()))
    );
}

#[test]
fn header_text_is_kept_verbatim() {
    assert_eq!(
        parse_edit("headerText", "  spaced  ").unwrap(),
        Edit::Field(TemplateField::HeaderText("  spaced  ".to_string()))
    );
    assert_eq!(
        parse_edit("headerText", "").unwrap(),
        Edit::Field(TemplateField::HeaderText(String::new()))
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = parse_edit("opacity", "1").unwrap_err();
    assert!(err.to_string().contains("opacity"));
}
