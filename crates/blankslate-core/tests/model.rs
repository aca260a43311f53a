use blankslate_core::{
    AxisValue, FontSize, FontWeight, HorizontalPosition, Position, TemplateConfig, TemplateField,
    TemplateModel, VerticalPosition, position_grid,
};

fn edited() -> TemplateConfig {
    TemplateConfig {
        name: "Launch".to_string(),
        header_text: "Hello".to_string(),
        text_color: "navy".to_string(),
        background_color: "#fafafa".to_string(),
        font_size: FontSize::new(48).unwrap(),
        font_weight: FontWeight::Light,
        position: Position::new(HorizontalPosition::Right, VerticalPosition::Center),
        font_family: "Georgia".to_string(),
    }
}

#[test]
fn new_model_starts_from_defaults() {
    assert_eq!(TemplateModel::new().get(), &TemplateConfig::default());
}

#[test]
fn set_field_replaces_only_the_target() {
    let before = edited();
    let edits = [
        TemplateField::Name("Other".to_string()),
        TemplateField::HeaderText("Changed".to_string()),
        TemplateField::TextColor("#123456".to_string()),
        TemplateField::BackgroundColor("black".to_string()),
        TemplateField::FontSize(FontSize::new(13).unwrap()),
        TemplateField::FontWeight(FontWeight::Bold),
        TemplateField::FontFamily("Roboto".to_string()),
    ];

    for edit in edits {
        let key = edit.key();
        let after = before.with_field(edit);

        let mut old = serde_json::to_value(&before).unwrap();
        let mut new = serde_json::to_value(&after).unwrap();
        assert_ne!(old[key], new[key], "{key} was not replaced");

        old.as_object_mut().unwrap().remove(key);
        new.as_object_mut().unwrap().remove(key);
        assert_eq!(old, new, "editing {key} touched other fields");
    }
}

#[test]
fn set_position_replaces_only_one_axis() {
    let before = edited();

    let after = before.with_axis(AxisValue::X(HorizontalPosition::Left));
    assert_eq!(after.position.x, HorizontalPosition::Left);
    assert_eq!(after.position.y, before.position.y);
    assert_eq!(after.with_axis(AxisValue::X(before.position.x)), before);

    let after = before.with_axis(AxisValue::Y(VerticalPosition::Bottom));
    assert_eq!(after.position.y, VerticalPosition::Bottom);
    assert_eq!(after.position.x, before.position.x);
    assert_eq!(after.with_axis(AxisValue::Y(before.position.y)), before);
}

#[test]
fn model_operations_return_new_snapshot() {
    let mut model = TemplateModel::from_config(edited());

    let snapshot = model
        .set_field(TemplateField::HeaderText("Welcome".to_string()))
        .clone();
    assert_eq!(snapshot.header_text, "Welcome");
    assert_eq!(model.get(), &snapshot);

    model.set_position(AxisValue::Y(VerticalPosition::Top));
    assert_eq!(model.get().position.y, VerticalPosition::Top);
    assert_eq!(model.get().position.x, HorizontalPosition::Right);

    model.place(Position::new(HorizontalPosition::Center, VerticalPosition::Bottom));
    assert_eq!(
        model.get().position,
        Position::new(HorizontalPosition::Center, VerticalPosition::Bottom)
    );
}

#[test]
fn reset_always_yields_defaults() {
    let mut model = TemplateModel::from_config(edited());
    assert_eq!(model.reset(), &TemplateConfig::default());

    model.set_field(TemplateField::FontWeight(FontWeight::Light));
    model.set_position(AxisValue::X(HorizontalPosition::Center));
    assert_eq!(model.reset(), &TemplateConfig::default());
    assert_eq!(model.reset(), &TemplateConfig::default());
}

#[test]
fn edits_round_trip_through_tagged_json() {
    let edit: TemplateField =
        serde_json::from_str(r#"{"field":"headerText","value":"Hi"}"#).unwrap();
    assert_eq!(edit, TemplateField::HeaderText("Hi".to_string()));

    let edit: TemplateField = serde_json::from_str(r#"{"field":"fontWeight","value":"300"}"#).unwrap();
    assert_eq!(edit, TemplateField::FontWeight(FontWeight::Light));

    let axis: AxisValue = serde_json::from_str(r#"{"axis":"y","value":"center"}"#).unwrap();
    assert_eq!(axis, AxisValue::Y(VerticalPosition::Center));
}

#[test]
fn grid_has_nine_cells_with_one_active() {
    let current = Position::new(HorizontalPosition::Center, VerticalPosition::Bottom);
    let grid = position_grid(current);

    assert_eq!(grid.len(), 9);
    let active: Vec<_> = grid.iter().filter(|c| c.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].position, current);

    assert_eq!(
        grid[0].position,
        Position::new(HorizontalPosition::Left, VerticalPosition::Top)
    );
    assert_eq!(
        grid[2].position,
        Position::new(HorizontalPosition::Right, VerticalPosition::Top)
    );
    assert_eq!(
        grid[8].position,
        Position::new(HorizontalPosition::Right, VerticalPosition::Bottom)
    );
}
