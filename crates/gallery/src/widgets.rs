//! egui renderings of the text field and of the field capabilities.

use crate::args::{Margin, TextFieldArgs};
use egui::{ComboBox, Id, Response, RichText, Stroke, TextEdit, Ui, Visuals};
use field_core::{
    FieldEvent, FieldId, TextSurface, TextSurfaceProps, UnitSelector, UnitSelectorProps,
};

/// Characters a numeric surface lets through, mirroring what a browser
/// number input accepts while typing.
pub fn accepts_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// True when the span an edit inserted holds characters a numeric surface
/// would refuse. Text that was already there (e.g. typed under the freeform
/// unit) stays.
fn adds_non_numeric(before: &str, after: &str) -> bool {
    let prefix: usize = before
        .chars()
        .zip(after.chars())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();
    let (before, after) = (&before[prefix..], &after[prefix..]);
    let suffix: usize = before
        .chars()
        .rev()
        .zip(after.chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();
    after[..after.len() - suffix]
        .chars()
        .any(|c| !accepts_numeric_char(c))
}

/// Edit box outline: error wins over the forced focus outline.
fn apply_outline(visuals: &mut Visuals, args: &TextFieldArgs) {
    let stroke = if args.error {
        Stroke::new(1.0, visuals.error_fg_color)
    } else if args.focused {
        visuals.selection.stroke
    } else {
        return;
    };
    visuals.widgets.inactive.bg_stroke = stroke;
    visuals.widgets.hovered.bg_stroke = stroke;
    visuals.selection.stroke = stroke;
}

/// Id of the value edit drawn for `slot` by [`EguiFieldRenderer`].
pub fn value_edit_id(slot: FieldId) -> Id {
    Id::new(("field-value", slot))
}

/// Draw a full text field for a template story and return the edit's
/// response. `value` is only modified by user edits.
pub fn text_field(ui: &mut Ui, args: &TextFieldArgs, value: &mut String) -> Response {
    ui.scope(|ui| {
        ui.spacing_mut().item_spacing.y = match args.margin {
            Margin::Dense => 2.0,
            Margin::None => 4.0,
        };
        let error_color = ui.visuals().error_fg_color;
        apply_outline(ui.visuals_mut(), args);

        if !args.hidden_label {
            let mut label = args.label.clone();
            if args.required {
                label.push_str(" *");
            }
            let mut text = RichText::new(label);
            if args.error {
                text = text.color(error_color);
            }
            ui.label(text);
        }

        let response = ui
            .horizontal(|ui| {
                let suffix_w = if args.unit_label.is_empty() { 0.0 } else { 32.0 };
                let width = if args.full_width {
                    (ui.available_width() - suffix_w).max(args.min_width)
                } else {
                    args.min_width.max(120.0)
                };
                let edit = if args.multiline {
                    TextEdit::multiline(value)
                } else {
                    TextEdit::singleline(value)
                };
                let edit = edit
                    .id_salt(&args.id)
                    .hint_text(args.placeholder.as_str())
                    .desired_width(width)
                    .interactive(!args.non_edit);
                let response = ui.add_enabled(!args.disabled, edit);
                if !args.unit_label.is_empty() {
                    ui.label(RichText::new(&args.unit_label).weak());
                }
                response
            })
            .inner;

        if !args.helper_text.is_empty() || !args.helper_icon_tooltip.is_empty() {
            ui.horizontal(|ui| {
                let mut helper = RichText::new(&args.helper_text).small();
                if args.error {
                    helper = helper.color(error_color);
                }
                ui.label(helper);
                if !args.helper_icon_tooltip.is_empty() {
                    ui.label(RichText::new("ⓘ").small())
                        .on_hover_text(args.helper_icon_tooltip.as_str());
                }
            });
        }

        if !args.action_props.is_empty() {
            ui.horizontal(|ui| {
                for action in &args.action_props {
                    ui.hyperlink_to(action.label.as_str(), &action.href);
                }
            });
        }

        response
    })
    .inner
}

/// Draws unit-aware fields into a `Ui`, one text surface followed by its
/// unit selector.
pub struct EguiFieldRenderer<'a> {
    ui: &'a mut Ui,
    placeholder: &'a str,
    width: f32,
}

impl<'a> EguiFieldRenderer<'a> {
    pub fn new(ui: &'a mut Ui, placeholder: &'a str, width: f32) -> Self {
        Self {
            ui,
            placeholder,
            width,
        }
    }
}

impl TextSurface for EguiFieldRenderer<'_> {
    fn text_surface(&mut self, props: &TextSurfaceProps<'_>, events: &mut Vec<FieldEvent>) {
        let placeholder = self.placeholder;
        let width = self.width;
        let mut text = props.value.to_owned();

        let response = self
            .ui
            .push_id(props.slot, |ui| {
                ui.vertical(|ui| {
                    ui.label(props.label);
                    ui.add(
                        TextEdit::singleline(&mut text)
                            .id(value_edit_id(props.slot))
                            .hint_text(placeholder)
                            .desired_width(width),
                    )
                })
                .inner
            })
            .inner;

        let has_focus = response.has_focus();
        if has_focus && !props.focused {
            events.push(FieldEvent::FocusGained);
        }
        if response.changed()
            && text != props.value
            && (!props.mode.is_numeric() || !adds_non_numeric(props.value, &text))
        {
            events.push(FieldEvent::ValueChanged(text));
        }
        if !has_focus && props.focused {
            events.push(FieldEvent::FocusLost);
        }
    }
}

impl UnitSelector for EguiFieldRenderer<'_> {
    fn unit_selector(&mut self, props: &UnitSelectorProps<'_>, events: &mut Vec<FieldEvent>) {
        let mut selected = props.selected.to_owned();

        self.ui.scope(|ui| {
            if props.active {
                let stroke = ui.visuals().selection.stroke;
                ui.visuals_mut().widgets.inactive.bg_stroke = stroke;
            }
            let label = if props.active {
                RichText::new(props.selected).strong()
            } else {
                RichText::new(props.selected)
            };
            ComboBox::from_id_salt(("unit", props.slot))
                .selected_text(label)
                .width(64.0)
                .show_ui(ui, |ui| {
                    for unit in props.options {
                        ui.selectable_value(&mut selected, unit.clone(), unit.as_str());
                    }
                });
        });

        if selected != props.selected {
            events.push(FieldEvent::UnitSelected(selected));
        }
    }
}
