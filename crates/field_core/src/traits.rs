//! Rendering capabilities a host implements to draw unit-aware fields.
//!
//! The two primitives are modeled as independent capabilities rather than a
//! widget hierarchy:
//! - [`TextSurface`]: a labeled text surface (value, on-change, focus events)
//! - [`UnitSelector`]: a token picker (options, selected, on-select, active)
//!
//! A host renders one field by handing both capabilities the field's own
//! snapshot via [`render_field`]. Renderers never mutate controllers
//! directly; they only push [`FieldEvent`]s which are applied afterwards, in
//! emission order.

use crate::controller::UnitFieldController;
use crate::error::FieldError;
use crate::event::FieldEvent;
use crate::id::FieldId;
use crate::units::InputMode;

/// What a text surface needs to draw one field.
#[derive(Clone, Copy, Debug)]
pub struct TextSurfaceProps<'a> {
    /// Stable per-field key, usable for widget ids.
    pub slot: FieldId,
    pub label: &'a str,
    pub value: &'a str,
    pub mode: InputMode,
    pub focused: bool,
}

/// What a unit selector needs to draw one field's adornment.
#[derive(Clone, Copy, Debug)]
pub struct UnitSelectorProps<'a> {
    pub slot: FieldId,
    /// The exact unit sequence the field was built with.
    pub options: &'a [String],
    pub selected: &'a str,
    /// Mirrors the field's focus state.
    pub active: bool,
}

pub trait TextSurface {
    /// Draw the surface and push `ValueChanged` / `FocusGained` / `FocusLost`
    /// for whatever happened this frame.
    fn text_surface(&mut self, props: &TextSurfaceProps<'_>, events: &mut Vec<FieldEvent>);
}

pub trait UnitSelector {
    /// Draw the selector and push `UnitSelected` for a pick. Implementations
    /// must only offer `props.options`.
    fn unit_selector(&mut self, props: &UnitSelectorProps<'_>, events: &mut Vec<FieldEvent>);
}

/// Render one field and apply the events its primitives produced.
///
/// Stops at the first failing event; later events of the same frame are
/// dropped along with the error.
pub fn render_field<R>(
    renderer: &mut R,
    slot: FieldId,
    label: &str,
    controller: &mut UnitFieldController,
) -> Result<(), FieldError>
where
    R: TextSurface + UnitSelector + ?Sized,
{
    let snap = controller.snapshot();
    let mut events = Vec::new();

    renderer.text_surface(
        &TextSurfaceProps {
            slot,
            label,
            value: &snap.value,
            mode: snap.input_mode,
            focused: snap.focused,
        },
        &mut events,
    );
    renderer.unit_selector(
        &UnitSelectorProps {
            slot,
            options: controller.units().as_slice(),
            selected: &snap.unit,
            active: snap.focused,
        },
        &mut events,
    );

    for event in events {
        controller.apply(event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSet;

    /// Replays canned events and records what it was asked to draw.
    #[derive(Default)]
    struct Scripted {
        typed: Option<String>,
        pick: Option<String>,
        focus: bool,
        seen_modes: Vec<InputMode>,
        seen_active: Vec<bool>,
        seen_options: Vec<Vec<String>>,
    }

    impl TextSurface for Scripted {
        fn text_surface(&mut self, props: &TextSurfaceProps<'_>, events: &mut Vec<FieldEvent>) {
            self.seen_modes.push(props.mode);
            if self.focus && !props.focused {
                events.push(FieldEvent::FocusGained);
            }
            if let Some(text) = self.typed.take() {
                events.push(FieldEvent::ValueChanged(text));
            }
        }
    }

    impl UnitSelector for Scripted {
        fn unit_selector(&mut self, props: &UnitSelectorProps<'_>, events: &mut Vec<FieldEvent>) {
            self.seen_active.push(props.active);
            self.seen_options.push(props.options.to_vec());
            if let Some(unit) = self.pick.take() {
                events.push(FieldEvent::UnitSelected(unit));
            }
        }
    }

    fn field() -> UnitFieldController {
        let units = UnitSet::new(["px", "%", "Freeform"]).unwrap();
        UnitFieldController::new(units, "px", "").unwrap()
    }

    #[test]
    fn events_apply_after_both_primitives_draw() {
        let mut controller = field();
        let mut r = Scripted {
            typed: Some("12".into()),
            pick: Some("Freeform".into()),
            focus: true,
            ..Default::default()
        };

        render_field(&mut r, FieldId::from_raw(0), "Width", &mut controller).unwrap();
        // Both primitives saw the pre-frame snapshot.
        assert_eq!(r.seen_modes, [InputMode::Numeric]);
        assert_eq!(r.seen_active, [false]);
        assert_eq!(r.seen_options, [vec!["px", "%", "Freeform"]]);

        render_field(&mut r, FieldId::from_raw(0), "Width", &mut controller).unwrap();
        assert_eq!(r.seen_modes[1], InputMode::FreeText);
        assert!(r.seen_active[1]);
        assert_eq!(controller.value(), "12");
    }

    #[test]
    fn bad_pick_is_reported_and_unit_kept() {
        let mut controller = field();
        let mut r = Scripted {
            pick: Some("pt".into()),
            ..Default::default()
        };
        let err = render_field(&mut r, FieldId::from_raw(1), "Height", &mut controller)
            .unwrap_err();
        assert_eq!(err, FieldError::InvalidUnit { unit: "pt".into() });
        assert_eq!(controller.unit(), "px");
    }
}
