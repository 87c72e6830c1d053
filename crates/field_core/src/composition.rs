//! Several independent fields laid out together.
//!
//! Each mounted field owns its own [`UnitFieldController`]; nothing is shared
//! between slots, so an event routed to one id can never be observed through
//! another.

use crate::controller::{FieldConfig, UnitFieldController};
use crate::error::FieldError;
use crate::event::FieldEvent;
use crate::id::FieldId;
use crate::state::FieldSnapshot;
use crate::traits::{TextSurface, UnitSelector, render_field};

#[derive(Clone, Debug)]
struct FieldSlot {
    id: FieldId,
    label: String,
    controller: UnitFieldController,
}

/// Ordered collection of mounted fields.
///
/// # Example
///
/// ```
/// use field_core::{FieldComposition, FieldConfig, FieldEvent, UnitSet};
///
/// let units = UnitSet::new(["px", "%", "Freeform"]).unwrap();
/// let mut fields = FieldComposition::new([
///     FieldConfig::new("Width", units.clone(), "px"),
///     FieldConfig::new("Height", units, "px"),
/// ])
/// .unwrap();
///
/// let ids = fields.ids();
/// fields.dispatch(ids[0], FieldEvent::UnitSelected("%".into())).unwrap();
///
/// assert_eq!(fields.snapshot(ids[0]).unwrap().unit, "%");
/// assert_eq!(fields.snapshot(ids[1]).unwrap().unit, "px");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldComposition {
    slots: Vec<FieldSlot>,
    next_id: FieldId,
}

impl FieldComposition {
    pub fn new<I>(configs: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = FieldConfig>,
    {
        let mut composition = Self::default();
        for config in configs {
            composition.mount(config)?;
        }
        Ok(composition)
    }

    /// Mount a new field at the end; returns its id.
    pub fn mount(&mut self, config: FieldConfig) -> Result<FieldId, FieldError> {
        let controller = UnitFieldController::from_config(&config)?;
        let id = self.next_id;
        self.next_id = id.next();
        log::debug!(target: "field_core", "mount {id} ({})", config.label);
        self.slots.push(FieldSlot {
            id,
            label: config.label,
            controller,
        });
        Ok(id)
    }

    /// Drop a field and all of its state. Returns `false` for unknown ids.
    pub fn unmount(&mut self, id: FieldId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let slot = self.slots.remove(pos);
        log::debug!(target: "field_core", "unmount {id} ({})", slot.label);
        true
    }

    /// Ids in mount order.
    pub fn ids(&self) -> Vec<FieldId> {
        self.slots.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn label(&self, id: FieldId) -> Option<&str> {
        self.slot(id).map(|s| s.label.as_str())
    }

    pub fn controller(&self, id: FieldId) -> Option<&UnitFieldController> {
        self.slot(id).map(|s| &s.controller)
    }

    pub fn snapshot(&self, id: FieldId) -> Option<FieldSnapshot> {
        self.controller(id).map(UnitFieldController::snapshot)
    }

    /// Route one event to exactly one field.
    pub fn dispatch(&mut self, id: FieldId, event: FieldEvent) -> Result<(), FieldError> {
        let pos = self.position(id).ok_or(FieldError::UnknownField { id })?;
        self.slots[pos].controller.apply(event)
    }

    /// Render every field in mount order, each from its own snapshot.
    ///
    /// A failing field does not stop the others from drawing; the first
    /// error is returned once every field has been rendered.
    pub fn render_all<R>(&mut self, renderer: &mut R) -> Result<(), FieldError>
    where
        R: TextSurface + UnitSelector + ?Sized,
    {
        let mut first_err = None;
        for slot in &mut self.slots {
            if let Err(err) = render_field(renderer, slot.id, &slot.label, &mut slot.controller) {
                log::debug!(target: "field_core", "{}: {err}", slot.id);
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn position(&self, id: FieldId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    fn slot(&self, id: FieldId) -> Option<&FieldSlot> {
        self.slots.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigProblem;
    use crate::traits::{TextSurfaceProps, UnitSelectorProps};
    use crate::units::UnitSet;

    fn css_units() -> UnitSet {
        UnitSet::new(["px", "%", "em", "rem", "vw", "Freeform"]).unwrap()
    }

    fn width_height() -> FieldComposition {
        FieldComposition::new([
            FieldConfig::new("Width", css_units(), "px"),
            FieldConfig::new("Height", css_units(), "px"),
        ])
        .unwrap()
    }

    #[test]
    fn width_unit_change_leaves_height_alone() {
        let mut fields = width_height();
        let [width, height] = fields.ids()[..] else {
            panic!("expected two fields");
        };

        fields
            .dispatch(width, FieldEvent::UnitSelected("%".into()))
            .unwrap();

        assert_eq!(fields.snapshot(width).unwrap().unit, "%");
        assert_eq!(fields.snapshot(height).unwrap().unit, "px");
    }

    #[test]
    fn labels_follow_mount_order() {
        let fields = width_height();
        let labels: Vec<_> = fields
            .ids()
            .into_iter()
            .filter_map(|id| fields.label(id))
            .collect();
        assert_eq!(labels, ["Width", "Height"]);
    }

    #[test]
    fn bad_config_aborts_construction() {
        let err = FieldComposition::new([
            FieldConfig::new("Width", css_units(), "px"),
            FieldConfig::new("Depth", css_units(), "mm"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidConfiguration {
                reason: ConfigProblem::UnknownInitialUnit("mm".into())
            }
        );
    }

    #[test]
    fn unmount_drops_state_and_never_reuses_ids() {
        let mut fields = width_height();
        let width = fields.ids()[0];
        fields
            .dispatch(width, FieldEvent::ValueChanged("10".into()))
            .unwrap();

        assert!(fields.unmount(width));
        assert!(!fields.unmount(width));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.snapshot(width), None);
        assert_eq!(
            fields.dispatch(width, FieldEvent::FocusGained),
            Err(FieldError::UnknownField { id: width })
        );

        let again = fields
            .mount(FieldConfig::new("Width", css_units(), "px"))
            .unwrap();
        assert_ne!(again, width);
        assert_eq!(fields.snapshot(again).unwrap().value, "");
    }

    /// Types into whichever slot is named, and focuses it.
    struct TypeInto {
        target: FieldId,
        text: &'static str,
        seen: Vec<(FieldId, String)>,
    }

    impl TextSurface for TypeInto {
        fn text_surface(&mut self, props: &TextSurfaceProps<'_>, events: &mut Vec<FieldEvent>) {
            self.seen.push((props.slot, props.label.to_string()));
            if props.slot == self.target {
                events.push(FieldEvent::FocusGained);
                events.push(FieldEvent::ValueChanged(self.text.to_string()));
            }
        }
    }

    impl UnitSelector for TypeInto {
        fn unit_selector(&mut self, _: &UnitSelectorProps<'_>, _: &mut Vec<FieldEvent>) {}
    }

    #[test]
    fn render_all_routes_events_to_their_own_slot() {
        let mut fields = width_height();
        let ids = fields.ids();
        let mut r = TypeInto {
            target: ids[1],
            text: "64",
            seen: Vec::new(),
        };

        fields.render_all(&mut r).unwrap();

        assert_eq!(
            r.seen,
            [(ids[0], "Width".to_string()), (ids[1], "Height".to_string())]
        );
        let width = fields.snapshot(ids[0]).unwrap();
        let height = fields.snapshot(ids[1]).unwrap();
        assert_eq!(width.value, "");
        assert!(!width.focused);
        assert_eq!(height.value, "64");
        assert!(height.focused);
    }

    /// Picks a unit outside the list for every field and types into each.
    struct PicksUnknownUnit {
        drawn: Vec<FieldId>,
    }

    impl TextSurface for PicksUnknownUnit {
        fn text_surface(&mut self, props: &TextSurfaceProps<'_>, events: &mut Vec<FieldEvent>) {
            self.drawn.push(props.slot);
            events.push(FieldEvent::ValueChanged(format!("{}", props.slot.as_raw())));
        }
    }

    impl UnitSelector for PicksUnknownUnit {
        fn unit_selector(&mut self, props: &UnitSelectorProps<'_>, events: &mut Vec<FieldEvent>) {
            if props.slot.as_raw() == 0 {
                events.push(FieldEvent::UnitSelected("pt".into()));
            }
        }
    }

    #[test]
    fn render_all_draws_every_field_past_a_failure() {
        let mut fields = width_height();
        let ids = fields.ids();
        let mut r = PicksUnknownUnit { drawn: Vec::new() };

        let err = fields.render_all(&mut r).unwrap_err();

        assert_eq!(err, FieldError::InvalidUnit { unit: "pt".into() });
        assert_eq!(r.drawn, ids);
        assert_eq!(fields.snapshot(ids[0]).unwrap().unit, "px");
        assert_eq!(fields.snapshot(ids[0]).unwrap().value, "0");
        assert_eq!(fields.snapshot(ids[1]).unwrap().value, "1");
    }
}
