//! Story registry for the `Inputs/TextField` group.
//!
//! Plain text field stories share one template: the field is controlled by
//! a value owned by the story, seeded from the story args. The unit selector
//! story mounts two independent unit-aware fields.

use crate::args::TextFieldArgs;
use crate::config::GalleryConfig;
use field_core::{FieldComposition, FieldConfig, FieldError, UnitSet};

pub const STORY_GROUP: &str = "Inputs/TextField";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoryId {
    TextField,
    TextFieldError,
    TextFieldDisabled,
    TextFieldNonEdit,
    TextFieldFullWidth,
    WithUnitSelector,
}

impl StoryId {
    pub const ALL: [StoryId; 6] = [
        StoryId::TextField,
        StoryId::TextFieldError,
        StoryId::TextFieldDisabled,
        StoryId::TextFieldNonEdit,
        StoryId::TextFieldFullWidth,
        StoryId::WithUnitSelector,
    ];

    /// Export name of the story.
    pub fn name(self) -> &'static str {
        match self {
            StoryId::TextField => "ExampleTextField",
            StoryId::TextFieldError => "ExampleTextFieldError",
            StoryId::TextFieldDisabled => "ExampleTextFieldDisabled",
            StoryId::TextFieldNonEdit => "ExampleTextFieldNonEdit",
            StoryId::TextFieldFullWidth => "ExampleTextFieldFullWidth",
            StoryId::WithUnitSelector => "ExampleTextFieldWithUnitSelector",
        }
    }

    /// Sidebar title.
    pub fn title(self) -> &'static str {
        match self {
            StoryId::TextField => "Example Text Field",
            StoryId::TextFieldError => "Error",
            StoryId::TextFieldDisabled => "Disabled",
            StoryId::TextFieldNonEdit => "Non Edit",
            StoryId::TextFieldFullWidth => "Full Width",
            StoryId::WithUnitSelector => "With Unit Selector",
        }
    }

    /// Case-insensitive match on the export name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Args for template stories; `None` for stories with their own render.
    pub fn args(self) -> Option<TextFieldArgs> {
        let base = TextFieldArgs::example();
        let args = match self {
            StoryId::TextField => base,
            StoryId::TextFieldError => TextFieldArgs {
                error: true,
                ..base
            },
            StoryId::TextFieldDisabled => TextFieldArgs {
                disabled: true,
                ..base
            },
            StoryId::TextFieldNonEdit => TextFieldArgs {
                non_edit: true,
                value: Some("NonEdit example value".to_string()),
                ..base
            },
            StoryId::TextFieldFullWidth => TextFieldArgs {
                full_width: true,
                ..base
            },
            StoryId::WithUnitSelector => return None,
        };
        Some(args)
    }
}

/// A single controlled text field.
#[derive(Clone, Debug)]
pub struct TemplateStory {
    pub args: TextFieldArgs,
    pub value: String,
    /// Set once `autoFocus` has been honored.
    pub focus_requested: bool,
}

impl TemplateStory {
    pub fn new(args: TextFieldArgs) -> Self {
        let value = args.value.clone().unwrap_or_default();
        Self {
            args,
            value,
            focus_requested: false,
        }
    }

    pub fn on_change(&mut self, text: String) {
        self.value = text;
    }
}

/// Width and Height fields sharing a unit list but nothing else.
#[derive(Clone, Debug)]
pub struct UnitSelectorStory {
    pub fields: FieldComposition,
    pub placeholder: &'static str,
    pub field_width: f32,
}

impl UnitSelectorStory {
    pub const LABELS: [&'static str; 2] = ["Width", "Height"];

    pub fn new(config: &GalleryConfig) -> Result<Self, FieldError> {
        let units = UnitSet::with_freeform(config.units.iter().cloned(), config.freeform.clone())?;
        let fields = FieldComposition::new(
            Self::LABELS.map(|label| FieldConfig::new(label, units.clone(), &config.default_unit)),
        )?;
        Ok(Self {
            fields,
            placeholder: "Placeholder",
            field_width: 200.0,
        })
    }
}

#[derive(Clone, Debug)]
pub enum Story {
    Template(TemplateStory),
    UnitSelector(UnitSelectorStory),
}

impl Story {
    pub fn build(id: StoryId, config: &GalleryConfig) -> Result<Self, FieldError> {
        log::debug!(target: "gallery", "building story {}", id.name());
        match id.args() {
            Some(args) => Ok(Story::Template(TemplateStory::new(args))),
            None => UnitSelectorStory::new(config).map(Story::UnitSelector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_core::{ConfigProblem, InputMode};

    #[test]
    fn names_round_trip_case_insensitively() {
        for id in StoryId::ALL {
            assert_eq!(StoryId::from_name(id.name()), Some(id));
            assert_eq!(StoryId::from_name(&id.name().to_lowercase()), Some(id));
        }
        assert_eq!(StoryId::from_name("Primary"), None);
    }

    #[test]
    fn variants_override_only_their_flag() {
        let base = StoryId::TextField.args().unwrap();

        let error = StoryId::TextFieldError.args().unwrap();
        assert!(error.error);
        assert_eq!(TextFieldArgs { error: false, ..error }, base);

        let disabled = StoryId::TextFieldDisabled.args().unwrap();
        assert_eq!(TextFieldArgs { disabled: false, ..disabled }, base);

        let full = StoryId::TextFieldFullWidth.args().unwrap();
        assert_eq!(TextFieldArgs { full_width: false, ..full }, base);
    }

    #[test]
    fn non_edit_story_is_seeded_with_value() {
        let Ok(Story::Template(story)) =
            Story::build(StoryId::TextFieldNonEdit, &GalleryConfig::default())
        else {
            panic!("expected template story");
        };
        assert!(story.args.non_edit);
        assert_eq!(story.value, "NonEdit example value");
    }

    #[test]
    fn template_value_starts_empty_and_follows_edits() {
        let mut story = TemplateStory::new(StoryId::TextField.args().unwrap());
        assert_eq!(story.value, "");
        story.on_change("12".to_string());
        assert_eq!(story.value, "12");
    }

    #[test]
    fn unit_selector_story_mounts_width_and_height() {
        let story = UnitSelectorStory::new(&GalleryConfig::default()).unwrap();
        let ids = story.fields.ids();
        assert_eq!(ids.len(), 2);
        for (id, label) in ids.iter().zip(UnitSelectorStory::LABELS) {
            assert_eq!(story.fields.label(*id), Some(label));
            let snap = story.fields.snapshot(*id).unwrap();
            assert_eq!(snap.unit, "px");
            assert_eq!(snap.value, "");
            assert_eq!(snap.input_mode, InputMode::Numeric);
        }
    }

    #[test]
    fn default_unit_outside_configured_units_fails() {
        let config = GalleryConfig {
            units: vec!["em".into(), "rem".into()],
            ..GalleryConfig::default()
        };
        let err = Story::build(StoryId::WithUnitSelector, &config).unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidConfiguration {
                reason: ConfigProblem::UnknownInitialUnit("px".into())
            }
        );
    }
}
