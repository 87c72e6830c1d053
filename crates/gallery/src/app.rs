use crate::args::{TEXT_FIELD_ARGS, TextFieldArgs};
use crate::config::GalleryConfig;
use crate::stories::{STORY_GROUP, Story, StoryId};
use crate::widgets::{EguiFieldRenderer, text_field};
use app_api::UiApp;
use egui::{CentralPanel, Context, Grid, ScrollArea, SidePanel, TopBottomPanel, Ui};
use field_core::{FieldComposition, FieldError};

/// Story browser: sidebar of stories, the selected story in the middle and
/// its args (or live field state) underneath.
pub struct GalleryApp {
    config: GalleryConfig,
    selected: StoryId,
    story: Option<Story>,
    status: Option<String>,
}

impl GalleryApp {
    pub fn new(config: GalleryConfig) -> Self {
        let initial = config.initial_story;
        let mut app = Self {
            config,
            selected: initial,
            story: None,
            status: None,
        };
        app.select(initial);
        app
    }

    /// Mount `id`, dropping the previous story's state.
    pub fn select(&mut self, id: StoryId) {
        self.selected = id;
        self.status = None;
        match Story::build(id, &self.config) {
            Ok(story) => {
                log::info!(target: "gallery", "showing {STORY_GROUP}/{}", id.name());
                self.story = Some(story);
            }
            Err(err) => {
                self.story = None;
                self.report(&err);
            }
        }
    }

    pub fn selected(&self) -> StoryId {
        self.selected
    }

    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    /// Last contract error, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn report(&mut self, err: &FieldError) {
        log::error!(target: "gallery", "{}: {err}", self.selected.name());
        self.status = Some(err.to_string());
    }
}

impl UiApp for GalleryApp {
    fn title(&self) -> &str {
        "Fieldbook"
    }

    fn ui(&mut self, ctx: &Context) {
        let mut picked = None;
        SidePanel::left("stories")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(STORY_GROUP);
                ui.separator();
                for id in StoryId::ALL {
                    let current = id == self.selected;
                    if ui.selectable_label(current, id.title()).clicked() && !current {
                        picked = Some(id);
                    }
                }
            });
        if let Some(id) = picked {
            self.select(id);
        }

        TopBottomPanel::bottom("details")
            .resizable(true)
            .show(ctx, |ui| {
                if let Some(status) = &self.status {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, status.as_str());
                }
                match &self.story {
                    Some(Story::Template(story)) => args_panel(ui, &story.args),
                    Some(Story::UnitSelector(story)) => fields_panel(ui, &story.fields),
                    None => {}
                }
            });

        let mut result = Ok(());
        CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.selected.name());
            ui.separator();
            if let Some(story) = self.story.as_mut() {
                result = show_story(ui, story);
            }
        });
        if let Err(err) = result {
            self.report(&err);
        }
    }
}

fn show_story(ui: &mut Ui, story: &mut Story) -> Result<(), FieldError> {
    match story {
        Story::Template(story) => {
            let mut text = story.value.clone();
            let response = text_field(ui, &story.args, &mut text);
            if story.args.auto_focus && !story.focus_requested {
                response.request_focus();
                story.focus_requested = true;
            }
            if response.changed() {
                story.on_change(text);
            }
            Ok(())
        }
        Story::UnitSelector(story) => {
            let placeholder = story.placeholder;
            let width = story.field_width;
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;
                story
                    .fields
                    .render_all(&mut EguiFieldRenderer::new(ui, placeholder, width))
            })
            .inner
        }
    }
}

fn args_panel(ui: &mut Ui, args: &TextFieldArgs) {
    ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
        Grid::new("args").striped(true).num_columns(5).show(ui, |ui| {
            for header in ["Name", "Description", "Default", "Control", "Value"] {
                ui.strong(header);
            }
            ui.end_row();

            for spec in TEXT_FIELD_ARGS {
                ui.monospace(spec.name);
                ui.label(spec.description);
                ui.label(spec.default.to_string());
                ui.label(spec.control.to_string());
                ui.label(args.display_value(spec.name).unwrap_or_else(|| "-".to_string()));
                ui.end_row();
            }
        });
    });
}

fn fields_panel(ui: &mut Ui, fields: &FieldComposition) {
    Grid::new("fields").striped(true).num_columns(5).show(ui, |ui| {
        for header in ["Field", "Value", "Unit", "Input type", "Active"] {
            ui.strong(header);
        }
        ui.end_row();

        for id in fields.ids() {
            let (Some(label), Some(snap)) = (fields.label(id), fields.snapshot(id)) else {
                continue;
            };
            ui.label(label);
            ui.monospace(format!("{:?}", snap.value));
            ui.label(snap.unit);
            ui.label(snap.input_mode.input_type());
            ui.label(snap.focused.to_string());
            ui.end_row();
        }
    });
}
