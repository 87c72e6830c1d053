//! Text field arguments and the declarative argument table.
//!
//! The table documents the configuration surface of the text field. It is a
//! static map written out by hand; nothing here inspects a live component.

/// How an option is edited in the args panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Radio(&'static [&'static str]),
    Text,
    Boolean,
    Object,
    /// Documented but not editable.
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgDefault {
    Str(&'static str),
    Bool(bool),
    /// No default is shown.
    Unset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub default: ArgDefault,
    pub control: ControlKind,
}

const fn arg(
    name: &'static str,
    description: &'static str,
    default: ArgDefault,
    control: ControlKind,
) -> ArgSpec {
    ArgSpec {
        name,
        description,
        default,
        control,
    }
}

const MUI_TEXT_FIELD_API: &str = "https://mui.com/material-ui/api/text-field/";

pub static TEXT_FIELD_ARGS: &[ArgSpec] = &[
    arg(
        "margin",
        "If dense or normal, will adjust vertical spacing of this and contained components. \"none\" \"dense\"",
        ArgDefault::Str("none"),
        ControlKind::Radio(&["dense", "none"]),
    ),
    arg(
        "color",
        "The color of the component. It supports both default and custom theme colors, which can be added as shown in the palette customization guide.",
        ArgDefault::Str("primary"),
        ControlKind::Radio(&["primary"]),
    ),
    arg(
        "size",
        "Attribute to set the size.",
        ArgDefault::Str("medium"),
        ControlKind::Radio(&["medium"]),
    ),
    arg("label", "Attribute to set the label.", ArgDefault::Str(""), ControlKind::Text),
    arg("id", "Attribute to set the id.", ArgDefault::Str(""), ControlKind::Text),
    arg(
        "helperText",
        "Attribute to set the helper text.",
        ArgDefault::Str(""),
        ControlKind::Text,
    ),
    arg(
        "helperIconTooltip",
        "Attribute to set the text of the tooltip for the helper icon.",
        ArgDefault::Str(""),
        ControlKind::Text,
    ),
    arg(
        "unitLabel",
        "Attribute which can be used to define the unit of that component",
        ArgDefault::Str(""),
        ControlKind::Text,
    ),
    arg(
        "placeholder",
        "Attribute which is used to define the placeholder value.",
        ArgDefault::Str(""),
        ControlKind::Text,
    ),
    arg(
        "error",
        "If `true`, the error state will be enabled.",
        ArgDefault::Unset,
        ControlKind::Boolean,
    ),
    arg(
        "hiddenLabel",
        "If `true`, the label will hide.",
        ArgDefault::Bool(false),
        ControlKind::Boolean,
    ),
    arg(
        "nonEdit",
        "If `true`, the component is only readable. No interactions are possible.",
        ArgDefault::Bool(false),
        ControlKind::Boolean,
    ),
    arg(
        "disabled",
        "If `true`, the component is disabled.",
        ArgDefault::Bool(false),
        ControlKind::Boolean,
    ),
    arg(
        "required",
        "If `true`, the `input` element is required.",
        ArgDefault::Bool(false),
        ControlKind::Boolean,
    ),
    arg(
        "sx",
        "The system prop that allows defining system overrides as well as additional CSS styles.",
        ArgDefault::Unset,
        ControlKind::Object,
    ),
    arg(
        "fullWidth",
        "If true, the input will take up the full width of its container.",
        ArgDefault::Unset,
        ControlKind::Boolean,
    ),
    arg(
        "autoFocus",
        "If true, the input element is focused during the first mount.",
        ArgDefault::Unset,
        ControlKind::Boolean,
    ),
    arg(
        "multiline",
        "If true, a textarea element is rendered instead of an input.",
        ArgDefault::Unset,
        ControlKind::Boolean,
    ),
    arg(
        "endAdornmentAction",
        "This can be used to add a prefix, a suffix, or an action to an input.",
        ArgDefault::Unset,
        ControlKind::Disabled,
    ),
    arg(
        "actionProps",
        "Attribute to define the action href and label.",
        ArgDefault::Unset,
        ControlKind::Disabled,
    ),
    arg(
        "renderNonEditInput",
        MUI_TEXT_FIELD_API,
        ArgDefault::Unset,
        ControlKind::Disabled,
    ),
    arg("ref", MUI_TEXT_FIELD_API, ArgDefault::Unset, ControlKind::Disabled),
];

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlKind::Radio(options) => write!(f, "radio [{}]", options.join(", ")),
            ControlKind::Text => write!(f, "text"),
            ControlKind::Boolean => write!(f, "boolean"),
            ControlKind::Object => write!(f, "object"),
            ControlKind::Disabled => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for ArgDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgDefault::Str(s) => write!(f, "{s:?}"),
            ArgDefault::Bool(b) => write!(f, "{b}"),
            ArgDefault::Unset => write!(f, "-"),
        }
    }
}

pub fn lookup(name: &str) -> Option<&'static ArgSpec> {
    TEXT_FIELD_ARGS.iter().find(|spec| spec.name == name)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Margin {
    Dense,
    #[default]
    None,
}

impl Margin {
    pub fn as_str(self) -> &'static str {
        match self {
            Margin::Dense => "dense",
            Margin::None => "none",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLink {
    pub href: String,
    pub label: String,
}

/// Arguments of one text field story.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldArgs {
    pub margin: Margin,
    pub color: &'static str,
    pub size: &'static str,
    pub label: String,
    pub id: String,
    pub helper_text: String,
    pub helper_icon_tooltip: String,
    pub placeholder: String,
    pub unit_label: String,
    pub required: bool,
    pub disabled: bool,
    pub error: bool,
    pub full_width: bool,
    pub multiline: bool,
    pub auto_focus: bool,
    /// Draw the field with the focused outline regardless of keyboard focus.
    pub focused: bool,
    pub hidden_label: bool,
    pub non_edit: bool,
    pub action_props: Vec<ActionLink>,
    /// `sx.minWidth`, in points.
    pub min_width: f32,
    /// Seed for the story's value state.
    pub value: Option<String>,
}

impl Default for TextFieldArgs {
    fn default() -> Self {
        Self {
            margin: Margin::None,
            color: "primary",
            size: "medium",
            label: String::new(),
            id: String::new(),
            helper_text: String::new(),
            helper_icon_tooltip: String::new(),
            placeholder: String::new(),
            unit_label: String::new(),
            required: false,
            disabled: false,
            error: false,
            full_width: false,
            multiline: false,
            auto_focus: false,
            focused: false,
            hidden_label: false,
            non_edit: false,
            action_props: Vec::new(),
            min_width: 0.0,
            value: None,
        }
    }
}

impl TextFieldArgs {
    /// Args of the base example every other text field story builds on.
    pub fn example() -> Self {
        let action = || ActionLink {
            href: "#".to_string(),
            label: "Action".to_string(),
        };
        Self {
            margin: Margin::None,
            label: "Label".to_string(),
            id: "input-id".to_string(),
            helper_text: "Some important text".to_string(),
            helper_icon_tooltip: "Some information about that component.".to_string(),
            placeholder: "Placeholder".to_string(),
            unit_label: "kg".to_string(),
            required: true,
            action_props: vec![action(), action()],
            min_width: 240.0,
            ..Self::default()
        }
    }

    /// Current value of a documented option, formatted for the args panel.
    pub fn display_value(&self, name: &str) -> Option<String> {
        let flag = |b: bool| Some(b.to_string());
        match name {
            "margin" => Some(self.margin.as_str().to_string()),
            "color" => Some(self.color.to_string()),
            "size" => Some(self.size.to_string()),
            "label" => Some(self.label.clone()),
            "id" => Some(self.id.clone()),
            "helperText" => Some(self.helper_text.clone()),
            "helperIconTooltip" => Some(self.helper_icon_tooltip.clone()),
            "unitLabel" => Some(self.unit_label.clone()),
            "placeholder" => Some(self.placeholder.clone()),
            "error" => flag(self.error),
            "hiddenLabel" => flag(self.hidden_label),
            "nonEdit" => flag(self.non_edit),
            "disabled" => flag(self.disabled),
            "required" => flag(self.required),
            "fullWidth" => flag(self.full_width),
            "autoFocus" => flag(self.auto_focus),
            "focused" => flag(self.focused),
            "multiline" => flag(self.multiline),
            "sx" => Some(format!("{{ minWidth: {}px }}", self.min_width)),
            "actionProps" => Some(
                self.action_props
                    .iter()
                    .map(|a| format!("{} ({})", a.label, a.href))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }
}
