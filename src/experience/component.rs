use crate::core::{ComponentId, ConfigValue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One node of a step's declarative component tree.
///
/// Consumers match on this exhaustively so that a new kind fails to compile
/// everywhere it has not been handled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExperienceComponent {
    Text(TextModel),
    Button(ButtonModel),
    Image(ImageModel),
    Spacer(SpacerModel),
    Embed(EmbedModel),
    CustomComponent(CustomComponentModel),
    Stack(StackModel),
    Box(BoxModel),
    Pager(PagerModel),
    TextInput(TextInputModel),
    OptionSelect(OptionSelectModel),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextModel {
    pub id: ComponentId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ButtonModel {
    pub id: ComponentId,
    pub content: Box<ExperienceComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageModel {
    pub id: ComponentId,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub accessibility_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacerModel {
    pub id: ComponentId,
    #[serde(default)]
    pub spacing: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbedModel {
    pub id: ComponentId,
    pub embed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomComponentModel {
    pub id: ComponentId,
    pub identifier: String,
    #[serde(default)]
    pub config: Option<ConfigValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StackModel {
    pub id: ComponentId,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub items: Vec<ExperienceComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    pub id: ComponentId,
    #[serde(default)]
    pub items: Vec<ExperienceComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagerModel {
    pub id: ComponentId,
    #[serde(default)]
    pub items: Vec<ExperienceComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextInputModel {
    pub id: ComponentId,
    pub label: TextModel,
    #[serde(default)]
    pub placeholder: Option<TextModel>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub number_of_lines: Option<u32>,
    #[serde(default)]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SelectMode {
    #[default]
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DisplayFormat {
    VerticalList,
    HorizontalList,
    Picker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: String,
    pub content: ExperienceComponent,
    #[serde(default)]
    pub selected_content: Option<ExperienceComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionSelectModel {
    pub id: ComponentId,
    pub label: TextModel,
    #[serde(default)]
    pub select_mode: SelectMode,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub default_value: Option<Vec<String>>,
    #[serde(default)]
    pub min_selections: Option<u32>,
    #[serde(default)]
    pub max_selections: Option<u32>,
    #[serde(default)]
    pub display_format: Option<DisplayFormat>,
}

impl OptionSelectModel {
    /// Configured minimum, clamped to the number of options actually offered.
    pub fn effective_min_selections(&self) -> u32 {
        let option_count = u32::try_from(self.options.len()).unwrap_or(u32::MAX);
        self.min_selections.unwrap_or(0).min(option_count)
    }

    /// Configured maximum, never below the effective minimum.
    pub fn effective_max_selections(&self) -> Option<u32> {
        let min = self.effective_min_selections();
        self.max_selections.map(|max| max.max(min))
    }
}

impl ExperienceComponent {
    pub fn id(&self) -> &ComponentId {
        match self {
            Self::Text(model) => &model.id,
            Self::Button(model) => &model.id,
            Self::Image(model) => &model.id,
            Self::Spacer(model) => &model.id,
            Self::Embed(model) => &model.id,
            Self::CustomComponent(model) => &model.id,
            Self::Stack(model) => &model.id,
            Self::Box(model) => &model.id,
            Self::Pager(model) => &model.id,
            Self::TextInput(model) => &model.id,
            Self::OptionSelect(model) => &model.id,
        }
    }

    /// Structural children. Option contents and input labels are presentation
    /// details of their parent and are not part of the walk.
    pub fn children(&self) -> &[ExperienceComponent] {
        match self {
            Self::Stack(model) => &model.items,
            Self::Box(model) => &model.items,
            Self::Pager(model) => &model.items,
            Self::Button(model) => std::slice::from_ref(model.content.as_ref()),
            Self::Text(_)
            | Self::Image(_)
            | Self::Spacer(_)
            | Self::Embed(_)
            | Self::CustomComponent(_)
            | Self::TextInput(_)
            | Self::OptionSelect(_) => &[],
        }
    }

    pub fn is_input(&self) -> bool {
        match self {
            Self::TextInput(_) | Self::OptionSelect(_) => true,
            Self::Text(_)
            | Self::Button(_)
            | Self::Image(_)
            | Self::Spacer(_)
            | Self::Embed(_)
            | Self::CustomComponent(_)
            | Self::Stack(_)
            | Self::Box(_)
            | Self::Pager(_) => false,
        }
    }

    pub fn find(&self, id: &str) -> Option<&ExperienceComponent> {
        if self.id().as_str() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Human readable summary of the subtree, used to describe the view an
    /// interaction came from.
    pub fn text_description(&self) -> Option<String> {
        let mut parts = Vec::new();
        collect_text(self, &mut parts);
        let description = parts.join(" ");
        (!description.is_empty()).then_some(description)
    }
}

pub fn visit_components(root: &ExperienceComponent, f: &mut impl FnMut(&ExperienceComponent)) {
    f(root);
    for child in root.children() {
        visit_components(child, f);
    }
}

fn collect_text(component: &ExperienceComponent, parts: &mut Vec<String>) {
    match component {
        ExperienceComponent::Text(model) => {
            let text = model.text.trim();
            if !text.is_empty() {
                parts.push(text.to_string());
            }
        }
        ExperienceComponent::Image(model) => {
            if let Some(label) = &model.accessibility_label {
                parts.push(label.clone());
            }
        }
        ExperienceComponent::TextInput(model) => parts.push(model.label.text.clone()),
        ExperienceComponent::OptionSelect(model) => parts.push(model.label.text.clone()),
        ExperienceComponent::Button(_)
        | ExperienceComponent::Spacer(_)
        | ExperienceComponent::Embed(_)
        | ExperienceComponent::CustomComponent(_)
        | ExperienceComponent::Stack(_)
        | ExperienceComponent::Box(_)
        | ExperienceComponent::Pager(_) => {
            for child in component.children() {
                collect_text(child, parts);
            }
        }
    }
}
