use crate::action::completion::Completion;
use crate::action::context::{ExperienceContext, StepReference};
use crate::action::registry::{ActionRegistry, ActionType, ExperienceAction};
use crate::core::{ConfigValue, PluginConfig, StepId};
use indexmap::IndexMap;
use std::rc::Weak;

impl ActionRegistry {
    pub fn with_builtin_actions(context: Weak<dyn ExperienceContext>) -> Self {
        let mut registry = Self::new(context);
        registry.register::<UpdateProfileAction>();
        registry.register::<LaunchExperienceAction>();
        registry.register::<ContinueAction>();
        registry.register::<CloseAction>();
        registry.register::<SubmitFormAction>();
        registry
    }
}

/// Sets user profile properties taken verbatim from the action config.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileAction {
    properties: IndexMap<String, ConfigValue>,
}

impl UpdateProfileAction {
    pub fn properties(&self) -> &IndexMap<String, ConfigValue> {
        &self.properties
    }
}

impl ActionType for UpdateProfileAction {
    const TYPE: &'static str = "@appcues/update-profile";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        let properties: IndexMap<String, ConfigValue> = config
            .entries()
            .filter(|(_, value)| value.is_scalar())
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        (!properties.is_empty()).then_some(Self { properties })
    }
}

impl ExperienceAction for UpdateProfileAction {
    fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
        context.identify(self.properties.clone());
        completion.complete();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchExperienceAction {
    experience_id: String,
}

impl ActionType for LaunchExperienceAction {
    const TYPE: &'static str = "@appcues/launch-experience";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        let experience_id = config.string("experienceID")?;
        Some(Self {
            experience_id: experience_id.to_string(),
        })
    }
}

impl ExperienceAction for LaunchExperienceAction {
    fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
        context.show_experience(&self.experience_id);
        completion.complete();
    }
}

/// Moves to another step; with no config it advances by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueAction {
    target: StepReference,
}

impl ContinueAction {
    pub fn target(&self) -> &StepReference {
        &self.target
    }
}

impl ActionType for ContinueAction {
    const TYPE: &'static str = "@appcues/continue";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        let target = if let Some(index) = config.value("index") {
            StepReference::Index(usize::try_from(index.as_i64()?).ok()?)
        } else if let Some(offset) = config.value("offset") {
            StepReference::Offset(offset.as_i64()?)
        } else if let Some(step_id) = config.value("stepID") {
            StepReference::Step(StepId::from(step_id.as_str()?))
        } else {
            StepReference::Offset(1)
        };
        Some(Self { target })
    }
}

impl ExperienceAction for ContinueAction {
    fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
        context.navigate(self.target.clone());
        completion.complete();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseAction {
    mark_complete: bool,
}

impl ActionType for CloseAction {
    const TYPE: &'static str = "@appcues/close";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        Some(Self {
            mark_complete: config.bool("markComplete").unwrap_or(false),
        })
    }
}

impl ExperienceAction for CloseAction {
    fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
        context.dismiss(self.mark_complete);
        completion.complete();
    }
}

/// Sends the current step's form answers as profile properties once the
/// step's form is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitFormAction {
    skip_validation: bool,
}

impl ActionType for SubmitFormAction {
    const TYPE: &'static str = "@appcues/submit-form";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        Some(Self {
            skip_validation: config.bool("skipValidation").unwrap_or(false),
        })
    }
}

impl ExperienceAction for SubmitFormAction {
    fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
        let Some(state) = context.current_step_state() else {
            return completion.complete();
        };

        if !self.skip_validation && !state.is_complete() {
            tracing::debug!("form incomplete, not submitting");
            return completion.complete();
        }

        let properties = state
            .formatted_as_profile_update()
            .into_iter()
            .map(|(key, value)| (key, ConfigValue::Text(value)))
            .collect();
        context.identify(properties);
        completion.complete();
    }
}
