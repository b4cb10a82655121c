use crate::action::context::{InteractionLevel, RenderContext};
use crate::action::registry::ActionRegistry;
use crate::config::Config;
use crate::core::{ComponentId, StepId};
use crate::experience::component::ExperienceComponent;
use crate::experience::model::{ActionModel, ActionTrigger, Step};
use indexmap::IndexMap;
use std::rc::Rc;

/// Routes interactions on one step's components into the action registry.
pub struct ExperienceStepViewModel {
    step_id: StepId,
    content: ExperienceComponent,
    actions: IndexMap<ComponentId, Vec<ActionModel>>,
    registry: Rc<ActionRegistry>,
    render_context: RenderContext,
    enable_text_scaling: bool,
}

impl ExperienceStepViewModel {
    pub fn new(
        step: &Step,
        registry: Rc<ActionRegistry>,
        render_context: RenderContext,
        config: &Config,
    ) -> Self {
        Self {
            step_id: step.id.clone(),
            content: step.content.clone(),
            actions: step.actions.clone(),
            registry,
            render_context,
            enable_text_scaling: config.enable_text_scaling,
        }
    }

    pub fn step_id(&self) -> &StepId {
        &self.step_id
    }

    pub fn content(&self) -> &ExperienceComponent {
        &self.content
    }

    pub fn render_context(&self) -> &RenderContext {
        &self.render_context
    }

    pub fn enable_text_scaling(&self) -> bool {
        self.enable_text_scaling
    }

    /// Actions bound to `component_id`, grouped by trigger in declaration
    /// order. Records with an unrecognised trigger are left out.
    pub fn actions_for(&self, component_id: &str) -> IndexMap<ActionTrigger, Vec<ActionModel>> {
        let mut grouped: IndexMap<ActionTrigger, Vec<ActionModel>> = IndexMap::new();
        for model in self.actions.get(component_id).into_iter().flatten() {
            match ActionTrigger::parse(&model.trigger) {
                Some(trigger) => grouped.entry(trigger).or_default().push(model.clone()),
                None => tracing::debug!(
                    component_id,
                    trigger = %model.trigger,
                    "unknown action trigger"
                ),
            }
        }
        grouped
    }

    pub fn has_actions(&self, component_id: &str, trigger: ActionTrigger) -> bool {
        self.actions_for(component_id).contains_key(&trigger)
    }

    /// Queue `actions` as a step-level interaction.
    pub fn enqueue_actions(
        &self,
        actions: &[ActionModel],
        interaction_type: &str,
        view_description: Option<&str>,
    ) {
        self.registry.enqueue(
            actions,
            InteractionLevel::Step,
            &self.render_context,
            interaction_type,
            view_description,
        );
    }

    /// The user performed `trigger` on `component_id`. Returns whether any
    /// actions were queued.
    pub fn handle_interaction(&self, component_id: &str, trigger: ActionTrigger) -> bool {
        let mut grouped = self.actions_for(component_id);
        let Some(actions) = grouped.shift_remove(&trigger) else {
            return false;
        };

        let description = self
            .content
            .find(component_id)
            .and_then(ExperienceComponent::text_description);
        self.enqueue_actions(&actions, trigger.as_str(), description.as_deref());
        true
    }
}
