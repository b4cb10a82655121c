use crate::action::completion::Completion;
use crate::action::context::{ExperienceContext, InteractionLevel, RenderContext};
use crate::action::queue::{ActionBatch, ActionQueue, QueuedAction};
use crate::core::PluginConfig;
use crate::experience::model::ActionModel;
use indexmap::IndexMap;
use std::rc::Weak;

/// A configured, ready to run action instance.
pub trait ExperienceAction {
    /// Perform the side effect, then signal `completion`.
    fn execute(&self, context: &dyn ExperienceContext, completion: Completion);
}

/// An action kind that can be registered by its static type key.
pub trait ActionType: ExperienceAction + Sized + 'static {
    const TYPE: &'static str;

    /// `None` means the config does not describe an applicable action.
    fn from_config(config: PluginConfig<'_>) -> Option<Self>;
}

pub type ActionFactory = Box<dyn Fn(PluginConfig<'_>) -> Option<Box<dyn ExperienceAction>>>;

/// Resolved action waiting for its completion continuation.
pub type ActionClosure = Box<dyn FnOnce(Completion)>;

pub struct ActionRegistry {
    factories: IndexMap<String, ActionFactory>,
    context: Weak<dyn ExperienceContext>,
    queue: ActionQueue,
}

impl ActionRegistry {
    pub fn new(context: Weak<dyn ExperienceContext>) -> Self {
        Self {
            factories: IndexMap::new(),
            context,
            queue: ActionQueue::new(),
        }
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn is_registered(&self, action_type: &str) -> bool {
        self.factories.contains_key(action_type)
    }

    pub fn registered_types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Returns `false` when the type key was already claimed; the earlier
    /// registration stays in place.
    pub fn register<A: ActionType>(&mut self) -> bool {
        self.register_factory(A::TYPE, |config| {
            A::from_config(config).map(|action| Box::new(action) as Box<dyn ExperienceAction>)
        })
    }

    pub fn register_factory<F>(&mut self, action_type: impl Into<String>, factory: F) -> bool
    where
        F: Fn(PluginConfig<'_>) -> Option<Box<dyn ExperienceAction>> + 'static,
    {
        let action_type = action_type.into();
        if self.factories.contains_key(&action_type) {
            tracing::warn!(
                action_type = %action_type,
                "action type already registered, keeping the existing handler"
            );
            return false;
        }

        self.factories.insert(action_type, Box::new(factory));
        true
    }

    /// Build one closure per record that has a registered factory accepting
    /// its config, in record order.
    pub fn action_closures(&self, models: &[ActionModel]) -> Vec<ActionClosure> {
        models
            .iter()
            .filter_map(|model| self.action_closure(model))
            .collect()
    }

    fn action_closure(&self, model: &ActionModel) -> Option<ActionClosure> {
        let factory = self.factories.get(&model.action_type)?;
        let Some(action) = factory(model.plugin_config()) else {
            tracing::debug!(
                action_type = %model.action_type,
                trigger = %model.trigger,
                "action config not applicable, skipping"
            );
            return None;
        };

        let context = Weak::clone(&self.context);
        Some(Box::new(move |completion: Completion| match context.upgrade() {
            Some(context) => action.execute(context.as_ref(), completion),
            None => completion.complete(),
        }))
    }

    /// Resolve `models` and hand them to the dispatch queue as one batch.
    pub fn enqueue(
        &self,
        models: &[ActionModel],
        level: InteractionLevel,
        render_context: &RenderContext,
        interaction_type: &str,
        view_description: Option<&str>,
    ) {
        let actions = models
            .iter()
            .filter_map(|model| {
                self.action_closure(model).map(|closure| QueuedAction {
                    action_type: model.action_type.clone(),
                    closure,
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            ?level,
            interaction_type,
            view_description,
            resolved = actions.len(),
            configured = models.len(),
            "enqueue actions"
        );

        self.queue.enqueue(ActionBatch {
            level,
            render_context: render_context.clone(),
            interaction_type: interaction_type.to_string(),
            view_description: view_description.map(str::to_string),
            actions,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionRegistry, ActionType, ExperienceAction};
    use crate::action::completion::Completion;
    use crate::action::context::{
        ExperienceContext, InteractionLevel, RenderContext, StepReference,
    };
    use crate::core::{ConfigValue, PluginConfig};
    use crate::experience::model::ActionModel;
    use crate::form::step_state::StepState;
    use indexmap::IndexMap;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    #[derive(Default)]
    struct RecordingContext {
        log: RefCell<Vec<String>>,
    }

    impl RecordingContext {
        fn record(&self, entry: impl Into<String>) {
            self.log.borrow_mut().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    impl ExperienceContext for RecordingContext {
        fn identify(&self, _properties: IndexMap<String, ConfigValue>) {}
        fn show_experience(&self, experience_id: &str) {
            self.record(format!("show:{experience_id}"));
        }
        fn navigate(&self, _target: StepReference) {}
        fn dismiss(&self, _mark_complete: bool) {}
        fn current_step_state(&self) -> Option<StepState> {
            None
        }
    }

    struct FirstAction {
        tag: String,
    }

    impl ExperienceAction for FirstAction {
        fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
            context.show_experience(&format!("first-{}", self.tag));
            completion.complete();
        }
    }

    impl ActionType for FirstAction {
        const TYPE: &'static str = "@test/action";

        fn from_config(config: PluginConfig<'_>) -> Option<Self> {
            Some(Self {
                tag: config.string("tag").unwrap_or("none").to_string(),
            })
        }
    }

    struct SecondAction;

    impl ExperienceAction for SecondAction {
        fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
            context.show_experience("second");
            completion.complete();
        }
    }

    impl ActionType for SecondAction {
        const TYPE: &'static str = "@test/action";

        fn from_config(_config: PluginConfig<'_>) -> Option<Self> {
            Some(Self)
        }
    }

    struct PickyAction;

    impl ExperienceAction for PickyAction {
        fn execute(&self, context: &dyn ExperienceContext, completion: Completion) {
            context.show_experience("picky");
            completion.complete();
        }
    }

    impl ActionType for PickyAction {
        const TYPE: &'static str = "@test/picky";

        fn from_config(config: PluginConfig<'_>) -> Option<Self> {
            config.bool("enabled")?.then_some(Self)
        }
    }

    fn registry(context: &Rc<RecordingContext>) -> ActionRegistry {
        let context: Rc<dyn ExperienceContext> = context.clone();
        ActionRegistry::new(Rc::downgrade(&context))
    }

    fn model(action_type: &str, config: serde_json::Value) -> ActionModel {
        let config: ConfigValue = serde_json::from_value(config).expect("config should parse");
        ActionModel::new("tap", action_type).with_config(config)
    }

    fn run_all(registry: &ActionRegistry, models: &[ActionModel]) -> usize {
        let closures = registry.action_closures(models);
        let count = closures.len();
        for closure in closures {
            closure(Completion::noop());
        }
        count
    }

    #[test]
    fn registered_action_executes() {
        let context = Rc::new(RecordingContext::default());
        let mut registry = registry(&context);
        assert!(registry.register::<FirstAction>());

        let count = run_all(
            &registry,
            &[model(FirstAction::TYPE, serde_json::json!({"tag": "a"}))],
        );

        assert_eq!(count, 1);
        assert_eq!(context.entries(), vec!["show:first-a"]);
    }

    #[test]
    fn unknown_action_is_dropped() {
        let context = Rc::new(RecordingContext::default());
        let mut registry = registry(&context);
        registry.register::<FirstAction>();

        let closures = registry.action_closures(&[ActionModel::new("tap", "@unknown/action")]);
        assert!(closures.is_empty());
    }

    #[test]
    fn first_registration_wins() {
        let context = Rc::new(RecordingContext::default());
        let mut registry = registry(&context);
        assert!(registry.register::<FirstAction>());
        assert!(!registry.register::<SecondAction>());

        let count = run_all(
            &registry,
            &[model(FirstAction::TYPE, serde_json::json!({"tag": "x"}))],
        );

        assert_eq!(count, 1);
        assert_eq!(context.entries(), vec!["show:first-x"]);
    }

    #[test]
    fn unresolvable_records_keep_remaining_order() {
        let context = Rc::new(RecordingContext::default());
        let mut registry = registry(&context);
        registry.register::<FirstAction>();
        registry.register::<PickyAction>();

        let count = run_all(
            &registry,
            &[
                model(FirstAction::TYPE, serde_json::json!({"tag": "1"})),
                ActionModel::new("tap", "@unknown/action"),
                model(PickyAction::TYPE, serde_json::json!({"enabled": false})),
                model(PickyAction::TYPE, serde_json::json!({"enabled": true})),
                model(FirstAction::TYPE, serde_json::json!({"tag": "2"})),
            ],
        );

        assert_eq!(count, 3);
        let expected = vec!["show:first-1", "show:picky", "show:first-2"];
        assert_eq!(context.entries(), expected);
    }

    #[test]
    fn missing_context_completes_without_effect() {
        let context = Rc::new(RecordingContext::default());
        let mut registry = registry(&context);
        registry.register::<FirstAction>();
        let closures = registry.action_closures(&[model(FirstAction::TYPE, serde_json::json!({}))]);
        drop(context);

        let completed = Rc::new(RefCell::new(0));
        for closure in closures {
            let completed = Rc::clone(&completed);
            closure(Completion::new(move || *completed.borrow_mut() += 1));
        }
        assert_eq!(*completed.borrow(), 1);
    }

    #[test]
    fn never_registered_context_is_a_noop() {
        let dangling: Weak<RecordingContext> = Weak::new();
        let mut registry = ActionRegistry::new(dangling);
        registry.register::<FirstAction>();
        let closures = registry.action_closures(&[model(FirstAction::TYPE, serde_json::json!({}))]);
        assert_eq!(closures.len(), 1);
    }

    #[test]
    fn enqueue_runs_batches_in_order() {
        let context = Rc::new(RecordingContext::default());
        let mut registry = registry(&context);
        registry.register::<FirstAction>();
        registry.register::<PickyAction>();

        let levels = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&levels);
        registry.queue().add_batch_observer(move |batch| {
            seen.borrow_mut().push((batch.level, batch.actions.len()))
        });

        registry.enqueue(
            &[
                model(FirstAction::TYPE, serde_json::json!({"tag": "step"})),
                model(PickyAction::TYPE, serde_json::json!({})),
            ],
            InteractionLevel::Step,
            &RenderContext::Modal,
            "tap",
            Some("Next"),
        );
        registry.enqueue(
            &[model(FirstAction::TYPE, serde_json::json!({"tag": "group"}))],
            InteractionLevel::Group,
            &RenderContext::Modal,
            "tap",
            None,
        );

        assert_eq!(context.entries(), vec!["show:first-step", "show:first-group"]);
        assert_eq!(
            *levels.borrow(),
            vec![(InteractionLevel::Step, 1), (InteractionLevel::Group, 1)]
        );
        assert!(registry.queue().is_idle());
    }
}
