use crate::core::PluginConfig;
use crate::experience::model::{Experience, Step, TraitModel};
use crate::traits::backdrop::Backdrop;
use indexmap::IndexMap;

/// A capability attached to a step through configuration.
pub trait ExperienceTrait {
    fn as_grouping(&self) -> Option<&dyn GroupingTrait> {
        None
    }

    fn as_backdrop_decorating(&self) -> Option<&dyn BackdropDecoratingTrait> {
        None
    }
}

pub trait TraitType: ExperienceTrait + Sized + 'static {
    const TYPE: &'static str;

    fn from_config(config: PluginConfig<'_>) -> Option<Self>;
}

pub trait GroupingTrait {
    /// Steps presented together with the step at `initial_step`, in document order.
    fn join<'a>(&self, initial_step: usize, experience: &'a Experience) -> Vec<&'a Step>;
}

pub trait BackdropDecoratingTrait {
    fn decorate(&self, backdrop: &mut Backdrop);
}

pub type TraitFactory = Box<dyn Fn(PluginConfig<'_>) -> Option<Box<dyn ExperienceTrait>>>;

#[derive(Default)]
pub struct TraitRegistry {
    factories: IndexMap<String, TraitFactory>,
}

impl TraitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, trait_type: &str) -> bool {
        self.factories.contains_key(trait_type)
    }

    pub fn register<T: TraitType>(&mut self) -> bool {
        self.register_factory(T::TYPE, |config| {
            T::from_config(config).map(|instance| Box::new(instance) as Box<dyn ExperienceTrait>)
        })
    }

    pub fn register_factory<F>(&mut self, trait_type: impl Into<String>, factory: F) -> bool
    where
        F: Fn(PluginConfig<'_>) -> Option<Box<dyn ExperienceTrait>> + 'static,
    {
        let trait_type = trait_type.into();
        if self.factories.contains_key(&trait_type) {
            tracing::warn!(
                trait_type = %trait_type,
                "trait type already registered, keeping the existing handler"
            );
            return false;
        }

        self.factories.insert(trait_type, Box::new(factory));
        true
    }

    pub fn instances(&self, models: &[TraitModel]) -> Vec<Box<dyn ExperienceTrait>> {
        models
            .iter()
            .filter_map(|model| {
                let factory = self.factories.get(&model.trait_type)?;
                let instance = factory(model.plugin_config());
                if instance.is_none() {
                    tracing::debug!(
                        trait_type = %model.trait_type,
                        "trait config not applicable, skipping"
                    );
                }
                instance
            })
            .collect()
    }
}
