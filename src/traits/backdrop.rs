use crate::core::PluginConfig;
use crate::traits::color::{Appearance, Color, DynamicColor};
use crate::traits::registry::{BackdropDecoratingTrait, ExperienceTrait, TraitType};

/// Surface behind a presented group, shared by every step in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backdrop {
    pub appearance: Appearance,
    pub background_color: Option<Color>,
}

impl Backdrop {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            background_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackdropTrait {
    background_color: Option<DynamicColor>,
}

impl TraitType for BackdropTrait {
    const TYPE: &'static str = "@appcues/backdrop";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        let background_color = match config.value("backgroundColor") {
            Some(value) => Some(DynamicColor::from_config(value)?),
            None => None,
        };
        Some(Self { background_color })
    }
}

impl ExperienceTrait for BackdropTrait {
    fn as_backdrop_decorating(&self) -> Option<&dyn BackdropDecoratingTrait> {
        Some(self)
    }
}

impl BackdropDecoratingTrait for BackdropTrait {
    fn decorate(&self, backdrop: &mut Backdrop) {
        backdrop.background_color = self
            .background_color
            .map(|color| color.resolve(backdrop.appearance));
    }
}

/// Apply every backdrop decoration among `traits`, in order.
pub fn decorate_backdrop(traits: &[Box<dyn ExperienceTrait>], backdrop: &mut Backdrop) {
    for decorating in traits.iter().filter_map(|instance| instance.as_backdrop_decorating()) {
        decorating.decorate(backdrop);
    }
}
