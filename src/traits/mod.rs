pub mod backdrop;
pub mod color;
pub mod group;
pub mod registry;

pub use backdrop::{Backdrop, BackdropTrait, decorate_backdrop};
pub use color::{Appearance, Color, DynamicColor};
pub use group::{GroupTrait, group_indices, group_key, group_steps};
pub use registry::{
    BackdropDecoratingTrait, ExperienceTrait, GroupingTrait, TraitFactory, TraitRegistry,
    TraitType,
};

impl TraitRegistry {
    pub fn with_builtin_traits() -> Self {
        let mut registry = Self::new();
        registry.register::<GroupTrait>();
        registry.register::<BackdropTrait>();
        registry
    }
}
