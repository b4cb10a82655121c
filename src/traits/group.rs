use crate::core::PluginConfig;
use crate::experience::model::{Experience, Step};
use crate::traits::registry::{ExperienceTrait, GroupingTrait, TraitRegistry, TraitType};

pub const GROUP_ID_KEY: &str = "groupID";

/// Group key of a step: the `groupID` of its first `@appcues/group` trait.
/// A `groupID` on any other trait type does not group the step.
pub fn group_key(step: &Step) -> Option<&str> {
    step.traits
        .iter()
        .filter(|model| model.trait_type == GroupTrait::TYPE)
        .find_map(|model| model.plugin_config().string(GROUP_ID_KEY))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTrait {
    group_id: Option<String>,
}

impl GroupTrait {
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }
}

impl TraitType for GroupTrait {
    const TYPE: &'static str = "@appcues/group";

    fn from_config(config: PluginConfig<'_>) -> Option<Self> {
        Some(Self {
            group_id: config.string(GROUP_ID_KEY).map(str::to_string),
        })
    }
}

impl ExperienceTrait for GroupTrait {
    fn as_grouping(&self) -> Option<&dyn GroupingTrait> {
        Some(self)
    }
}

impl GroupingTrait for GroupTrait {
    fn join<'a>(&self, initial_step: usize, experience: &'a Experience) -> Vec<&'a Step> {
        let Some(initial) = experience.steps.get(initial_step) else {
            return Vec::new();
        };
        match self.group_id() {
            Some(key) => experience
                .steps
                .iter()
                .filter(|step| group_key(step) == Some(key))
                .collect(),
            None => vec![initial],
        }
    }
}

/// Steps presented together with the step at `initial_step`.
///
/// Uses the first grouping trait attached to that step; a step without one is
/// a group of its own.
pub fn group_steps<'a>(
    registry: &TraitRegistry,
    experience: &'a Experience,
    initial_step: usize,
) -> Vec<&'a Step> {
    let Some(initial) = experience.steps.get(initial_step) else {
        return Vec::new();
    };

    let traits = registry.instances(&initial.traits);
    match traits.iter().find_map(|instance| instance.as_grouping()) {
        Some(grouping) => grouping.join(initial_step, experience),
        None => vec![initial],
    }
}

/// Split the experience into presentation groups, each listed by step index.
/// Groups are ordered by their first step; every step lands in exactly one group.
pub fn group_indices(registry: &TraitRegistry, experience: &Experience) -> Vec<Vec<usize>> {
    let mut assigned = vec![false; experience.steps.len()];
    let mut groups = Vec::new();

    for index in 0..experience.steps.len() {
        if assigned[index] {
            continue;
        }
        let members: Vec<usize> = group_steps(registry, experience, index)
            .into_iter()
            .filter_map(|step| experience.step_index(step.id.as_str()))
            .filter(|member| !assigned[*member])
            .collect();
        let members = if members.contains(&index) {
            members
        } else {
            vec![index]
        };
        for member in &members {
            assigned[*member] = true;
        }
        groups.push(members);
    }

    groups
}
