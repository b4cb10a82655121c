use crate::form::item::FormValue;

/// Constraint a form item's value has to meet before its step counts as complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// The item has some value.
    NonEmpty,
    /// At least this many values are selected.
    MinSelections(u32),
    /// At most this many values are selected.
    MaxSelections(u32),
}

impl Validator {
    pub fn is_satisfied(&self, value: &FormValue) -> bool {
        match (self, value) {
            (Self::NonEmpty, _) | (Self::MinSelections(_), FormValue::Single(_)) => value.is_set(),
            // A single value can never hold more than one selection.
            (Self::MaxSelections(_), FormValue::Single(_)) => true,
            (Self::MinSelections(min), FormValue::Multi { values, .. }) => {
                values.len() >= *min as usize
            }
            (Self::MaxSelections(max), FormValue::Multi { values, .. }) => {
                values.len() <= *max as usize
            }
        }
    }
}

pub fn all_satisfied(validators: &[Validator], value: &FormValue) -> bool {
    validators.iter().all(|rule| rule.is_satisfied(value))
}

#[cfg(test)]
mod tests {
    use super::{Validator, all_satisfied};
    use crate::form::item::FormValue;

    fn multi(values: &[&str]) -> FormValue {
        FormValue::Multi {
            values: values.iter().map(|v| v.to_string()).collect(),
            max: None,
        }
    }

    #[test]
    fn non_empty_checks_both_shapes() {
        assert!(!Validator::NonEmpty.is_satisfied(&FormValue::Single(String::new())));
        assert!(Validator::NonEmpty.is_satisfied(&FormValue::Single("x".into())));
        assert!(!Validator::NonEmpty.is_satisfied(&multi(&[])));
        assert!(Validator::NonEmpty.is_satisfied(&multi(&["a"])));
    }

    #[test]
    fn selection_bounds_on_multi() {
        let two = multi(&["a", "b"]);
        assert!(Validator::MinSelections(2).is_satisfied(&two));
        assert!(!Validator::MinSelections(3).is_satisfied(&two));
        assert!(Validator::MaxSelections(2).is_satisfied(&two));
        assert!(!Validator::MaxSelections(1).is_satisfied(&two));
    }

    #[test]
    fn max_selections_on_single_is_vacuous() {
        assert!(Validator::MaxSelections(0).is_satisfied(&FormValue::Single("a".into())));
        assert!(Validator::MaxSelections(0).is_satisfied(&FormValue::Single(String::new())));
        assert!(!Validator::MinSelections(1).is_satisfied(&FormValue::Single(String::new())));
    }

    #[test]
    fn empty_validator_list_is_satisfied() {
        assert!(all_satisfied(&[], &FormValue::Single(String::new())));
        assert!(!all_satisfied(
            &[Validator::MaxSelections(5), Validator::NonEmpty],
            &FormValue::Single(String::new())
        ));
    }
}
