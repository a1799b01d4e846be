use crate::basic_types::{Assignment, PropositionalVariable};
use crate::lantern_asserts::*;

/// A floating point activity score per variable, bumped on implication and
/// decayed on conflict epochs. Decaying is implemented by growing the bump
/// increment instead of shrinking every score, which preserves the relative
/// order at a fraction of the cost.
pub struct VariableActivities {
    activities: Vec<f64>,
    increment: f64,
    decay_factor: f64,
    max_threshold: f64,
}

impl VariableActivities {
    pub fn new(num_variables: u32, decay_factor: f64) -> VariableActivities {
        lantern_assert_simple!(decay_factor > 0.0 && decay_factor < 1.0);
        VariableActivities {
            activities: vec![0.0; num_variables as usize + 1],
            increment: 1.0,
            decay_factor,
            max_threshold: 1e100,
        }
    }

    pub fn bump_activity(&mut self, variable: PropositionalVariable) {
        if variable.index() == 0 || variable.index() as usize >= self.activities.len() {
            return;
        }
        self.activities[variable] += self.increment;
        //rescale uniformly when the ceiling is exceeded; the relative order
        //  of the scores is unaffected
        if self.activities[variable] > self.max_threshold {
            for activity in self.activities.iter_mut() {
                *activity *= 1e-100;
            }
            self.increment *= 1e-100;
        }
    }

    pub fn decay_activities(&mut self) {
        self.increment /= self.decay_factor;
    }

    pub fn get_activity(&self, variable: PropositionalVariable) -> f64 {
        self.activities[variable]
    }

    /// The unset variable with the highest activity; ties go to the lowest
    /// index, and when every score is zero this degenerates to the first
    /// unset variable.
    pub fn peek_best_unassigned(
        &self,
        assignment: &Assignment,
    ) -> Option<PropositionalVariable> {
        let mut best_variable = None;
        let mut best_score = -1.0;
        for index in 1..self.activities.len() as u32 {
            let variable = PropositionalVariable::new(index);
            if !assignment.contains(variable) && self.activities[variable] > best_score {
                best_score = self.activities[variable];
                best_variable = Some(variable);
            }
        }
        best_variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumped_variables_are_preferred() {
        let mut activities = VariableActivities::new(3, 0.95);
        let assignment = Assignment::new(3);
        activities.bump_activity(PropositionalVariable::new(2));
        assert_eq!(
            activities.peek_best_unassigned(&assignment),
            Some(PropositionalVariable::new(2))
        );
    }

    #[test]
    fn uninformative_activities_fall_back_to_the_first_unset_variable() {
        let activities = VariableActivities::new(3, 0.95);
        let mut assignment = Assignment::new(3);
        assignment.assign(PropositionalVariable::new(1), true);
        assert_eq!(
            activities.peek_best_unassigned(&assignment),
            Some(PropositionalVariable::new(2))
        );
    }

    #[test]
    fn ties_are_broken_towards_the_lowest_index() {
        let mut activities = VariableActivities::new(3, 0.95);
        let assignment = Assignment::new(3);
        activities.bump_activity(PropositionalVariable::new(3));
        activities.bump_activity(PropositionalVariable::new(2));
        assert_eq!(
            activities.peek_best_unassigned(&assignment),
            Some(PropositionalVariable::new(2))
        );
    }

    #[test]
    fn exceeding_the_ceiling_rescales_all_scores_uniformly() {
        let mut activities = VariableActivities::new(2, 0.95);
        //grow the increment beyond the ceiling, then bump once
        for _ in 0..5_000 {
            activities.decay_activities();
        }
        activities.bump_activity(PropositionalVariable::new(1));
        assert!(activities.get_activity(PropositionalVariable::new(1)) <= 1e100);
        //the rescaled score still dominates the untouched one
        assert!(
            activities.get_activity(PropositionalVariable::new(1))
                > activities.get_activity(PropositionalVariable::new(2))
        );
    }
}
