use std::fmt::Display;

use lifeindex_types::{ActivityLevel, BodyProfile, GoalType};
use serde::Serialize;

pub struct NutritionCalculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Mifflin-St Jeor BMR, activity-scaled TDEE and a fixed 30/40/30 macro split.
///
/// Inputs are not validated, nonsensical profiles give nonsensical numbers.
impl NutritionCalculator {
    /// Hard minimum whatever the goal.
    pub const MIN_CALORIES: u32 = 1200;

    const KCAL_PER_G_PROTEIN: u32 = 4;
    const KCAL_PER_G_CARBS: u32 = 4;
    const KCAL_PER_G_FAT: u32 = 9;

    /// Percent of calories.
    const PROTEIN_SHARE: u32 = 30;
    const CARBS_SHARE: u32 = 40;
    const FAT_SHARE: u32 = 30;

    pub fn bmr(profile: &BodyProfile) -> f64 {
        9.99 * profile.weight_kg + 6.25 * profile.height_cm - 4.92 * f64::from(profile.age)
            + profile.sex.bmr_offset()
    }

    pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
        bmr * activity.multiplier()
    }

    pub fn calorie_goal(tdee: f64, goal: GoalType) -> u32 {
        let target = (tdee + goal.calorie_adjustment()).round();
        target.max(f64::from(Self::MIN_CALORIES)) as u32
    }

    /// Grams are truncated, not rounded.
    pub fn macro_targets(calorie_goal: u32) -> MacroTargets {
        // Widened so a saturated goal cannot overflow, the quotient always fits back in u32.
        let grams = |share: u32, kcal_per_g: u32| {
            (u64::from(calorie_goal) * u64::from(share) / u64::from(100 * kcal_per_g)) as u32
        };

        MacroTargets {
            protein_g: grams(Self::PROTEIN_SHARE, Self::KCAL_PER_G_PROTEIN),
            carbs_g: grams(Self::CARBS_SHARE, Self::KCAL_PER_G_CARBS),
            fat_g: grams(Self::FAT_SHARE, Self::KCAL_PER_G_FAT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionPlan {
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_goal: u32,
    pub macros: MacroTargets,
}

impl NutritionPlan {
    pub fn new(profile: &BodyProfile, activity: ActivityLevel, goal: GoalType) -> Self {
        let bmr = NutritionCalculator::bmr(profile);
        let tdee = NutritionCalculator::tdee(bmr, activity);
        let calorie_goal = NutritionCalculator::calorie_goal(tdee, goal);

        Self {
            bmr,
            tdee,
            calorie_goal,
            macros: NutritionCalculator::macro_targets(calorie_goal),
        }
    }
}

impl Display for NutritionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "BMR: {:.0} kcal\nTDEE: {:.0} kcal\nCalorie goal: {} kcal\n",
            self.bmr, self.tdee, self.calorie_goal
        ))?;
        f.write_fmt(format_args!(
            "\tProtein: {}g\n\tCarbs: {}g\n\tFat: {}g",
            self.macros.protein_g, self.macros.carbs_g, self.macros.fat_g
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeindex_types::BiologicalSex;

    fn profile(sex: BiologicalSex) -> BodyProfile {
        BodyProfile {
            weight_kg: 70.0,
            height_cm: 170.0,
            age: 25,
            sex,
        }
    }

    #[test]
    fn bmr_male() {
        let bmr = NutritionCalculator::bmr(&profile(BiologicalSex::Male));
        assert!((bmr - 1643.8).abs() < 1e-9, "bmr {bmr}");
    }

    #[test]
    fn bmr_female_differs_by_166() {
        let male = NutritionCalculator::bmr(&profile(BiologicalSex::Male));
        let female = NutritionCalculator::bmr(&profile(BiologicalSex::Female));
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn tdee_uses_multiplier() {
        let sedentary = NutritionCalculator::tdee(1000.0, ActivityLevel::Sedentary);
        let very_active = NutritionCalculator::tdee(1000.0, ActivityLevel::VeryActive);
        assert!((sedentary - 1200.0).abs() < 1e-9);
        assert!((very_active - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn calorie_goal_adjustments() {
        assert_eq!(NutritionCalculator::calorie_goal(2000.0, GoalType::Lose), 1500);
        assert_eq!(NutritionCalculator::calorie_goal(2000.0, GoalType::Maintain), 2000);
        assert_eq!(NutritionCalculator::calorie_goal(2000.0, GoalType::Gain), 2300);
        assert_eq!(NutritionCalculator::calorie_goal(2000.4, GoalType::Maintain), 2000);
        assert_eq!(NutritionCalculator::calorie_goal(2000.5, GoalType::Maintain), 2001);
    }

    #[test]
    fn calorie_goal_floor() {
        assert_eq!(NutritionCalculator::calorie_goal(1500.0, GoalType::Lose), 1200);
        assert_eq!(NutritionCalculator::calorie_goal(-300.0, GoalType::Maintain), 1200);
    }

    #[test]
    fn macro_split() {
        assert_eq!(
            NutritionCalculator::macro_targets(2000),
            MacroTargets {
                protein_g: 150,
                carbs_g: 200,
                fat_g: 66,
            }
        );
        assert_eq!(
            NutritionCalculator::macro_targets(1999),
            MacroTargets {
                protein_g: 149,
                carbs_g: 199,
                fat_g: 66,
            }
        );
    }

    #[test]
    fn macro_split_at_largest_goal() {
        assert_eq!(
            NutritionCalculator::macro_targets(u32::MAX),
            MacroTargets {
                protein_g: 322_122_547,
                carbs_g: 429_496_729,
                fat_g: 143_165_576,
            }
        );
        assert_eq!(NutritionCalculator::macro_targets(200_000_000).protein_g, 15_000_000);
    }

    #[test]
    fn huge_profile_saturates() {
        let heavy = BodyProfile {
            weight_kg: 2.0e7,
            ..profile(BiologicalSex::Male)
        };
        let plan = NutritionPlan::new(&heavy, ActivityLevel::VeryActive, GoalType::Gain);
        assert!(plan.calorie_goal > 107_000_000);
        assert_eq!(
            plan.macros,
            NutritionCalculator::macro_targets(plan.calorie_goal)
        );

        let absurd = BodyProfile {
            weight_kg: 1.0e12,
            ..profile(BiologicalSex::Male)
        };
        let plan = NutritionPlan::new(&absurd, ActivityLevel::Sedentary, GoalType::Maintain);
        assert_eq!(plan.calorie_goal, u32::MAX);
        assert_eq!(plan.macros.protein_g, 322_122_547);
    }

    #[test]
    fn full_plan() {
        let plan = NutritionPlan::new(
            &profile(BiologicalSex::Male),
            ActivityLevel::Moderate,
            GoalType::Lose,
        );
        // 1643.8 * 1.55 = 2547.89 -> 2047.89 -> 2048
        assert!((plan.tdee - 2547.89).abs() < 1e-6);
        assert_eq!(plan.calorie_goal, 2048);
        assert_eq!(plan.macros.protein_g, 153);
        assert_eq!(plan.macros.carbs_g, 204);
        assert_eq!(plan.macros.fat_g, 68);
    }

    #[test]
    fn plan_serializes() {
        let plan = NutritionPlan::new(
            &profile(BiologicalSex::Female),
            ActivityLevel::Sedentary,
            GoalType::Maintain,
        );
        let json = serde_json::to_value(plan).unwrap();
        assert_eq!(json["calorie_goal"], plan.calorie_goal);
        assert_eq!(json["macros"]["protein_g"], plan.macros.protein_g);
    }
}
