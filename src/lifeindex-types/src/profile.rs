use std::{fmt::Display, str::FromStr};

use crate::TypesError;

/// Inputs to the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: BiologicalSex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Constant term of the BMR equation.
    pub fn bmr_offset(self) -> f64 {
        match self {
            BiologicalSex::Male => 5.0,
            BiologicalSex::Female => -161.0,
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(TypesError::UnknownSex(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(TypesError::UnknownActivityLevel(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Lose,
    Maintain,
    Gain,
}

impl GoalType {
    /// Daily kcal added to TDEE.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            GoalType::Lose => -500.0,
            GoalType::Maintain => 0.0,
            GoalType::Gain => 300.0,
        }
    }
}

impl FromStr for GoalType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(TypesError::UnknownGoalType(s.to_owned())),
        }
    }
}

impl Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GoalType::Lose => "lose",
            GoalType::Maintain => "maintain",
            GoalType::Gain => "gain",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_increase_with_activity() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        assert_eq!(levels[0].multiplier(), 1.2);
        assert_eq!(levels[4].multiplier(), 1.9);
        assert!(levels.windows(2).all(|w| w[0].multiplier() < w[1].multiplier()));
    }

    #[test]
    fn goal_adjustments() {
        assert_eq!(GoalType::Lose.calorie_adjustment(), -500.0);
        assert_eq!(GoalType::Maintain.calorie_adjustment(), 0.0);
        assert_eq!(GoalType::Gain.calorie_adjustment(), 300.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("very-active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert_eq!("Sedentary".parse::<ActivityLevel>(), Ok(ActivityLevel::Sedentary));
        assert_eq!("gain".parse::<GoalType>(), Ok(GoalType::Gain));
        assert_eq!("F".parse::<BiologicalSex>(), Ok(BiologicalSex::Female));
        assert_eq!(
            "couch".parse::<ActivityLevel>(),
            Err(TypesError::UnknownActivityLevel("couch".into()))
        );
    }

    #[test]
    fn profile_json() {
        let profile: BodyProfile = serde_json::from_str(
            r#"{ "weight_kg": 70.0, "height_cm": 170.0, "age": 25, "sex": "male" }"#,
        )
        .unwrap();
        assert_eq!(profile.sex, BiologicalSex::Male);
        assert_eq!(profile.age, 25);
    }
}
