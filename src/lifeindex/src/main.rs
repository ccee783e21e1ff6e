#[macro_use]
extern crate log;

use std::{io, path::PathBuf, str::FromStr};

use anyhow::anyhow;
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use lifeindex::{
    DailyReport,
    algo::{NutritionPlan, RecoveryCalculator, SleepScoreCalculator},
    load_snapshot,
    types::{ActivityLevel, BiologicalSex, BodyProfile, GoalType, SleepStages},
};

#[derive(Parser)]
#[command(name = "lifeindex", version, about = "Daily health scores from plain metric values")]
pub struct LifeIndexCli {
    #[clap(subcommand)]
    pub subcommand: LifeIndexCommand,
}

#[derive(Subcommand)]
pub enum LifeIndexCommand {
    ///
    /// Score a day from a JSON snapshot
    ///
    Report {
        #[arg(env = "LIFEINDEX_SNAPSHOT", long)]
        snapshot: PathBuf,
        /// `now`, a time of day (`14:30:00`) or a full datetime
        #[arg(long, default_value = "now")]
        at: EvaluationTime,
        /// Score as a complete past day, targets are not scaled
        #[arg(long)]
        historical: bool,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Score one night of sleep
    ///
    Sleep {
        #[arg(long)]
        minutes: f64,
        #[arg(long)]
        awake: Option<f64>,
        #[arg(long)]
        rem: Option<f64>,
        #[arg(long)]
        core: Option<f64>,
        #[arg(long)]
        deep: Option<f64>,
    },
    ///
    /// Score recovery against personal baselines
    ///
    Recovery {
        #[arg(long)]
        hrv: Option<f64>,
        #[arg(long)]
        resting_hr: Option<f64>,
        #[arg(long)]
        sleep_minutes: Option<f64>,
        #[arg(env = "LIFEINDEX_HRV_BASELINE", long, default_value_t = RecoveryCalculator::DEFAULT_HRV_BASELINE)]
        hrv_baseline: f64,
        #[arg(env = "LIFEINDEX_RHR_BASELINE", long, default_value_t = RecoveryCalculator::DEFAULT_RESTING_HR_BASELINE)]
        rhr_baseline: f64,
    },
    ///
    /// Calorie and macro goals for a body profile
    ///
    Nutrition {
        #[arg(env = "LIFEINDEX_WEIGHT_KG", long)]
        weight_kg: f64,
        #[arg(env = "LIFEINDEX_HEIGHT_CM", long)]
        height_cm: f64,
        #[arg(env = "LIFEINDEX_AGE", long)]
        age: u32,
        #[arg(env = "LIFEINDEX_SEX", long)]
        sex: BiologicalSex,
        #[arg(env = "LIFEINDEX_ACTIVITY", long, default_value = "sedentary")]
        activity: ActivityLevel,
        #[arg(env = "LIFEINDEX_GOAL", long, default_value = "maintain")]
        goal: GoalType,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = dotenv_result {
        debug!("No .env loaded: {}", error);
    }

    let cli = LifeIndexCli::parse();

    match cli.subcommand {
        LifeIndexCommand::Report {
            snapshot,
            at,
            historical,
            json,
        } => {
            let snapshot = load_snapshot(snapshot)?;
            let report = DailyReport::evaluate(&snapshot, at.resolve(), !historical);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
        LifeIndexCommand::Sleep {
            minutes,
            awake,
            rem,
            core,
            deep,
        } => {
            let stages = match (awake, rem, core, deep) {
                (Some(awake), Some(rem), Some(core), Some(deep)) => {
                    Some(SleepStages::new(awake, rem, core, deep))
                }
                (None, None, None, None) => None,
                _ => return Err(anyhow!("--awake, --rem, --core and --deep must be given together")),
            };

            match SleepScoreCalculator::calculate(Some(minutes), stages.as_ref()) {
                Some(score) => {
                    let label = score.label();
                    println!("Sleep score: {} ({}, {})", score, label, label.rating());
                }
                None => println!("No sleep recorded"),
            }
            Ok(())
        }
        LifeIndexCommand::Recovery {
            hrv,
            resting_hr,
            sleep_minutes,
            hrv_baseline,
            rhr_baseline,
        } => {
            let calculator = RecoveryCalculator::new(hrv_baseline, rhr_baseline);
            match calculator.calculate(hrv, resting_hr, sleep_minutes) {
                Some(score) => {
                    println!("Recovery score: {} ({})", score, score.label());
                    if score.should_rest() {
                        println!("Consider taking a rest day");
                    }
                }
                None => {
                    warn!("No HRV, resting heart rate or sleep supplied");
                    println!("No recovery data");
                }
            }
            Ok(())
        }
        LifeIndexCommand::Nutrition {
            weight_kg,
            height_cm,
            age,
            sex,
            activity,
            goal,
            json,
        } => {
            let profile = BodyProfile {
                weight_kg,
                height_cm,
                age,
                sex,
            };
            let plan = NutritionPlan::new(&profile, activity, goal);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("Goal: {}\n{}", goal, plan);
            }
            Ok(())
        }
        LifeIndexCommand::Completions { shell } => {
            clap_complete::generate(shell, &mut LifeIndexCli::command(), "lifeindex", &mut io::stdout());
            Ok(())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvaluationTime {
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Now,
}

impl FromStr for EvaluationTime {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(t) = s.parse() {
            return Ok(Self::DateTime(t));
        }

        if let Ok(t) = s.parse() {
            return Ok(Self::Time(t));
        }

        match s {
            "now" => Ok(Self::Now),
            _ => Err(anyhow!("Invalid evaluation time `{}`", s)),
        }
    }
}

impl EvaluationTime {
    pub fn resolve(self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        match self {
            EvaluationTime::DateTime(dt) => dt,
            EvaluationTime::Time(t) => now.date().and_time(t),
            EvaluationTime::Now => now,
        }
    }
}
