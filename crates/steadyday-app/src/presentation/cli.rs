use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::application::commands::consistency_commands::CompletionReport;
use crate::presentation::commands::*;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use steadyday_domain::assistant::ChatTopic;
use steadyday_domain::consistency::SubjectKind;
use steadyday_domain::focus::FocusSessionKind;
use steadyday_domain::mood::{EnergyLevel, FocusLevel, MoodLevel, MoodVector};
use steadyday_domain::personality::PersonalityType;

/// Routines, habits, mood check-ins and focus sessions
#[derive(Debug, Parser)]
#[command(name = "steadyday", version, about)]
pub struct Cli {
    /// Owner id; defaults to the settings file's default user
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Settings file path
    #[arg(long, global = true, env = "STEADYDAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reference day (YYYY-MM-DD); defaults to today in the configured timezone
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a routine's completion as a ratio or as completed steps
    Record {
        subject: String,
        #[arg(long, conflicts_with_all = ["completed", "total"])]
        ratio: Option<f64>,
        #[arg(long, requires = "total")]
        completed: Option<u32>,
        #[arg(long, requires = "completed")]
        total: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark a habit as done (or not done with --missed)
    Habit {
        subject: String,
        #[arg(long)]
        missed: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Log the day's mood, energy and focus
    Mood {
        #[arg(long)]
        mood: MoodLevel,
        #[arg(long)]
        energy: EnergyLevel,
        #[arg(long)]
        focus: FocusLevel,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Streak of one subject, or a summary of all subjects
    Streak {
        subject: Option<String>,
        /// Threshold to apply; defaults to the kind of the subject's reports
        #[arg(long)]
        kind: Option<SubjectKind>,
        #[arg(long)]
        days: Option<u32>,
    },
    /// Per-day completion for one month
    Calendar {
        subject: String,
        #[arg(long)]
        kind: Option<SubjectKind>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Recorded days over the last N days
    Trend {
        subject: String,
        #[arg(long)]
        kind: Option<SubjectKind>,
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Recommend a focus session for the day
    Focus {
        /// Base length in minutes; defaults to the configured base
        #[arg(long)]
        base: Option<f64>,
    },
    /// Record a finished work or break period
    FocusDone {
        /// Length in minutes
        minutes: u32,
        #[arg(long, default_value = "work")]
        kind: FocusSessionKind,
    },
    /// Session totals over the last N days (default 7)
    FocusStats {
        #[arg(long)]
        days: Option<u32>,
    },
    /// Mood entries of the last N days with their average
    MoodHistory {
        #[arg(long)]
        days: Option<u32>,
    },
    /// List the personality questionnaire
    Questions,
    /// Classify questionnaire answers (1-5, comma separated, question order)
    /// and keep the result
    Classify {
        #[arg(value_delimiter = ',', required = true)]
        answers: Vec<u8>,
    },
    /// Show the stored questionnaire result
    Personality,
    /// Ask the assistant a question
    Ask {
        message: String,
        #[arg(long, default_value = "general")]
        topic: ChatTopic,
        /// Personality type (1-9) to use instead of the stored result
        #[arg(long)]
        personality: Option<PersonalityType>,
    },
    /// Delete every recorded day of a subject
    RemoveSubject { subject: String },
}

/// Run one CLI command and return its result as JSON
pub async fn run(
    command: Commands,
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
) -> Result<serde_json::Value, CommandError> {
    match command {
        Commands::Record {
            subject,
            ratio,
            completed,
            total,
            notes,
        } => {
            let report = completion_report(ratio, completed, total)?;
            to_json(
                record_completion(
                    state,
                    owner_id,
                    &subject,
                    SubjectKind::Routine,
                    today,
                    report,
                    notes,
                )
                .await?,
            )
        }
        Commands::Habit {
            subject,
            missed,
            notes,
        } => to_json(
            record_completion(
                state,
                owner_id,
                &subject,
                SubjectKind::Habit,
                today,
                CompletionReport::Done { done: !missed },
                notes,
            )
            .await?,
        ),
        Commands::Mood {
            mood,
            energy,
            focus,
            notes,
        } => {
            let vector = MoodVector::new(mood, energy, focus);
            to_json(log_mood(state, owner_id, today, vector, notes).await?)
        }
        Commands::Streak {
            subject: Some(subject),
            kind,
            days,
        } => to_json(get_streak(state, owner_id, &subject, kind, today, days).await?),
        Commands::Streak { subject: None, .. } => {
            to_json(get_all_streaks(state, owner_id, today).await?)
        }
        Commands::Calendar {
            subject,
            kind,
            year,
            month,
        } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            to_json(get_calendar(state, owner_id, &subject, kind, year, month).await?)
        }
        Commands::Trend {
            subject,
            kind,
            days,
        } => to_json(get_trend(state, owner_id, &subject, kind, today, days).await?),
        Commands::Focus { base } => {
            to_json(recommend_focus_session(state, owner_id, today, base).await?)
        }
        Commands::FocusDone { minutes, kind } => {
            to_json(record_focus_session(state, owner_id, today, kind, minutes).await?)
        }
        Commands::FocusStats { days } => {
            to_json(get_focus_stats(state, owner_id, today, days).await?)
        }
        Commands::MoodHistory { days } => {
            to_json(get_mood_history(state, owner_id, today, days).await?)
        }
        Commands::Questions => to_json(get_questions(state)),
        Commands::Classify { answers } => {
            to_json(submit_questionnaire(state, owner_id, answers).await?)
        }
        Commands::Personality => to_json(get_personality_result(state, owner_id).await?),
        Commands::Ask {
            message,
            topic,
            personality,
        } => to_json(
            ask_assistant(state, owner_id, today, &message, topic, personality).await?,
        ),
        Commands::RemoveSubject { subject } => {
            to_json(remove_subject(state, owner_id, &subject).await?)
        }
    }
}

/// A ratio, or completed/total steps; exactly one form is required
pub fn completion_report(
    ratio: Option<f64>,
    completed: Option<u32>,
    total: Option<u32>,
) -> Result<CompletionReport, CommandError> {
    match (ratio, completed, total) {
        (Some(value), None, None) => Ok(CompletionReport::Ratio { value }),
        (None, Some(completed), Some(total)) => Ok(CompletionReport::Steps { completed, total }),
        _ => Err(CommandError::validation(
            "Provide either --ratio or both --completed and --total",
        )),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<serde_json::Value, CommandError> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_record_with_steps() {
        let cli = Cli::try_parse_from([
            "steadyday",
            "--user",
            "alice",
            "record",
            "morning-routine",
            "--completed",
            "3",
            "--total",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("alice"));
        match cli.command {
            Commands::Record {
                subject,
                completed,
                total,
                ratio,
                ..
            } => {
                assert_eq!(subject, "morning-routine");
                assert_eq!(
                    completion_report(ratio, completed, total).unwrap(),
                    CompletionReport::Steps {
                        completed: 3,
                        total: 4
                    }
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_mood_levels_and_date() {
        let cli = Cli::try_parse_from([
            "steadyday",
            "mood",
            "--mood",
            "good",
            "--energy",
            "very_high",
            "--focus",
            "low",
            "--date",
            "2024-06-15",
        ])
        .unwrap();

        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(matches!(
            cli.command,
            Commands::Mood {
                mood: MoodLevel::Good,
                energy: EnergyLevel::VeryHigh,
                focus: FocusLevel::Low,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_mood_label() {
        let result = Cli::try_parse_from([
            "steadyday", "mood", "--mood", "great", "--energy", "high", "--focus", "high",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_classify_answers() {
        let cli = Cli::try_parse_from(["steadyday", "classify", "1,2,3,4,5"]).unwrap();

        match cli.command {
            Commands::Classify { answers } => assert_eq!(answers, vec![1, 2, 3, 4, 5]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_focus_done_defaults_to_work() {
        let cli = Cli::try_parse_from(["steadyday", "focus-done", "41"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::FocusDone {
                minutes: 41,
                kind: FocusSessionKind::Work
            }
        ));

        let cli =
            Cli::try_parse_from(["steadyday", "focus-done", "5", "--kind", "short_break"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::FocusDone {
                kind: FocusSessionKind::ShortBreak,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_streak_leaves_kind_unset() {
        let cli = Cli::try_parse_from(["steadyday", "streak", "reading"]).unwrap();

        assert!(matches!(cli.command, Commands::Streak { kind: None, .. }));
    }

    #[test]
    fn test_completion_report_requires_one_form() {
        assert_eq!(
            completion_report(Some(0.5), None, None).unwrap(),
            CompletionReport::Ratio { value: 0.5 }
        );
        assert!(completion_report(None, None, None).is_err());
        assert!(completion_report(None, Some(3), None).is_err());
    }
}
