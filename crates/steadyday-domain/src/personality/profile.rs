use serde::Serialize;

use super::PersonalityType;

/// Descriptive material shown with a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub personality_type: PersonalityType,
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub growth_tips: &'static [&'static str],
    /// Short daily suggestion.
    pub advice: &'static str,
}

pub fn profile_for(personality_type: PersonalityType) -> TypeProfile {
    match personality_type {
        PersonalityType::One => TypeProfile {
            personality_type,
            name: "The Perfectionist",
            description: "You strive for things to be right and hold yourself to high standards. Organised and responsible, with a strong sense of right and wrong.",
            strengths: &[
                "Natural organisation",
                "Attention to detail",
                "Sense of responsibility",
                "Drive for continuous improvement",
            ],
            challenges: &[
                "Procrastinating out of perfectionism",
                "Harsh self-criticism",
                "Difficulty delegating",
                "Impatience with mistakes",
            ],
            growth_tips: &[
                "Apply a 'good enough' rule to low-stakes tasks",
                "Set realistic deadlines and keep them even when the result is imperfect",
                "Celebrate small daily progress",
            ],
            advice: "Good enough and done beats perfect and late. Focus on progress today.",
        },
        PersonalityType::Two => TypeProfile {
            personality_type,
            name: "The Helper",
            description: "You are empathetic and focused on others, quick to notice what people around you need.",
            strengths: &[
                "Natural empathy",
                "Interpersonal skills",
                "Motivation to help",
                "Building connections",
            ],
            challenges: &[
                "Neglecting your own needs",
                "Difficulty saying no",
                "Putting off personal tasks",
                "Overcommitting",
            ],
            growth_tips: &[
                "Schedule time for your own needs every day",
                "Practise saying no kindly but firmly",
                "Set clear boundaries in relationships",
            ],
            advice: "Keep fifteen minutes today just for yourself. Your needs matter too.",
        },
        PersonalityType::Three => TypeProfile {
            personality_type,
            name: "The Achiever",
            description: "You are goal-oriented and strongly motivated by success and recognition.",
            strengths: &[
                "Results orientation",
                "Energy and motivation",
                "Adaptability",
                "Efficiency",
            ],
            challenges: &[
                "Burnout from doing too much",
                "Difficulty relaxing",
                "Impatience with slow processes",
                "Letting relationships slide for work",
            ],
            growth_tips: &[
                "Schedule rest as if it were an important goal",
                "Use focus sessions to keep your energy sustainable",
                "Celebrate the process, not just the outcome",
            ],
            advice: "Book a break with no goal attached. Resting is productive too.",
        },
        PersonalityType::Four => TypeProfile {
            personality_type,
            name: "The Individualist",
            description: "You are creative and sensitive, looking for authenticity, with a rich emotional life and an eye for beauty.",
            strengths: &[
                "Creativity and originality",
                "Emotional depth",
                "Authenticity",
                "Aesthetic sensitivity",
            ],
            challenges: &[
                "Mood swings affecting productivity",
                "Waiting for inspiration before starting",
                "Comparing yourself with others",
                "Struggling with routine tasks",
            ],
            growth_tips: &[
                "Build routines that include creative elements",
                "Use your mood as a signal to adjust the day's activities",
                "Set small daily goals regardless of inspiration",
            ],
            advice: "Connect today's tasks to your personal values to find the motivation.",
        },
        PersonalityType::Five => TypeProfile {
            personality_type,
            name: "The Investigator",
            description: "You are observant and curious, making sense of the world through knowledge and analysis.",
            strengths: &[
                "Analytical ability",
                "Independence",
                "Intellectual curiosity",
                "Deep concentration",
            ],
            challenges: &[
                "Too much isolation",
                "Researching instead of acting",
                "Difficulty deciding",
                "Neglecting physical needs",
            ],
            growth_tips: &[
                "Time-box research before taking action",
                "Schedule regular social contact",
                "Decide with 'enough' information",
            ],
            advice: "Set a time limit for research. Enough information beats perfect information.",
        },
        PersonalityType::Six => TypeProfile {
            personality_type,
            name: "The Loyalist",
            description: "You value security and loyalty, are responsible, and look for support in systems you trust.",
            strengths: &[
                "Reliability",
                "Anticipating problems",
                "Teamwork",
                "Preparation and planning",
            ],
            challenges: &[
                "Anxiety and excessive worry",
                "Procrastinating out of fear of failure",
                "Difficulty trusting yourself",
                "Paralysis from imagining worst cases",
            ],
            growth_tips: &[
                "Use breathing exercises to manage anxiety",
                "Keep a list of evidence of your competence",
                "Set small goals to build self-confidence",
            ],
            advice: "Trust yourself. You have made good decisions before, so list your recent wins.",
        },
        PersonalityType::Seven => TypeProfile {
            personality_type,
            name: "The Enthusiast",
            description: "You are optimistic and versatile, with high energy and many interests.",
            strengths: &[
                "Optimism and energy",
                "Creativity",
                "Adaptability",
                "Motivating others",
            ],
            challenges: &[
                "Staying on one task",
                "Putting off tedious work",
                "Starting many projects without finishing",
                "Impatience with details",
            ],
            growth_tips: &[
                "Use short focus sessions to stay on task",
                "Limit the number of projects in flight",
                "Reward yourself for finishing the less enjoyable tasks",
            ],
            advice: "Focus on one task at a time today and use a timer for short blocks.",
        },
        PersonalityType::Eight => TypeProfile {
            personality_type,
            name: "The Challenger",
            description: "You are assertive and confident, with strong energy and a taste for leading.",
            strengths: &[
                "Natural leadership",
                "Determination",
                "Fast decision making",
                "Protecting others",
            ],
            challenges: &[
                "Impatience with slow processes",
                "Difficulty delegating",
                "Burnout from intensity",
                "Conflict from excessive assertiveness",
            ],
            growth_tips: &[
                "Delegate gradually",
                "Work in bursts with planned breaks",
                "Practise active listening",
            ],
            advice: "Delegate one small task today. You do not have to do everything yourself.",
        },
        PersonalityType::Nine => TypeProfile {
            personality_type,
            name: "The Peacemaker",
            description: "You seek harmony and peace, are steady and empathetic, and easily see many perspectives.",
            strengths: &[
                "Mediation",
                "Empathy",
                "Emotional stability",
                "Creating harmonious environments",
            ],
            challenges: &[
                "Procrastinating to avoid conflict",
                "Difficulty prioritising",
                "Inertia",
                "Neglecting your own needs",
            ],
            growth_tips: &[
                "Make priorities visible",
                "Build routines out of small daily actions",
                "Use timers to create a healthy sense of urgency",
            ],
            advice: "Pick your most important task and start it, even if only for ten minutes.",
        },
    }
}
