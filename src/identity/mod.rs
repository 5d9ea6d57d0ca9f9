//! Agent identity record
//!
//! An identity is the name, role, goals and spend ceiling that define an agent's
//! persona. Records are normalized once at construction and never mutated after:
//! - blank name/role are replaced by defaults
//! - goals are capped at [`MAX_GOALS`]
//! - a negative or non-finite budget becomes `0.0` (unlimited)

use serde::{Deserialize, Serialize};

use crate::prompt::PromptGenerator;

pub mod store;

pub const MAX_GOALS: usize = 5;

pub const DEFAULT_NAME: &str = "Entrepreneur-GPT";

pub const DEFAULT_ROLE: &str =
    "an AI designed to autonomously develop and run businesses with the sole goal of increasing your net worth.";

pub const DEFAULT_GOALS: [&str; 3] = [
    "Increase net worth",
    "Grow Twitter Account",
    "Develop and manage multiple businesses autonomously",
];

/// Structured agent identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIdentity")]
pub struct IdentityRecord {
    #[serde(rename = "ai_name")]
    name: String,
    #[serde(rename = "ai_role")]
    role: String,
    #[serde(rename = "ai_goals")]
    goals: Vec<String>,
    #[serde(rename = "api_budget")]
    budget: f64,
}

/// Unvalidated on-disk shape, routed through [`IdentityRecord::new`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawIdentity {
    pub ai_name: String,
    pub ai_role: String,
    pub ai_goals: Vec<String>,
    pub api_budget: f64,
}

impl From<RawIdentity> for IdentityRecord {
    fn from(raw: RawIdentity) -> Self {
        Self::new(raw.ai_name, raw.ai_role, raw.ai_goals, raw.api_budget)
    }
}

impl IdentityRecord {
    pub fn new(name: impl Into<String>, role: impl Into<String>, goals: Vec<String>, budget: f64) -> Self {
        let name = name.into().trim().to_string();
        let role = role.into().trim().to_string();

        let mut goals = goals;
        if goals.len() > MAX_GOALS {
            log::warn!("Identity has {} goals, keeping the first {}", goals.len(), MAX_GOALS);
            goals.truncate(MAX_GOALS);
        }

        let budget = if budget.is_finite() && budget >= 0.0 {
            budget
        } else {
            log::warn!("Invalid budget {}, treating as unlimited", budget);
            0.0
        };

        Self {
            name: if name.is_empty() { DEFAULT_NAME.to_string() } else { name },
            role: if role.is_empty() { DEFAULT_ROLE.to_string() } else { role },
            goals,
            budget,
        }
    }

    pub fn default_goals() -> Vec<String> {
        DEFAULT_GOALS.iter().map(|g| g.to_string()).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn is_unlimited(&self) -> bool {
        self.budget <= 0.0
    }

    /// Budget for display, "unlimited" for the `0.0` sentinel
    pub fn budget_label(&self) -> String {
        if self.is_unlimited() {
            "unlimited".to_string()
        } else {
            format!("${}", self.budget)
        }
    }

    /// Render the complete operating prompt for this identity
    pub fn construct_full_prompt(&self, generator: &PromptGenerator) -> String {
        let mut prompt = format!(
            "You are {}, {}\nYour decisions must always be made independently without seeking user assistance. \
             Play to your strengths as an LLM and pursue simple strategies with no legal complications.\n\nGOALS:\n\n",
            self.name, self.role
        );

        for (i, goal) in self.goals.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, goal));
        }

        if !self.is_unlimited() {
            prompt.push_str(&format!(
                "\nIt takes money to let you run. Your API budget is ${:.3}\n",
                self.budget
            ));
        }

        prompt.push('\n');
        prompt.push_str(&generator.generate_prompt_string());
        prompt
    }
}
