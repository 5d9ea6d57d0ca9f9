//! Interactive identity setup
//!
//! Asks for name, role, up to five goals and a budget, in that order. Every
//! answer has a default, so this path always produces a record.

use colored::Color;
use thiserror::Error;

use crate::console::Console;
use crate::identity::{IdentityRecord, MAX_GOALS};

/// Budget input that could not be used
#[derive(Debug, Error, PartialEq)]
pub enum BudgetParseError {
    #[error("invalid budget '{input}'")]
    Invalid { input: String },

    #[error("budget cannot be negative: '{input}'")]
    Negative { input: String },
}

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Parse a budget answer; empty input is unlimited
pub fn parse_budget(input: &str) -> Result<f64, BudgetParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let number = trimmed.strip_prefix(CURRENCY_SYMBOLS).unwrap_or(trimmed).trim();

    let amount: f64 = number.parse().map_err(|_| BudgetParseError::Invalid {
        input: input.to_string(),
    })?;

    if !amount.is_finite() {
        return Err(BudgetParseError::Invalid {
            input: input.to_string(),
        });
    }
    if amount < 0.0 {
        return Err(BudgetParseError::Negative {
            input: input.to_string(),
        });
    }

    Ok(amount)
}

pub struct ManualElicitor<'a> {
    console: &'a mut dyn Console,
}

impl<'a> ManualElicitor<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self { console }
    }

    pub fn elicit(&mut self) -> IdentityRecord {
        self.console.announce(
            "Create an AI-Assistant:",
            Color::Green,
            "Enter the name of your AI and its role below. Entering nothing will load defaults.",
        );

        let name = self.ask_name();
        let role = self.ask_role(&name);
        let goals = self.ask_goals();
        let budget = self.ask_budget();

        IdentityRecord::new(name, role, goals, budget)
    }

    fn ask_name(&mut self) -> String {
        self.console
            .announce("Name your AI: ", Color::Green, "For example, 'Entrepreneur-GPT'");

        let mut name = self.console.prompt("AI Name: ");
        if name.is_empty() {
            name = crate::identity::DEFAULT_NAME.to_string();
        }

        self.console
            .announce(&format!("{} here!", name), Color::BrightBlue, "I am at your service.");
        name
    }

    fn ask_role(&mut self, name: &str) -> String {
        self.console.announce(
            "Describe your AI's role: ",
            Color::Green,
            "For example, 'an AI designed to autonomously develop and run businesses with the sole goal of increasing your net worth.'",
        );

        // Blank is normalized to the default role by IdentityRecord::new
        self.console.prompt(&format!("{} is: ", name))
    }

    fn ask_goals(&mut self) -> Vec<String> {
        self.console.announce(
            "Enter up to 5 goals for your AI: ",
            Color::Green,
            "For example: \nIncrease net worth, Grow Twitter Account, Develop and manage multiple businesses autonomously'",
        );
        self.console
            .announce("Enter nothing to load defaults, enter nothing when finished.", Color::White, "");

        let mut goals = Vec::new();
        for i in 0..MAX_GOALS {
            let goal = self.console.prompt(&format!("Goal {}: ", i + 1));
            if goal.is_empty() {
                break;
            }
            goals.push(goal);
        }

        if goals.is_empty() {
            goals = IdentityRecord::default_goals();
        }
        goals
    }

    fn ask_budget(&mut self) -> f64 {
        self.console
            .announce("Enter your budget for API calls: ", Color::Green, "For example: $1.50");
        self.console.announce(
            "Enter nothing to let the AI run without monetary limit",
            Color::White,
            "",
        );

        let input = self.console.prompt("Budget: $");
        match parse_budget(&input) {
            Ok(amount) => amount,
            Err(e) => {
                log::warn!("{}", e);
                self.console.announce(
                    "Invalid budget input. Setting budget to unlimited.",
                    Color::Red,
                    "",
                );
                0.0
            }
        }
    }
}
