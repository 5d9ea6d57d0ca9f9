//! Identity synthesis from a free-form intent
//!
//! One completion round-trip, then structural extraction from the model's text.
//! The worked example in [`SYSTEM_PROMPT`] and the patterns below are one
//! contract: change them together and bump [`IDENTITY_FORMAT_VERSION`].
//!
//! Expected model output:
//!
//! ```text
//! Name: CMOGPT
//! Description: a professional digital marketer AI ...
//! Goals:
//! - first goal
//! - second goal
//! ```
//!
//! The budget is never read from model output; synthesized identities are
//! unlimited. Goals are not capped here, [`IdentityRecord::new`] does that.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::identity::IdentityRecord;
use crate::llm::{CompletionClient, CompletionError, Message};

pub const IDENTITY_FORMAT_VERSION: u32 = 1;

pub const SYSTEM_PROMPT: &str = r#"
Your task is to devise up to 5 highly effective goals and an appropriate role-based name (_GPT) for an autonomous agent, ensuring that the goals are optimally aligned with the successful completion of its assigned task.

The user will provide the task, you will provide only the output in the exact format specified below with no explanation or conversation.

Example input:
Help me with marketing my business

Example output:
Name: CMOGPT
Description: a professional digital marketer AI that assists Solopreneurs in growing their businesses by providing world-class expertise in solving marketing problems for SaaS, content products, agencies, and more.
Goals:
- Engage in effective problem-solving, prioritization, planning, and supporting execution to address your marketing needs as your virtual Chief Marketing Officer.

- Provide specific, actionable, and concise advice to help you make informed decisions without the use of platitudes or overly wordy explanations.

- Identify and prioritize quick wins and cost-effective campaigns that maximize results with minimal time and budget investment.

- Proactively take the lead in guiding you and offering suggestions when faced with unclear information or uncertainty to ensure your marketing strategy remains on track.
"#;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Name\s*:[ \t]*(.*)").unwrap());

static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Description\s*:\s*(.*?)(?:\n|Goals)").unwrap());

static GOAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n-\s*(.*)").unwrap());

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("could not find '{field}' in model output")]
    Parse { field: &'static str, raw_output: String },

    #[error(transparent)]
    Transport(#[from] CompletionError),
}

impl SynthesisError {
    /// Model output that failed to parse, for diagnostics
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            SynthesisError::Parse { raw_output, .. } => Some(raw_output.as_str()),
            SynthesisError::Transport(_) => None,
        }
    }
}

/// The two-message request for `user_prompt`
pub fn build_messages(user_prompt: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(format!(
            "Task: '{}'\nRespond only with the output in the exact format specified in the system prompt, with no explanation or conversation.\n",
            user_prompt
        )),
    ]
}

/// Extract an identity from model output
pub fn parse_identity(output: &str) -> Result<IdentityRecord, SynthesisError> {
    let name = NAME_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| SynthesisError::Parse {
            field: "Name",
            raw_output: output.to_string(),
        })?;

    let role = DESCRIPTION_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| SynthesisError::Parse {
            field: "Description",
            raw_output: output.to_string(),
        })?;

    let goals = GOAL_PATTERN
        .captures_iter(output)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    Ok(IdentityRecord::new(name, role, goals, 0.0))
}

pub struct AutomaticSynthesizer<'a> {
    client: &'a dyn CompletionClient,
    model: &'a str,
}

impl<'a> AutomaticSynthesizer<'a> {
    pub fn new(client: &'a dyn CompletionClient, model: &'a str) -> Self {
        Self { client, model }
    }

    pub fn synthesize(&self, user_prompt: &str) -> Result<IdentityRecord, SynthesisError> {
        let messages = build_messages(user_prompt);
        let output = self.client.complete(&messages, self.model)?;

        log::debug!(
            "Identity generator raw output (format v{}): {}",
            IDENTITY_FORMAT_VERSION,
            output
        );

        parse_identity(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::MAX_GOALS;
    use crate::llm::Role;
    use crate::llm::testing::CannedClient;

    const FOO_OUTPUT: &str = "Name: FooGPT\nDescription: does foo\nGoals:\n- g1\n- g2\n";

    #[test]
    fn test_parse_well_formed_output() {
        let record = parse_identity(FOO_OUTPUT).unwrap();
        assert_eq!(record.name(), "FooGPT");
        assert_eq!(record.role(), "does foo");
        assert_eq!(record.goals(), ["g1".to_string(), "g2".to_string()]);
        assert_eq!(record.budget(), 0.0);
    }

    #[test]
    fn test_parse_missing_name() {
        let err = parse_identity("Description: does foo\nGoals:\n- g1\n").unwrap_err();
        assert!(matches!(err, SynthesisError::Parse { field: "Name", .. }));
        assert_eq!(err.raw_output(), Some("Description: does foo\nGoals:\n- g1\n"));
    }

    #[test]
    fn test_parse_missing_description() {
        let err = parse_identity("Name: FooGPT\nGoals:\n- g1\n").unwrap_err();
        assert!(matches!(err, SynthesisError::Parse { field: "Description", .. }));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let record = parse_identity("NAME:  LowGPT\ndescription :   lower case  \n").unwrap();
        assert_eq!(record.name(), "LowGPT");
        assert_eq!(record.role(), "lower case");
        assert!(record.goals().is_empty());
    }

    #[test]
    fn test_description_stops_at_goals_token() {
        let record = parse_identity("Name: A\nDescription: helps people Goals:\n- one\n").unwrap();
        assert_eq!(record.role(), "helps people");
        assert_eq!(record.goals(), ["one".to_string()]);
    }

    #[test]
    fn test_description_after_line_break() {
        let record = parse_identity("Name: A\nDescription:\n  on the next line\nGoals:\n- one\n").unwrap();
        assert_eq!(record.role(), "on the next line");
    }

    #[test]
    fn test_parse_example_with_blank_lines_between_goals() {
        let output = SYSTEM_PROMPT.split("Example output:\n").nth(1).unwrap();
        let record = parse_identity(output).unwrap();
        assert_eq!(record.name(), "CMOGPT");
        assert!(record.role().starts_with("a professional digital marketer AI"));
        assert_eq!(record.goals().len(), 4);
        assert!(record.goals()[3].starts_with("Proactively take the lead"));
    }

    #[test]
    fn test_goal_at_very_start_is_ignored() {
        let record = parse_identity("- stray\nName: A\nDescription: b\n- real\n").unwrap();
        assert_eq!(record.goals(), ["real".to_string()]);
    }

    #[test]
    fn test_extra_goals_capped_by_record() {
        let output = "Name: A\nDescription: b\nGoals:\n- 1\n- 2\n- 3\n- 4\n- 5\n- 6\n- 7\n";
        let record = parse_identity(output).unwrap();
        assert_eq!(record.goals().len(), MAX_GOALS);
        assert_eq!(record.goals()[4], "5");
    }

    #[test]
    fn test_blank_name_falls_back_to_default() {
        let record = parse_identity("Name:\nDescription: b\n").unwrap();
        assert_eq!(record.name(), crate::identity::DEFAULT_NAME);
    }

    #[test]
    fn test_build_messages() {
        let messages = build_messages("sell lemonade");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.starts_with("Task: 'sell lemonade'\n"));
        assert!(messages[1].content.contains("exact format"));
    }

    #[test]
    fn test_synthesize_uses_model() {
        let client = CannedClient::responding(FOO_OUTPUT);
        let record = AutomaticSynthesizer::new(&client, "fast-model")
            .synthesize("do foo")
            .unwrap();

        assert_eq!(record.name(), "FooGPT");
        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1, "fast-model");
        assert_eq!(requests[0].0, build_messages("do foo"));
    }

    #[test]
    fn test_synthesize_same_input_same_record() {
        let client = CannedClient::responding(FOO_OUTPUT);
        let synthesizer = AutomaticSynthesizer::new(&client, "m");
        assert_eq!(
            synthesizer.synthesize("x").unwrap(),
            synthesizer.synthesize("x").unwrap()
        );
    }

    #[test]
    fn test_synthesize_transport_failure() {
        let client = CannedClient::failing();
        let err = AutomaticSynthesizer::new(&client, "m").synthesize("x").unwrap_err();
        assert!(matches!(err, SynthesisError::Transport(_)));
        assert!(err.raw_output().is_none());
    }
}
