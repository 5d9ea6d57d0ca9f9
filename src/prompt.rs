//! Operating prompt sections
//!
//! Constraints, resources and performance-evaluation criteria injected into the
//! agent's prompt. The default set is fixed; callers may append to it before
//! rendering.

pub const DEFAULT_TRIGGERING_PROMPT: &str = "Determine which next command to use, and respond using the format specified above:";

/// Ordered prompt sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptGenerator {
    constraints: Vec<String>,
    resources: Vec<String>,
    performance_evaluations: Vec<String>,
}

impl PromptGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_constraint(&mut self, text: impl Into<String>) {
        push_non_empty(&mut self.constraints, text.into());
    }

    pub fn add_resource(&mut self, text: impl Into<String>) {
        push_non_empty(&mut self.resources, text.into());
    }

    pub fn add_performance_evaluation(&mut self, text: impl Into<String>) {
        push_non_empty(&mut self.performance_evaluations, text.into());
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn performance_evaluations(&self) -> &[String] {
        &self.performance_evaluations
    }

    /// Render all sections as numbered lists
    pub fn generate_prompt_string(&self) -> String {
        [
            ("Constraints", self.constraints()),
            ("Resources", self.resources()),
            ("Performance Evaluation", self.performance_evaluations()),
        ]
        .iter()
        .map(|(title, items)| format!("{}:\n{}", title, numbered_list(items)))
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

fn push_non_empty(items: &mut Vec<String>, text: String) {
    if text.trim().is_empty() {
        log::debug!("Ignoring empty prompt entry");
        return;
    }
    items.push(text);
}

fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The default constraints, resources and evaluation criteria
pub fn build_default_prompt_generator() -> PromptGenerator {
    let mut generator = PromptGenerator::new();

    generator.add_constraint(
        "~4000 word limit for short term memory. Your short term memory is short, \
         so immediately save important information to files.",
    );
    generator.add_constraint(
        "If you are unsure how you previously did something or want to recall past events, \
         thinking about similar events will help you remember.",
    );
    generator.add_constraint("No user assistance");
    generator.add_constraint("Exclusively use the commands listed in double quotes e.g. \"command name\"");
    generator.add_constraint("Write all code to a file.");

    generator.add_resource("Internet access for searches and information gathering.");
    generator.add_resource("Long Term memory management.");
    generator.add_resource("GPT-3.5 powered Agents for delegation of simple tasks.");
    generator.add_resource("File output.");

    generator.add_performance_evaluation(
        "Continuously review and analyze your actions to ensure you are performing to the best of your abilities.",
    );
    generator.add_performance_evaluation("Constructively self-criticize your big-picture behavior constantly.");
    generator.add_performance_evaluation("Reflect on past decisions and strategies to refine your approach.");
    generator.add_performance_evaluation(
        "Every command has a cost, so be smart and efficient. Aim to complete tasks in the least number of steps.",
    );

    generator
}
