//! Agent identity bootstrap
//!
//! Decides between reusing a stored identity, synthesizing one from the
//! operator's intent, or asking for it field by field. Whatever happens, the
//! controller ends with a valid [`IdentityRecord`]: synthesis failures of any
//! kind fall back to [`ManualElicitor`].

use colored::Color;

use crate::budget::BudgetTracker;
use crate::config::Config;
use crate::console::Console;
use crate::identity::IdentityRecord;
use crate::identity::store::IdentityStore;
use crate::llm::CompletionClient;

pub mod automatic;
pub mod manual;

pub use automatic::AutomaticSynthesizer;
pub use manual::ManualElicitor;

/// Substring in the intent that selects interactive setup
pub const MANUAL_TRIGGER: &str = "--manual";

/// Settings the controller needs, taken from [`Config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    pub skip_reprompt: bool,
    pub authorise_key: String,
    pub exit_key: String,
    pub fast_llm_model: String,
    pub default_intent: String,
}

impl From<&Config> for BootstrapSettings {
    fn from(config: &Config) -> Self {
        Self {
            skip_reprompt: config.skip_reprompt,
            authorise_key: config.authorise_key.clone(),
            exit_key: config.exit_key.clone(),
            fast_llm_model: config.fast_llm_model.clone(),
            default_intent: config.default_intent.clone(),
        }
    }
}

#[derive(Debug)]
enum BootstrapState {
    FreshSetup,
    ResumeDecision(IdentityRecord),
    Finalized(IdentityRecord),
}

pub struct BootstrapController<'a> {
    settings: BootstrapSettings,
    console: &'a mut dyn Console,
    completion: &'a dyn CompletionClient,
    store: &'a dyn IdentityStore,
    budget: &'a mut dyn BudgetTracker,
}

impl<'a> BootstrapController<'a> {
    pub fn new(
        settings: BootstrapSettings,
        console: &'a mut dyn Console,
        completion: &'a dyn CompletionClient,
        store: &'a dyn IdentityStore,
        budget: &'a mut dyn BudgetTracker,
    ) -> Self {
        Self {
            settings,
            console,
            completion,
            store,
            budget,
        }
    }

    /// Run the bootstrap to completion
    pub fn run(&mut self) -> IdentityRecord {
        let mut state = self.entry_state();

        loop {
            log::debug!("Bootstrap state: {:?}", state);
            state = match state {
                BootstrapState::FreshSetup => {
                    let record = self.fresh_setup();
                    self.persist(&record);
                    BootstrapState::Finalized(record)
                }
                BootstrapState::ResumeDecision(stored) => self.resume_decision(stored),
                BootstrapState::Finalized(record) => return self.finalize(record),
            };
        }
    }

    fn entry_state(&mut self) -> BootstrapState {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("Could not load stored identity, starting fresh: {:#}", e);
                None
            }
        };

        match stored {
            None => BootstrapState::FreshSetup,
            Some(record) if self.settings.skip_reprompt => {
                self.console.announce("Name :", Color::Green, record.name());
                self.console.announce("Role :", Color::Green, record.role());
                self.console
                    .announce("Goals:", Color::Green, &format!("{:?}", record.goals()));
                self.console
                    .announce("API Budget:", Color::Green, &record.budget_label());
                BootstrapState::Finalized(record)
            }
            Some(record) => BootstrapState::ResumeDecision(record),
        }
    }

    fn resume_decision(&mut self, stored: IdentityRecord) -> BootstrapState {
        self.console.announce(
            "Welcome back! ",
            Color::Green,
            &format!("Would you like me to return to being {}?", stored.name()),
        );

        let answer = self.console.prompt(&format!(
            "Continue with the last settings?\nName:  {}\nRole:  {}\nGoals: {:?}\nAPI Budget: {}\nContinue ({}/{}): ",
            stored.name(),
            stored.role(),
            stored.goals(),
            stored.budget_label(),
            self.settings.authorise_key,
            self.settings.exit_key,
        ));

        if answer.eq_ignore_ascii_case(&self.settings.exit_key) {
            log::info!("Operator chose to discard the stored identity");
            BootstrapState::FreshSetup
        } else {
            BootstrapState::Finalized(stored)
        }
    }

    fn fresh_setup(&mut self) -> IdentityRecord {
        self.console.announce(
            "Welcome to Auto-GPT! ",
            Color::Green,
            "run with '--help' for more information.",
        );
        self.console.announce(
            "Create an AI-Assistant:",
            Color::Green,
            &format!("input '{}' to enter manual mode.", MANUAL_TRIGGER),
        );

        let mut intent = self.console.prompt("I want Auto-GPT to: ");
        if intent.is_empty() {
            intent = self.settings.default_intent.clone();
        }

        if intent.contains(MANUAL_TRIGGER) {
            self.console.announce("Manual Mode Selected", Color::Green, "");
            return ManualElicitor::new(&mut *self.console).elicit();
        }

        let synthesizer = AutomaticSynthesizer::new(self.completion, &self.settings.fast_llm_model);
        match synthesizer.synthesize(&intent) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Automatic identity synthesis failed: {}", e);
                if let Some(raw) = e.raw_output() {
                    log::debug!("Unparseable model output: {}", raw);
                }
                self.console.announce(
                    "Unable to automatically generate AI Config based on user desire.",
                    Color::Red,
                    "Falling back to manual mode.",
                );
                ManualElicitor::new(&mut *self.console).elicit()
            }
        }
    }

    fn persist(&mut self, record: &IdentityRecord) {
        if let Err(e) = self.store.save(record) {
            log::error!("Failed to save identity: {:#}", e);
            self.console
                .announce("Could not save AI settings:", Color::Red, &format!("{:#}", e));
        }
    }

    fn finalize(&mut self, record: IdentityRecord) -> IdentityRecord {
        self.budget.set_total_budget(record.budget());

        self.console
            .announce(record.name(), Color::BrightBlue, "has been created with the following details:");
        self.console.announce("Name:", Color::Green, record.name());
        self.console.announce("Role:", Color::Green, record.role());
        self.console.announce("Goals:", Color::Green, "");
        for goal in record.goals() {
            self.console.announce("-", Color::Green, goal);
        }

        record
    }
}
