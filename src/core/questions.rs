use tracing::debug;

use crate::core::answers::{Answer, AnswerLog};
use crate::core::prompt::Prompter;
use crate::error::{BloxError, Result};

/// A fixed single-choice question about the project's stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub message: &'static str,
    pub choices: &'static [&'static str],
}

pub const PROJECT_NAME_MESSAGE: &str = "What is your project name?";

pub const PROJECT_TYPE: Question = Question {
    key: "PROJECT_TYPE",
    message: "Select project type:",
    choices: &[
        "SaaS skeleton project",
        "Single digital download project",
        "Multiple digital download project",
        "Single subscription based project",
        "Multiple subscriptions based project",
    ],
};

pub const USER_AUTH_PROVIDER: Question = Question {
    key: "USER_AUTH_PROVIDER",
    message: "Select user authentication provider",
    choices: &["No Auth", "Firebase", "AWS Cognito", "Auth0"],
};

pub const PAYMENT_PROCESSOR: Question = Question {
    key: "PAYMENT_PROCESSOR",
    message: "Select product listing and payment processing service",
    choices: &["Paypal", "Stripe"],
};

pub const EMAIL_PROVIDER: Question = Question {
    key: "EMAIL_PROVIDER",
    message: "Select email service",
    choices: &["Sendgrid", "Mailgun", "Mandrill", "Mailchimp"],
};

pub const DEPLOYMENT_PROVIDER: Question = Question {
    key: "DEPLOYMENT_PROVIDER",
    message: "Select deployment provider",
    choices: &["Vercel", "AWS", "GCP"],
};

/// Every stack question, in the order it is asked
pub const QUESTIONS: [Question; 5] = [
    PROJECT_TYPE,
    USER_AUTH_PROVIDER,
    PAYMENT_PROCESSOR,
    EMAIL_PROVIDER,
    DEPLOYMENT_PROVIDER,
];

impl Question {
    /// Ask this question and return the selected choice label
    pub fn ask(&self, prompter: &mut dyn Prompter) -> Result<&'static str> {
        let index = prompter.select(self.message, self.choices)?;
        self.choices.get(index).copied().ok_or_else(|| BloxError::Prompt {
            question: self.key.to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("selection {} out of range", index),
            ),
        })
    }
}

/// Ask every question in order, appending each selection to `log` and
/// clearing the screen after each one
pub fn run_questions(prompter: &mut dyn Prompter, log: &mut AnswerLog) -> Result<()> {
    for question in QUESTIONS.iter() {
        let choice = question.ask(prompter)?;
        debug!(key = question.key, choice, "answer recorded");
        log.push(Answer::new(question.key, choice));
        prompter.clear();
    }
    Ok(())
}
