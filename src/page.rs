use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::error::{AskError, AskResult};

/// Id of the element the question is read from
pub const QUESTION_ELEMENT: &str = "question";
/// Id of the element the answer is written to
pub const ANSWER_ELEMENT: &str = "answer";

/// The surface a requester reads questions from and renders answers into
pub trait Page: Send + Sync {
    /// Current value of an input element
    fn value(&self, id: &str) -> AskResult<String>;

    /// Replaces the text content of an element
    fn set_text(&self, id: &str, text: &str) -> AskResult<()>;

    /// Shows a blocking message to the user
    fn alert(&self, message: &str);
}

#[derive(Debug, Default)]
struct PageState {
    elements: HashMap<String, String>,
    alerts: Vec<String>,
}

/// In-memory page: a table of elements and a log of shown alerts.
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    state: Arc<Mutex<PageState>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the question and answer elements present and empty
    pub fn question_form() -> Self {
        Self::new()
            .with_element(QUESTION_ELEMENT, "")
            .with_element(ANSWER_ELEMENT, "")
    }

    pub fn with_element(self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    /// Sets an element's value, creating the element if needed
    pub fn set_value(&self, id: &str, value: &str) {
        self.lock()
            .elements
            .insert(id.to_string(), value.to_string());
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Page for MemoryPage {
    fn value(&self, id: &str) -> AskResult<String> {
        self.text(id)
            .ok_or_else(|| AskError::MissingElement(id.to_string()))
    }

    fn set_text(&self, id: &str, text: &str) -> AskResult<()> {
        let mut state = self.lock();
        let element = state
            .elements
            .get_mut(id)
            .ok_or_else(|| AskError::MissingElement(id.to_string()))?;
        *element = text.to_string();
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}

/// Terminal page: the host fills in the question, answers go to stdout
/// and alerts to stderr
#[derive(Debug, Clone, Default)]
pub struct ConsolePage {
    question: Arc<Mutex<String>>,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_question(&self, question: &str) {
        let mut current = self
            .question
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = question.to_string();
    }
}

impl Page for ConsolePage {
    fn value(&self, id: &str) -> AskResult<String> {
        if id != QUESTION_ELEMENT {
            return Err(AskError::MissingElement(id.to_string()));
        }
        let question = self
            .question
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(question.clone())
    }

    fn set_text(&self, id: &str, text: &str) -> AskResult<()> {
        if id != ANSWER_ELEMENT {
            return Err(AskError::MissingElement(id.to_string()));
        }
        debug!("Rendering answer ({} chars)", text.chars().count());
        write_line(&mut std::io::stdout().lock(), text)
    }

    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

fn write_line(out: &mut impl Write, text: &str) -> AskResult<()> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
