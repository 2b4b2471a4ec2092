//! Recording fakes for the notification and confirmation surfaces.

use parking_lot::Mutex;

use console::notify::{ConfirmPrompt, Notifier};

/// One recorded toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Notifier that records every toast for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Success(m) => Some(m.clone()),
                Notice::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m.clone()),
                Notice::Success(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.lock().push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.lock().push(Notice::Error(message.to_string()));
    }
}

/// Prompt that always answers the same way, recording each question asked.
pub struct StaticPrompt {
    answer: bool,
    questions: Mutex<Vec<String>>,
}

impl StaticPrompt {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().clone()
    }
}

impl ConfirmPrompt for StaticPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.questions.lock().push(message.to_string());
        self.answer
    }
}
