use crate::data::document::RecordSink;
use crate::data::{Field, Record};

pub const SUCCESS_MESSAGE: &str = "Entry added successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Success(String),
    Error(String),
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Last entry was written; waiting for the "add another?" answer
    AwaitingConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate,
}

/// Input buffers and status of the entry form
#[derive(Debug, Clone)]
pub struct EntryForm {
    values: [String; 5],
    status: Status,
    phase: Phase,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            status: Status::Idle,
            phase: Phase::Editing,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        &mut self.values[field.index()]
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn record(&self) -> Record {
        Record::new(self.values.clone())
    }

    /// Write the current entry through `sink`. Blocks until the sink returns.
    pub fn submit(&mut self, sink: &dyn RecordSink) {
        if self.phase != Phase::Editing {
            return;
        }

        match sink.append(&self.record()) {
            Ok(()) => {
                self.status = Status::Success(SUCCESS_MESSAGE.to_string());
                self.phase = Phase::AwaitingConfirmation;
            }
            Err(e) => {
                log::error!("failed to add entry: {}", e);
                self.status = Status::Error(format!("Error: {}", e));
            }
        }
    }

    /// Answer to the "add another entry?" prompt
    pub fn confirm(&mut self, add_another: bool) -> Outcome {
        if !add_another {
            return Outcome::Terminate;
        }

        for value in &mut self.values {
            value.clear();
        }
        self.phase = Phase::Editing;
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::document::DocumentError;
    use std::cell::RefCell;

    /// Records every append; fails while `fail` is set
    #[derive(Default)]
    struct RecordingSink {
        appended: RefCell<Vec<Record>>,
        fail: bool,
    }

    impl RecordSink for RecordingSink {
        fn append(&self, record: &Record) -> Result<(), DocumentError> {
            if self.fail {
                return Err(DocumentError::TableNotFound {
                    id: "codeTable".to_string(),
                });
            }
            self.appended.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    fn filled_form() -> EntryForm {
        let mut form = EntryForm::new();
        for (field, value) in Field::ALL
            .iter()
            .zip(["Foo", "Bar", "http://w", "http://l", "2024-01-01"])
        {
            *form.value_mut(*field) = value.to_string();
        }
        form
    }

    #[test]
    fn test_submit_forwards_record_in_column_order() {
        let sink = RecordingSink::default();
        let mut form = filled_form();

        form.submit(&sink);

        let appended = sink.appended.borrow();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].get(Field::Name), "Foo");
        assert_eq!(appended[0].get(Field::Date), "2024-01-01");
        assert_eq!(form.status(), &Status::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(form.phase(), Phase::AwaitingConfirmation);
    }

    #[test]
    fn test_empty_fields_are_submitted() {
        let sink = RecordingSink::default();
        let mut form = EntryForm::new();

        form.submit(&sink);

        assert_eq!(sink.appended.borrow()[0], Record::default());
    }

    #[test]
    fn test_continue_clears_fields() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.submit(&sink);

        assert_eq!(form.confirm(true), Outcome::Continue);
        assert_eq!(form.phase(), Phase::Editing);
        assert!(Field::ALL.iter().all(|&field| form.value(field).is_empty()));
    }

    #[test]
    fn test_stop_terminates_without_more_writes() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.submit(&sink);

        assert_eq!(form.confirm(false), Outcome::Terminate);
        assert_eq!(sink.appended.borrow().len(), 1);
    }

    #[test]
    fn test_failure_keeps_fields_and_reports_error() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut form = filled_form();

        form.submit(&sink);

        assert_eq!(
            form.status(),
            &Status::Error("Error: no element with id 'codeTable' in document".to_string())
        );
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.value(Field::Name), "Foo");
        assert_eq!(form.value(Field::Link), "http://l");
    }

    #[test]
    fn test_submit_ignored_while_awaiting_confirmation() {
        let sink = RecordingSink::default();
        let mut form = filled_form();

        form.submit(&sink);
        form.submit(&sink);

        assert_eq!(sink.appended.borrow().len(), 1);
    }

    #[test]
    fn test_retry_after_failure() {
        let mut form = filled_form();
        form.submit(&RecordingSink {
            fail: true,
            ..Default::default()
        });

        let sink = RecordingSink::default();
        form.submit(&sink);

        assert_eq!(sink.appended.borrow().len(), 1);
        assert_eq!(form.phase(), Phase::AwaitingConfirmation);
    }
}
