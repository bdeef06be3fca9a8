use serde::{Deserialize, Serialize};

/// One recorded expense. Created on submit, removed on delete, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub payer: String,
    /// `M/D` label of the day it was recorded
    pub created_date: String,
}

/// Which form input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
    Payer,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Payer,
            FormField::Payer => FormField::Description,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Description => FormField::Payer,
            FormField::Amount => FormField::Description,
            FormField::Payer => FormField::Amount,
        }
    }
}

/// Pending input for a new expense. `amount` is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub payer: String,
}

impl ExpenseForm {
    pub fn new(default_payer: impl Into<String>) -> Self {
        ExpenseForm {
            description: String::new(),
            amount: String::new(),
            payer: default_payer.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
            FormField::Payer => &self.payer,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
            FormField::Payer => &mut self.payer,
        }
    }

    /// Clear description and amount after a successful submit; payer stays
    pub fn reset_after_submit(&mut self) {
        self.description.clear();
        self.amount.clear();
    }
}
