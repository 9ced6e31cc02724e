/*
[INPUT]:  Key presses targeted at the active form
[OUTPUT]: Raw field values in document order, ready for serialization
[POS]:    View layer - per-panel form state
[UPDATE]: When a form gains or loses fields
*/

use crate::tabs::Panel;

/// Field names per panel, in document order.
pub fn field_names(panel: Panel) -> &'static [&'static str] {
    match panel {
        Panel::Register => &[
            "first_name",
            "last_name",
            "age",
            "monthly_income",
            "phone_number",
        ],
        Panel::Eligibility | Panel::CreateLoan => {
            &["customer_id", "loan_amount", "interest_rate", "tenure"]
        }
        Panel::ViewLoans | Panel::ViewCustomer => &["customer_id"],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
}

impl FormField {
    /// Human label derived from the field name.
    pub fn label(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    panel: Panel,
    fields: Vec<FormField>,
    focus: usize,
}

impl FormState {
    pub fn new(panel: Panel) -> Self {
        let fields = field_names(panel)
            .iter()
            .copied()
            .map(|name| FormField {
                name,
                value: String::new(),
            })
            .collect();
        Self {
            panel,
            fields,
            focus: 0,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Set a field by name. Returns `false` if the form has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    /// `(name, raw value)` pairs in document order.
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), field.value.clone()))
            .collect()
    }
}
