use fz_core::{ClaimDetails, ReminderRequest, ValidationError};

/// What the user enters after scanning a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    /// Blank keeps the previous name when reusing a label.
    pub name: String,
    /// Applied when claiming or creating; a reused label keeps the old quantity.
    pub quantity: i32,
    pub shelf_life_days: Option<i32>,
    pub reminder: Option<ReminderRequest>,
}

impl ItemForm {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            shelf_life_days: None,
            reminder: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_shelf_life_days(mut self, days: i32) -> Self {
        self.shelf_life_days = Some(days);
        self
    }

    pub fn with_reminder(mut self, reminder: ReminderRequest) -> Self {
        self.reminder = Some(reminder);
        self
    }

    pub(crate) fn claim_details(
        &self,
        reminder_days: Option<i32>,
    ) -> Result<ClaimDetails, ValidationError> {
        ClaimDetails {
            name: self.name.clone(),
            quantity: self.quantity,
            shelf_life_days: self.shelf_life_days,
            reminder_days,
        }
        .validated()
    }

    pub(crate) fn check_shelf_life(&self) -> Result<(), ValidationError> {
        match self.shelf_life_days {
            Some(days) if days < 0 => Err(ValidationError::NegativeDays(days as i64)),
            _ => Ok(()),
        }
    }
}
