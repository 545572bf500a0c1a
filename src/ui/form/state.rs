use crate::feedback::{
    FeedbackDraft, FeedbackId, FeedbackPatch, Rating, ValidationError, UNSET_RATING,
};
use crate::mvi::Snapshot;

/// Longest review the form accepts.
pub const MAX_TEXT_LEN: usize = 280;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Update {
        id: FeedbackId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Text,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub text: String,
    /// `UNSET_RATING` until the user picks one.
    pub rating: u8,
    pub mode: FormMode,
    pub focused: FormField,
    /// Inline validation hint.
    pub message: Option<String>,
}

impl Snapshot for FormState {}

/// What the form hands to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(FeedbackDraft),
    Update { id: FeedbackId, patch: FeedbackPatch },
}

impl FormState {
    pub fn is_updating(&self) -> bool {
        matches!(self.mode, FormMode::Update { .. })
    }

    /// The submit button is enabled only with text and a picked rating.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() && self.rating != UNSET_RATING
    }

    pub fn submission(&self) -> Result<FormSubmission, ValidationError> {
        match &self.mode {
            FormMode::Create => {
                let draft = FeedbackDraft::new(self.text.clone(), self.rating);
                draft.validate()?;
                Ok(FormSubmission::Create(draft))
            }
            FormMode::Update { id } => {
                let text = self.text.trim();
                if text.is_empty() {
                    return Err(ValidationError::EmptyText);
                }
                let patch = FeedbackPatch::default()
                    .with_text(text)
                    .with_rating(Rating::new(self.rating)?);
                Ok(FormSubmission::Update {
                    id: id.clone(),
                    patch,
                })
            }
        }
    }
}
