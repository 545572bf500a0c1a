use crate::feedback::{MAX_RATING, MIN_RATING, UNSET_RATING};
use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormField, FormMode, FormState, MAX_TEXT_LEN};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Bind { item } => FormState {
                text: item.text,
                rating: item.rating.get(),
                mode: FormMode::Update { id: item.id },
                focused: FormField::Text,
                message: None,
            },

            FormIntent::Reset => FormState::default(),

            FormIntent::InsertChar(ch) => {
                if state.focused != FormField::Text || ch.is_control() {
                    return state;
                }
                if state.text.chars().count() >= MAX_TEXT_LEN {
                    return FormState {
                        message: Some(format!("Reviews are limited to {} characters", MAX_TEXT_LEN)),
                        ..state
                    };
                }
                let mut text = state.text;
                text.push(ch);
                FormState {
                    text,
                    message: None,
                    ..state
                }
            }

            FormIntent::Backspace => {
                if state.focused != FormField::Text {
                    return state;
                }
                let mut text = state.text;
                text.pop();
                FormState {
                    text,
                    message: None,
                    ..state
                }
            }

            FormIntent::SelectRating(rating) => {
                if rating > MAX_RATING {
                    return state;
                }
                FormState {
                    rating,
                    message: None,
                    ..state
                }
            }

            FormIntent::RatingUp => {
                let rating = match state.rating {
                    UNSET_RATING => MIN_RATING,
                    r if r >= MAX_RATING => MAX_RATING,
                    r => r + 1,
                };
                FormState {
                    rating,
                    message: None,
                    ..state
                }
            }

            FormIntent::RatingDown => {
                let rating = match state.rating {
                    UNSET_RATING => MAX_RATING,
                    r if r <= MIN_RATING => MIN_RATING,
                    r => r - 1,
                };
                FormState {
                    rating,
                    message: None,
                    ..state
                }
            }

            FormIntent::NextField => FormState {
                focused: match state.focused {
                    FormField::Text => FormField::Rating,
                    FormField::Rating => FormField::Text,
                },
                ..state
            },

            FormIntent::Rejected { message } => FormState {
                message: Some(message),
                ..state
            },
        }
    }
}
