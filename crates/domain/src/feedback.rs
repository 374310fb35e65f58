use std::slice::Iter;

use log::debug;

use crate::Property;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FeedbackField {
    Name,
    Email,
    Message,
}

impl Property for FeedbackField {
    fn iter() -> Iter<'static, FeedbackField> {
        static FIELDS: [FeedbackField; 3] = [
            FeedbackField::Name,
            FeedbackField::Email,
            FeedbackField::Message,
        ];
        FIELDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FeedbackField::Name => "Имя",
            FeedbackField::Email => "Email",
            FeedbackField::Message => "Сообщение",
        }
    }
}

impl FeedbackField {
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            FeedbackField::Name => "Ваше имя",
            FeedbackField::Email => "your@email.com",
            FeedbackField::Message => "Ваш отзыв или предложение...",
        }
    }
}

/// Input of the feedback form. Nothing entered here leaves the page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    name: String,
    email: String,
    message: String,
}

impl FeedbackForm {
    #[must_use]
    pub fn field(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::Name => &self.name,
            FeedbackField::Email => &self.email,
            FeedbackField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FeedbackField, value: String) {
        match field {
            FeedbackField::Name => self.name = value,
            FeedbackField::Email => self.email = value,
            FeedbackField::Message => self.message = value,
        }
    }

    /// All fields are filled in.
    ///
    /// Only used as a rendering hint. Enforcing this before submission is left to the required
    /// inputs of the form.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        FeedbackField::iter().all(|f| !self.field(*f).is_empty())
    }

    /// Accepts the feedback locally and clears the form.
    pub fn submit(&mut self) -> Acknowledgment {
        debug!("feedback submitted");
        *self = Self::default();
        Acknowledgment::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self {
            title: "Спасибо за ваш отзыв!",
            description: "Мы свяжемся с вами в ближайшее время.",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::default();
        form.set_field(FeedbackField::Name, "A".to_string());
        form.set_field(FeedbackField::Email, "a@a.com".to_string());
        form.set_field(FeedbackField::Message, "hi".to_string());
        form
    }

    #[test]
    fn test_feedback_form_default() {
        let form = FeedbackForm::default();

        assert!(!form.is_complete());
        for f in FeedbackField::iter() {
            assert_eq!(form.field(*f), "");
        }
    }

    #[rstest]
    #[case(FeedbackField::Name)]
    #[case(FeedbackField::Email)]
    #[case(FeedbackField::Message)]
    fn test_feedback_form_set_field(#[case] field: FeedbackField) {
        let mut form = filled_form();
        let before = form.clone();

        form.set_field(field, "changed".to_string());

        for f in FeedbackField::iter() {
            if *f == field {
                assert_eq!(form.field(*f), "changed");
            } else {
                assert_eq!(form.field(*f), before.field(*f));
            }
        }
    }

    #[test]
    fn test_feedback_form_set_field_no_cross_validation() {
        let mut form = FeedbackForm::default();
        form.set_field(FeedbackField::Email, "not an email".to_string());

        assert_eq!(form.field(FeedbackField::Email), "not an email");
        assert_eq!(form.field(FeedbackField::Name), "");
        assert_eq!(form.field(FeedbackField::Message), "");
    }

    #[rstest]
    #[case(FeedbackField::Name)]
    #[case(FeedbackField::Email)]
    #[case(FeedbackField::Message)]
    fn test_feedback_form_is_complete(#[case] missing: FeedbackField) {
        let mut form = filled_form();
        assert!(form.is_complete());

        form.set_field(missing, String::new());
        assert!(!form.is_complete());
        assert_ne!(form, FeedbackForm::default());
    }

    #[test]
    fn test_feedback_form_submit() {
        let mut form = filled_form();
        let mut acknowledgments = vec![];

        acknowledgments.push(form.submit());

        assert_eq!(acknowledgments, vec![Acknowledgment::default()]);
        for f in FeedbackField::iter() {
            assert_eq!(form.field(*f), "");
        }
        assert_eq!(form, FeedbackForm::default());
    }

    #[test]
    fn test_feedback_form_submit_with_long_values() {
        let mut form = FeedbackForm::default();
        form.set_field(FeedbackField::Name, "Иван Петров".to_string());
        form.set_field(FeedbackField::Message, "Отличный зал!\n".repeat(100));

        let acknowledgment = form.submit();

        assert_eq!(acknowledgment.title, "Спасибо за ваш отзыв!");
        assert_eq!(form, FeedbackForm::default());
    }

    #[test]
    fn test_feedback_field_properties() {
        for field in FeedbackField::iter() {
            assert!(!field.name().is_empty());
            assert!(!field.placeholder().is_empty());
        }
    }
}
