use crate::toast::ToastKind;

pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! Tony will get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => SUBMIT_LABEL,
            Self::Sending => SENDING_LABEL,
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            Self::Idle => "1",
            Self::Sending => "0.7",
        }
    }

    pub fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Simulated contact form: no request is ever made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub state: SubmitState,
}

impl ContactForm {
    /// Enters the sending state. Returns `false` if a submission is already
    /// in flight.
    pub fn submit(&mut self) -> bool {
        if self.state.is_sending() {
            return false;
        }
        self.state = SubmitState::Sending;
        true
    }

    /// Completes the simulated send: clears the fields and restores the
    /// submit control. Returns `false` if nothing was in flight.
    pub fn complete(&mut self) -> bool {
        if !self.state.is_sending() {
            return false;
        }
        self.fields = ContactFields::default();
        self.state = SubmitState::Idle;
        true
    }
}

/// Notification raised once a simulated send completes.
pub fn success_notice() -> (&'static str, ToastKind) {
    (SUCCESS_MESSAGE, ToastKind::Success)
}
