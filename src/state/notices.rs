use std::rc::Rc;
use yew::Reducible;

use super::transition::{Phase, Transition};
use crate::config::{
    DATA_NOTICE_LIFETIME_MS, FORM_MESSAGE_LIFETIME_MS, TOAST_ENTER_MS, TOAST_LEAVE_MS,
};

/// A floating message that slides in, stays for its lifetime, then slides out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toast {
    transition: Transition,
    age_ms: u32,
    lifetime_ms: u32,
}

impl Toast {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            transition: Transition::new(Phase::Appearing, TOAST_ENTER_MS, TOAST_LEAVE_MS),
            age_ms: 0,
            lifetime_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    pub fn advance(&mut self, dt_ms: u32) {
        self.age_ms = self.age_ms.saturating_add(dt_ms);
        self.transition.advance(dt_ms);
        if self.age_ms >= self.lifetime_ms {
            self.transition.hide();
        }
    }

    pub fn is_gone(&self) -> bool {
        !self.transition.in_layout()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormMessage {
    pub text: String,
    pub toast: Toast,
}

/// Transient on-page notices: the template-data notice and the form acknowledgement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    pub data_notice: Option<Toast>,
    pub form_message: Option<FormMessage>,
}

#[derive(Clone, Debug)]
pub enum NoticeAction {
    ShowDataNotice,
    DismissDataNotice,
    ShowFormMessage { text: String },
    Advance { dt_ms: u32 },
}

impl NoticeBoard {
    pub fn is_empty(&self) -> bool {
        self.data_notice.is_none() && self.form_message.is_none()
    }

    pub fn advance(&mut self, dt_ms: u32) {
        if let Some(toast) = &mut self.data_notice {
            toast.advance(dt_ms);
            if toast.is_gone() {
                self.data_notice = None;
            }
        }
        if let Some(msg) = &mut self.form_message {
            msg.toast.advance(dt_ms);
            if msg.toast.is_gone() {
                self.form_message = None;
            }
        }
    }
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if matches!(action, NoticeAction::Advance { .. }) && self.is_empty() {
            return self;
        }
        let mut next = (*self).clone();
        match action {
            NoticeAction::ShowDataNotice => {
                next.data_notice = Some(Toast::new(DATA_NOTICE_LIFETIME_MS));
            }
            NoticeAction::DismissDataNotice => next.data_notice = None,
            NoticeAction::ShowFormMessage { text } => {
                next.form_message = Some(FormMessage {
                    text,
                    toast: Toast::new(FORM_MESSAGE_LIFETIME_MS),
                });
            }
            NoticeAction::Advance { dt_ms } => next.advance(dt_ms),
        }
        Rc::new(next)
    }
}
