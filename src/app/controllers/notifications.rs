use crate::app::domain::{Level, Notice, TimerToken};

use super::effects::Effect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastState {
    Hidden,
    Visible {
        text: String,
        level: Level,
        token: TimerToken,
    },
}

/// Owns the single toast and its dismissal timer.
///
/// At most one timer is logically armed: a new request always cancels the
/// previous token before arming its own, and an expiry carrying any token
/// other than the current one is dropped.
pub struct NotificationController {
    state: ToastState,
    next_token: u64,
}

impl NotificationController {
    pub fn new() -> Self {
        Self {
            state: ToastState::Hidden,
            next_token: 1,
        }
    }

    pub fn state(&self) -> &ToastState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, ToastState::Visible { .. })
    }

    pub fn visible_text(&self) -> Option<&str> {
        match &self.state {
            ToastState::Visible { text, .. } => Some(text),
            ToastState::Hidden => None,
        }
    }

    fn next_token(&mut self) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Show `notice`, superseding whatever is on screen.
    pub fn notify(&mut self, notice: Notice) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(3);
        if let ToastState::Visible { token, .. } = &self.state {
            effects.push(Effect::CancelDismissTimer(*token));
        }

        let token = self.next_token();
        log::debug!("notification {:?}: {}", token, notice.text);
        effects.push(Effect::ShowToast {
            text: notice.text.clone(),
            level: notice.level,
        });
        effects.push(Effect::ArmDismissTimer {
            token,
            delay: notice.delay,
        });

        self.state = ToastState::Visible {
            text: notice.text,
            level: notice.level,
            token,
        };
        effects
    }

    /// Handle a fired dismissal timer.
    pub fn expire(&mut self, fired: TimerToken) -> Vec<Effect> {
        match &self.state {
            ToastState::Visible { token, .. } if *token == fired => {
                self.state = ToastState::Hidden;
                vec![Effect::HideToast]
            }
            _ => {
                log::debug!("ignoring stale dismissal timer {:?}", fired);
                Vec::new()
            }
        }
    }
}

impl Default for NotificationController {
    fn default() -> Self {
        Self::new()
    }
}
