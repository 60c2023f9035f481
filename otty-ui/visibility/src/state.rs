use iced::keyboard;

use crate::model::Visibility;

/// UI events emitted by the selector trigger, panel and option rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    TriggerPressed,
    /// Outside interaction or Escape while the panel is open.
    Dismissed,
    OptionPressed(Visibility),
}

/// Outbound notification produced by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Changed(Visibility),
    OpenChanged(bool),
}

/// Transient interaction state of one selector instance.
///
/// The selected value is never stored here: it belongs to the caller and
/// is passed to the view on every render.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    open: bool,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply `event` and return the resulting notifications in the order
    /// they must be delivered. A selection always yields `Changed` before
    /// `OpenChanged(false)`.
    pub fn update(&mut self, event: SelectorEvent) -> Vec<Notification> {
        match (self.open, event) {
            (false, SelectorEvent::TriggerPressed) => {
                self.commit_open(true);
                vec![Notification::OpenChanged(true)]
            },
            (true, SelectorEvent::TriggerPressed)
            | (true, SelectorEvent::Dismissed) => {
                self.commit_open(false);
                vec![Notification::OpenChanged(false)]
            },
            (true, SelectorEvent::OptionPressed(value)) => {
                log::debug!("visibility selector picked {value}");
                self.commit_open(false);
                vec![
                    Notification::Changed(value),
                    Notification::OpenChanged(false),
                ]
            },
            (false, event) => {
                log::trace!("visibility selector ignored {event:?} while closed");
                Vec::new()
            },
        }
    }

    /// Programmatic open/close. Notifies only when the state flips.
    pub fn set_open(&mut self, open: bool) -> Option<Notification> {
        if self.open == open {
            return None;
        }

        self.commit_open(open);
        Some(Notification::OpenChanged(open))
    }

    /// Apply `event` and deliver its notifications through `handlers`.
    pub fn handle(
        &mut self,
        event: SelectorEvent,
        handlers: &mut SelectorHandlers<'_>,
    ) {
        for notification in self.update(event) {
            handlers.notify(notification);
        }
    }

    fn commit_open(&mut self, open: bool) {
        self.open = open;
        log::debug!("visibility selector open={open}");
    }
}

/// Caller callbacks: `on_change` is required, `on_open_change` optional.
pub struct SelectorHandlers<'a> {
    on_change: Box<dyn FnMut(Visibility) + 'a>,
    on_open_change: Option<Box<dyn FnMut(bool) + 'a>>,
}

impl<'a> SelectorHandlers<'a> {
    pub fn new(on_change: impl FnMut(Visibility) + 'a) -> Self {
        Self {
            on_change: Box::new(on_change),
            on_open_change: None,
        }
    }

    /// Subscribe to open/close transitions.
    pub fn on_open_change(
        mut self,
        on_open_change: impl FnMut(bool) + 'a,
    ) -> Self {
        self.on_open_change = Some(Box::new(on_open_change));
        self
    }

    pub fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::Changed(value) => (self.on_change)(value),
            Notification::OpenChanged(open) => {
                if let Some(on_open_change) = self.on_open_change.as_mut() {
                    on_open_change(open);
                }
            },
        }
    }
}

/// Map a key press to a dismissal. Only Escape dismisses.
pub fn dismiss_on_key(key: &keyboard::Key) -> Option<SelectorEvent> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            Some(SelectorEvent::Dismissed)
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn opened() -> SelectorState {
        let mut state = SelectorState::new();
        let _ = state.update(SelectorEvent::TriggerPressed);
        state
    }

    #[test]
    fn given_new_state_when_created_then_is_closed() {
        assert!(!SelectorState::new().is_open());
    }

    #[test]
    fn given_closed_state_when_trigger_pressed_then_opens_once() {
        let mut state = SelectorState::new();

        let notifications = state.update(SelectorEvent::TriggerPressed);

        assert!(state.is_open());
        assert_eq!(notifications, vec![Notification::OpenChanged(true)]);
    }

    #[test]
    fn given_open_state_when_trigger_pressed_then_closes_once() {
        let mut state = opened();

        let notifications = state.update(SelectorEvent::TriggerPressed);

        assert!(!state.is_open());
        assert_eq!(notifications, vec![Notification::OpenChanged(false)]);
    }

    #[test]
    fn given_open_state_when_option_pressed_then_change_precedes_close() {
        let mut state = opened();

        let notifications =
            state.update(SelectorEvent::OptionPressed(Visibility::Public));

        assert!(!state.is_open());
        assert_eq!(
            notifications,
            vec![
                Notification::Changed(Visibility::Public),
                Notification::OpenChanged(false),
            ]
        );
    }

    #[test]
    fn given_open_state_when_dismissed_then_closes_without_change() {
        let mut state = opened();

        let notifications = state.update(SelectorEvent::Dismissed);

        assert!(!state.is_open());
        assert_eq!(notifications, vec![Notification::OpenChanged(false)]);
    }

    #[test]
    fn given_closed_state_when_row_or_dismiss_arrives_then_ignored() {
        let mut state = SelectorState::new();

        assert!(state.update(SelectorEvent::Dismissed).is_empty());
        assert!(
            state
                .update(SelectorEvent::OptionPressed(Visibility::Private))
                .is_empty()
        );
        assert!(!state.is_open());
    }

    #[test]
    fn given_same_open_value_when_set_programmatically_then_no_notification() {
        let mut state = SelectorState::new();

        assert_eq!(state.set_open(false), None);
        assert_eq!(state.set_open(true), Some(Notification::OpenChanged(true)));
        assert_eq!(state.set_open(true), None);
        assert_eq!(
            state.set_open(false),
            Some(Notification::OpenChanged(false))
        );
    }

    #[test]
    fn given_handlers_when_selecting_then_callbacks_run_in_order() {
        let log = RefCell::new(Vec::new());
        let mut handlers = SelectorHandlers::new(|value| {
            log.borrow_mut().push(Notification::Changed(value))
        })
        .on_open_change(|open| {
            log.borrow_mut().push(Notification::OpenChanged(open))
        });
        let mut state = SelectorState::new();

        state.handle(SelectorEvent::TriggerPressed, &mut handlers);
        state.handle(
            SelectorEvent::OptionPressed(Visibility::Protected),
            &mut handlers,
        );
        drop(handlers);

        assert_eq!(
            log.into_inner(),
            vec![
                Notification::OpenChanged(true),
                Notification::Changed(Visibility::Protected),
                Notification::OpenChanged(false),
            ]
        );
    }

    #[test]
    fn given_no_open_handler_when_toggling_then_only_state_changes() {
        let changes = RefCell::new(Vec::new());
        let mut handlers =
            SelectorHandlers::new(|value| changes.borrow_mut().push(value));
        let mut state = SelectorState::new();

        state.handle(SelectorEvent::TriggerPressed, &mut handlers);
        state.handle(SelectorEvent::Dismissed, &mut handlers);
        drop(handlers);

        assert!(!state.is_open());
        assert!(changes.into_inner().is_empty());
    }

    #[test]
    fn given_escape_key_when_mapping_then_dismisses() {
        let escape = keyboard::Key::Named(keyboard::key::Named::Escape);
        let enter = keyboard::Key::Named(keyboard::key::Named::Enter);

        assert_eq!(dismiss_on_key(&escape), Some(SelectorEvent::Dismissed));
        assert_eq!(dismiss_on_key(&enter), None);
    }
}
