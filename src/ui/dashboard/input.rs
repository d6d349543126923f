//! Dashboard key handling
//!
//! Maps mode-control keys onto outbound commands and drives the
//! heating-strategy modal. This is the only place the dashboard decides
//! anything: turning an already-on machine "on" is a plain confirmation,
//! turning it on from any other mode requires choosing a strategy first.

use super::state::DashboardState;
use crate::connection::{Command, CommandSink, HeatingStrategy};
use crate::store::MachineMode;
use crossterm::event::KeyCode;

/// What the caller should do after a key press has been processed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    Quit,
}

pub fn handle_key(
    code: KeyCode,
    state: &mut DashboardState,
    commands: &dyn CommandSink,
) -> InputOutcome {
    if state.modal().is_open() {
        handle_modal_key(code, state, commands);
        return InputOutcome::Handled;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') => InputOutcome::Quit,
        KeyCode::Char('s') => {
            commands.dispatch(Command::set_mode(MachineMode::Standby));
            InputOutcome::Handled
        }
        KeyCode::Char('e') => {
            commands.dispatch(Command::set_mode(MachineMode::Eco));
            InputOutcome::Handled
        }
        KeyCode::Char('o') => {
            match state.snapshot.machine.mode {
                // Already on: re-sending the mode is harmless and skips the modal.
                MachineMode::On => commands.dispatch(Command::set_mode(MachineMode::On)),
                MachineMode::Standby | MachineMode::Eco => state.modal_mut().open(),
            }
            InputOutcome::Handled
        }
        _ => InputOutcome::Handled,
    }
}

fn handle_modal_key(code: KeyCode, state: &mut DashboardState, commands: &dyn CommandSink) {
    match code {
        KeyCode::Esc => state.modal_mut().cancel(),
        KeyCode::Enter => {
            if let Some(strategy) = state.modal_mut().confirm() {
                commands.dispatch(Command::set_mode_with_strategy(strategy));
            }
        }
        KeyCode::Up | KeyCode::Char('k') => state.modal_mut().select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.modal_mut().select_next(),
        KeyCode::Char(c) => {
            // Digit keys jump straight to a strategy (1-based, like the list)
            if let Some(strategy) = c
                .to_digit(10)
                .filter(|d| *d >= 1)
                .and_then(|d| HeatingStrategy::from_code((d - 1) as u8))
            {
                state.modal_mut().select(strategy);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::dispatcher::MockCommandSink;
    use crate::ui::dashboard::state::ModalState;
    use mockall::predicate::eq;

    fn state_with_mode(mode: MachineMode) -> DashboardState {
        let mut state = DashboardState::new("http://brewos.local".to_string());
        state.snapshot.machine.mode = mode;
        state
    }

    fn no_commands() -> MockCommandSink {
        let mut sink = MockCommandSink::new();
        sink.expect_dispatch().times(0);
        sink
    }

    #[test]
    fn standby_key_sends_exactly_one_command_without_strategy() {
        let mut state = state_with_mode(MachineMode::On);
        let mut sink = MockCommandSink::new();
        sink.expect_dispatch()
            .with(eq(Command::set_mode(MachineMode::Standby)))
            .times(1)
            .return_const(());

        let outcome = handle_key(KeyCode::Char('s'), &mut state, &sink);
        assert_eq!(outcome, InputOutcome::Handled);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn eco_key_sends_exactly_one_command_without_strategy() {
        let mut state = state_with_mode(MachineMode::Standby);
        let mut sink = MockCommandSink::new();
        sink.expect_dispatch()
            .with(eq(Command::set_mode(MachineMode::Eco)))
            .times(1)
            .return_const(());

        handle_key(KeyCode::Char('e'), &mut state, &sink);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn on_key_while_already_on_sends_immediately() {
        let mut state = state_with_mode(MachineMode::On);
        let mut sink = MockCommandSink::new();
        sink.expect_dispatch()
            .with(eq(Command::set_mode(MachineMode::On)))
            .times(1)
            .return_const(());

        handle_key(KeyCode::Char('o'), &mut state, &sink);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn on_key_from_standby_opens_modal_without_sending() {
        let mut state = state_with_mode(MachineMode::Standby);
        let sink = no_commands();

        handle_key(KeyCode::Char('o'), &mut state, &sink);
        assert!(state.modal().is_open());
    }

    #[test]
    fn on_key_from_eco_opens_modal_without_sending() {
        let mut state = state_with_mode(MachineMode::Eco);
        let sink = no_commands();

        handle_key(KeyCode::Char('o'), &mut state, &sink);
        assert!(state.modal().is_open());
    }

    #[test]
    fn confirming_a_strategy_sends_it_and_closes_the_modal() {
        let mut state = state_with_mode(MachineMode::Standby);
        let sink = no_commands();
        handle_key(KeyCode::Char('o'), &mut state, &sink);
        handle_key(KeyCode::Down, &mut state, &sink);
        handle_key(KeyCode::Down, &mut state, &sink);

        let mut sink = MockCommandSink::new();
        sink.expect_dispatch()
            .with(eq(Command::set_mode_with_strategy(
                HeatingStrategy::Parallel,
            )))
            .times(1)
            .return_const(());
        handle_key(KeyCode::Enter, &mut state, &sink);
        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn digit_key_selects_strategy_directly() {
        let mut state = state_with_mode(MachineMode::Standby);
        let sink = no_commands();
        handle_key(KeyCode::Char('o'), &mut state, &sink);
        handle_key(KeyCode::Char('4'), &mut state, &sink);

        let mut sink = MockCommandSink::new();
        sink.expect_dispatch()
            .with(eq(Command::set_mode_with_strategy(
                HeatingStrategy::SmartStagger,
            )))
            .times(1)
            .return_const(());
        handle_key(KeyCode::Enter, &mut state, &sink);
    }

    #[test]
    fn cancel_closes_the_modal_without_sending() {
        let mut state = state_with_mode(MachineMode::Standby);
        let sink = no_commands();
        handle_key(KeyCode::Char('o'), &mut state, &sink);
        handle_key(KeyCode::Esc, &mut state, &sink);

        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn quit_keys_only_quit_when_the_modal_is_closed() {
        let mut state = state_with_mode(MachineMode::Standby);
        let sink = no_commands();

        assert_eq!(
            handle_key(KeyCode::Char('q'), &mut state, &sink),
            InputOutcome::Quit
        );

        handle_key(KeyCode::Char('o'), &mut state, &sink);
        assert_eq!(
            handle_key(KeyCode::Char('q'), &mut state, &sink),
            InputOutcome::Handled
        );
    }

    #[test]
    fn mode_keys_are_inert_while_the_modal_is_open() {
        let mut state = state_with_mode(MachineMode::Standby);
        let sink = no_commands();
        handle_key(KeyCode::Char('o'), &mut state, &sink);
        handle_key(KeyCode::Char('s'), &mut state, &sink);
        handle_key(KeyCode::Char('e'), &mut state, &sink);
        assert!(state.modal().is_open());
    }
}
