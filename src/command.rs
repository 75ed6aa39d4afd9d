use crate::engine::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Direction),
    Pause,
    Reset,
    ToggleGrid,
}

impl Command {
    /// Map a key press to a command.  Letter keys are matched regardless of
    /// case or Shift.  Returns `None` for keys with no binding.
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !(KeyModifiers::NONE | KeyModifiers::SHIFT).contains(ev.modifiers) {
            return None;
        }
        let code = match ev.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            code => code,
        };
        match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Direction::Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Direction::Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Direction::Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Direction::Right)),
            KeyCode::Char('p' | ' ') | KeyCode::Esc => Some(Command::Pause),
            KeyCode::Char('r') | KeyCode::Enter => Some(Command::Reset),
            KeyCode::Char('g') => Some(Command::ToggleGrid),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('W'), KeyModifiers::SHIFT, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('A'), KeyModifiers::SHIFT, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Char('S'), KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Char('D'), KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('p'), KeyModifiers::NONE, Some(Command::Pause))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Pause))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Pause))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::Reset))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Reset))]
    #[case(KeyCode::Char('g'), KeyModifiers::NONE, Some(Command::ToggleGrid))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Up, KeyModifiers::ALT, None)]
    #[case(KeyCode::Tab, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
