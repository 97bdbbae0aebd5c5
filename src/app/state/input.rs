use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MainCommand {
    Quit,
    OpenPicker,
    Refresh,
    ToggleWeekStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PickerCommand {
    Close,
    Up,
    Down,
    Confirm,
}

pub(super) fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}

pub(super) fn main_command(key: KeyEvent) -> Option<MainCommand> {
    if key.code == KeyCode::Esc {
        return Some(MainCommand::Quit);
    }
    match command_char(key)? {
        'q' => Some(MainCommand::Quit),
        'c' | '/' => Some(MainCommand::OpenPicker),
        'r' => Some(MainCommand::Refresh),
        'w' => Some(MainCommand::ToggleWeekStart),
        _ => None,
    }
}

pub(super) fn picker_command(key: KeyEvent) -> Option<PickerCommand> {
    match key.code {
        KeyCode::Esc => return Some(PickerCommand::Close),
        KeyCode::Up => return Some(PickerCommand::Up),
        KeyCode::Down => return Some(PickerCommand::Down),
        KeyCode::Enter => return Some(PickerCommand::Confirm),
        _ => {}
    }
    match command_char(key)? {
        'q' => Some(PickerCommand::Close),
        'k' => Some(PickerCommand::Up),
        'j' => Some(PickerCommand::Down),
        _ => None,
    }
}

impl AppState {
    pub(crate) fn open_picker(&mut self) {
        self.picker.open = true;
        self.picker.selected = self.current_city_index().unwrap_or(0);
    }

    pub(super) fn handle_picker_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        match picker_command(key) {
            Some(PickerCommand::Close) => self.picker.open = false,
            Some(PickerCommand::Up) => {
                self.picker.selected = self.picker.selected.saturating_sub(1);
            }
            Some(PickerCommand::Down) => {
                let last = self.cities.len().saturating_sub(1);
                self.picker.selected = (self.picker.selected + 1).min(last);
            }
            Some(PickerCommand::Confirm) => {
                self.picker.open = false;
                if let Some(city) = self.cities.get(self.picker.selected) {
                    let name = city.name.clone();
                    self.select_city(tx, &name);
                }
            }
            None => {}
        }
    }
}
