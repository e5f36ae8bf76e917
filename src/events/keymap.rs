use universe_core::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Navigate(Section),
    Back,
    ToggleMute,
    ToggleInstructions,
}

#[inline]
pub fn section_for_digit(key: &str) -> Option<Section> {
    match key {
        "1" => Some(Section::ALL[0]),
        "2" => Some(Section::ALL[1]),
        "3" => Some(Section::ALL[2]),
        "4" => Some(Section::ALL[3]),
        "5" => Some(Section::ALL[4]),
        "6" => Some(Section::ALL[5]),
        _ => None,
    }
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    if let Some(section) = section_for_digit(key) {
        return Some(KeyCommand::Navigate(section));
    }
    match key {
        "Escape" | "Backspace" => Some(KeyCommand::Back),
        "m" | "M" => Some(KeyCommand::ToggleMute),
        "h" | "H" => Some(KeyCommand::ToggleInstructions),
        _ => None,
    }
}
