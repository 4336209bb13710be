use console::Style;

/// Styles for every semantic element the client prints.
///
/// With color off every style is a no-op, so rendered strings can be compared
/// verbatim in tests.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub id: Style,
    pub title: Style,
    pub preview: Style,
    pub label: Style,
    pub success: Style,
    pub warning: Style,
    pub info: Style,
    pub error: Style,
}

impl Theme {
    pub fn new(use_color: bool) -> Self {
        let base = Style::new().force_styling(use_color);
        Self {
            header: base.clone().cyan().bold(),
            id: base.clone().yellow(),
            title: base.clone().bold(),
            preview: base.clone().color256(246).italic(),
            label: base.clone().dim(),
            success: base.clone().green(),
            warning: base.clone().yellow(),
            info: base.clone(),
            error: base.red().bold(),
        }
    }
}

/// Color unless disabled by flag or unsupported by the terminal.
pub fn use_color(no_color_flag: bool) -> bool {
    !no_color_flag && console::colors_enabled()
}
