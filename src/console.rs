use inksac::prelude::*;

/// Display collaborator: renders informational and error messages to the
/// user, degrading to plain text when the terminal has no color support.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color_support: ColorSupport,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.style_info(message));
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.style_error(message));
    }

    fn style_info(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let info_style = Style::builder().foreground(Color::Cyan).build();
        message.style(info_style).to_string()
    }

    fn style_error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();
        message.style(error_style).to_string()
    }
}
