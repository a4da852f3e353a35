use console::Style;

/// Styled console output for progress, warnings, and errors.
///
/// Warnings and errors carry both a prefix and a color, so they stay
/// distinguishable when colors are disabled.
#[derive(Debug, Clone)]
pub struct Reporter {
    plain: Style,
    success: Style,
    warning: Style,
    error: Style,
    dim: Style,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self {
            plain: Style::new().force_styling(color),
            success: Style::new().green().force_styling(color),
            warning: Style::new().yellow().force_styling(color),
            error: Style::new().red().bold().force_styling(color),
            dim: Style::new().dim().force_styling(color),
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        println!("{}", self.plain.apply_to(message.as_ref()));
    }

    pub fn success(&self, message: impl AsRef<str>) {
        println!("{}", self.success.apply_to(message.as_ref()));
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        println!("{}", self.warning.apply_to(format!("warning: {}", message.as_ref())));
    }

    pub fn error(&self, message: impl AsRef<str>) {
        println!("{}", self.error.apply_to(format!("error: {}", message.as_ref())));
    }

    /// Print captured tool output, indented under the current item.
    pub fn detail(&self, text: &str) {
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            println!("    {}", self.dim.apply_to(line));
        }
    }
}

/// Render an error with its full source chain, `a: b: c`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
