//! ANSI styling for prompt output.

/// ANSI escape codes used by the prompts.
struct Code;

impl Code {
    const RESET: &'static str = "\x1b[0m";
    const BOLD: &'static str = "\x1b[1m";
    const RED: &'static str = "\x1b[91m";
    const GREEN: &'static str = "\x1b[92m";
    const YELLOW: &'static str = "\x1b[93m";
    const BLUE: &'static str = "\x1b[94m";
    const MAGENTA: &'static str = "\x1b[95m";
    const CYAN: &'static str = "\x1b[96m";
}

/// Color palette, no-op when colors are disabled.
#[derive(Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", Code::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(Code::MAGENTA, text)
    }

    pub fn menu(&self, text: &str) -> String {
        self.paint(Code::BLUE, text)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(Code::CYAN, text)
    }

    pub fn ok(&self, text: &str) -> String {
        self.paint(Code::GREEN, text)
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint(Code::YELLOW, text)
    }

    pub fn fail(&self, text: &str) -> String {
        self.paint(Code::RED, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(Code::BOLD, text)
    }
}
