use std::fmt;

///
/// ErrorTree
///
/// Route-aware collection of validation messages. Every message is kept so a
/// single pass reports all problems of a declaration at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: Vec<(String, Self)>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Attach a nested tree under `route` if it carries any message.
    pub fn add_child(&mut self, route: impl Into<String>, child: Self) {
        if !child.is_empty() {
            self.children.push((route.into(), child));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.iter().all(|(_, c)| c.is_empty())
    }

    /// Flatten into `route: message` lines in insertion order.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut out = self.messages.clone();
        for (route, child) in &self.children {
            for line in child.flatten() {
                out.push(format!("{route}: {line}"));
            }
        }

        out
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flatten().join("\n"))
    }
}

/// Push a formatted message onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}
