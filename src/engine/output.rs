use std::fmt;

const RULE: &str = "========================================";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Banner(Vec<String>),
    Title(String),
    /// Closing `=` rule of the given width.
    Rule(usize),
    Text(String),
    Event(String),
    Menu { heading: String, options: Vec<String> },
}

/// Narration produced by one step of the game, printed by the caller.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if !lines.is_empty() {
            self.blocks.push(OutputBlock::Banner(lines));
        }
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn rule(&mut self, width: usize) {
        self.blocks.push(OutputBlock::Rule(width));
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    /// Something that happened this turn. A run of events is set apart by a blank line.
    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn menu<I, S>(&mut self, heading: impl Into<String>, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.push(OutputBlock::Menu {
            heading: heading.into(),
            options: options.into_iter().map(Into::into).collect(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut in_events = false;

        for block in &self.blocks {
            if !matches!(block, OutputBlock::Event(_)) {
                in_events = false;
            }

            match block {
                OutputBlock::Banner(lines) => {
                    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;
                    writeln!(f)?;
                    writeln!(f, "╔{}╗", "═".repeat(width))?;
                    for line in lines {
                        writeln!(f, "║  {:<w$}  ║", line, w = width - 4)?;
                    }
                    writeln!(f, "╚{}╝", "═".repeat(width))?;
                }
                OutputBlock::Title(t) => {
                    writeln!(f)?;
                    writeln!(f, "{RULE}")?;
                    writeln!(f, "  {t}")?;
                    writeln!(f, "{RULE}")?;
                }
                OutputBlock::Rule(width) => writeln!(f, "{}", "=".repeat(*width))?,
                OutputBlock::Text(line) => writeln!(f, "{line}")?,
                OutputBlock::Event(ev) => {
                    if !in_events {
                        writeln!(f)?;
                        in_events = true;
                    }
                    writeln!(f, "{ev}")?;
                }
                OutputBlock::Menu { heading, options } => {
                    writeln!(f)?;
                    writeln!(f, "{heading}")?;
                    for opt in options {
                        writeln!(f, "{opt}")?;
                    }
                }
            }
        }

        Ok(())
    }
}
