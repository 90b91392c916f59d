use console::style;

/// Menu entries, numbered from 1 in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    TotalStats,
    ExtensionGlobal,
    ExtensionInPath,
    NameSearch,
    LargestFiles,
    Exit,
}

impl Choice {
    pub const ALL: [Choice; 6] = [
        Choice::TotalStats,
        Choice::ExtensionGlobal,
        Choice::ExtensionInPath,
        Choice::NameSearch,
        Choice::LargestFiles,
        Choice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::TotalStats => "Get total count and size of files on the system",
            Choice::ExtensionGlobal => "Search for files with a specific extension on the system",
            Choice::ExtensionInPath => "Search for files with a specific extension in a directory",
            Choice::NameSearch => "Search for files by name in a directory",
            Choice::LargestFiles => "Show the 10 largest files in a directory",
            Choice::Exit => "Exit",
        }
    }
}

pub fn render_menu() -> String {
    let mut out = format!("\n{}\n", style(" Please select an option:").yellow().bold());
    for choice in Choice::ALL {
        out.push_str(&format!(
            "{} {}\n",
            style(format!("{}.", choice.number())).blue().bold(),
            choice.label()
        ));
    }
    out
}
