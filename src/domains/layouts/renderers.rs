//! Built-in text renderers.

use super::kind::LayoutKind;
use super::registry::LayoutRenderer;

const WIDTH: usize = 72;

/// A side-navigation layout. The three side variants differ only in chrome.
#[derive(Debug, Clone, Copy)]
pub struct SideLayout {
    kind: LayoutKind,
    border: char,
}

impl SideLayout {
    pub fn collapsible() -> Self {
        Self {
            kind: LayoutKind::CollapsibleSide,
            border: '|',
        }
    }

    pub fn stacked() -> Self {
        Self {
            kind: LayoutKind::StackedSide,
            border: '#',
        }
    }

    pub fn frameless() -> Self {
        Self {
            kind: LayoutKind::FramelessSide,
            border: ' ',
        }
    }
}

impl LayoutRenderer for SideLayout {
    fn kind(&self) -> LayoutKind {
        self.kind
    }

    fn render(&self, title: &str, body: &str) -> String {
        let mut out = format!("{} {}\n", self.border, title);
        for line in body.lines() {
            out.push_str(&format!("{} {}\n", self.border, line));
        }
        out
    }
}

/// A horizontal bar above the content.
#[derive(Debug, Clone, Copy)]
pub struct TopBarLayout;

impl LayoutRenderer for TopBarLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::TopBarClassic
    }

    fn render(&self, title: &str, body: &str) -> String {
        let rule = "=".repeat(WIDTH);
        format!("{rule}\n {title}\n{rule}\n{body}\n")
    }
}

/// Content drawn in a box over the page.
#[derive(Debug, Clone, Copy)]
pub struct OverlayLayout;

impl LayoutRenderer for OverlayLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::ContentOverlay
    }

    fn render(&self, title: &str, body: &str) -> String {
        let rule = format!("+{}+", "-".repeat(WIDTH - 2));
        let mut out = format!("{rule}\n| {title}\n{rule}\n");
        for line in body.lines() {
            out.push_str(&format!("| {line}\n"));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

/// No chrome at all.
#[derive(Debug, Clone, Copy)]
pub struct BlankLayout;

impl LayoutRenderer for BlankLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Blank
    }

    fn render(&self, _title: &str, body: &str) -> String {
        format!("{body}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_drops_title() {
        assert_eq!(BlankLayout.render("Doctors", "row"), "row\n");
    }

    #[test]
    fn test_side_layout_prefixes_lines() {
        let out = SideLayout::collapsible().render("Doctors", "a\nb");
        assert_eq!(out, "| Doctors\n| a\n| b\n");
    }

    #[test]
    fn test_top_bar_contains_title() {
        let out = TopBarLayout.render("Patients", "body");
        assert!(out.contains(" Patients\n"));
        assert!(out.ends_with("body\n"));
    }
}
