use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skip,
    Arrow,
    Package,
    Build,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Skip) => theme::icons::SKIP,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Package) => theme::icons::PACKAGE,
            (true, Icon::Build) => theme::icons::BUILD,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Skip) => theme::icons_ascii::SKIP,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Package) => theme::icons_ascii::PACKAGE,
            (false, Icon::Build) => theme::icons_ascii::BUILD,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Skip | Icon::Arrow => theme::colors::DIM,
            Icon::Package | Icon::Build => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn uncolored_icon_is_plain() {
        assert_eq!(Icon::Skip.colored(false, false), "[SKIP]");
    }
}
