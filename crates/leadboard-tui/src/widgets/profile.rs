//! Profile page.
//!
//! A static, read-only form: personal information fields and the account
//! settings section. Uncoupled from the dashboard; shares only the shell.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use leadboard_core::profile::UserProfile;

use crate::theme::{styles, Palette};

pub struct ProfileWidget<'a> {
    profile: &'a UserProfile,
    palette: &'a Palette,
}

impl<'a> ProfileWidget<'a> {
    pub fn new(profile: &'a UserProfile, palette: &'a Palette) -> Self {
        Self { profile, palette }
    }

    fn field_line(&self, label: &'static str, value: &str) -> Line<'static> {
        let p = self.palette;
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{label:<14}"), styles::text_muted(p)),
            Span::styled(value.to_string(), styles::text_primary(p)),
        ])
    }

    fn render_personal(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::titled_card(p, "Personal Information");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 {
            return;
        }

        // Avatar fallback + name header
        let header = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("[{}]", self.profile.initials()),
                styles::selected_highlight(p),
            ),
            Span::raw(" "),
            Span::styled(self.profile.name.to_string(), styles::text_bright(p)),
        ]);
        buf.set_line(inner.x, inner.y + 1, &header, inner.width);

        let fields = [
            ("Full Name", self.profile.name),
            ("Email", self.profile.email),
            ("Bio", self.profile.bio),
            ("Company", self.profile.company),
            ("Role", self.profile.role),
        ];
        for (i, (label, value)) in fields.iter().enumerate() {
            let y = inner.y + 3 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = self.field_line(label, value);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }

    fn render_account(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::titled_card(p, "Account Settings");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 {
            return;
        }

        let entries = [
            ("Password", "Change your account password."),
            (
                "Two-Factor Authentication",
                "Add an extra layer of security to your account.",
            ),
        ];
        let mut y = inner.y + 1;
        for (title, description) in entries {
            if y + 1 >= inner.bottom() {
                break;
            }
            let title_line = Line::from(vec![
                Span::raw(" "),
                Span::styled(title, styles::text_primary(p)),
            ]);
            buf.set_line(inner.x, y, &title_line, inner.width);
            let desc_line = Line::from(vec![
                Span::raw(" "),
                Span::styled(description, styles::text_muted(p)),
            ]);
            buf.set_line(inner.x, y + 1, &desc_line, inner.width);
            y += 3;
        }
    }
}

impl Widget for ProfileWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Min(10), Constraint::Length(9)]).split(area);
        self.render_personal(rows[0], buf);
        self.render_account(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use leadboard_core::data;

    #[test]
    fn test_renders_personal_fields() {
        let profile = data::sample_profile();
        let mut term = TestTerminal::with_size(90, 24);
        term.render_widget(ProfileWidget::new(&profile, &DARK), term.area());

        assert!(term.buffer_contains("Personal Information"));
        assert!(term.buffer_contains("Shad CN"));
        assert!(term.buffer_contains("shad.cn@example.com"));
        assert!(term.buffer_contains("Acme Inc."));
        assert!(term.buffer_contains("Software Engineer"));
    }

    #[test]
    fn test_renders_avatar_initials() {
        let profile = data::sample_profile();
        let mut term = TestTerminal::with_size(90, 24);
        term.render_widget(ProfileWidget::new(&profile, &DARK), term.area());
        assert!(term.buffer_contains("[SC]"));
    }

    #[test]
    fn test_renders_account_section() {
        let profile = data::sample_profile();
        let mut term = TestTerminal::with_size(90, 24);
        term.render_widget(ProfileWidget::new(&profile, &DARK), term.area());

        assert!(term.buffer_contains("Account Settings"));
        assert!(term.buffer_contains("Password"));
        assert!(term.buffer_contains("Two-Factor Authentication"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let profile = data::sample_profile();
        let mut term = TestTerminal::with_size(15, 4);
        term.render_widget(ProfileWidget::new(&profile, &DARK), term.area());
    }
}
