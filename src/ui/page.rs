// Scrollable portfolio page
// Hero with the typewriter line, then skills, projects, education and
// certifications, and contact. The nav bar scrolls to a section on the next
// frame, when the section heading is laid out again.

use egui::{Align, RichText, Ui};

use super::theme;
use crate::content::{self, Section};
use crate::engine::typewriter::Typewriter;

#[derive(Debug, Default)]
pub struct PageState {
    scroll_target: Option<Section>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
    }

    /// Consume the pending scroll request if it targets `section`.
    fn take_target(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }
}

pub fn show(ui: &mut Ui, state: &mut PageState, typewriter: &Typewriter) {
    nav_bar(ui, state);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            hero(ui, typewriter);
            ui.add_space(24.0);
            section_heading(ui, state, Section::Skills);
            skills(ui);
            ui.add_space(24.0);
            section_heading(ui, state, Section::Projects);
            projects(ui);
            ui.add_space(24.0);
            section_heading(ui, state, Section::Education);
            education(ui);
            certifications(ui);
            ui.add_space(24.0);
            section_heading(ui, state, Section::Contact);
            contact(ui);
            ui.add_space(32.0);
        });
}

fn nav_bar(ui: &mut Ui, state: &mut PageState) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{} {}", content::NAME_FIRST, content::NAME_LAST))
                .strong()
                .color(theme::CYAN),
        );
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            for section in Section::NAV.iter().rev() {
                if ui.link(section.label()).clicked() {
                    state.scroll_to(*section);
                }
            }
        });
    });
}

fn section_heading(ui: &mut Ui, state: &mut PageState, section: Section) {
    let response = ui.heading(RichText::new(section.label()).color(theme::CYAN).strong());
    if state.take_target(section) {
        response.scroll_to_me(Some(Align::TOP));
    }
    ui.add_space(4.0);
}

fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::none()
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, theme::CYAN.gamma_multiply(0.25)))
        .inner_margin(egui::Margin::same(10.0))
        .rounding(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn chips(ui: &mut Ui, items: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            ui.label(
                RichText::new(*item)
                    .small()
                    .color(theme::LIME)
                    .background_color(theme::LIME.gamma_multiply(0.08)),
            );
        }
    });
}

// ============================================================================
// SECTIONS
// ============================================================================

fn hero(ui: &mut Ui, typewriter: &Typewriter) {
    ui.add_space(16.0);
    ui.label(RichText::new("Hello, I'm").color(theme::MUTED));
    ui.label(
        RichText::new(format!("{} {}", content::NAME_FIRST, content::NAME_LAST))
            .size(34.0)
            .strong(),
    );

    let cursor = if typewriter.cursor_visible() { "|" } else { " " };
    ui.label(
        RichText::new(format!("{}{cursor}", typewriter.visible_text()))
            .size(22.0)
            .monospace()
            .color(theme::CYAN),
    );

    ui.add_space(8.0);
    ui.label(RichText::new(content::BIO).color(theme::MUTED));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.hyperlink_to(RichText::new("Resume").strong(), content::RESUME_URL);
        for link in &content::SOCIAL_LINKS {
            ui.hyperlink_to(link.label, link.url);
        }
    });
}

fn skills(ui: &mut Ui) {
    for category in &content::SKILLS {
        card(ui, |ui| {
            ui.label(RichText::new(category.title).strong());
            ui.label(RichText::new(category.description).small().color(theme::MUTED));
            chips(ui, category.skills);
        });
        ui.add_space(6.0);
    }
}

fn projects(ui: &mut Ui) {
    for project in &content::PROJECTS {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(project.title).strong().size(16.0));
                ui.label(RichText::new(project.kind).small().color(theme::PURPLE));
            });
            ui.label(RichText::new(project.subtitle).color(theme::CYAN));
            ui.label(
                RichText::new(format!("{} · team of {}", project.period, project.team_size))
                    .small()
                    .color(theme::MUTED),
            );
            ui.label(project.description);
            for achievement in project.achievements {
                ui.label(format!("• {achievement}"));
            }
            chips(ui, project.technologies);
            ui.hyperlink_to("View on GitHub", project.github);
        });
        ui.add_space(6.0);
    }
}

fn education(ui: &mut Ui) {
    for entry in &content::EDUCATION {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(entry.degree).strong());
                if entry.current {
                    ui.label(RichText::new("Current").small().color(theme::LIME));
                }
            });
            ui.label(RichText::new(entry.specialization).color(theme::CYAN));
            ui.label(
                RichText::new(format!(
                    "{}, {} · {} · {}",
                    entry.institution, entry.location, entry.period, entry.grade
                ))
                .small()
                .color(theme::MUTED),
            );
            for achievement in entry.achievements {
                ui.label(format!("• {achievement}"));
            }
        });
        ui.add_space(6.0);
    }
}

fn certifications(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.label(RichText::new("Certifications").strong().color(theme::CYAN));
    for cert in &content::CERTIFICATIONS {
        card(ui, |ui| {
            ui.label(RichText::new(cert.title).strong());
            ui.label(
                RichText::new(format!("{} · {} · {}", cert.provider, cert.year, cert.kind))
                    .small()
                    .color(theme::MUTED),
            );
            if let Some(url) = cert.verify_url {
                ui.hyperlink_to("Verify", url);
            }
        });
    }
}

fn contact(ui: &mut Ui) {
    ui.label(RichText::new(content::CONTACT_BLURB).color(theme::MUTED));
    ui.add_space(4.0);
    egui::Grid::new("contact_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for info in &content::CONTACT {
                ui.label(RichText::new(info.label).strong());
                match info.href {
                    Some(href) => ui.hyperlink_to(info.value, href),
                    None => ui.label(info.value),
                };
                ui.end_row();
            }
        });
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        for link in &content::SOCIAL_LINKS {
            ui.hyperlink_to(link.label, link.url);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_is_consumed_once() {
        let mut state = PageState::new();
        state.scroll_to(Section::Projects);
        assert!(!state.take_target(Section::Skills));
        assert!(state.take_target(Section::Projects));
        assert!(!state.take_target(Section::Projects));
    }

    #[test]
    fn test_later_request_replaces_earlier() {
        let mut state = PageState::new();
        state.scroll_to(Section::Skills);
        state.scroll_to(Section::Contact);
        assert!(!state.take_target(Section::Skills));
        assert!(state.take_target(Section::Contact));
    }
}
