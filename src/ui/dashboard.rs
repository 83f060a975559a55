// Topic dashboards and the idle call-to-action
// Each open topic renders as one centred window over the widget. Closing it
// is reported back; the Showcase owns the selection.

use egui::{RichText, Ui};

use super::theme;
use crate::content::{self, CodingDashboard, Dashboard, LearningStatus};
use crate::engine::dispatch::Topic;

/// Buttons shown under the widget while no dashboard is open.
/// Returns the topic whose button was clicked.
pub fn call_to_action(ui: &mut Ui) -> Option<Topic> {
    let mut picked = None;
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Click a face of the cube, or jump straight to a topic")
                .color(theme::MUTED),
        );
        ui.horizontal(|ui| {
            for topic in Topic::ALL {
                if ui.button(topic.display_name()).clicked() {
                    picked = Some(topic);
                }
            }
        });
    });
    picked
}

/// Show the dashboard for `topic`. Returns `true` when the user closed it.
pub fn show(ctx: &egui::Context, topic: Topic) -> bool {
    let dashboard = content::dashboard(topic);
    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new(dashboard.title())
        .id(egui::Id::new("dashboard"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                match dashboard {
                    Dashboard::Coding(coding) => coding_dashboard(ui, coding),
                    Dashboard::Certification(certs) => certification_dashboard(ui, certs),
                    Dashboard::Status(status) => status_dashboard(ui, status),
                }
            });
            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    !open || close_clicked
}

fn subheading(ui: &mut Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).strong().color(theme::CYAN));
}

fn coding_dashboard(ui: &mut Ui, coding: &CodingDashboard) {
    subheading(ui, "GitHub Activity");
    for badge in coding.badges {
        ui.hyperlink_to(badge.label, badge.url);
    }

    subheading(ui, "Language Distribution");
    for share in coding.languages {
        ui.horizontal(|ui| {
            ui.add_sized([90.0, 16.0], egui::Label::new(share.language));
            ui.add(
                egui::ProgressBar::new(share.percent as f32 / 100.0)
                    .desired_width(260.0)
                    .fill(theme::rgb(share.color))
                    .text(format!("{}%", share.percent)),
            );
        });
    }

    subheading(ui, "Coding Stats");
    for block in coding.stat_blocks {
        ui.group(|ui| {
            ui.hyperlink_to(RichText::new(block.site).strong(), block.url);
            for (label, value) in block.stats {
                ui.label(format!("{label}: {value}"));
            }
            if !block.badges.is_empty() {
                ui.label(RichText::new(block.badges.join(" · ")).small().color(theme::LIME));
            }
        });
    }

    subheading(ui, "Featured Repositories");
    for repo in coding.repos {
        ui.horizontal(|ui| {
            ui.hyperlink_to(RichText::new(repo.name).strong(), repo.url);
            ui.label(
                RichText::new(format!("★ {}  ⑂ {}  {}", repo.stars, repo.forks, repo.language))
                    .small()
                    .color(theme::MUTED),
            );
        });
        ui.label(RichText::new(repo.description).small());
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.hyperlink_to("LeetCode", content::LEETCODE_URL);
        ui.hyperlink_to("HackerRank", content::HACKERRANK_URL);
    });
}

fn certification_dashboard(ui: &mut Ui, certs: &[content::Certification]) {
    for cert in certs {
        ui.group(|ui| {
            ui.label(RichText::new(cert.title).strong());
            ui.label(format!("{} · {}", cert.provider, cert.year));
            ui.horizontal(|ui| {
                ui.label(RichText::new("✔ Verified").color(theme::LIME));
                if let Some(url) = cert.verify_url {
                    ui.hyperlink_to("Verify", url);
                }
            });
        });
    }
    ui.add_space(6.0);
    ui.label(RichText::new("More certifications in progress…").italics().color(theme::MUTED));
}

fn status_dashboard(ui: &mut Ui, status: &LearningStatus) {
    subheading(ui, "Currently Learning");
    ui.label(RichText::new(status.learning).strong());
    ui.label(format!("Focus: {}", status.focus));
    ui.add(egui::ProgressBar::new(status.progress).show_percentage().fill(theme::PURPLE));

    for (title, detail) in status.tracks {
        ui.add_space(4.0);
        ui.label(RichText::new(*title).strong());
        ui.label(RichText::new(*detail).small().color(theme::MUTED));
    }

    subheading(ui, "Next Goals");
    ui.label(format!("Upcoming: {}", status.next_goal));
    ui.label(RichText::new(format!("Last updated: {}", status.last_updated)).small().color(theme::MUTED));
}
