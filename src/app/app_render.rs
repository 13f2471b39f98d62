use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::panels::review_render::{self, REVIEW_FORM_HEIGHT};
use crate::panels::search_render::{self, SEARCH_BOX_HEIGHT};
use crate::panels::{browse_render, footer_render, summary_render};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let show_form = self.view.state().panels().review_form;
        let form_height = if show_form { REVIEW_FORM_HEIGHT } else { 0 };

        let [search_area, body_area, form_area, footer_area] = Layout::vertical([
            Constraint::Length(SEARCH_BOX_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(form_height),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [browse_area, summary_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body_area);

        search_render::render_box(self, frame, search_area);
        browse_render::render_list(self, frame, browse_area);
        summary_render::render_panel(self, frame, summary_area);
        if show_form {
            review_render::render_form(self, frame, form_area);
        }
        footer_render::render_line(self, frame, footer_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(&mut self.help, frame);
        }

        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
