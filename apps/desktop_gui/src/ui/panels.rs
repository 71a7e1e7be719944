//! Album page rendering. Reads state, never writes it: every interaction is
//! returned as a `UiAction` for the controller to apply.

use eframe::egui;
use shared::protocol::Album;

use crate::controller::events::UiAction;
use crate::controller::reducer::{AlbumsState, CardMode, CardView};

const CARD_WIDTH: f32 = 220.0;

const SAVE_FILL: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const CANCEL_FILL: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const DELETE_FILL: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const ADD_FILL: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

/// Buttons outside the album cards. `SubmitDraft` only shows while the add
/// form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    ToggleAddForm,
    SubmitDraft,
}

impl PageButton {
    pub fn label(self, state: &AlbumsState) -> &'static str {
        match self {
            Self::ToggleAddForm if state.is_adding() => "Cancel",
            Self::ToggleAddForm | Self::SubmitDraft => "Add Album",
        }
    }

    fn fill(self) -> egui::Color32 {
        match self {
            Self::ToggleAddForm => ADD_FILL,
            Self::SubmitDraft => SAVE_FILL,
        }
    }

    pub fn action(self) -> UiAction {
        match self {
            Self::ToggleAddForm => UiAction::ToggleAddForm,
            Self::SubmitDraft => UiAction::SubmitDraft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardButton {
    Edit,
    Delete,
    Save,
    Cancel,
}

impl CardButton {
    pub fn for_mode(mode: CardMode) -> [CardButton; 2] {
        match mode {
            CardMode::Viewing => [Self::Edit, Self::Delete],
            CardMode::Editing => [Self::Save, Self::Cancel],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }

    fn fill(self) -> egui::Color32 {
        match self {
            Self::Edit | Self::Save => SAVE_FILL,
            Self::Delete => DELETE_FILL,
            Self::Cancel => CANCEL_FILL,
        }
    }

    pub fn action(self, album: &Album) -> UiAction {
        match self {
            Self::Edit => UiAction::BeginEdit(album.id),
            Self::Delete => UiAction::Delete(album.id),
            Self::Save => UiAction::SaveEdit,
            Self::Cancel => UiAction::CancelEdit,
        }
    }
}

pub fn albums_page(ui: &mut egui::Ui, state: &AlbumsState) -> Vec<UiAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.heading("Albums");
        if state.in_flight() > 0 {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            page_button(ui, state, PageButton::ToggleAddForm, &mut actions);
        });
    });

    if state.is_adding() {
        add_album_form(ui, state, &mut actions);
    }

    ui.add_space(12.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in state.cards() {
                    album_card(ui, card, &mut actions);
                }
            });
        });

    actions
}

fn add_album_form(ui: &mut egui::Ui, state: &AlbumsState, actions: &mut Vec<UiAction>) {
    ui.add_space(8.0);
    let mut title = state.draft().title.clone();
    let edit = ui.add(
        egui::TextEdit::singleline(&mut title)
            .hint_text("New Album Title")
            .desired_width(f32::INFINITY),
    );
    if edit.changed() {
        actions.push(UiAction::DraftTitleChanged(title));
    }
    page_button(ui, state, PageButton::SubmitDraft, actions);
}

fn album_card(ui: &mut egui::Ui, card: CardView<'_>, actions: &mut Vec<UiAction>) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            match card {
                CardView::Viewing(album) => {
                    ui.label(egui::RichText::new(&album.title).strong().size(16.0));
                    ui.add_space(8.0);
                }
                CardView::Editing { buffer, .. } => {
                    let mut title = buffer.title.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut title).desired_width(f32::INFINITY))
                        .changed()
                    {
                        actions.push(UiAction::EditTitleChanged(title));
                    }
                }
            }
            ui.horizontal(|ui| {
                for button in CardButton::for_mode(card.mode()) {
                    if filled_button(ui, button.label(), button.fill()).clicked() {
                        actions.push(button.action(card.album()));
                    }
                }
            });
        });
}

fn page_button(
    ui: &mut egui::Ui,
    state: &AlbumsState,
    button: PageButton,
    actions: &mut Vec<UiAction>,
) {
    if filled_button(ui, button.label(state), button.fill()).clicked() {
        actions.push(button.action());
    }
}

fn filled_button(ui: &mut egui::Ui, label: &str, fill: egui::Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
            .fill(fill)
            .corner_radius(6.0),
    )
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
