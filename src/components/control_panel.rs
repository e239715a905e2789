// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Control panel for editing the strategy and downloading the field
//!
//! Every input writes straight to the store through an `AppState` method,
//! so the canvas picks up the change on the next rebuild.

use std::fmt::Display;

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use masonry::widgets::InsertNewline;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, button, flex_col, flex_row, label, portal, sized_box};

use crate::data::{AppState, NoticeKind};
use crate::export::ExportFormat;
use crate::model::{BattingHand, BowlerType, FieldStyle, MatchFormat, StrategyField};
use crate::theme;

/// Gap between panel sections
const SECTION_GAP: f64 = 12.0;
/// Gap between a section caption and its input
const CAPTION_GAP: f64 = 4.0;
/// Height of the multi-line notes input
const NOTES_INPUT_HEIGHT: f64 = 96.0;
/// Choice buttons per row
const CHOICES_PER_ROW: usize = 2;

/// Right-hand panel with every editable attribute and the export actions
pub fn control_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let strategy = state.store.get();

    let details = flex_col((
        section(
            "Placement Name",
            text_field(strategy.placement_name.clone(), "Field placement name", |state, text| {
                state.set_field(StrategyField::PlacementName(text));
            }),
        ),
        section(
            "Team Name",
            text_field(strategy.team_name.clone(), "Team name", |state, text| {
                state.set_field(StrategyField::TeamName(text));
            }),
        ),
        section(
            "Batsman",
            choice_group(&BattingHand::ALL, strategy.batsman_hand, StrategyField::BatsmanHand),
        ),
        section(
            "Bowler Type",
            choice_group(&BowlerType::ALL, strategy.bowler_type, StrategyField::BowlerType),
        ),
        section(
            "Wicketkeeper Name",
            text_field(strategy.wicketkeeper_name.clone(), "WK", |state, text| {
                state.set_field(StrategyField::WicketkeeperName(text));
            }),
        ),
        section(
            "Bowler Name",
            text_field(strategy.bowler_name.clone(), "Bowler", |state, text| {
                state.set_field(StrategyField::BowlerName(text));
            }),
        ),
        section(
            "Field Strategy",
            choice_group(&FieldStyle::ALL, strategy.field_style, StrategyField::FieldStyle),
        ),
        section(
            "Match Format",
            choice_group(&MatchFormat::ALL, strategy.match_format, StrategyField::MatchFormat),
        ),
        (strategy.match_format == MatchFormat::Custom).then(|| {
            section(
                "Number of Overs",
                text_field(
                    state.custom_overs_input.clone(),
                    "Enter number of overs",
                    |state, text| state.set_custom_overs_text(text),
                ),
            )
        }),
        section(
            "Scenario Notes",
            sized_box(
                xilem::view::text_input(strategy.scenario_notes.clone(), |state: &mut AppState, text| {
                    state.set_field(StrategyField::ScenarioNotes(text));
                })
                .insert_newline(InsertNewline::OnEnter)
                .placeholder("Add notes about this field placement..."),
            )
            .expand_width()
            .height(NOTES_INPUT_HEIGHT.px()),
        ),
    ))
    .gap(SECTION_GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill);

    let fielder_inputs: Vec<_> = strategy
        .fielders
        .iter()
        .map(|marker| {
            let id = marker.id;
            section(
                format!("Fielder {} Name", id.slot()),
                text_field(marker.name.clone(), "Fielder", move |state, text| {
                    state.rename_marker(id, text);
                }),
            )
        })
        .collect();

    let content = flex_col((
        label("Field Settings")
            .text_size(18.0)
            .color(theme::text::PRIMARY),
        details,
        label("Fielders")
            .text_size(16.0)
            .color(theme::text::PRIMARY),
        flex_col(fielder_inputs)
            .gap(SECTION_GAP.px())
            .cross_axis_alignment(CrossAxisAlignment::Fill),
        action_button("Reset Fielders".to_string(), false, |state: &mut AppState| {
            state.reset_markers();
        }),
        download_buttons(),
        notice_line(state),
    ))
    .gap(SECTION_GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
    .padding(theme::size::CONTROL_PANEL_PADDING);

    sized_box(portal(content))
        .width(theme::size::CONTROL_PANEL_WIDTH.px())
        .expand_height()
        .background_color(theme::panel::BACKGROUND)
        .border_color(theme::panel::OUTLINE)
        .border_width(theme::size::BORDER_WIDTH)
        .corner_radius(theme::size::PANEL_RADIUS)
}

/// Caption above an input
fn section<V>(caption: impl Into<String>, input: V) -> impl WidgetView<AppState>
where
    V: WidgetView<AppState>,
{
    let caption: String = caption.into();
    flex_col((
        label(caption)
            .text_size(12.0)
            .color(theme::text::SECONDARY),
        input,
    ))
    .gap(CAPTION_GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
}

/// Single-line text input that reports every edit
fn text_field(
    value: String,
    placeholder: &'static str,
    on_changed: impl Fn(&mut AppState, String) + Send + Sync + 'static,
) -> impl WidgetView<AppState> {
    sized_box(xilem::view::text_input(value, on_changed).placeholder(placeholder)).expand_width()
}

/// Rows of buttons, one per option, with the current choice highlighted
fn choice_group<T>(
    options: &[T],
    selected: T,
    to_field: fn(T) -> StrategyField,
) -> impl WidgetView<AppState> + use<T>
where
    T: Copy + PartialEq + Display + Send + Sync + 'static,
{
    let rows: Vec<_> = options
        .chunks(CHOICES_PER_ROW)
        .map(|chunk| {
            let buttons: Vec<_> = chunk
                .iter()
                .map(|&option| choice_button(option, option == selected, to_field).flex(1.0))
                .collect();
            flex_row(buttons).gap(CAPTION_GAP.px())
        })
        .collect();

    flex_col(rows)
        .gap(CAPTION_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
}

fn choice_button<T>(
    option: T,
    is_selected: bool,
    to_field: fn(T) -> StrategyField,
) -> impl WidgetView<AppState> + use<T>
where
    T: Copy + Display + Send + Sync + 'static,
{
    let (background, text) = if is_selected {
        (theme::panel::OPTION_SELECTED, theme::panel::OPTION_SELECTED_TEXT)
    } else {
        (theme::panel::OPTION, theme::text::PRIMARY)
    };

    sized_box(
        button(
            label(option.to_string()).text_size(12.0).color(text),
            move |state: &mut AppState| {
                state.set_field(to_field(option));
            },
        )
        .background_color(background)
        .border_color(theme::panel::OUTLINE),
    )
    .expand_width()
}

fn action_button(
    text: String,
    primary: bool,
    on_press: impl Fn(&mut AppState) + Send + Sync + 'static,
) -> impl WidgetView<AppState> {
    let (background, color) = if primary {
        (theme::panel::PRIMARY_BUTTON, theme::panel::OPTION_SELECTED_TEXT)
    } else {
        (theme::panel::OPTION, theme::text::PRIMARY)
    };

    sized_box(
        button(label(text).text_size(14.0).color(color), on_press)
            .background_color(background)
            .border_color(theme::panel::OUTLINE),
    )
    .expand_width()
    .padding(Padding::from_vh(2.0, 0.0))
}

fn download_buttons() -> impl WidgetView<AppState> + use<> {
    let download = |format: ExportFormat| {
        action_button(
            format!("Download Field ({})", format.label()),
            true,
            move |state: &mut AppState| state.request_export(format),
        )
    };
    flex_col((download(ExportFormat::Png), download(ExportFormat::Jpeg)))
        .gap(CAPTION_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
}

/// Latest export status, if any
fn notice_line(state: &AppState) -> Option<impl WidgetView<AppState> + use<>> {
    state.notice.as_ref().map(|notice| {
        let color = match notice.kind {
            NoticeKind::Loading | NoticeKind::Info => theme::text::SECONDARY,
            NoticeKind::Success => theme::panel::NOTICE_SUCCESS,
            NoticeKind::Error => theme::panel::NOTICE_ERROR,
        };
        label(notice.message.clone()).text_size(13.0).color(color)
    })
}
