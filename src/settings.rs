//! The settings form.
//!
//! Section order mirrors the demo app it configures: launch environment,
//! inspector URL, encoded decision scopes, the target fields with their
//! three parameter lists, then the About row.

use iced::widget::{button, column, space, text};
use iced::Element;

use crate::message::Message;
use crate::params::ParamGroup;
use crate::state::AppState;
use crate::theme;
use crate::widgets;

/// Render the scrollable settings form.
pub fn view_settings(state: &AppState) -> Element<'_, Message> {
    let model = &state.model;

    column![
        widgets::section_label("Launch Environment File Id"),
        widgets::settings_field(
            &model.environment_file_id,
            "Enter your environment file id",
            Message::EnvironmentFileIdChanged,
        ),
        space().height(12.0),
        widgets::section_label("Inspector Start URL"),
        widgets::settings_field(
            &model.inspector_url,
            "Enter inspector session URL",
            Message::InspectorUrlChanged,
        ),
        button(text("Start Inspector Session"))
            .on_press(Message::StartInspectorSession)
            .padding([8, 16])
            .style(theme::primary_button_style),
        space().height(12.0),
        widgets::section_label("Decision Scopes"),
        widgets::settings_field(
            &model.scope_text,
            "Enter encoded decision scope (Text)",
            Message::ScopeTextChanged,
        ),
        widgets::settings_field(
            &model.scope_image,
            "Enter encoded decision scope (Image)",
            Message::ScopeImageChanged,
        ),
        widgets::settings_field(
            &model.scope_html,
            "Enter encoded decision scope (HTML)",
            Message::ScopeHtmlChanged,
        ),
        widgets::settings_field(
            &model.scope_json,
            "Enter encoded decision scope (JSON)",
            Message::ScopeJsonChanged,
        ),
        space().height(12.0),
        widgets::section_label("Target"),
        widgets::settings_field(
            &model.target_mbox,
            "Enter target mbox",
            Message::TargetMboxChanged,
        ),
        widgets::group_label(ParamGroup::Mbox.display_name()),
        param_rows(state, ParamGroup::Mbox),
        widgets::group_label(ParamGroup::Profile.display_name()),
        param_rows(state, ParamGroup::Profile),
        widgets::group_label(ParamGroup::Order.display_name()),
        widgets::settings_field(&model.order_id, "Enter order id", Message::OrderIdChanged),
        widgets::settings_field(
            &model.order_total,
            "Enter order total",
            Message::OrderTotalChanged,
        ),
        widgets::settings_field(
            &model.purchased_product_ids,
            "Enter purchased product ids (comma-separated)",
            Message::PurchasedProductIdsChanged,
        ),
        param_rows(state, ParamGroup::Order),
        widgets::group_label("Target Parameters - Product"),
        widgets::settings_field(&model.product_id, "Enter product id", Message::ProductIdChanged),
        widgets::settings_field(
            &model.product_category_id,
            "Enter product category id",
            Message::ProductCategoryIdChanged,
        ),
        space().height(12.0),
        widgets::section_label("About"),
        widgets::version_row(model.version_string()),
    ]
    .spacing(8)
    .padding(20)
    .into()
}

/// All rows of one parameter list, last row carrying the append action.
fn param_rows(state: &AppState, group: ParamGroup) -> Element<'_, Message> {
    let list = state.model.params(group);
    let rows: Vec<Element<'_, Message>> = list
        .pairs()
        .iter()
        .enumerate()
        .map(|(index, pair)| widgets::key_value_row(group, index, pair, list.is_last(index)))
        .collect();

    column(rows).spacing(6).into()
}
