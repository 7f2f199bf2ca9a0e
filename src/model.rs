//! The settings model backing the screen.
//!
//! Plain observable state: the view reads the fields and the update loop
//! writes them back. Nothing here is validated or persisted; the strings are
//! handed downstream exactly as typed.

use crate::params::{ParamGroup, ParamList};

/// Editable settings for the decisioning demo.
///
/// All fields are independent free-form strings. The encoded decision scopes
/// and target fields are opaque here and only gain meaning inside the
/// decisioning calls made elsewhere in the demo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsModel {
    /// Launch environment file id for the demo app.
    pub environment_file_id: String,
    /// Inspector session URL, handed to [`crate::session::start`].
    pub inspector_url: String,

    /// Encoded decision scope for text content.
    pub scope_text: String,
    /// Encoded decision scope for image content.
    pub scope_image: String,
    /// Encoded decision scope for HTML content.
    pub scope_html: String,
    /// Encoded decision scope for JSON content.
    pub scope_json: String,

    /// Target mbox name.
    pub target_mbox: String,

    /// Mbox parameters.
    pub mbox_params: ParamList,
    /// Visitor profile parameters.
    pub profile_params: ParamList,
    /// Ad-hoc order parameters.
    pub order_params: ParamList,

    /// Order id.
    pub order_id: String,
    /// Order total, kept as text.
    pub order_total: String,
    /// Purchased product ids, comma-separated.
    pub purchased_product_ids: String,

    /// Product id.
    pub product_id: String,
    /// Product category id.
    pub product_category_id: String,
}

impl SettingsModel {
    /// Apply optional seed values, typically from CLI flags or env vars.
    /// Absent options leave the field at its default.
    pub fn with_overrides(
        mut self,
        environment_file_id: Option<String>,
        inspector_url: Option<String>,
    ) -> Self {
        if let Some(id) = environment_file_id {
            self.environment_file_id = id;
        }
        if let Some(url) = inspector_url {
            self.inspector_url = url;
        }
        self
    }

    /// Borrow the parameter list for a group.
    pub fn params(&self, group: ParamGroup) -> &ParamList {
        match group {
            ParamGroup::Mbox => &self.mbox_params,
            ParamGroup::Profile => &self.profile_params,
            ParamGroup::Order => &self.order_params,
        }
    }

    /// Mutably borrow the parameter list for a group.
    pub fn params_mut(&mut self, group: ParamGroup) -> &mut ParamList {
        match group {
            ParamGroup::Mbox => &mut self.mbox_params,
            ParamGroup::Profile => &mut self.profile_params,
            ParamGroup::Order => &mut self.order_params,
        }
    }

    /// Version shown in the About row: package version plus the commit it
    /// was built from.
    pub fn version_string(&self) -> String {
        format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_blank_with_seeded_param_rows() {
        let model = SettingsModel::default();

        assert!(model.environment_file_id.is_empty());
        assert!(model.inspector_url.is_empty());
        assert!(model.target_mbox.is_empty());
        for group in ParamGroup::all() {
            assert_eq!(model.params(*group).len(), 1);
            assert!(model.params(*group).pairs()[0].is_blank());
        }
    }

    #[test]
    fn overrides_fill_only_provided_fields() {
        let model =
            SettingsModel::default().with_overrides(Some("env-123".to_string()), None);

        assert_eq!(model.environment_file_id, "env-123");
        assert!(model.inspector_url.is_empty());
    }

    #[test]
    fn overrides_with_nothing_change_nothing() {
        let model = SettingsModel::default().with_overrides(None, None);
        assert_eq!(model, SettingsModel::default());
    }

    #[test]
    fn version_string_reports_package_version() {
        let model = SettingsModel::default();
        assert!(model.version_string().starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn group_accessors_address_distinct_lists() {
        let mut model = SettingsModel::default();
        model
            .params_mut(ParamGroup::Profile)
            .set_key(0, "tier".to_string());

        assert_eq!(model.profile_params.pairs()[0].key, "tier");
        assert!(model.mbox_params.pairs()[0].is_blank());
        assert!(model.order_params.pairs()[0].is_blank());
    }
}
