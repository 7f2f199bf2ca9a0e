//! Message types for the settings window.
//!
//! Every user interaction and async completion is represented as a message.

use crate::params::ParamGroup;
use crate::session::SessionInfo;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Identity & Inspector
    // =========================================================================
    /// Environment file id changed
    EnvironmentFileIdChanged(String),
    /// Inspector session URL changed
    InspectorUrlChanged(String),
    /// Start inspector session button pressed
    StartInspectorSession,
    /// Inspector session handoff completed
    InspectorSessionStarted(Result<SessionInfo, String>),

    // =========================================================================
    // Decision Scopes (4 fields)
    // =========================================================================
    /// Encoded text scope changed
    ScopeTextChanged(String),
    /// Encoded image scope changed
    ScopeImageChanged(String),
    /// Encoded HTML scope changed
    ScopeHtmlChanged(String),
    /// Encoded JSON scope changed
    ScopeJsonChanged(String),

    // =========================================================================
    // Target
    // =========================================================================
    /// Target mbox name changed
    TargetMboxChanged(String),

    // =========================================================================
    // Parameter Lists
    // =========================================================================
    /// Key edited in a parameter row
    ParamKeyChanged(ParamGroup, usize, String),
    /// Value edited in a parameter row
    ParamValueChanged(ParamGroup, usize, String),
    /// Row action pressed: append on the last row, remove elsewhere
    ParamRowAction(ParamGroup, usize),

    // =========================================================================
    // Order
    // =========================================================================
    /// Order id changed
    OrderIdChanged(String),
    /// Order total changed
    OrderTotalChanged(String),
    /// Purchased product ids changed (comma-separated text)
    PurchasedProductIdsChanged(String),

    // =========================================================================
    // Product
    // =========================================================================
    /// Product id changed
    ProductIdChanged(String),
    /// Product category id changed
    ProductCategoryIdChanged(String),

    // =========================================================================
    // UI State
    // =========================================================================
    /// Dismiss the notice at an index
    DismissNotice(usize),
    /// Periodic refresh so the session clock in the footer stays current
    Tick,
}
