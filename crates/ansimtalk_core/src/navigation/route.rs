//! Route identifiers for app destinations.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One screen in the navigation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    SafetyCheck,
    Medication,
    Settings,
}

/// Route string for the home dashboard.
pub const ROUTE_HOME: &str = "home";
/// Route string for the mood check screen.
pub const ROUTE_SAFETY_CHECK: &str = "safety_check";
/// Route string for the medication screen.
pub const ROUTE_MEDICATION: &str = "medication";
/// Route string for the settings screen.
pub const ROUTE_SETTINGS: &str = "settings";

impl Route {
    /// Destination shown at launch and kept at the bottom of the stack.
    pub const START: Route = Route::Home;

    /// Stable string id used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => ROUTE_HOME,
            Self::SafetyCheck => ROUTE_SAFETY_CHECK,
            Self::Medication => ROUTE_MEDICATION,
            Self::Settings => ROUTE_SETTINGS,
        }
    }

    /// Bottom-bar label.
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Home => "홈",
            Self::SafetyCheck => "안부확인",
            Self::Medication => "약",
            Self::Settings => "설정",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bottom navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomTab {
    pub route: Route,
    pub label: &'static str,
}

const BOTTOM_TABS: [Route; 4] = [
    Route::Home,
    Route::SafetyCheck,
    Route::Medication,
    Route::Settings,
];

/// Returns bottom-bar tabs in display order.
pub fn bottom_tabs() -> Vec<BottomTab> {
    BOTTOM_TABS
        .iter()
        .map(|route| BottomTab {
            route: *route,
            label: route.tab_label(),
        })
        .collect()
}

/// Parses one route from its string id.
pub fn parse_route(value: &str) -> Result<Route, RouteError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RouteError::EmptyRoute);
    }

    match normalized {
        ROUTE_HOME => Ok(Route::Home),
        ROUTE_SAFETY_CHECK => Ok(Route::SafetyCheck),
        ROUTE_MEDICATION => Ok(Route::Medication),
        ROUTE_SETTINGS => Ok(Route::Settings),
        other => Err(RouteError::UnknownRoute(other.to_string())),
    }
}

/// Route parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    EmptyRoute,
    UnknownRoute(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoute => write!(f, "route must not be empty"),
            Self::UnknownRoute(value) => write!(f, "route is unknown: {value}"),
        }
    }
}

impl Error for RouteError {}
