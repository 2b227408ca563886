//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen-level functions to Dart via FRB.
//! - Flatten core types into plain string/number view models.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - IDs cross the boundary as UUID strings.
//! - Failures come back as `ok = false` envelopes with a message.

use crate::session::lock_session;
use ansimtalk_core::{
    bottom_tabs, core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, parse_mood, parse_route, ping as ping_inner, CheckIn,
    DailyAdherence, MedicationRecord, MedicationSummary,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Suggested level for `init_logging` in the current build mode.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().as_str().to_string()
}

/// One row of the medication schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationItem {
    pub id: String,
    pub name: String,
    pub scheduled_time: String,
    pub taken: bool,
}

/// Status card view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationSummaryView {
    pub taken_count: u32,
    pub total_count: u32,
    /// `taken/total`, e.g. `3/5`.
    pub progress: String,
    pub complete: bool,
    /// Status line under the counter.
    pub status_label: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected record ID, when any.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Confirmed safety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInView {
    /// `good|okay|bad`.
    pub mood: String,
    pub mood_label: String,
    pub confirmed_at_ms: i64,
}

/// Safety check screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyCheckView {
    pub selected_mood: Option<String>,
    pub can_confirm: bool,
    pub last_check_in: Option<CheckInView>,
}

/// One row of the weekly history card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyLogItem {
    pub date: String,
    pub progress: String,
    pub completed: bool,
}

/// Bottom navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub route: String,
    pub label: String,
    pub selected: bool,
}

/// Lists medication records in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn medication_list() -> Vec<MedicationItem> {
    lock_session()
        .medications
        .list()
        .into_iter()
        .map(to_medication_item)
        .collect()
}

/// Returns the status card counts.
#[flutter_rust_bridge::frb(sync)]
pub fn medication_summary() -> MedicationSummaryView {
    to_summary_view(&lock_session().medications.summarize())
}

/// Adds a medication from the add dialog.
///
/// # FFI contract
/// - Blank `name` or `time` returns `ok = false`; nothing is stored.
#[flutter_rust_bridge::frb(sync)]
pub fn medication_add(name: String, time: String) -> ActionResponse {
    match lock_session().medications.add(&name, &time) {
        Ok(id) => ActionResponse::success("Medication added.", Some(id.to_string())),
        Err(err) => ActionResponse::failure(format!("medication_add failed: {err}")),
    }
}

/// Marks one medication as taken. Repeated calls succeed.
#[flutter_rust_bridge::frb(sync)]
pub fn medication_mark_taken(id: String) -> ActionResponse {
    let parsed = match Uuid::parse_str(id.trim()) {
        Ok(parsed) => parsed,
        Err(_) => {
            return ActionResponse::failure(format!(
                "medication_mark_taken failed: invalid id `{}`",
                id.trim()
            ))
        }
    };
    match lock_session().medications.mark_taken(parsed) {
        Ok(()) => ActionResponse::success("Medication taken.", Some(parsed.to_string())),
        Err(err) => ActionResponse::failure(format!("medication_mark_taken failed: {err}")),
    }
}

/// Returns the safety check screen state.
#[flutter_rust_bridge::frb(sync)]
pub fn safety_state() -> SafetyCheckView {
    let session = lock_session();
    SafetyCheckView {
        selected_mood: session
            .safety_check
            .selected()
            .map(|mood| mood.as_str().to_string()),
        can_confirm: session.safety_check.can_confirm(),
        last_check_in: session.safety_check.last_check_in().map(to_check_in_view),
    }
}

/// Selects a mood by wire id (`good|okay|bad`).
#[flutter_rust_bridge::frb(sync)]
pub fn safety_select_mood(mood: String) -> ActionResponse {
    match parse_mood(&mood) {
        Ok(parsed) => {
            lock_session().safety_check.select(parsed);
            ActionResponse::success("Mood selected.", None)
        }
        Err(err) => ActionResponse::failure(format!("safety_select_mood failed: {err}")),
    }
}

/// Confirms the selected mood at `now_ms` (Unix epoch milliseconds).
#[flutter_rust_bridge::frb(sync)]
pub fn safety_confirm(now_ms: i64) -> ActionResponse {
    match lock_session().safety_check.confirm(now_ms) {
        Ok(_) => ActionResponse::success("Check-in confirmed.", None),
        Err(err) => ActionResponse::failure(format!("safety_confirm failed: {err}")),
    }
}

/// Pushes a route (home dashboard cards).
#[flutter_rust_bridge::frb(sync)]
pub fn nav_navigate(route: String) -> ActionResponse {
    match parse_route(&route) {
        Ok(parsed) => {
            lock_session().navigator.navigate(parsed);
            ActionResponse::success(parsed.as_str(), None)
        }
        Err(err) => ActionResponse::failure(format!("nav_navigate failed: {err}")),
    }
}

/// Bottom-bar navigation with state restore.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_navigate_tab(route: String) -> ActionResponse {
    match parse_route(&route) {
        Ok(parsed) => {
            let mut session = lock_session();
            session.navigator.navigate_tab(parsed);
            ActionResponse::success(session.navigator.current_route().as_str(), None)
        }
        Err(err) => ActionResponse::failure(format!("nav_navigate_tab failed: {err}")),
    }
}

/// Back arrow. Returns `false` when already at the start destination.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_navigate_up() -> bool {
    lock_session().navigator.navigate_up()
}

#[flutter_rust_bridge::frb(sync)]
pub fn nav_current_route() -> String {
    lock_session().navigator.current_route().as_str().to_string()
}

/// Bottom tabs with the current route highlighted.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_tabs() -> Vec<NavTab> {
    let current = lock_session().navigator.current_route();
    bottom_tabs()
        .into_iter()
        .map(|tab| NavTab {
            route: tab.route.as_str().to_string(),
            label: tab.label.to_string(),
            selected: tab.route == current,
        })
        .collect()
}

/// Weekly history rows, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_log() -> Vec<WeeklyLogItem> {
    lock_session()
        .weekly_log
        .entries()
        .iter()
        .map(to_weekly_log_item)
        .collect()
}

/// Stores today's summary as the newest weekly history row.
///
/// Re-recording the same `date` replaces that day's row.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_log_record_today(date: String) -> ActionResponse {
    let date = date.trim().to_string();
    if date.is_empty() {
        return ActionResponse::failure("weekly_log_record_today failed: date must not be blank");
    }
    let mut session = lock_session();
    let summary = session.medications.summarize();
    session.weekly_log.record_today(date, &summary);
    ActionResponse::success(summary.progress_label(), None)
}

fn to_medication_item(record: MedicationRecord) -> MedicationItem {
    MedicationItem {
        id: record.id.to_string(),
        name: record.name,
        scheduled_time: record.scheduled_time,
        taken: record.taken,
    }
}

fn to_summary_view(summary: &MedicationSummary) -> MedicationSummaryView {
    MedicationSummaryView {
        taken_count: u32::try_from(summary.taken_count).unwrap_or(u32::MAX),
        total_count: u32::try_from(summary.total_count).unwrap_or(u32::MAX),
        progress: summary.progress_label(),
        complete: summary.is_complete(),
        status_label: summary.status().label().to_string(),
    }
}

fn to_check_in_view(check_in: CheckIn) -> CheckInView {
    CheckInView {
        mood: check_in.mood.as_str().to_string(),
        mood_label: check_in.mood.label().to_string(),
        confirmed_at_ms: check_in.confirmed_at_ms,
    }
}

fn to_weekly_log_item(entry: &DailyAdherence) -> WeeklyLogItem {
    WeeklyLogItem {
        date: entry.date.clone(),
        progress: entry.progress_label(),
        completed: entry.is_complete(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, default_log_level, init_logging, medication_add, medication_list,
        medication_mark_taken, medication_summary, nav_current_route, nav_navigate_tab, nav_tabs,
        ping, safety_confirm, safety_select_mood, safety_state, weekly_log,
        weekly_log_record_today,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn medication_add_then_mark_taken_updates_summary() {
        let added = medication_add("아스피린".to_string(), "20:00".to_string());
        assert!(added.ok, "{}", added.message);
        let id = added.id.expect("add should return id");
        assert!(medication_list().iter().any(|item| item.id == id && !item.taken));

        let before = medication_summary();
        let taken = medication_mark_taken(id.clone());
        assert!(taken.ok, "{}", taken.message);
        let after = medication_summary();

        assert!(after.taken_count >= before.taken_count);
        assert!(medication_list().iter().any(|item| item.id == id && item.taken));
        assert_eq!(
            after.progress,
            format!("{}/{}", after.taken_count, after.total_count)
        );
    }

    #[test]
    fn medication_add_rejects_blank_name() {
        let response = medication_add("  ".to_string(), "20:00".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("name"));
    }

    #[test]
    fn medication_mark_taken_rejects_malformed_and_unknown_ids() {
        let malformed = medication_mark_taken("not-a-uuid".to_string());
        assert!(!malformed.ok);
        assert!(malformed.message.contains("invalid id"));

        let unknown = medication_mark_taken("11111111-2222-4333-8444-555555555555".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("not found"));
    }

    #[test]
    fn safety_flow_selects_and_confirms() {
        assert!(!safety_select_mood("great".to_string()).ok);
        assert!(safety_select_mood("good".to_string()).ok);
        assert!(safety_state().can_confirm);

        let confirmed = safety_confirm(1_760_000_000_000);
        assert!(confirmed.ok, "{}", confirmed.message);
        let last = safety_state().last_check_in.expect("check-in recorded");
        assert_eq!(last.mood_label, "좋아요");
    }

    #[test]
    fn nav_tab_highlights_current_route() {
        assert!(!nav_navigate_tab("profile".to_string()).ok);
        let response = nav_navigate_tab("settings".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(nav_current_route(), "settings");
        let selected = nav_tabs()
            .into_iter()
            .filter(|tab| tab.selected)
            .map(|tab| tab.route)
            .collect::<Vec<_>>();
        assert_eq!(selected, vec!["settings".to_string()]);
    }

    #[test]
    fn default_log_level_is_supported() {
        assert!(["debug", "info"].contains(&default_log_level().as_str()));
    }

    #[test]
    fn weekly_log_record_today_puts_row_first() {
        assert!(!weekly_log_record_today("  ".to_string()).ok);
        let response = weekly_log_record_today("2099-01-01".to_string());
        assert!(response.ok, "{}", response.message);
        let rows = weekly_log();
        assert_eq!(rows[0].date, "2099-01-01");
        assert_eq!(rows.iter().filter(|row| row.date == "2099-01-01").count(), 1);
    }

    #[test]
    fn weekly_log_rows_have_progress_labels() {
        for row in weekly_log() {
            assert!(row.progress.contains('/'));
        }
    }
}
