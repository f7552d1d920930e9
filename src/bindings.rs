//! Python bindings for the chat bot host
//!
//! The bot loads the rank configuration once with `init_ranks`, then calls one
//! function per chat command. Every command function returns a dict
//! `{"key": str, "args": [str]}` for the bot's message catalog.

use crate::config::{
    normalize_rank_name, normalize_user, CustomRank, RankConfig, RankEntry, RankSettings,
};
use crate::error::LedgerError;
use crate::host::{KnownHours, PointsLedger, UserDirectory};
use crate::message::Message;
use crate::purchase::{PurchaseOutcome, RankSelfService};
use crate::rank::CustomRankStore;
use crate::state::RankState;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Cached State
// ============================================================================

/// Global rank state shared by all command calls.
///
/// Host callables are never invoked while the lock is held: a callback may
/// re-enter this module, and another thread may be waiting on the lock while
/// holding the GIL.
static RANK_STATE: OnceCell<Arc<RwLock<RankState>>> = OnceCell::new();

type SharedState = Arc<RwLock<RankState>>;

fn initialized(cell: &OnceCell<SharedState>) -> PyResult<SharedState> {
    cell.get().cloned().ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "Ranks not initialized. Call init_ranks() first.",
        )
    })
}

fn cached_state() -> PyResult<SharedState> {
    initialized(&RANK_STATE)
}

fn install_state(state: RankState) {
    let shared = RANK_STATE.get_or_init(|| Arc::new(RwLock::new(RankState::new())));
    *shared.write() = state;
}

// ============================================================================
// Host Adapters
// ============================================================================

/// User lookup through a Python callable `user_exists(user) -> bool`
struct PyUserDirectory<'a, 'py> {
    user_exists: &'a Bound<'py, PyAny>,
}

impl UserDirectory for PyUserDirectory<'_, '_> {
    fn is_known(&self, user: &str) -> bool {
        match self.user_exists.call1((user,)).and_then(|r| r.is_truthy()) {
            Ok(known) => known,
            Err(e) => {
                log::warn!("user_exists callback failed for {}: {}", user, e);
                false
            }
        }
    }
}

/// Ledger backed by a balance looked up by the host and a Python callable
/// `debit(user, amount) -> bool` that returns false when funds are short
struct PyLedger<'a, 'py> {
    points: u64,
    currency: String,
    debit: &'a Bound<'py, PyAny>,
}

impl PointsLedger for PyLedger<'_, '_> {
    fn balance(&self, _user: &str) -> u64 {
        self.points
    }

    fn debit(&mut self, user: &str, amount: u64) -> Result<(), LedgerError> {
        let accepted = self
            .debit
            .call1((user, amount))
            .and_then(|r| r.is_truthy())
            .map_err(|e| LedgerError::Unavailable(e.to_string()))?;

        if accepted {
            self.points = self.points.saturating_sub(amount);
            Ok(())
        } else {
            Err(LedgerError::InsufficientFunds {
                balance: self.points,
                required: amount,
            })
        }
    }

    fn currency_label(&self) -> String {
        self.currency.clone()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a threshold key that may be an int or a numeric string
fn extract_hours(key: &Bound<'_, PyAny>) -> PyResult<u64> {
    if let Ok(hours) = key.extract::<u64>() {
        return Ok(hours);
    }
    let key_str: String = key.extract()?;
    key_str.trim().parse().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(format!("Invalid rank hours: {}", key_str))
    })
}

/// Deserialize the rank configuration from a Python dict
///
/// Expected format:
/// `{"settings": {"required_hours": 50, "required_cost": 200},
///   "ranks": {hours: name, ...}, "custom_ranks": {user: name, ...}}`
fn deserialize_rank_config(config: &Bound<'_, PyDict>) -> PyResult<RankConfig> {
    let mut settings = RankSettings::default();
    if let Some(raw) = config.get_item("settings")? {
        let dict: Bound<'_, PyDict> = raw.extract()?;
        if let Some(hours) = dict.get_item("required_hours")? {
            settings.set_required_hours(hours.extract()?);
        }
        if let Some(cost) = dict.get_item("required_cost")? {
            settings.set_required_cost(cost.extract()?);
        }
    }

    let mut ranks = Vec::new();
    if let Some(raw) = config.get_item("ranks")? {
        let dict: Bound<'_, PyDict> = raw.extract()?;
        for (key, value) in dict.iter() {
            ranks.push(RankEntry::new(extract_hours(&key)?, value.extract::<String>()?));
        }
    }

    let mut custom_ranks = Vec::new();
    if let Some(raw) = config.get_item("custom_ranks")? {
        let map: HashMap<String, String> = raw.extract()?;
        custom_ranks.extend(map.into_iter().map(|(user, name)| CustomRank::new(user, name)));
    }

    Ok(RankConfig {
        settings,
        ranks,
        custom_ranks,
    })
}

fn message_to_dict(py: Python<'_>, message: &impl Message) -> PyResult<Py<PyAny>> {
    let dict = PyDict::new(py);
    dict.set_item("key", message.key())?;
    dict.set_item("args", message.args())?;
    Ok(dict.into())
}

// ============================================================================
// Python Functions
// ============================================================================

/// Load the rank configuration (call once at startup, again to reload)
#[pyfunction]
fn init_ranks(config: &Bound<'_, PyDict>) -> PyResult<()> {
    let config = deserialize_rank_config(config)?;
    install_state(RankState::from_config(&config));
    Ok(())
}

/// Load the rank configuration from a JSON document
#[pyfunction]
fn init_ranks_json(json: &str) -> PyResult<()> {
    let config = RankConfig::from_json_str(json)?;
    install_state(RankState::from_config(&config));
    Ok(())
}

/// Check if ranks are initialized
#[pyfunction]
fn is_ranks_initialized() -> bool {
    RANK_STATE.get().is_some()
}

/// Current state as a JSON document, for the host to persist
#[pyfunction]
fn snapshot_json() -> PyResult<String> {
    let state = cached_state()?;
    let json = state.read().to_config().to_json_string()?;
    Ok(json)
}

/// `!rank` - rank of `user` with `hours` of watch time
#[pyfunction]
fn get_rank(py: Python<'_>, user: &str, hours: u64) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let result = state.read().resolver().resolve(user, hours);
    message_to_dict(py, &result)
}

/// Bare rank name shown next to `user` in chat, or None
#[pyfunction]
fn get_rank_name(user: &str, hours: u64) -> PyResult<Option<String>> {
    let state = cached_state()?;
    let guard = state.read();
    let name = guard.resolver().display_name(user, hours).map(str::to_string);
    Ok(name)
}

/// `!rankedit add <hours> <rankname>`
#[pyfunction]
fn rank_add(py: Python<'_>, hours: &str, name: &str) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let outcome = state.write().admin().add(hours, name);
    message_to_dict(py, &outcome)
}

/// `!rankedit del <hours>`
#[pyfunction]
fn rank_del(py: Python<'_>, hours: &str) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let outcome = state.write().admin().del(hours);
    message_to_dict(py, &outcome)
}

/// `!rankedit custom <user> <rankname>`
#[pyfunction]
fn rank_custom(
    py: Python<'_>,
    user: &str,
    name: &str,
    user_exists: &Bound<'_, PyAny>,
) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let normalized = normalize_user(user);
    let known = !normalized.is_empty()
        && normalize_rank_name(name).is_some()
        && PyUserDirectory { user_exists }.is_known(&normalized);
    let outcome = state
        .write()
        .admin()
        .custom(user, name, &|_: &str| known);
    message_to_dict(py, &outcome)
}

/// `!rankedit customdel <user>`
#[pyfunction]
fn rank_customdel(py: Python<'_>, user: &str) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let outcome = state.write().admin().customdel(user);
    message_to_dict(py, &outcome)
}

/// `!rankedit settime <hours>`
#[pyfunction]
fn rank_settime(py: Python<'_>, hours: &str) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let outcome = state.write().admin().set_time(hours);
    message_to_dict(py, &outcome)
}

/// `!rankedit setcost <points>`
#[pyfunction]
fn rank_setcost(py: Python<'_>, amount: &str, currency: &str) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let outcome = state.write().admin().set_cost(amount, currency);
    message_to_dict(py, &outcome)
}

/// `!rank set <rankname>`
///
/// # Arguments
/// * `hours` - Watched hours of `user`
/// * `points` - Current points balance of `user`
/// * `currency` - Display name of the points currency
/// * `debit` - Callable `debit(user, amount) -> bool`, called only when the
///   purchase is allowed
#[pyfunction]
fn rank_set(
    py: Python<'_>,
    user: &str,
    name: &str,
    hours: u64,
    points: u64,
    currency: &str,
    debit: &Bound<'_, PyAny>,
) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let settings = *state.read().settings();
    let mut ledger = PyLedger {
        points,
        currency: currency.to_string(),
        debit,
    };

    // The debit callable runs unlocked; the granted rank is stored afterwards
    let mut granted = CustomRankStore::new();
    let outcome = RankSelfService::new(&mut granted, &settings).purchase(
        user,
        name,
        &KnownHours(hours),
        &mut ledger,
    )?;
    if let PurchaseOutcome::Purchased { user, name, .. } = &outcome {
        state.write().custom_ranks_mut().set(user, name);
    }
    message_to_dict(py, &outcome)
}

/// `!rank delself`
#[pyfunction]
fn rank_delself(py: Python<'_>, user: &str) -> PyResult<Py<PyAny>> {
    let state = cached_state()?;
    let outcome = state.write().self_service().delete_own(user);
    message_to_dict(py, &outcome)
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn rank_system_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_ranks, m)?)?;
    m.add_function(wrap_pyfunction!(init_ranks_json, m)?)?;
    m.add_function(wrap_pyfunction!(is_ranks_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(snapshot_json, m)?)?;
    m.add_function(wrap_pyfunction!(get_rank, m)?)?;
    m.add_function(wrap_pyfunction!(get_rank_name, m)?)?;
    m.add_function(wrap_pyfunction!(rank_add, m)?)?;
    m.add_function(wrap_pyfunction!(rank_del, m)?)?;
    m.add_function(wrap_pyfunction!(rank_custom, m)?)?;
    m.add_function(wrap_pyfunction!(rank_customdel, m)?)?;
    m.add_function(wrap_pyfunction!(rank_settime, m)?)?;
    m.add_function(wrap_pyfunction!(rank_setcost, m)?)?;
    m.add_function(wrap_pyfunction!(rank_set, m)?)?;
    m.add_function(wrap_pyfunction!(rank_delself, m)?)?;
    Ok(())
}
