use rust_decimal::Decimal;

use crate::config::Config;
use crate::db::KvStore;
use crate::ledger::Tracker;
use crate::models::BudgetSettings;
use crate::summary::{self, Summary, TableRow};
use crate::ui::theme::Theme;
use crate::ui::util::clamp_cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
    ResetMonth,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) theme: Theme,
    pub(crate) config: Config,

    // Derived from the ledger on every refresh
    pub(crate) settings: BudgetSettings,
    pub(crate) summary: Summary,
    pub(crate) rows: Vec<TableRow>,
    pub(crate) last_month_total: Option<Decimal>,

    // Transactions
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            theme: Theme::default(),
            config,

            settings: BudgetSettings::default(),
            summary: Summary::compute(&[], &BudgetSettings::default()),
            rows: Vec::new(),
            last_month_total: None,

            transaction_index: 0,
            transaction_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute every displayed value from the ledger.
    pub(crate) fn refresh<S: KvStore>(&mut self, tracker: &Tracker<S>) {
        let ledger = tracker.ledger();
        self.settings = ledger.settings().clone();
        self.summary = ledger.summary();
        self.rows = summary::table_rows(ledger.transactions());
        self.last_month_total = ledger.last_month_total();
        clamp_cursor(
            &mut self.transaction_index,
            &mut self.transaction_scroll,
            self.rows.len(),
        );
    }

    pub(crate) fn selected_row(&self) -> Option<&TableRow> {
        self.rows.get(self.transaction_index)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Report a failed write without discarding what is on screen.
    pub(crate) fn warn_unsaved(&mut self, err: &anyhow::Error) {
        self.set_status(format!("Warning: changes not saved ({err:#})"));
    }

    pub(crate) fn ask_confirm(&mut self, action: PendingAction, message: impl Into<String>) {
        self.pending_action = Some(action);
        self.confirm_message = message.into();
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.set_status(format!("Theme: {}", self.theme));
    }
}
