/*
[INPUT]:  Panel selections from keyboard or configuration
[OUTPUT]: The single active panel and tab bar state
[POS]:    View layer - tab/panel state machine
[UPDATE]: When panels are added or navigation rules change
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One UI section; each corresponds to one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Panel {
    #[default]
    #[serde(rename = "register")]
    Register,
    #[serde(rename = "check-eligibility")]
    Eligibility,
    #[serde(rename = "create-loan")]
    CreateLoan,
    #[serde(rename = "view-loans")]
    ViewLoans,
    #[serde(rename = "view-customer")]
    ViewCustomer,
}

impl Panel {
    /// Display order of the tab bar.
    pub const ALL: [Panel; 5] = [
        Panel::Register,
        Panel::Eligibility,
        Panel::CreateLoan,
        Panel::ViewLoans,
        Panel::ViewCustomer,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Register => "Register",
            Panel::Eligibility => "Eligibility",
            Panel::CreateLoan => "Create Loan",
            Panel::ViewLoans => "View Loans",
            Panel::ViewCustomer => "View Customer",
        }
    }

    /// Spelling used in configuration files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Panel::Register => "register",
            Panel::Eligibility => "check-eligibility",
            Panel::CreateLoan => "create-loan",
            Panel::ViewLoans => "view-loans",
            Panel::ViewCustomer => "view-customer",
        }
    }

    pub fn index(self) -> usize {
        Panel::ALL
            .iter()
            .position(|panel| *panel == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Panel::ALL
            .into_iter()
            .find(|panel| panel.key() == value)
            .ok_or_else(|| {
                let known: Vec<&str> = Panel::ALL.iter().map(|panel| panel.key()).collect();
                format!("unknown form '{value}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Tracks which tab, and therefore which panel, is active. The tab and the
/// panel share one field so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabController {
    active: Panel,
}

impl TabController {
    pub fn new(initial: Panel) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }

    pub fn select(&mut self, panel: Panel) {
        if self.active != panel {
            tracing::debug!(from = %self.active, to = %panel, "switching panel");
        }
        self.active = panel;
    }

    pub fn next(&mut self) {
        let index = (self.active.index() + 1) % Panel::ALL.len();
        self.select(Panel::ALL[index]);
    }

    pub fn previous(&mut self) {
        let len = Panel::ALL.len();
        let index = (self.active.index() + len - 1) % len;
        self.select(Panel::ALL[index]);
    }

    /// Every tab with its active flag, in display order.
    pub fn tabs(&self) -> impl Iterator<Item = (Panel, bool)> + '_ {
        Panel::ALL.into_iter().map(|panel| (panel, self.is_active(panel)))
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(Panel::default())
    }
}
