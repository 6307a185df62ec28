//! Drill-down navigation through the lab catalog

use crate::catalog::labs::{ExperimentSummary, LabCatalog, LabClass, LabDetail};
use crate::core::error::DomainError;

/// Tabs of the experiment detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabTab {
    #[default]
    Theory,
    Procedure,
    Guide,
    Viva,
    Simulation,
}

impl LabTab {
    pub const ALL: [LabTab; 5] = [
        LabTab::Theory,
        LabTab::Procedure,
        LabTab::Guide,
        LabTab::Viva,
        LabTab::Simulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabTab::Theory => "theory",
            LabTab::Procedure => "procedure",
            LabTab::Guide => "guide",
            LabTab::Viva => "viva",
            LabTab::Simulation => "simulation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LabTab::Theory => "Theory",
            LabTab::Procedure => "Procedure",
            LabTab::Guide => "Guide",
            LabTab::Viva => "Viva",
            LabTab::Simulation => "Simulation",
        }
    }
}

impl std::fmt::Display for LabTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LabTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        LabTab::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or(DomainError::UnknownTab(tag))
    }
}

/// Which level of the drill-down is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabView<'a> {
    Classes(&'static [LabClass]),
    Experiments {
        class_id: &'a str,
        class: Option<&'static LabClass>,
        experiments: &'static [ExperimentSummary],
    },
    Detail {
        lab_id: &'a str,
        detail: &'static LabDetail,
        tab: LabTab,
    },
}

/// Cursor over the three lab levels: class list → experiments → detail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabBrowser {
    class_id: Option<String>,
    lab_id: Option<String>,
    tab: LabTab,
}

impl LabBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_class(&mut self, class_id: impl Into<String>) {
        self.class_id = Some(class_id.into());
        self.lab_id = None;
    }

    /// Open a lab's detail view on the theory tab
    pub fn open_lab(&mut self, lab_id: impl Into<String>) {
        self.lab_id = Some(lab_id.into());
        self.tab = LabTab::Theory;
    }

    pub fn select_tab(&mut self, tab: LabTab) {
        self.tab = tab;
    }

    /// Step one level up.
    ///
    /// Returns `false` when already at the class list, meaning the caller
    /// should leave the lab catalog altogether.
    pub fn back(&mut self) -> bool {
        if self.lab_id.take().is_some() {
            self.tab = LabTab::Theory;
            true
        } else {
            self.class_id.take().is_some()
        }
    }

    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    pub fn lab_id(&self) -> Option<&str> {
        self.lab_id.as_deref()
    }

    pub fn tab(&self) -> LabTab {
        self.tab
    }

    pub fn view(&self) -> LabView<'_> {
        match (&self.lab_id, &self.class_id) {
            (Some(lab_id), _) => LabView::Detail {
                lab_id,
                detail: LabCatalog::detail(lab_id),
                tab: self.tab,
            },
            (None, Some(class_id)) => LabView::Experiments {
                class_id,
                class: LabCatalog::class(class_id),
                experiments: LabCatalog::experiments(class_id),
            },
            (None, None) => LabView::Classes(LabCatalog::classes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_class_list() {
        let browser = LabBrowser::new();
        assert!(matches!(browser.view(), LabView::Classes(classes) if classes.len() == 4));
    }

    #[test]
    fn test_drill_down_and_back() {
        let mut browser = LabBrowser::new();
        browser.select_class("class-11");
        match browser.view() {
            LabView::Experiments { experiments, .. } => assert_eq!(experiments.len(), 2),
            other => panic!("unexpected view {:?}", other),
        }

        browser.open_lab("mitosis");
        browser.select_tab(LabTab::Viva);
        match browser.view() {
            LabView::Detail { detail, tab, .. } => {
                assert_eq!(detail.name, "Mitosis Cell Division");
                assert_eq!(tab, LabTab::Viva);
            }
            other => panic!("unexpected view {:?}", other),
        }

        assert!(browser.back());
        assert!(matches!(browser.view(), LabView::Experiments { class_id: "class-11", .. }));
        assert!(browser.back());
        assert!(matches!(browser.view(), LabView::Classes(_)));
        assert!(!browser.back());
    }

    #[test]
    fn test_opening_lab_resets_tab() {
        let mut browser = LabBrowser::new();
        browser.select_class("class-12");
        browser.open_lab("pcr");
        browser.select_tab(LabTab::Simulation);
        browser.back();
        browser.open_lab("gel-electro");
        assert_eq!(browser.tab(), LabTab::Theory);
    }

    #[test]
    fn test_unknown_lab_detail_is_empty() {
        let mut browser = LabBrowser::new();
        browser.open_lab("does-not-exist");
        match browser.view() {
            LabView::Detail { detail, .. } => {
                assert!(detail.is_empty());
                assert!(detail.viva.is_empty());
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("Viva".parse::<LabTab>().unwrap(), LabTab::Viva);
        assert_eq!(
            "video".parse::<LabTab>().unwrap_err(),
            DomainError::UnknownTab("video".to_string())
        );
    }
}
