//! # Case Registry
//!
//! The static mapping from case identifier to its reference query and the
//! datasets it exposes to the learner. Built once at startup and never
//! mutated; unknown identifiers are an explicit lookup miss, never a
//! silent default.

use std::collections::BTreeMap;

/// One learning scenario
#[derive(Debug, Clone, Copy)]
pub struct CaseSpec {
    /// Stable identifier, e.g. "case-001"
    pub id: &'static str,
    /// Learner-facing title
    pub title: &'static str,
    /// Table names the case exposes
    pub datasets: &'static [&'static str],
    /// Data view renders in the tabbed multi-table layout even when the
    /// case exposes a single table. Schema view ignores this flag.
    pub tabbed_data: bool,
    /// The hidden correct-answer query
    pub reference_query: &'static str,
}

/// Immutable caseId -> CaseSpec table
pub struct CaseRegistry {
    cases: BTreeMap<&'static str, CaseSpec>,
}

impl CaseRegistry {
    /// The six cases of this deployment
    pub fn builtin() -> Self {
        Self::from_cases(&[
            CaseSpec {
                id: "case-001",
                title: "The night watch",
                datasets: &["camp_logs"],
                tabbed_data: false,
                reference_query: "SELECT * \
                     FROM camp_logs \
                     WHERE date = '1380-09-06' \
                     AND shift = 'night'",
            },
            CaseSpec {
                id: "case-002",
                title: "Who left the camp",
                datasets: &["camp_logs"],
                tabbed_data: true,
                reference_query: "SELECT * \
                     FROM camp_logs \
                     WHERE action = 'exit' \
                     AND date = '1380-09-07'",
            },
            CaseSpec {
                id: "case-003",
                title: "Follow the coin",
                datasets: &["finances"],
                tabbed_data: false,
                reference_query: "SELECT recipient_name, amount \
                     FROM finances \
                     WHERE transaction_date = '1380-09-06' \
                     AND amount > 50",
            },
            CaseSpec {
                id: "case-004",
                title: "Paid and gone",
                datasets: &["camp_logs", "finances"],
                tabbed_data: true,
                reference_query: "SELECT c.guard_name, c.date, c.time, f.amount \
                     FROM camp_logs c \
                     JOIN finances f \
                       ON c.guard_name = f.recipient_name \
                     WHERE c.date = '1380-09-07' \
                       AND c.time > '00:00:00' \
                       AND f.transaction_date = '1380-09-06' \
                       AND f.amount > 50 \
                       AND c.action = 'exit'",
            },
            CaseSpec {
                id: "case-005",
                title: "The river crossing",
                datasets: &["movement_records"],
                tabbed_data: false,
                reference_query: "SELECT main_person, companion, notes \
                     FROM movement_records \
                     WHERE date = '1380-09-07' \
                       AND (route = 'River' OR notes LIKE '%ford%')",
            },
            CaseSpec {
                id: "case-006",
                title: "The go-between",
                datasets: &["secret_negotiations", "finances"],
                tabbed_data: true,
                reference_query: "SELECT sn.person_name, sn.date, f.amount, sn.details \
                     FROM secret_negotiations sn \
                     JOIN finances f \
                       ON sn.person_name = f.recipient_name \
                     WHERE f.amount > 50 \
                       AND sn.date = f.transaction_date \
                       AND sn.contact_type IS NOT NULL \
                       AND sn.contact_type <> 'none'",
            },
        ])
    }

    /// Build a registry from explicit specs (used by tests)
    pub fn from_cases(specs: &[CaseSpec]) -> Self {
        let cases = specs.iter().map(|spec| (spec.id, *spec)).collect();
        Self { cases }
    }

    /// Look up a case; `None` for unknown identifiers
    pub fn lookup(&self, case_id: &str) -> Option<&CaseSpec> {
        self.cases.get(case_id)
    }

    /// All case identifiers, in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cases.keys().copied()
    }
}
