//! Compliance screening against a fixed rulebook.
//!
//! The rulebook targets Indian contract law concerns; each rule is a
//! trigger phrase matched against the lower-cased text.

struct ComplianceRule {
    trigger: &'static str,
    flag: &'static str,
}

const RULES: &[ComplianceRule] = &[
    ComplianceRule {
        trigger: "non compete",
        flag: "Non-compete validity under Indian Contract Act",
    },
    ComplianceRule {
        trigger: "unlimited liability",
        flag: "Unlimited liability may be unenforceable",
    },
    ComplianceRule {
        trigger: "no termination",
        flag: "Termination restriction may violate labor laws",
    },
];

/// Collect the flags of every rule whose trigger appears in `text`.
pub fn check_compliance(text: &str) -> Vec<String> {
    let t = text.to_lowercase();

    RULES
        .iter()
        .filter(|rule| t.contains(rule.trigger))
        .map(|rule| rule.flag.to_string())
        .collect()
}
