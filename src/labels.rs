use std::collections::{BTreeMap, BTreeSet};

/// Server code for a batch in which one or more operations failed
pub const MULTIPLE_ERRORS_OCCURRED: i32 = 65;

/// Server code for a write conflict inside a transaction
pub const WRITE_CONFLICT: i32 = 112;

/// Server code for an aborted transaction
pub const TRANSACTION_ABORTED: i32 = 244;

/// Server code for a transaction the server no longer knows about
pub const NO_SUCH_TRANSACTION: i32 = 251;

/// Label for failures after which the enclosing transaction may be retried
pub const TEMPORARY_TXN_FAILURE: &str = "TemporaryTxnFailure";

/// Built-in label table. New labels are added as new rows.
const BUILTIN_LABELS: &[(&str, &[i32])] = &[(
    TEMPORARY_TXN_FAILURE,
    &[WRITE_CONFLICT, TRANSACTION_ABORTED, NO_SUCH_TRANSACTION],
)];

/// Check a code against the built-in label table
pub fn builtin_has_label(label: &str, code: Option<i32>) -> bool {
    let Some(code) = code else {
        return false;
    };

    BUILTIN_LABELS
        .iter()
        .find(|(name, _)| *name == label)
        .is_some_and(|(_, codes)| codes.contains(&code))
}

/// Whether `label` is one of the built-in labels
pub fn is_builtin_label(label: &str) -> bool {
    BUILTIN_LABELS.iter().any(|(name, _)| *name == label)
}

/// Built-in labels that apply to a code
pub fn builtin_labels_for(code: Option<i32>) -> Vec<&'static str> {
    BUILTIN_LABELS
        .iter()
        .filter(|(name, _)| builtin_has_label(name, code))
        .map(|(name, _)| *name)
        .collect()
}

/// An owned mapping from label name to the codes carrying that label.
///
/// Starts from the built-in rows and can be extended with extra labels,
/// e.g. from a configuration file. Extending only ever adds codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: BTreeMap<String, BTreeSet<i32>>,
}

impl LabelTable {
    /// Create a table with no labels
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Create a table holding the built-in labels
    pub fn builtin() -> Self {
        BUILTIN_LABELS
            .iter()
            .fold(Self::empty(), |table, (label, codes)| {
                table.with_label(*label, codes.iter().copied())
            })
    }

    /// Add codes to a label, creating the label if needed
    pub fn with_label<L, I>(mut self, label: L, codes: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = i32>,
    {
        self.labels.entry(label.into()).or_default().extend(codes);
        self
    }

    /// Check whether `code` carries `label`. An absent code never does.
    pub fn contains(&self, label: &str, code: Option<i32>) -> bool {
        match (self.labels.get(label), code) {
            (Some(codes), Some(code)) => codes.contains(&code),
            _ => false,
        }
    }

    /// All labels carried by `code`, in label order
    pub fn labels_for(&self, code: Option<i32>) -> Vec<&str> {
        self.labels
            .keys()
            .filter(|label| self.contains(label, code))
            .map(String::as_str)
            .collect()
    }

    /// Iterate over labels and their codes
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<i32>)> {
        self.labels.iter().map(|(label, codes)| (label.as_str(), codes))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::builtin()
    }
}
