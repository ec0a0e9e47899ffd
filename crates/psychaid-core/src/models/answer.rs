use std::collections::BTreeMap;

/// Question id → chosen option value.
///
/// Filled one question at a time during intake and may be partial until the
/// questionnaire is submitted.
pub type AnswerMap = BTreeMap<String, u32>;
