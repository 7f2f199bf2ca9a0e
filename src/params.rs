//! Key/value parameter lists edited on the settings screen.
//!
//! Every list keeps a trailing call-to-action row: pressing the action on the
//! last row appends a fresh empty pair, pressing it on any other row removes
//! that row. A list therefore never runs out of rows to type into.

/// A single key/value parameter. Both sides are free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamPair {
    /// Parameter name, captured exactly as typed.
    pub key: String,
    /// Parameter value, captured exactly as typed.
    pub value: String,
}

impl ParamPair {
    /// Build a pair from anything string-like.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// True when both sides are empty, as freshly appended rows are.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

/// Which parameter list a message addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGroup {
    /// Mbox parameters sent with the target request.
    Mbox,
    /// Visitor profile parameters.
    Profile,
    /// Ad-hoc order parameters alongside the fixed order fields.
    Order,
}

impl ParamGroup {
    /// All groups in form order.
    pub fn all() -> &'static [ParamGroup] {
        &[ParamGroup::Mbox, ParamGroup::Profile, ParamGroup::Order]
    }

    /// Heading shown above the group's rows.
    pub fn display_name(&self) -> &'static str {
        match self {
            ParamGroup::Mbox => "Target Parameters - Mbox",
            ParamGroup::Profile => "Target Parameters - Profile",
            ParamGroup::Order => "Target Parameters - Order",
        }
    }
}

/// Ordered, positional list of pairs with a trailing append row.
///
/// Duplicate keys and blank entries are allowed; nothing here is validated.
/// Identity is the row index, which is exactly what the row widgets report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamList {
    pairs: Vec<ParamPair>,
}

impl Default for ParamList {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamList {
    /// Starts with a single empty pair so the append row exists up front.
    pub fn new() -> Self {
        Self {
            pairs: vec![ParamPair::default()],
        }
    }

    /// Wrap existing pairs; an empty input falls back to the fresh-list shape.
    pub fn from_pairs(pairs: Vec<ParamPair>) -> Self {
        if pairs.is_empty() {
            Self::new()
        } else {
            Self { pairs }
        }
    }

    /// All rows in order.
    pub fn pairs(&self) -> &[ParamPair] {
        &self.pairs
    }

    /// Number of rows, including the trailing append row.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false: the editor operations never drain the list.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether `index` is the trailing append row.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.pairs.len()
    }

    /// Replace the key of the row at `index`, leaving its value untouched.
    /// Out-of-range indices are ignored.
    pub fn set_key(&mut self, index: usize, key: String) {
        if let Some(pair) = self.pairs.get_mut(index) {
            pair.key = key;
        }
    }

    /// Replace the value of the row at `index`, leaving its key untouched.
    /// Out-of-range indices are ignored.
    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(pair) = self.pairs.get_mut(index) {
            pair.value = value;
        }
    }

    /// Row action button. The last row appends a new empty pair, any other
    /// row removes itself with the relative order preserved. Out-of-range
    /// indices are ignored.
    pub fn press_action(&mut self, index: usize) {
        if index >= self.pairs.len() {
            return;
        }
        if self.is_last(index) {
            self.pairs.push(ParamPair::default());
        } else {
            self.pairs.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_list_has_single_blank_append_row() {
        let list = ParamList::new();
        assert_eq!(list.len(), 1);
        assert!(list.pairs()[0].is_blank());
        assert!(list.is_last(0));
    }

    #[test]
    fn action_on_last_row_appends_blank_pair() {
        let mut list = ParamList::from_pairs(vec![ParamPair::new("a", "1"), ParamPair::new("b", "2")]);
        list.press_action(1);

        assert_eq!(list.len(), 3);
        assert_eq!(list.pairs()[0], ParamPair::new("a", "1"));
        assert_eq!(list.pairs()[1], ParamPair::new("b", "2"));
        assert!(list.pairs()[2].is_blank());
    }

    #[test]
    fn action_on_first_row_removes_it() {
        let mut list = ParamList::from_pairs(vec![
            ParamPair::new("a", "1"),
            ParamPair::new("b", "2"),
            ParamPair::new("c", "3"),
        ]);
        list.press_action(0);

        assert_eq!(
            list.pairs(),
            &[ParamPair::new("b", "2"), ParamPair::new("c", "3")]
        );
    }

    #[test]
    fn action_on_middle_row_preserves_order() {
        let mut list = ParamList::from_pairs(vec![
            ParamPair::new("a", "1"),
            ParamPair::new("b", "2"),
            ParamPair::new("c", "3"),
        ]);
        list.press_action(1);

        assert_eq!(
            list.pairs(),
            &[ParamPair::new("a", "1"), ParamPair::new("c", "3")]
        );
    }

    #[test]
    fn single_row_action_appends_even_when_typed_into() {
        let mut list = ParamList::new();
        list.set_key(0, "k".to_string());
        list.press_action(0);

        assert_eq!(list.len(), 2);
        assert_eq!(list.pairs()[0], ParamPair::new("k", ""));
        assert!(list.pairs()[1].is_blank());
    }

    #[test]
    fn set_key_touches_only_that_field() {
        let mut list = ParamList::from_pairs(vec![ParamPair::new("a", "1"), ParamPair::new("b", "2")]);
        list.set_key(0, "renamed".to_string());

        assert_eq!(list.pairs()[0], ParamPair::new("renamed", "1"));
        assert_eq!(list.pairs()[1], ParamPair::new("b", "2"));
    }

    #[test]
    fn set_value_touches_only_that_field() {
        let mut list = ParamList::from_pairs(vec![ParamPair::new("a", "1"), ParamPair::new("b", "2")]);
        list.set_value(1, "22".to_string());

        assert_eq!(list.pairs()[0], ParamPair::new("a", "1"));
        assert_eq!(list.pairs()[1], ParamPair::new("b", "22"));
    }

    #[test]
    fn out_of_range_edits_and_actions_are_ignored() {
        let mut list = ParamList::from_pairs(vec![ParamPair::new("a", "1")]);
        list.set_key(5, "x".to_string());
        list.set_value(5, "y".to_string());
        list.press_action(5);

        assert_eq!(list.pairs(), &[ParamPair::new("a", "1")]);
    }

    #[test]
    fn group_headings_are_distinct() {
        let names: Vec<&str> = ParamGroup::all().iter().map(|g| g.display_name()).collect();
        assert_eq!(names.len(), 3);
        assert!(names.windows(2).all(|w| w[0] != w[1]));
    }

    fn pairs_strategy() -> impl Strategy<Value = Vec<ParamPair>> {
        prop::collection::vec(
            ("[a-z]{0,8}", "[a-z0-9]{0,8}").prop_map(|(k, v)| ParamPair::new(k, v)),
            1..6,
        )
    }

    proptest! {
        #[test]
        fn append_grows_by_one_and_keeps_prefix(pairs in pairs_strategy()) {
            let mut list = ParamList::from_pairs(pairs.clone());
            list.press_action(pairs.len() - 1);

            prop_assert_eq!(list.len(), pairs.len() + 1);
            prop_assert_eq!(&list.pairs()[..pairs.len()], &pairs[..]);
            prop_assert!(list.pairs()[pairs.len()].is_blank());
        }

        #[test]
        fn remove_drops_exactly_the_target(
            pairs in pairs_strategy(),
            idx in any::<prop::sample::Index>(),
        ) {
            prop_assume!(pairs.len() >= 2);
            let target = idx.index(pairs.len() - 1);

            let mut list = ParamList::from_pairs(pairs.clone());
            list.press_action(target);

            let mut expected = pairs;
            expected.remove(target);
            prop_assert_eq!(list.pairs(), &expected[..]);
        }

        #[test]
        fn edits_leave_other_rows_alone(
            pairs in pairs_strategy(),
            idx in any::<prop::sample::Index>(),
            new_key in "[a-z0-9 ]{0,12}",
        ) {
            let target = idx.index(pairs.len());

            let mut list = ParamList::from_pairs(pairs.clone());
            list.set_key(target, new_key.clone());

            for (row, pair) in list.pairs().iter().enumerate() {
                if row == target {
                    prop_assert_eq!(&pair.key, &new_key);
                    prop_assert_eq!(&pair.value, &pairs[row].value);
                } else {
                    prop_assert_eq!(pair, &pairs[row]);
                }
            }
        }
    }
}
