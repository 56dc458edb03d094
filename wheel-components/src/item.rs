//! Items displayed by picker columns.

use std::fmt;

/// A value shown in one row of a picker column.
///
/// Hours and minutes are numbers; the period column holds labels such as
/// `"AM"` and `"PM"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PickerItem {
    /// A numeric value.
    Number(i64),
    /// A text label.
    Label(String),
}

impl PickerItem {
    /// Returns the numeric value of the item.
    ///
    /// Labels are parsed after trimming; unparsable labels yield `None`.
    ///
    /// ```
    /// use wheel_components::item::PickerItem;
    ///
    /// assert_eq!(PickerItem::from(45).as_number(), Some(45));
    /// assert_eq!(PickerItem::from(" 30 ").as_number(), Some(30));
    /// assert_eq!(PickerItem::from("PM").as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<i64> {
        match self {
            PickerItem::Number(value) => Some(*value),
            PickerItem::Label(label) => label.trim().parse().ok(),
        }
    }

    /// Formats the item as a two-digit zero-padded string when numeric.
    ///
    /// This is the default label format of the hour and minute columns.
    ///
    /// ```
    /// use wheel_components::item::PickerItem;
    ///
    /// assert_eq!(PickerItem::from(7).two_digit_label(), "07");
    /// assert_eq!(PickerItem::from(23).two_digit_label(), "23");
    /// assert_eq!(PickerItem::from("AM").two_digit_label(), "AM");
    /// ```
    pub fn two_digit_label(&self) -> String {
        match self {
            PickerItem::Number(value) => format!("{value:02}"),
            PickerItem::Label(label) => label.clone(),
        }
    }
}

impl fmt::Display for PickerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerItem::Number(value) => write!(f, "{value}"),
            PickerItem::Label(label) => f.write_str(label),
        }
    }
}

impl From<i64> for PickerItem {
    fn from(value: i64) -> Self {
        PickerItem::Number(value)
    }
}

impl From<i32> for PickerItem {
    fn from(value: i32) -> Self {
        PickerItem::Number(i64::from(value))
    }
}

impl From<u8> for PickerItem {
    fn from(value: u8) -> Self {
        PickerItem::Number(i64::from(value))
    }
}

impl From<&str> for PickerItem {
    fn from(label: &str) -> Self {
        PickerItem::Label(label.to_owned())
    }
}

impl From<String> for PickerItem {
    fn from(label: String) -> Self {
        PickerItem::Label(label)
    }
}

/// Builds a data source of numbers from a range.
///
/// ```
/// use wheel_components::item::{PickerItem, numeric_items};
///
/// let quarters = numeric_items((0..60).step_by(15));
/// assert_eq!(quarters.last(), Some(&PickerItem::Number(45)));
/// ```
pub fn numeric_items(values: impl IntoIterator<Item = i64>) -> Vec<PickerItem> {
    values.into_iter().map(PickerItem::Number).collect()
}

/// Builds a data source of labels.
pub fn label_items<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Vec<PickerItem> {
    labels
        .into_iter()
        .map(|label| PickerItem::Label(label.into()))
        .collect()
}
