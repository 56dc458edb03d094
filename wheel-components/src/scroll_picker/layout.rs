//! Viewport geometry and row labels for a scroll picker.

use wheel_ui::{Color, Px};

use super::{ItemLabelInput, ScrollPickerArgs};

/// The band marking the selected row, centered in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBand {
    /// Distance from the viewport top to the band.
    pub top: Px,
    /// Band height, equal to one row.
    pub height: Px,
    /// Width of the top and bottom borders.
    pub border_width: Px,
    /// Border color.
    pub color: Color,
}

/// One row of the scrollable content.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerRow {
    /// Index in the data source.
    pub index: usize,
    /// Distance from the content top, header padding included.
    pub top: Px,
    /// Text to draw.
    pub label: String,
    /// Whether the row is the committed selection.
    pub is_selected: bool,
}

/// Everything a host needs to draw a picker column.
///
/// Content is laid out as a header of `padding`, the rows, and a footer of
/// `padding`, so the first and last rows can reach the highlight band.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPickerLayout {
    /// Viewport height.
    pub wrapper_height: Px,
    /// Row height.
    pub item_height: Px,
    /// Header and footer height.
    pub padding: Px,
    /// Total scrollable content height.
    pub content_height: Px,
    /// Viewport background.
    pub background: Color,
    /// Selection band.
    pub highlight: HighlightBand,
    /// Rows in data source order.
    pub rows: Vec<PickerRow>,
}

impl ScrollPickerLayout {
    pub(super) fn compute(args: &ScrollPickerArgs, selected: Option<usize>) -> Self {
        let item_height = args.item_height.to_px().max(Px::new(1));
        let wrapper_height = args.resolved_wrapper_height().to_px().max(item_height);
        let padding = (wrapper_height - item_height) / 2;

        let rows: Vec<PickerRow> = args
            .data_source
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let is_selected = selected == Some(index);
                let label = if let Some(render_item) = &args.render_item {
                    render_item.call(ItemLabelInput {
                        item: item.clone(),
                        index,
                        is_selected,
                    })
                } else if let Some(render_text) = &args.render_text {
                    render_text.call(item.clone())
                } else {
                    item.to_string()
                };
                PickerRow {
                    index,
                    top: padding.saturating_add(item_height.saturating_mul_usize(index)),
                    label,
                    is_selected,
                }
            })
            .collect();

        let content_height = padding
            .saturating_add(item_height.saturating_mul_usize(rows.len()))
            .saturating_add(padding);

        Self {
            wrapper_height,
            item_height,
            padding,
            content_height,
            background: args.wrapper_background,
            highlight: HighlightBand {
                top: padding,
                height: item_height,
                border_width: args.highlight_border_width.to_px(),
                color: args.highlight_color,
            },
            rows,
        }
    }

    /// Returns the selected row.
    pub fn selected_row(&self) -> Option<&PickerRow> {
        self.rows.iter().find(|row| row.is_selected)
    }
}

#[cfg(test)]
mod tests {
    use wheel_ui::Dp;

    use super::*;
    use crate::{
        item::{PickerItem, label_items, numeric_items},
        scroll_picker::ScrollPickerController,
    };

    #[test]
    fn test_default_viewport_shows_five_rows() {
        let picker = ScrollPickerController::new(
            ScrollPickerArgs::new(numeric_items(0..3)).item_height(Dp(30.0)),
        );
        let layout = picker.layout();
        assert_eq!(layout.wrapper_height, Px::new(150));
        assert_eq!(layout.padding, Px::new(60));
        assert_eq!(layout.content_height, Px::new(210));
        assert_eq!(layout.highlight.top, Px::new(60));
        assert_eq!(layout.highlight.height, Px::new(30));
        assert_eq!(layout.highlight.border_width, Px::new(1));
        assert_eq!(
            layout.rows.iter().map(|row| row.top).collect::<Vec<_>>(),
            vec![Px::new(60), Px::new(90), Px::new(120)]
        );
    }

    #[test]
    fn test_explicit_wrapper_height() {
        let picker = ScrollPickerController::new(
            ScrollPickerArgs::new(numeric_items(0..3))
                .item_height(Dp(60.0))
                .wrapper_height(Dp(180.0)),
        );
        let layout = picker.layout();
        assert_eq!(layout.wrapper_height, Px::new(180));
        assert_eq!(layout.padding, Px::new(60));
    }

    #[test]
    fn test_label_precedence() {
        let base = ScrollPickerArgs::new(numeric_items(5..8)).selected_index(1);

        let plain = ScrollPickerController::new(base.clone()).layout();
        assert_eq!(plain.rows[0].label, "5");
        assert_eq!(plain.selected_row().map(|row| row.index), Some(1));

        let text = ScrollPickerController::new(
            base.clone()
                .render_text(|item: PickerItem| item.two_digit_label()),
        )
        .layout();
        assert_eq!(text.rows[0].label, "05");

        let custom = ScrollPickerController::new(
            base.render_text(|item: PickerItem| item.two_digit_label())
                .render_item(|input: ItemLabelInput| {
                    if input.is_selected {
                        format!("[{}]", input.item)
                    } else {
                        input.item.to_string()
                    }
                }),
        )
        .layout();
        assert_eq!(custom.rows[0].label, "5");
        assert_eq!(custom.rows[1].label, "[6]");
    }

    #[test]
    fn test_empty_picker_has_no_selected_row() {
        let layout = ScrollPickerController::new(ScrollPickerArgs::new(Vec::new())).layout();
        assert!(layout.rows.is_empty());
        assert_eq!(layout.selected_row(), None);
    }

    #[test]
    fn test_label_rows_keep_raw_text() {
        let layout = ScrollPickerController::new(ScrollPickerArgs::new(label_items(["AM", "PM"])))
            .layout();
        assert_eq!(layout.rows[1].label, "PM");
    }
}
