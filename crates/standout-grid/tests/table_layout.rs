//! Integration tests for table layout.
//!
//! Each test renders a complete table to plain text and compares it with
//! the exact expected grid.

use proptest::prelude::*;
use standout_grid::boxes::{self, BoxStyle};
use standout_grid::{
    Column, Justify, Measurement, Overflow, Padding, Style, Table, VerticalAlign,
};

fn two_by_two(box_style: Option<BoxStyle>) -> Table {
    let mut table = Table::new()
        .box_style(box_style)
        .show_header(false)
        .column(Column::new())
        .column(Column::new());
    table.add_row(["1", "2"]).unwrap();
    table.add_row(["3", "4"]).unwrap();
    table
}

// ============================================================================
// Header-less box substitution
// ============================================================================

#[test]
fn headerless_without_box() {
    assert_eq!(two_by_two(None).to_plain(80), " 1  2 \n 3  4 \n");
}

#[test]
fn headerless_heavy_and_double_heads_become_square() {
    let expected = "┌───┬───┐\n│ 1 │ 2 │\n│ 3 │ 4 │\n└───┴───┘\n";
    for style in [boxes::HEAVY_HEAD, boxes::SQUARE_DOUBLE_HEAD] {
        assert_eq!(two_by_two(Some(style)).to_plain(80), expected);
    }
}

#[test]
fn headerless_minimal_heads_become_minimal() {
    let expected = "    ╷    \n  1 │ 2  \n  3 │ 4  \n    ╵    \n";
    for style in [boxes::MINIMAL_DOUBLE_HEAD, boxes::MINIMAL_HEAVY_HEAD] {
        assert_eq!(two_by_two(Some(style)).to_plain(80), expected);
    }
}

#[test]
fn headerless_ascii_double_head() {
    assert_eq!(
        two_by_two(Some(boxes::ASCII_DOUBLE_HEAD)).to_plain(80),
        "+---+---+\n| 1 | 2 |\n| 3 | 4 |\n+---+---+\n"
    );
}

// ============================================================================
// Sections and row separators
// ============================================================================

#[test]
fn sections() {
    let mut table = Table::with_headers(["foo"]);
    table.add_section();
    table.add_row(["row1"]).unwrap();
    table.add_row(["row2"]).unwrap();
    table.add_section();
    table.add_row(["row3"]).unwrap();
    table.add_row(["row4"]).unwrap();
    table.add_section();
    table.add_row(["row5"]).unwrap();
    table.add_section();

    assert_eq!(
        table.to_plain(80),
        "┏━━━━━━┓\n\
         ┃ foo  ┃\n\
         ┡━━━━━━┩\n\
         │ row1 │\n\
         │ row2 │\n\
         ├──────┤\n\
         │ row3 │\n\
         │ row4 │\n\
         ├──────┤\n\
         │ row5 │\n\
         └──────┘\n"
    );
}

// ============================================================================
// Vertical alignment
// ============================================================================

fn vertical_table(vertical: VerticalAlign) -> String {
    let mut table = Table::new()
        .box_style(boxes::SQUARE)
        .show_header(false)
        .column(Column::named("foo").vertical(vertical))
        .column(Column::named("bar"));
    table.add_row(["foo", "bar\nbar\nbar\nbar\nbar"]).unwrap();
    table.to_plain(80)
}

#[test]
fn vertical_align_top() {
    assert_eq!(
        vertical_table(VerticalAlign::Top),
        "┌─────┬─────┐\n\
         │ foo │ bar │\n\
         │     │ bar │\n\
         │     │ bar │\n\
         │     │ bar │\n\
         │     │ bar │\n\
         └─────┴─────┘\n"
    );
}

#[test]
fn vertical_align_middle() {
    assert_eq!(
        vertical_table(VerticalAlign::Middle),
        "┌─────┬─────┐\n\
         │     │ bar │\n\
         │     │ bar │\n\
         │ foo │ bar │\n\
         │     │ bar │\n\
         │     │ bar │\n\
         └─────┴─────┘\n"
    );
}

#[test]
fn vertical_align_bottom() {
    assert_eq!(
        vertical_table(VerticalAlign::Bottom),
        "┌─────┬─────┐\n\
         │     │ bar │\n\
         │     │ bar │\n\
         │     │ bar │\n\
         │     │ bar │\n\
         │ foo │ bar │\n\
         └─────┴─────┘\n"
    );
}

// ============================================================================
// Glyph placement
// ============================================================================
// Every structural position gets a distinct glyph so the expected output
// shows exactly which band is drawn where.

const TAGGED: BoxStyle = BoxStyle::new(
    "ascii",
    [
        ['a', 'b', 'c', 'd'],
        ['1', ' ', '2', '3'],
        ['e', 'f', 'g', 'h'],
        ['4', ' ', '5', '6'],
        ['i', 'j', 'k', 'l'],
        ['m', 'n', 'o', 'p'],
        ['7', ' ', '8', '9'],
        ['q', 'r', 's', 't'],
    ],
    true,
);

fn placement_table(show_header: bool, show_footer: bool) -> String {
    let mut table = Table::new()
        .box_style(TAGGED)
        .padding(Padding::ZERO)
        .width(28)
        .show_header(show_header)
        .show_footer(show_footer)
        .column(Column::named("Month").footer("MONTH").width(5))
        .column(Column::named("Nickname").footer("NICKNAME").width(9))
        .column(Column::named("Cost").footer("COST").width(4))
        .column(Column::named("Gross").footer("GROSS").width(5));
    table.add_row(["Dec", "Skywalker", "275M", "375M"]).unwrap();
    table.add_row(["May", "Solo", "275M", "393M"]).unwrap();
    table.add_section();
    table.add_row(["Dec", "Last Jedi", "262M", "1333M"]).unwrap();
    table.to_plain(80)
}

#[test]
fn placement_body_only() {
    assert_eq!(
        placement_table(false, false),
        "abbbbbcbbbbbbbbbcbbbbcbbbbbd\n\
         1Dec  2Skywalker2275M2375M 3\n\
         4May  5Solo     5275M5393M 6\n\
         ijjjjjkjjjjjjjjjkjjjjkjjjjjl\n\
         7Dec  8Last Jedi8262M81333M9\n\
         qrrrrrsrrrrrrrrrsrrrrsrrrrrt\n"
    );
}

#[test]
fn placement_with_header() {
    assert_eq!(
        placement_table(true, false),
        "abbbbbcbbbbbbbbbcbbbbcbbbbbd\n\
         1Month2Nickname 2Cost2Gross3\n\
         efffffgfffffffffgffffgfffffh\n\
         4Dec  5Skywalker5275M5375M 6\n\
         4May  5Solo     5275M5393M 6\n\
         ijjjjjkjjjjjjjjjkjjjjkjjjjjl\n\
         7Dec  8Last Jedi8262M81333M9\n\
         qrrrrrsrrrrrrrrrsrrrrsrrrrrt\n"
    );
}

#[test]
fn placement_with_footer() {
    assert_eq!(
        placement_table(false, true),
        "abbbbbcbbbbbbbbbcbbbbcbbbbbd\n\
         1Dec  2Skywalker2275M2375M 3\n\
         4May  5Solo     5275M5393M 6\n\
         ijjjjjkjjjjjjjjjkjjjjkjjjjjl\n\
         4Dec  5Last Jedi5262M51333M6\n\
         mnnnnnonnnnnnnnnonnnnonnnnnp\n\
         7MONTH8NICKNAME 8COST8GROSS9\n\
         qrrrrrsrrrrrrrrrsrrrrsrrrrrt\n"
    );
}

#[test]
fn placement_with_header_and_footer() {
    assert_eq!(
        placement_table(true, true),
        "abbbbbcbbbbbbbbbcbbbbcbbbbbd\n\
         1Month2Nickname 2Cost2Gross3\n\
         efffffgfffffffffgffffgfffffh\n\
         4Dec  5Skywalker5275M5375M 6\n\
         4May  5Solo     5275M5393M 6\n\
         ijjjjjkjjjjjjjjjkjjjjkjjjjjl\n\
         4Dec  5Last Jedi5262M51333M6\n\
         mnnnnnonnnnnnnnnonnnnonnnnnp\n\
         7MONTH8NICKNAME 8COST8GROSS9\n\
         qrrrrrsrrrrrrrrrsrrrrsrrrrrt\n"
    );
}

// ============================================================================
// Measurement
// ============================================================================

fn fruit_table() -> Table {
    let mut table = Table::new()
        .column(
            Column::named("foo")
                .footer("total")
                .no_wrap(true)
                .overflow(Overflow::Ellipsis),
        )
        .column(Column::named("bar").justify(Justify::Center))
        .column(Column::named("baz").justify(Justify::Right));
    table
        .add_row([
            Some("Averlongwordgoeshere"),
            Some("banana pancakes"),
            None,
        ])
        .unwrap();
    table
}

#[test]
fn measure_natural_range() {
    assert_eq!(fruit_table().measure(60), Measurement::new(41, 48));
    assert_eq!(fruit_table().expand(true).measure(60), Measurement::new(41, 48));
}

#[test]
fn measure_explicit_width() {
    assert_eq!(fruit_table().width(20).measure(80), Measurement::new(20, 20));
    assert_eq!(fruit_table().width(100).measure(80), Measurement::new(80, 80));
}

#[test]
fn measure_is_capped_by_available_width() {
    let measured = fruit_table().measure(30);
    assert!(measured.maximum <= 30);
    assert!(measured.minimum <= measured.maximum);
}

#[test]
fn min_width_raises_measure_and_render() {
    let mut table = Table::with_headers(["foo"]).min_width(30);
    table.add_row(["bar"]).unwrap();
    assert_eq!(table.measure(100), Measurement::new(30, 30));
    let rendered = table.to_plain(100);
    assert!(rendered
        .lines()
        .all(|line| console::measure_text_width(line) == 30));
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn no_columns_renders_a_newline() {
    assert_eq!(Table::new().to_plain(80), "\n");
    assert_eq!(Table::new().title("t").render(80).count(), 0);
}

#[test]
fn no_wrap_column_truncates_with_ellipsis() {
    let mut table = Table::new().column(
        Column::named("foo")
            .no_wrap(true)
            .overflow(Overflow::Ellipsis),
    );
    table.add_row(["Averlongwordgoeshere"]).unwrap();
    assert_eq!(
        table.to_plain(8),
        "┏━━━━━━┓\n\
         ┃ foo  ┃\n\
         ┡━━━━━━┩\n\
         │ Ave… │\n\
         └──────┘\n"
    );
}

#[test]
fn narrowing_gives_way_in_wrapping_columns_first() {
    let table = fruit_table();

    let lines = table.render(35);
    assert_eq!(lines.column_widths(), &[22, 5, 4]);
    assert_eq!(
        table.to_plain(35),
        format!(
            "┏{heavy22}┳━━━━━┳━━━━┓\n\
             ┃ foo                  ┃ bar ┃ b… ┃\n\
             ┡{heavy22}╇━━━━━╇━━━━┩\n\
             │ Averlongwordgoeshere │ ba… │    │\n\
             │                      │ pa… │    │\n\
             └{light22}┴─────┴────┘\n",
            heavy22 = "━".repeat(22),
            light22 = "─".repeat(22),
        )
    );

    assert_eq!(table.render(30).column_widths(), &[22, 2, 2]);

    assert_eq!(
        table.to_plain(10),
        "┏━━━━━━┳┳┓\n\
         ┃ foo  ┃┃┃\n\
         ┡━━━━━━╇╇┩\n\
         │ Ave… │││\n\
         └──────┴┴┘\n"
    );
}

#[test]
fn every_width_of_the_fruit_table_is_exact() {
    let table = fruit_table();
    for width in (10..60).step_by(5) {
        let rendered = table.to_plain(width);
        let expected = width.min(48);
        assert!(
            rendered
                .lines()
                .all(|line| console::measure_text_width(line) == expected),
            "width {width}"
        );
    }
}

// ============================================================================
// Padding
// ============================================================================

fn padded_pair(configure: impl FnOnce(Table) -> Table) -> String {
    let mut table = configure(
        Table::new()
            .box_style(boxes::SQUARE)
            .show_header(false)
            .column(Column::new())
            .column(Column::new()),
    );
    table.add_row(["1", "2"]).unwrap();
    table.add_row(["3", "4"]).unwrap();
    table.to_plain(80)
}

#[test]
fn pad_edge_drops_outer_padding() {
    assert_eq!(
        padded_pair(|t| t.pad_edge(false)),
        "┌──┬──┐\n│1 │ 2│\n│3 │ 4│\n└──┴──┘\n"
    );
}

#[test]
fn collapse_padding_merges_horizontal_padding() {
    assert_eq!(
        padded_pair(|t| t.collapse_padding(true)),
        "┌───┬──┐\n│ 1 │2 │\n│ 3 │4 │\n└───┴──┘\n"
    );
}

#[test]
fn collapse_padding_merges_vertical_padding() {
    let stacked = |collapse: bool| {
        let mut table = Table::new()
            .box_style(boxes::SQUARE)
            .show_header(false)
            .padding(Padding::new(1, 1, 1, 1))
            .collapse_padding(collapse)
            .column(Column::new());
        table.add_row(["a"]).unwrap();
        table.add_row(["b"]).unwrap();
        table.to_plain(80)
    };
    assert_eq!(
        stacked(false),
        "┌───┐\n│   │\n│ a │\n│   │\n│   │\n│ b │\n│   │\n└───┘\n"
    );
    assert_eq!(
        stacked(true),
        "┌───┐\n│   │\n│ a │\n│   │\n│ b │\n│   │\n└───┘\n"
    );
}

// ============================================================================
// Ratios and fixed columns
// ============================================================================

#[test]
fn ratios_split_width_when_shrinking() {
    let words = "aaaa bbbb cccc dddd eeee ffff gggg hhhh";
    let mut table = Table::new()
        .box_style(boxes::ASCII)
        .show_header(false)
        .column(Column::new().ratio(1))
        .column(Column::new().ratio(3));
    table.add_row([words, words]).unwrap();

    let lines = table.render(43);
    assert_eq!(lines.column_widths(), &[10, 30]);
    for line in lines {
        assert_eq!(line.cell_len(), 43);
    }
}

#[test]
fn fixed_column_with_min_width_and_ellipsis() {
    let mut table = Table::new()
        .box_style(boxes::ASCII)
        .min_width(30)
        .column(Column::named("id").width(3).overflow(Overflow::Ellipsis))
        .column(Column::named("name"));
    table.add_row(["abcdef", "x"]).unwrap();

    let rendered = table.to_plain(80);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], format!("+{}+", "-".repeat(28)));
    assert_eq!(lines[1], format!("| id  | name{}|", " ".repeat(17)));
    assert_eq!(lines[2], format!("|-----+{}|", "-".repeat(22)));
    assert_eq!(lines[3], format!("| ab… | x{}|", " ".repeat(20)));
    assert_eq!(lines.len(), 5);
}

#[test]
fn fixed_columns_never_overrun_the_available_width() {
    let mut table = Table::new()
        .box_style(boxes::ASCII)
        .column(Column::named("a").width(30))
        .column(Column::new());
    table.add_row(["x", "y"]).unwrap();

    let lines = table.render(20);
    assert_eq!(lines.width(), 20);
    for line in lines {
        assert_eq!(line.cell_len(), 20);
    }
    assert!(table.measure(20).maximum <= 20);
}

#[test]
fn row_styles() {
    let mut table = Table::with_headers(["foo"]);
    table.add_row(["plain"]).unwrap();
    table
        .push_row(standout_grid::Row::new(["red"]).style(Style::parse("on red").unwrap()))
        .unwrap();
    assert_eq!(table.get_row_style(0), Style::default());
    assert_eq!(table.get_row_style(1), Style::parse("on red").unwrap());
}

#[test]
fn ansi_output_carries_header_style() {
    let mut table = Table::with_headers(["foo"]).box_style(None);
    table.add_row(["bar"]).unwrap();
    let ansi = table.to_ansi(80);
    assert!(ansi.contains("\u{1b}[1m"));
    assert_eq!(console::strip_ansi_codes(&ansi), table.to_plain(80));
}

#[test]
fn expand_with_ratios() {
    let mut table = Table::new()
        .box_style(boxes::ASCII)
        .expand(true)
        .column(Column::named("a").ratio(1))
        .column(Column::named("b").ratio(3));
    table.add_row(["x", "y"]).unwrap();
    let lines = table.render(43);
    assert_eq!(lines.width(), 43);
    assert_eq!(lines.column_widths(), &[10, 30]);
}

#[test]
fn safe_box_uses_ascii() {
    let mut table = Table::with_headers(["a"]).safe_box(true);
    table.add_row(["1"]).unwrap();
    assert_eq!(table.to_plain(80), "+---+\n| a |\n+===+\n| 1 |\n+---+\n");
}

// ============================================================================
// Properties
// ============================================================================

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,12}",
        "[a-z]{1,6}( [a-z]{1,6}){0,4}",
        Just("漢字テキスト".to_string()),
    ]
}

proptest! {
    #[test]
    fn every_line_has_the_table_width(
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 3), 0..5),
        width in 12usize..60,
        expand in any::<bool>(),
        show_lines in any::<bool>(),
    ) {
        let mut table = Table::with_headers(["one", "two", "three"])
            .expand(expand)
            .show_lines(show_lines);
        for row in &rows {
            table.add_row(row.iter()).unwrap();
        }
        let lines = table.render(width);
        let table_width = lines.width();
        prop_assert!(table_width <= width);
        for line in lines {
            prop_assert_eq!(line.cell_len(), table_width);
        }
    }

    #[test]
    fn rendering_twice_gives_the_same_lines(
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 0..3), 0..5),
        width in 1usize..60,
        expand in any::<bool>(),
        ratio in prop::option::of(1usize..4),
    ) {
        let second = match ratio {
            Some(ratio) => Column::named("two").ratio(ratio),
            None => Column::named("two"),
        };
        let mut table = Table::new()
            .expand(expand)
            .column(Column::named("one").footer("sum"))
            .column(second)
            .column(Column::named("three").no_wrap(true))
            .show_footer(true);
        for row in &rows {
            table.add_row(row.iter()).unwrap();
        }
        prop_assert_eq!(table.to_plain(width), table.to_plain(width));
        prop_assert_eq!(table.to_ansi(width), table.to_ansi(width));
    }

    #[test]
    fn fixed_columns_fit_any_width(
        width in 5usize..60,
        fixed in 1usize..50,
        text in cell_text(),
    ) {
        let mut table = Table::new()
            .box_style(boxes::ASCII)
            .column(Column::named("fixed").width(fixed))
            .column(Column::named("flex"));
        table.add_row([text.as_str(), text.as_str()]).unwrap();
        let lines = table.render(width);
        let table_width = lines.width();
        prop_assert!(table_width <= width);
        for line in lines {
            prop_assert_eq!(line.cell_len(), table_width);
        }
    }

    #[test]
    fn measure_is_monotonic_in_width(width in 1usize..80) {
        let narrow = fruit_table().measure(width);
        let wide = fruit_table().measure(width + 1);
        prop_assert!(narrow.maximum <= wide.maximum);
        prop_assert!(narrow.minimum <= narrow.maximum);
    }
}
