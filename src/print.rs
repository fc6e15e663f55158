use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::table::BinomialTable;

/// Renders the triangle as a console table: one row per order, coefficients right-aligned
/// under their `k` column.
pub fn tabulate(table: &BinomialTable) -> Table {
    let mut tabulation = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(4)).with(HAlign::Centred),
            )];
            for _ in 0..=table.order() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(6)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row(Row::new(Styles::default().with(Header(true)), {
            let mut cells = vec!["n".into()];
            for k in 0..=table.order() {
                cells.push(format!("k={k}").into());
            }
            cells
        }));
    tabulation.push_rows((0..=table.order()).map(|n| {
        Row::new(Styles::default(), {
            let mut cells = vec![format!("{n}").into()];
            for &coefficient in table.row_slice(n) {
                cells.push(format!("{coefficient}").into());
            }
            cells
        })
    }));
    tabulation
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use super::*;

    #[test]
    fn tabulate_small_table() {
        let table = BinomialTable::build(4);
        let tabulation = tabulate(&table);
        assert_eq!(6, tabulation.num_rows());
        assert_eq!(6, tabulation.num_cols());
        let rendered = Console::default().render(&tabulation).to_string();
        assert!(rendered.contains("k=4"), "rendered:\n{rendered}");
        assert!(rendered.contains('6'), "rendered:\n{rendered}");
    }
}
