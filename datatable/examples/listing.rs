//! Listing example - drives a DataTable the way a page of service requests would.
//!
//! Prints each step of a short session (sort, select, page) to stdout and
//! writes the table's debug log to `listing.log`.

use std::fs::File;

use datatable::{
    Alignment, CellValue, Column, DataTable, RowAction, SelectionStatus, TableConfig, TableEvents,
    TableRow, TableView, ValueKind,
};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// =============================================================================
// Data types
// =============================================================================

/// A service request posted by a client.
#[derive(Debug, Clone)]
struct Request {
    id: u32,
    title: String,
    client: String,
    budget: Option<i64>,
    open: bool,
}

impl TableRow for Request {
    type Key = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> CellValue {
        match column_id {
            "title" => self.title.as_str().into(),
            "client" => self.client.as_str().into(),
            "budget" => self.budget.into(),
            "open" => self.open.into(),
            _ => CellValue::Empty,
        }
    }
}

fn requests() -> Vec<Request> {
    let titles = [
        "Logo redesign",
        "Landing page copy",
        "Mobile app QA",
        "Podcast editing",
        "Data cleanup",
        "Product photos",
        "Pitch deck",
    ];
    let clients = ["Acme", "Globex", "Initech"];

    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Request {
            id: i as u32 + 1,
            title: title.to_string(),
            client: clients[i % clients.len()].to_string(),
            budget: (i % 3 != 2).then_some(((i as i64 * 733) % 2000) + 150),
            open: i % 2 == 0,
        })
        .collect()
}

// =============================================================================
// Printing
// =============================================================================

fn print_view(table: &DataTable<Request>, view: &TableView<Request>) {
    let header = match view.header {
        SelectionStatus::None => "[ ]",
        SelectionStatus::Some => "[-]",
        SelectionStatus::All => "[x]",
    };
    let mut line = format!("{} ", header);
    for column in &view.columns {
        let marker = match view.sort_indicator(&column.id) {
            Some(d) if d.is_ascending() => " ^",
            Some(_) => " v",
            None => "",
        };
        let width = column.min_width.unwrap_or(10) as usize;
        line.push_str(&format!("{:width$} ", format!("{}{}", column.label, marker)));
    }
    println!("{}", line.trim_end());

    for row in &view.rows {
        let mut line = format!("{} ", if row.selected { "[x]" } else { "[ ]" });
        for column in &view.columns {
            let text = table.cell_text(&row.row, &column.id);
            let width = column.min_width.unwrap_or(10) as usize;
            match column.align {
                Alignment::Right => line.push_str(&format!("{:>width$} ", text)),
                Alignment::Center => line.push_str(&format!("{:^width$} ", text)),
                Alignment::Left => line.push_str(&format!("{:width$} ", text)),
            }
        }
        println!("{}", line.trim_end());
    }

    if let Some(page) = view.page {
        println!(
            "page {}/{} - {} rows, {} per page (options: {:?})",
            page.page_index + 1,
            page.page_count,
            page.total_rows,
            page.page_size,
            view.rows_per_page_options
        );
    }
    println!();
}

fn main() {
    let log_file = File::create("listing.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let columns = vec![
        Column::new("title", "Title").min_width(20),
        Column::new("client", "Client").min_width(8),
        Column::new("budget", "Budget")
            .min_width(8)
            .align(Alignment::Right)
            .kind(ValueKind::Number)
            .format(|v| match v {
                CellValue::Empty => "-".to_string(),
                other => format!("${}", other),
            }),
        Column::new("open", "Open")
            .min_width(5)
            .align(Alignment::Center)
            .format(|v| if v == &CellValue::Bool(true) { "yes" } else { "no" }.to_string()),
    ];

    let config = TableConfig::default()
        .with_selectable(true)
        .with_page_size(3)
        .with_rows_per_page_options(vec![5, 10]);

    let table = DataTable::new(columns, requests(), config)
        .with_events(
            TableEvents::new()
                .on_sort(|column, direction| println!("> sorted by {} {:?}", column, direction))
                .on_row_select(|rows: &[Request]| {
                    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
                    println!("> selection: {:?}", ids);
                })
                .on_row_click(|row: &Request| println!("> open request #{}", row.id)),
        )
        .with_actions(vec![
            RowAction::new("Archive", |row: &Request| println!("> archive #{}", row.id))
                .icon("archive"),
        ]);

    print_view(&table, &table.view());

    table.toggle_sort("budget");
    print_view(&table, &table.view());

    table.toggle_sort("budget");
    table.toggle_one(&3);
    table.toggle_one(&5);
    print_view(&table, &table.view());

    table.next_page();
    table.click_row(&4);
    table.invoke_action(0, &4);
    print_view(&table, &table.view());

    table.toggle_all(true);
    table.set_page_size(5);
    print_view(&table, &table.view());

    table.set_rows(requests().into_iter().filter(|r| r.open).collect());
    print_view(&table, &table.view());
}
