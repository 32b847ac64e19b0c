//! Terminal output for the `contacts` binary

use anyhow::Result;
use contacts_core::{Contact, ContactField, ListView, Pagination};
use ratatui::{
    TerminalOptions, Viewport,
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Cell, Row, Table},
};

/// Print the contact table followed by the page strip
pub fn print_list(view: &ListView<'_>) -> Result<()> {
    println!("Total Contacts: {}", view.total_contacts);

    if view.is_empty() {
        println!("No contacts found.");
    } else {
        draw_table(view)?;
    }

    if let Some(strip) = page_strip(&view.pagination, view.page) {
        println!("{}", strip);
    }

    Ok(())
}

fn draw_table(view: &ListView<'_>) -> Result<()> {
    let header_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        "S No",
        "Full Name",
        "Work Profile",
        "Contact No.",
        "Email Address",
        "Created Time",
        "ID",
    ])
    .style(header_style)
    .bottom_margin(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let contact = row.contact;
            Row::new(vec![
                Cell::from(row.index.to_string()),
                Cell::from(contact.full_name.clone()),
                Cell::from(contact.work_profile.clone()),
                Cell::from(contact.contact_no.clone()),
                Cell::from(contact.email.clone()),
                Cell::from(contact.created_at.format("%Y-%m-%d").to_string()),
                Cell::from(contact.id.to_string()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = format!(" Contacts (page {}) ", view.page);

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),  // S No
            Constraint::Min(16),    // Full Name
            Constraint::Min(14),    // Work Profile
            Constraint::Length(14), // Contact No.
            Constraint::Min(24),    // Email Address
            Constraint::Length(12), // Created Time
            Constraint::Length(24), // ID
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::bordered()
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    let mut terminal = ratatui::try_init_with_options(TerminalOptions {
        viewport: Viewport::Inline(table_height(view.rows.len())),
    })?;
    let drawn = terminal.draw(|frame| frame.render_widget(table, frame.area()));
    ratatui::restore();
    drawn?;
    println!();

    Ok(())
}

/// Inline viewport height for a table of `rows` rows
fn table_height(rows: usize) -> u16 {
    // +4 = top border + header + header bottom_margin + bottom border
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
}

/// One-line page strip, current page in brackets
///
/// `None` when there is nothing to page through.
pub fn page_strip(pagination: &Pagination, current: usize) -> Option<String> {
    if pagination.page_count() == 0 {
        return None;
    }

    let pages: Vec<String> = pagination
        .pages()
        .map(|page| {
            if page == current {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();

    Some(format!("Pages: {}", pages.join(" ")))
}

/// Print a single contact as labelled lines
pub fn print_contact(contact: &Contact) {
    let draft = contact.draft();
    for field in ContactField::ALL {
        println!("  {:<13} {}", format!("{}:", field.label()), draft.get(field));
    }
    println!("  {:<13} {}", "ID:", contact.id);
    println!(
        "  {:<13} {}",
        "Created:",
        contact.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}
