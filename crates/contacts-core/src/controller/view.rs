//! Derived list view
//!
//! Everything here is a pure function of the controller's state. The
//! controller calls [`derive_view`] on every render; nothing is cached.

use tracing::debug;

use crate::config::SearchScope;
use crate::controller::pagination::Pagination;
use crate::model::Contact;

/// One rendered table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRow<'a> {
    /// 1-based position within the rendered page
    pub index: usize,
    pub contact: &'a Contact,
}

/// The rows and page strip for the current search text and page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub rows: Vec<ListRow<'a>>,
    /// Current page, 1-based
    pub page: usize,
    pub pagination: Pagination,
    /// Number of contacts held, regardless of search
    pub total_contacts: usize,
}

impl ListView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sort newest first by creation time
///
/// The sort is stable: contacts created at the same instant keep the
/// order the service returned them in.
pub fn sort_newest_first(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Compute the rows of `page` for `search`
///
/// `contacts` must already be sorted. With [`SearchScope::Collection`] the
/// search runs over every contact and the matches are paginated. With
/// [`SearchScope::Page`] the page window is cut first and the search only
/// looks inside it; the strip then counts every contact.
pub fn derive_view<'a>(
    contacts: &'a [Contact],
    search: &str,
    page: usize,
    page_size: usize,
    scope: SearchScope,
) -> ListView<'a> {
    let page = page.max(1);

    let (pagination, visible): (Pagination, Vec<&'a Contact>) = match scope {
        SearchScope::Collection => {
            let matched: Vec<&Contact> = contacts.iter().filter(|c| c.matches(search)).collect();
            let pagination = Pagination::new(matched.len(), page_size);
            let window = pagination.window(page);
            (pagination, matched[window].to_vec())
        }
        SearchScope::Page => {
            let pagination = Pagination::new(contacts.len(), page_size);
            let window = pagination.window(page);
            let visible = contacts[window]
                .iter()
                .filter(|c| c.matches(search))
                .collect();
            (pagination, visible)
        }
    };

    debug!(
        "Derived view: page {} of {}, {} row(s), scope {}",
        page,
        pagination.page_count(),
        visible.len(),
        scope
    );

    let rows = visible
        .into_iter()
        .enumerate()
        .map(|(i, contact)| ListRow {
            index: i + 1,
            contact,
        })
        .collect();

    ListView {
        rows,
        page,
        pagination,
        total_contacts: contacts.len(),
    }
}
